//! Renderer-facing collaborators of the simulation core: the orbit camera
//! and the per-frame conversion of a trajectory snapshot into GPU-ready
//! vertices. No rendering pipeline lives here; a renderer consumes the
//! matrices and vertex buffers these modules produce.

pub mod camera;
pub mod vertex;

pub use camera::Camera;
pub use vertex::{TrajectoryVertex, trajectory_vertices};
