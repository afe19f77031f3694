//! Numerical core of a Lorenz attractor visualizer.
//!
//! A fixed-step 4th-order Runge-Kutta integrator over the Lorenz vector
//! field, a bounded trajectory record with oldest-first eviction, and the
//! [`Session`] object that owns both. A collaborating frame loop drives the
//! session once per rendered frame ([`Session::advance_frame`]) and reads
//! the trajectory back ([`Trajectory::snapshot`]) for display.

/// Submodules for core simulation components.
pub mod config;
pub mod error;
pub mod model;
pub mod rk;
pub mod session;
pub mod state;
pub mod trajectory;

pub use config::SimConfig;
pub use error::SimError;
pub use model::{Lorenz, OdeModel};
pub use rk::{ButcherTableau, RungeKutta};
pub use session::{RunState, Session};
pub use state::State;
pub use trajectory::Trajectory;
