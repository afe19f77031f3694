//! Headless frame loop: the wiring a windowed renderer would use, minus
//! the GPU. Each tick steps the session, rebuilds the vertex buffer, and
//! reads the camera matrices.

use lorenz_diffeq::{Session, SimConfig, SimError};
use lorenz_viz::{Camera, trajectory_vertices};

fn main() -> Result<(), SimError> {
    let config = SimConfig::default()
        .with_steps_per_frame(10)
        .with_max_points(2_000);
    let mut session = Session::new(config)?;
    let mut camera = Camera::default();
    session.resume();

    for frame in 0..600 {
        session.advance_frame()?;

        // what the renderer would consume this frame
        let vertices = trajectory_vertices(session.trajectory());
        let _view = camera.view_matrix();
        let _proj = camera.projection_matrix(16.0 / 9.0);

        // idle orbit, as if the user were dragging
        camera.rotate(0.3, 0.0);

        if frame % 100 == 0 {
            let head = vertices.last().map(|v| v.position).unwrap_or_default();
            println!(
                "frame {frame:4}  t = {:6.2}  vertices = {:5}  head = ({:8.3}, {:8.3}, {:8.3})",
                session.time(),
                vertices.len(),
                head[0],
                head[1],
                head[2]
            );
        }
    }

    println!(
        "done: {} points retained, camera yaw {:.1} deg",
        session.trajectory().len(),
        camera.yaw()
    );
    Ok(())
}
