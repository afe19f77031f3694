use bytemuck::{Pod, Zeroable};
use lorenz_diffeq::Trajectory;

/// One trajectory point as a renderer uploads it: single-precision
/// position plus a normalized gradient index. The gradient runs 0 at the
/// oldest surviving point to 1 at the newest, which the line shader uses
/// to fade the path tail-to-head.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TrajectoryVertex {
    pub position: [f32; 3],
    pub gradient: f32,
}

/// Flattens the current trajectory snapshot into a vertex list, oldest
/// point first. Rebuilt once per rendered frame, after the tick's steps.
pub fn trajectory_vertices(trajectory: &Trajectory) -> Vec<TrajectoryVertex> {
    let count = trajectory.len();
    // a single point gets gradient 0 rather than dividing by zero
    let denom = count.saturating_sub(1).max(1) as f32;

    trajectory
        .points()
        .enumerate()
        .map(|(i, p)| TrajectoryVertex {
            position: [p.x as f32, p.y as f32, p.z as f32],
            gradient: i as f32 / denom,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lorenz_diffeq::State;

    const TOL: f32 = 1e-6;

    #[test]
    fn test_gradient_spans_zero_to_one() {
        let mut traj = Trajectory::new(State::new(0.0, 0.0, 0.0), 8);
        for i in 1..=4 {
            traj.append(State::new(i as f64, 0.0, 0.0));
        }

        let vertices = trajectory_vertices(&traj);
        assert_eq!(vertices.len(), 5);
        assert_abs_diff_eq!(vertices[0].gradient, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(vertices[2].gradient, 0.5, epsilon = TOL);
        assert_abs_diff_eq!(vertices[4].gradient, 1.0, epsilon = TOL);
        // oldest first
        assert_abs_diff_eq!(vertices[0].position[0], 0.0, epsilon = TOL);
        assert_abs_diff_eq!(vertices[4].position[0], 4.0, epsilon = TOL);
    }

    /// A freshly seeded record produces one vertex with gradient 0.
    #[test]
    fn test_single_point_gradient() {
        let traj = Trajectory::new(State::new(1.0, 2.0, 3.0), 8);
        let vertices = trajectory_vertices(&traj);
        assert_eq!(vertices.len(), 1);
        assert_abs_diff_eq!(vertices[0].gradient, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(vertices[0].position[2], 3.0, epsilon = TOL);
    }

    /// The vertex layout is tightly packed for direct buffer upload.
    #[test]
    fn test_vertex_is_pod() {
        assert_eq!(std::mem::size_of::<TrajectoryVertex>(), 16);
        let bytes = bytemuck::bytes_of(&TrajectoryVertex {
            position: [1.0, 2.0, 3.0],
            gradient: 0.5,
        });
        assert_eq!(bytes.len(), 16);
    }
}
