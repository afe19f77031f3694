use crate::{
    config::SimConfig,
    error::SimError,
    model::Lorenz,
    rk::RungeKutta,
    state::State,
    trajectory::Trajectory,
};

/// Run-state of a simulation session. Transitions are caller-driven; the
/// session holds no timer of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// Owns the integrator, the trajectory record, and the settings snapshot
/// for one simulation run.
///
/// A frame loop drives the session cooperatively: some number of
/// [`step`](Self::step) calls per tick (or one [`advance_frame`](Self::advance_frame)),
/// then a read of [`trajectory`](Self::trajectory) for rendering. Stepping
/// and reading interleave on one thread, so the borrowed snapshot needs no
/// locking. The session is `Send`; an embedder that wants simulation off
/// the render thread moves the whole session to a worker and keeps
/// exclusive ownership there.
#[derive(Clone, Debug)]
pub struct Session {
    config: SimConfig,
    integrator: RungeKutta<4>,
    trajectory: Trajectory,
    state: State,
    t: f64,
    run_state: RunState,
}

impl Session {
    /// Creates a paused session seeded at the configured initial condition.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            integrator: RungeKutta::rk4(),
            trajectory: Trajectory::new(config.seed, config.max_points),
            state: config.seed,
            t: 0.0,
            run_state: RunState::Paused,
            config,
        })
    }

    /// Replaces σ, ρ, β for subsequent steps. Steps already taken are
    /// unaffected; the change applies from the next step on.
    pub fn configure(&mut self, params: Lorenz) -> Result<(), SimError> {
        params.validate()?;
        self.config.params = params;
        Ok(())
    }

    /// Replaces the whole settings snapshot. A lowered `max_points` takes
    /// effect immediately so the renderer never sees an over-bound record.
    pub fn set_config(&mut self, config: SimConfig) -> Result<(), SimError> {
        config.validate()?;
        self.config = config;
        self.trajectory.enforce_bound(config.max_points);
        Ok(())
    }

    /// Restarts the run from `seed`, which also becomes the reset point.
    pub fn seed(&mut self, seed: State) -> Result<(), SimError> {
        if !seed.is_finite() {
            return Err(SimError::NonFiniteSeed(seed));
        }
        self.config.seed = seed;
        self.reset();
        Ok(())
    }

    /// Clears the trajectory and restarts from the configured seed. The
    /// run-state is left as it was: a running session keeps running, a
    /// paused one stays paused.
    pub fn reset(&mut self) {
        self.state = self.config.seed;
        self.t = 0.0;
        self.trajectory.reset(self.config.seed);
    }

    /// One integration step: advance the state, reject a non-finite
    /// result, append, enforce the point bound.
    ///
    /// The bound is enforced after every single step, so the record never
    /// exceeds `max_points` even transiently within a frame. On a
    /// non-finite result the divergent state is *not* appended, the
    /// session auto-pauses, and the last valid trajectory stays readable;
    /// the caller recovers with [`reset`](Self::reset).
    pub fn step(&mut self) -> Result<(), SimError> {
        // settings snapshot for the duration of this step
        let params = self.config.params;
        let dt = self.config.dt;

        let next = self.integrator.step(&params, self.state, self.t, dt);
        if !next.is_finite() {
            self.run_state = RunState::Paused;
            return Err(SimError::NonFiniteState { t: self.t + dt });
        }

        self.state = next;
        self.t += dt;
        self.trajectory.append(next);
        self.trajectory.enforce_bound(self.config.max_points);
        Ok(())
    }

    /// Advances one tick's worth of steps (`steps_per_frame`). Does
    /// nothing while paused; stops early if a step diverges.
    pub fn advance_frame(&mut self) -> Result<(), SimError> {
        if self.run_state != RunState::Running {
            return Ok(());
        }
        for _ in 0..self.config.steps_per_frame {
            self.step()?;
        }
        Ok(())
    }

    pub fn pause(&mut self) {
        self.run_state = RunState::Paused;
    }

    pub fn resume(&mut self) {
        self.run_state = RunState::Running;
    }

    pub fn toggle_running(&mut self) {
        self.run_state = match self.run_state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Current integration state (the newest trajectory point).
    pub fn state(&self) -> State {
        self.state
    }

    /// Simulation time reached so far.
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The trajectory record, for the per-frame render read.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
}
