use crate::state::State;
use thiserror::Error;

/// Errors surfaced at the configuration boundary or after a divergent step.
///
/// Configuration variants are rejected when settings are applied, never
/// from inside the stepping hot path. `NonFiniteState` is recoverable: the
/// session auto-pauses, the last valid trajectory stays readable, and
/// [`reset`](crate::Session::reset) restarts the run.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SimError {
    #[error("{name} must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
    #[error("max_points must be at least 1")]
    InvalidMaxPoints,
    #[error("steps_per_frame must be at least 1")]
    InvalidStepsPerFrame,
    #[error("seed state ({0:?}) has a non-finite component")]
    NonFiniteSeed(State),
    #[error("state became non-finite at t = {t}; reset the session to recover")]
    NonFiniteState { t: f64 },
}
