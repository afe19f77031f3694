use crate::{error::SimError, model::Lorenz, state::State};
use serde::{Deserialize, Serialize};

/// Tunable simulation settings.
///
/// The session reads these as an immutable snapshot at the start of each
/// step; a UI may replace them between frames via
/// [`Session::set_config`](crate::Session::set_config). Defaults match the
/// canonical attractor view: σ=10, ρ=28, β=8/3, dt=0.01, seeded at
/// (0, 1, 0), keeping at most 50 000 points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub params: Lorenz,
    /// Integration step size.
    pub dt: f64,
    /// Upper bound on retained trajectory points.
    pub max_points: usize,
    /// Integration steps performed per simulation tick.
    pub steps_per_frame: usize,
    /// Initial condition used at startup and on reset.
    pub seed: State,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            params: Lorenz::default(),
            dt: 0.01,
            max_points: 50_000,
            steps_per_frame: 1,
            seed: State::new(0.0, 1.0, 0.0),
        }
    }
}

impl SimConfig {
    /// Rejects settings the solver cannot run with. Called whenever a
    /// config enters a session, so the stepping path can assume validity.
    pub fn validate(&self) -> Result<(), SimError> {
        self.params.validate()?;
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        if self.max_points < 1 {
            return Err(SimError::InvalidMaxPoints);
        }
        if self.steps_per_frame < 1 {
            return Err(SimError::InvalidStepsPerFrame);
        }
        if !self.seed.is_finite() {
            return Err(SimError::NonFiniteSeed(self.seed));
        }
        Ok(())
    }

    pub fn with_params(mut self, params: Lorenz) -> Self {
        self.params = params;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn with_steps_per_frame(mut self, steps_per_frame: usize) -> Self {
        self.steps_per_frame = steps_per_frame;
        self
    }

    pub fn with_seed(mut self, seed: State) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    /// Each invalid field is rejected with its own error.
    #[test]
    fn test_validation_rejects_each_field() {
        let base = SimConfig::default();

        assert_eq!(
            base.with_dt(0.0).validate(),
            Err(SimError::InvalidTimeStep(0.0))
        );
        assert_eq!(
            base.with_dt(-0.01).validate(),
            Err(SimError::InvalidTimeStep(-0.01))
        );
        assert!(base.with_dt(f64::NAN).validate().is_err());

        assert_eq!(
            base.with_max_points(0).validate(),
            Err(SimError::InvalidMaxPoints)
        );
        assert_eq!(
            base.with_steps_per_frame(0).validate(),
            Err(SimError::InvalidStepsPerFrame)
        );

        // NaN payloads compare unequal to themselves, so match structurally
        let bad_seed = State::new(f64::NAN, 0.0, 0.0);
        assert!(matches!(
            base.with_seed(bad_seed).validate(),
            Err(SimError::NonFiniteSeed(_))
        ));

        assert!(matches!(
            base.with_params(Lorenz::new(-1.0, 28.0, 8.0 / 3.0)).validate(),
            Err(SimError::InvalidParameter { name: "sigma", .. })
        ));
    }
}
