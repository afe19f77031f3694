use crate::{error::SimError, state::State};
use serde::{Deserialize, Serialize};

/// Trait for a dynamical system model that can be numerically integrated.
///
/// `f` computes the derivative of the state at time `t`. It must be pure:
/// identical inputs produce bit-identical outputs, with no side effects.
/// The integrator and its tests rely on this determinism, since any hidden
/// variation compounds exponentially under a chaotic system.
pub trait OdeModel {
    /// Compute the derivative at time `t` and state `x`.
    fn f(&self, t: f64, x: State) -> State;
}

/// The Lorenz vector field and its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lorenz {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for Lorenz {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl Lorenz {
    pub fn new(sigma: f64, rho: f64, beta: f64) -> Self {
        Self { sigma, rho, beta }
    }

    /// Parameters must be positive and finite.
    pub fn validate(&self) -> Result<(), SimError> {
        for (name, value) in [
            ("sigma", self.sigma),
            ("rho", self.rho),
            ("beta", self.beta),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

impl OdeModel for Lorenz {
    fn f(&self, _t: f64, x: State) -> State {
        State::new(
            self.sigma * (x.y - x.x),
            x.x * (self.rho - x.z) - x.y,
            x.x * x.y - self.beta * x.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-12;

    /// Derivative at the canonical seed (0, 1, 0) with default parameters.
    #[test]
    fn test_lorenz_derivative() {
        let model = Lorenz::default();
        let dx = model.f(0.0, State::new(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(dx.x, 10.0, epsilon = TOL);
        assert_abs_diff_eq!(dx.y, -1.0, epsilon = TOL);
        assert_abs_diff_eq!(dx.z, 0.0, epsilon = TOL);
    }

    /// The origin is a fixed point of the field.
    #[test]
    fn test_lorenz_fixed_point() {
        let model = Lorenz::default();
        let dx = model.f(0.0, State::ZERO);
        assert_abs_diff_eq!(dx.x, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(dx.y, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(dx.z, 0.0, epsilon = TOL);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(Lorenz::default().validate().is_ok());
        assert!(Lorenz::new(0.0, 28.0, 8.0 / 3.0).validate().is_err());
        assert!(Lorenz::new(10.0, -1.0, 8.0 / 3.0).validate().is_err());
        assert!(Lorenz::new(10.0, 28.0, f64::NAN).validate().is_err());
        assert!(Lorenz::new(f64::INFINITY, 28.0, 8.0 / 3.0).validate().is_err());
    }
}
