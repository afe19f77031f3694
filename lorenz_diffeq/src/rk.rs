//! Explicit Runge-Kutta stepping driven by Butcher tableau coefficients.
//!
//! All arithmetic here depends on standard IEEE f64 semantics. Do not build
//! this crate with options that license floating-point reassociation or
//! contraction (fast-math style flags): the Lorenz system amplifies the
//! resulting per-step perturbation exponentially, and long trajectories
//! diverge by tens of units from the reference within a few thousand steps.

use crate::{model::OdeModel, state::State};

/// Coefficients of an explicit Runge-Kutta scheme.
///
/// `a` is the (strictly lower-triangular) stage matrix, `b` the output
/// weights, and `c` the stage times.
#[derive(Clone, Copy, Debug)]
pub struct ButcherTableau<const STAGES: usize> {
    pub a: [[f64; STAGES]; STAGES],
    pub b: [f64; STAGES],
    pub c: [f64; STAGES],
}

impl ButcherTableau<4> {
    // usage is ButcherTableau::<4>::RK4
    pub const RK4: Self = Self {
        a: [
            [0., 0., 0., 0.],
            [1. / 2., 0., 0., 0.],
            [0., 1. / 2., 0., 0.],
            [0., 0., 1., 0.],
        ],
        b: [1. / 6., 1. / 3., 1. / 3., 1. / 6.],
        c: [0., 1. / 2., 1. / 2., 1.],
    };
}

/// Fixed-step explicit Runge-Kutta integrator.
///
/// Holds the tableau and a reused stage-derivative buffer. Stepping is pure
/// arithmetic and never fails; callers are responsible for checking the
/// result for non-finite components (see [`State::is_finite`]), which a
/// pathological step size can produce.
#[derive(Clone, Copy, Debug)]
pub struct RungeKutta<const STAGES: usize> {
    tableau: ButcherTableau<STAGES>,
    k: [State; STAGES],
}

impl RungeKutta<4> {
    /// Integrator using the classical 4th-order tableau.
    pub fn rk4() -> Self {
        Self::new(ButcherTableau::<4>::RK4)
    }
}

impl<const STAGES: usize> RungeKutta<STAGES> {
    pub fn new(tableau: ButcherTableau<STAGES>) -> Self {
        Self {
            tableau,
            k: [State::ZERO; STAGES],
        }
    }

    /// Advance `x` by one step of size `h` under `model` at time `t`.
    pub fn step<Model: OdeModel>(&mut self, model: &Model, x: State, t: f64, h: f64) -> State {
        self.k[0] = model.f(t, x);

        for s in 1..STAGES {
            // intermediate point from the previous ks, scaled per the tableau
            let mut xs = State::ZERO;
            for i in 0..s {
                xs += self.k[i] * self.tableau.a[s][i];
            }
            let xs = x + xs * h;

            self.k[s] = model.f(t + self.tableau.c[s] * h, xs);
        }

        let mut y = x;
        for s in 0..STAGES {
            y += self.k[s] * (self.tableau.b[s] * h);
        }
        y
    }
}
