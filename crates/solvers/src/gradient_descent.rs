//! Gradient descent with momentum.
//!
//! # Algorithm
//!
//! The solver keeps one point `x` and a velocity `v`, both of dimension
//! `nargs`, with `v` starting at zero. Each step `t` (1-based) does:
//!
//! ```text
//! v = mass * v - gradient(x)
//! x = x + alpha(t) * v
//! ```
//!
//! then clamps `x` into the bounds, if any, and records it. The default
//! schedule is [`HarmonicDecay`], `alpha(t) = 0.05 + 0.3 / t`.
//!
//! # Gradients
//!
//! The gradient is either supplied explicitly through [`GradientDescent::new`],
//! or estimated from the objective by forward differences through
//! [`GradientDescent::from_objective`] (see [`FiniteDifference`]).
//!
//! # History
//!
//! Every iterate is kept, so memory grows linearly with the number of steps.
//!
//! # Example
//!
//! ```
//! use minima_core::infallible;
//! use minima_solvers::gradient_descent::{Config, GradientDescent, Start};
//!
//! let f = infallible(|x: &[f64]| (x[0] - 2.0).powi(2));
//! let mut solver = GradientDescent::from_objective(f, Start::from(0.0), &Config::default())?;
//!
//! solver.descend(50)?;
//! assert!((solver.current()[0] - 2.0).abs() < 0.05);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod finite_difference;
mod schedule;
mod start;


pub use config::{Config, ConfigError};
pub use error::DescentError;
pub use finite_difference::{FiniteDifference, default_step};
pub use schedule::{HarmonicDecay, Schedule};
pub use start::Start;

use minima_core::{Bounds, Gradient, Objective};
use tracing::{debug, trace};

/// A momentum gradient descent solver.
///
/// Created with [`GradientDescent::new`] or [`GradientDescent::from_objective`]
/// and advanced with [`GradientDescent::descend`].
#[derive(Debug, Clone)]
pub struct GradientDescent<G> {
    gradient: G,
    mass: f64,
    bounds: Option<Bounds>,
    velocity: Vec<f64>,
    history: Vec<Vec<f64>>,
}

impl<G: Gradient> GradientDescent<G> {
    /// Creates a solver driven by an explicit gradient.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config is invalid or the start is
    /// empty, non-finite, or disagrees with its bounds on dimension.
    pub fn new(gradient: G, start: Start, config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let (point, bounds) = start.resolve()?;
        Ok(Self::from_parts(gradient, point, bounds, config.mass))
    }

    fn from_parts(gradient: G, point: Vec<f64>, bounds: Option<Bounds>, mass: f64) -> Self {
        debug!(
            nargs = point.len(),
            mass,
            bounded = bounds.is_some(),
            "created gradient descent solver"
        );
        Self {
            gradient,
            mass,
            bounds,
            velocity: vec![0.0; point.len()],
            history: vec![point],
        }
    }

    /// Takes `n` steps using the default [`HarmonicDecay`] schedule.
    ///
    /// # Errors
    ///
    /// Returns a [`DescentError`] if the gradient fails or has the wrong
    /// length. Steps completed before the failure are kept.
    pub fn descend(&mut self, n: usize) -> Result<(), DescentError<G::Error>> {
        self.descend_with(n, &HarmonicDecay::default())
    }

    /// Takes `n` steps using a custom step-size schedule.
    ///
    /// The schedule is called with the 1-based index of each step, counted
    /// over the solver's lifetime rather than this call.
    ///
    /// # Errors
    ///
    /// Returns a [`DescentError`] if the gradient fails or has the wrong
    /// length. Steps completed before the failure are kept.
    pub fn descend_with<S>(&mut self, n: usize, schedule: &S) -> Result<(), DescentError<G::Error>>
    where
        S: Schedule + ?Sized,
    {
        for _ in 0..n {
            self.step(schedule)?;
        }
        Ok(())
    }

    fn step<S>(&mut self, schedule: &S) -> Result<(), DescentError<G::Error>>
    where
        S: Schedule + ?Sized,
    {
        let x = &self.history[self.history.len() - 1];

        let gradient = self
            .gradient
            .gradient(x)
            .map_err(DescentError::Gradient)?;
        if gradient.len() != x.len() {
            return Err(DescentError::GradientLength {
                expected: x.len(),
                actual: gradient.len(),
            });
        }

        let step = self.history.len();
        let alpha = schedule.alpha(step);

        for (v, g) in self.velocity.iter_mut().zip(&gradient) {
            *v = *v * self.mass - g;
        }

        let mut next: Vec<f64> = x
            .iter()
            .zip(&self.velocity)
            .map(|(xi, vi)| xi + alpha * vi)
            .collect();
        if let Some(bounds) = &self.bounds {
            bounds.clamp(&mut next);
        }

        trace!(step, alpha, x = ?next, "descent step");
        self.history.push(next);
        Ok(())
    }

    /// Returns the iterate recorded at `step`, or the latest for `None`.
    ///
    /// Step 0 is the starting point. Returns `None` if `step` has not been
    /// taken yet.
    #[must_use]
    pub fn parameters(&self, step: Option<usize>) -> Option<&[f64]> {
        let step = step.unwrap_or(self.iterations());
        self.history.get(step).map(Vec::as_slice)
    }

    /// Returns the latest iterate.
    #[must_use]
    pub fn current(&self) -> &[f64] {
        &self.history[self.history.len() - 1]
    }

    /// Returns every iterate so far, starting with the starting point.
    #[must_use]
    pub fn history(&self) -> &[Vec<f64>] {
        &self.history
    }

    /// Returns the number of steps taken.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.history.len() - 1
    }

    #[must_use]
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    #[must_use]
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Returns the dimension of the search space.
    #[must_use]
    pub fn nargs(&self) -> usize {
        self.velocity.len()
    }

    #[must_use]
    pub fn gradient(&self) -> &G {
        &self.gradient
    }
}

impl<F: Objective> GradientDescent<FiniteDifference<F>> {
    /// Creates a solver that differences the objective numerically.
    ///
    /// The step is chosen by [`default_step`] from the starting point and
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config is invalid or the start is
    /// empty, non-finite, or disagrees with its bounds on dimension.
    pub fn from_objective(objective: F, start: Start, config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let (point, bounds) = start.resolve()?;
        let gradient = FiniteDifference::with_default_step(objective, &point, bounds.as_ref());
        Ok(Self::from_parts(gradient, point, bounds, config.mass))
    }

    /// Creates a solver that differences the objective with an explicit step.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config is invalid, the start is
    /// malformed, or `dx` has the wrong length or a zero or non-finite entry.
    pub fn from_objective_with_step(
        objective: F,
        start: Start,
        config: &Config,
        dx: Vec<f64>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let (point, bounds) = start.resolve()?;
        if dx.len() != point.len() {
            return Err(ConfigError::StepDimension {
                expected: point.len(),
                actual: dx.len(),
            });
        }
        let gradient = FiniteDifference::new(objective, dx)?;
        Ok(Self::from_parts(gradient, point, bounds, config.mass))
    }
}
