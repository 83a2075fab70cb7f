use minima_core::{Bounds, Gradient, Objective};

use super::ConfigError;

/// Step used when a coordinate is exactly zero and no bounds are known.
const ZERO_COORDINATE_STEP: f64 = 0.01;

/// Divisor applied to a bound width or coordinate to get the default step.
const STEP_DIVISOR: f64 = 1000.0;

/// Forward-difference approximation of an objective's gradient.
///
/// Each gradient costs `nargs + 1` objective evaluations:
///
/// ```text
/// g_i = (f(x + dx_i * e_i) - f(x)) / dx_i
/// ```
///
/// Objective errors are returned unchanged.
#[derive(Debug, Clone)]
pub struct FiniteDifference<F> {
    objective: F,
    dx: Vec<f64>,
}

impl<F: Objective> FiniteDifference<F> {
    /// Creates a finite-difference gradient with an explicit step per dimension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStep`] if any step is zero or non-finite.
    pub fn new(objective: F, dx: Vec<f64>) -> Result<Self, ConfigError> {
        if let Some((dimension, &value)) = dx
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v == 0.0)
        {
            return Err(ConfigError::InvalidStep { dimension, value });
        }
        Ok(Self { objective, dx })
    }

    /// Creates a finite-difference gradient using [`default_step`].
    ///
    /// The step is not validated: a zero-width bound gives a zero step, and
    /// the resulting gradient is not finite.
    pub fn with_default_step(objective: F, x: &[f64], bounds: Option<&Bounds>) -> Self {
        Self {
            objective,
            dx: default_step(x, bounds),
        }
    }

    /// Returns the step for each dimension.
    #[must_use]
    pub fn step(&self) -> &[f64] {
        &self.dx
    }

    #[must_use]
    pub fn objective(&self) -> &F {
        &self.objective
    }
}

impl<F: Objective> Gradient for FiniteDifference<F> {
    type Error = F::Error;

    fn gradient(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
        let fx = self.objective.call(x)?;

        let mut probe = x.to_vec();
        let mut gradient = Vec::with_capacity(self.dx.len());
        for (i, &dx) in self.dx.iter().enumerate().take(x.len()) {
            probe[i] = x[i] + dx;
            let fi = self.objective.call(&probe)?;
            probe[i] = x[i];
            gradient.push((fi - fx) / dx);
        }

        Ok(gradient)
    }
}

/// Picks a finite-difference step for each dimension.
///
/// With bounds, the step is one thousandth of each bound's width. Without,
/// it is one thousandth of the coordinate itself, or `0.01` where the
/// coordinate is zero.
#[must_use]
pub fn default_step(x: &[f64], bounds: Option<&Bounds>) -> Vec<f64> {
    match bounds {
        Some(bounds) => bounds.iter().map(|b| b.width() / STEP_DIVISOR).collect(),
        None => x
            .iter()
            .map(|&xi| {
                if xi == 0.0 {
                    ZERO_COORDINATE_STEP
                } else {
                    xi / STEP_DIVISOR
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use minima_core::infallible;
    use thiserror::Error;

    #[test]
    fn approximates_derivative_of_square() {
        let square = infallible(|x: &[f64]| x[0] * x[0]);
        let gradient = FiniteDifference::new(square, vec![0.001]).unwrap();

        let g = gradient.gradient(&[3.0]).unwrap();

        assert_eq!(g.len(), 1);
        assert_relative_eq!(g[0], 6.0, epsilon = 0.01);
    }

    #[test]
    fn differences_each_dimension_separately() {
        // f(x, y) = 3x - 2y has gradient (3, -2) everywhere.
        let plane = infallible(|x: &[f64]| 3.0 * x[0] - 2.0 * x[1]);
        let gradient = FiniteDifference::new(plane, vec![0.01, 0.5]).unwrap();

        let g = gradient.gradient(&[10.0, -4.0]).unwrap();

        assert_relative_eq!(g[0], 3.0, epsilon = 1e-9);
        assert_relative_eq!(g[1], -2.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_zero_step() {
        let f = infallible(|x: &[f64]| x[0]);
        let err = FiniteDifference::new(f, vec![0.1, 0.0]).err();
        assert_eq!(
            err,
            Some(ConfigError::InvalidStep {
                dimension: 1,
                value: 0.0
            })
        );
    }

    #[test]
    fn default_step_uses_bound_width() {
        let bounds = Bounds::new([[-1.0, 1.0], [0.0, 10.0]]).unwrap();
        let dx = default_step(&[0.0, 5.0], Some(&bounds));

        assert_relative_eq!(dx[0], 0.002);
        assert_relative_eq!(dx[1], 0.01);
    }

    #[test]
    fn default_step_scales_with_coordinate() {
        let dx = default_step(&[0.0, 5.0, -2.0], None);

        assert_relative_eq!(dx[0], ZERO_COORDINATE_STEP);
        assert_relative_eq!(dx[1], 0.005);
        assert_relative_eq!(dx[2], -0.002);
    }

    #[derive(Debug, Error, PartialEq)]
    #[error("objective undefined at {0}")]
    struct Undefined(f64);

    #[test]
    fn objective_errors_pass_through() {
        // Fails only at the probe point, not at x itself.
        let f = |x: &[f64]| {
            if x[0] > 1.0 {
                Err(Undefined(x[0]))
            } else {
                Ok(x[0])
            }
        };
        let gradient = FiniteDifference::new(f, vec![0.5]).unwrap();

        assert_eq!(gradient.gradient(&[0.75]), Err(Undefined(1.25)));
    }
}
