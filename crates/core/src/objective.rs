/// A real-valued function of a point, to be minimized.
///
/// The point is passed as a slice of length `nargs`, the dimension of the
/// search space. Solvers treat the objective as a black box and may call it
/// any number of times with different points.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be evaluated at `x`.
    fn call(&self, x: &[f64]) -> Result<f64, Self::Error>;
}

/// The gradient of an objective.
pub trait Gradient {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the gradient at `x`.
    ///
    /// The returned vector must have the same length as `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be computed at `x`.
    fn gradient(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error>;
}

/// An objective evaluated over a whole population in one call.
///
/// The population is passed column-wise: `columns[d][i]` is coordinate `d` of
/// member `i`. There is one column per dimension, each as long as the
/// population. The result holds one score per member, where lower is better.
pub trait BatchObjective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Scores every member of a population.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the population cannot be scored.
    fn call(&self, columns: &[Vec<f64>]) -> Result<Vec<f64>, Self::Error>;
}

impl<F, E> Objective for F
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: &[f64]) -> Result<f64, E> {
        self(x)
    }
}

impl<F, E> Gradient for F
where
    F: Fn(&[f64]) -> Result<Vec<f64>, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn gradient(&self, x: &[f64]) -> Result<Vec<f64>, E> {
        self(x)
    }
}

impl<F, E> BatchObjective for F
where
    F: Fn(&[Vec<f64>]) -> Result<Vec<f64>, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, columns: &[Vec<f64>]) -> Result<Vec<f64>, E> {
        self(columns)
    }
}

/// A wrapper that lets functions which cannot fail act as objectives.
///
/// Created with [`infallible`]. The wrapped function's signature decides
/// which trait applies:
///
/// - `Fn(&[f64]) -> f64` is an [`Objective`]
/// - `Fn(&[f64]) -> Vec<f64>` is a [`Gradient`]
/// - `Fn(&[Vec<f64>]) -> Vec<f64>` is a [`BatchObjective`]
#[derive(Debug, Clone, Copy)]
pub struct Infallible<F>(F);

/// Wraps a function that cannot fail.
///
/// # Examples
///
/// ```
/// use minima_core::{Objective, infallible};
///
/// let f = infallible(|x: &[f64]| x[0] * x[0]);
/// assert_eq!(f.call(&[3.0]), Ok(9.0));
/// ```
pub const fn infallible<F>(function: F) -> Infallible<F> {
    Infallible(function)
}

impl<F> Objective for Infallible<F>
where
    F: Fn(&[f64]) -> f64,
{
    type Error = std::convert::Infallible;

    fn call(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok((self.0)(x))
    }
}

impl<F> Gradient for Infallible<F>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    type Error = std::convert::Infallible;

    fn gradient(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
        Ok((self.0)(x))
    }
}

impl<F> BatchObjective for Infallible<F>
where
    F: Fn(&[Vec<f64>]) -> Vec<f64>,
{
    type Error = std::convert::Infallible;

    fn call(&self, columns: &[Vec<f64>]) -> Result<Vec<f64>, Self::Error> {
        Ok((self.0)(columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("x must be positive, got {0}")]
    struct NotPositive(f64);

    fn evaluate<O: Objective>(objective: &O, x: &[f64]) -> Result<f64, O::Error> {
        objective.call(x)
    }

    #[test]
    fn fallible_closure_is_an_objective() {
        let log = |x: &[f64]| {
            if x[0] > 0.0 {
                Ok(x[0].ln())
            } else {
                Err(NotPositive(x[0]))
            }
        };

        assert_relative_eq!(evaluate(&log, &[1.0]).unwrap(), 0.0);
        assert_eq!(evaluate(&log, &[-2.0]), Err(NotPositive(-2.0)));
    }

    #[test]
    fn infallible_wraps_scalar_function() {
        let sum_of_squares = infallible(|x: &[f64]| x.iter().map(|v| v * v).sum::<f64>());
        assert_relative_eq!(evaluate(&sum_of_squares, &[1.0, 2.0]).unwrap(), 5.0);
    }

    #[test]
    fn infallible_wraps_gradient_function() {
        let grad = infallible(|x: &[f64]| x.iter().map(|v| 2.0 * v).collect::<Vec<_>>());
        assert_eq!(grad.gradient(&[1.0, -3.0]).unwrap(), vec![2.0, -6.0]);
    }

    #[test]
    fn infallible_wraps_batch_function() {
        // f(x, y) = x + y for every member.
        let batch = infallible(|columns: &[Vec<f64>]| {
            columns[0]
                .iter()
                .zip(&columns[1])
                .map(|(x, y)| x + y)
                .collect::<Vec<_>>()
        });

        let scores = batch
            .call(&[vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]])
            .unwrap();
        assert_eq!(scores, vec![11.0, 22.0, 33.0]);
    }
}
