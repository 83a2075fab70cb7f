use thiserror::Error;

/// Configuration for the gradient descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Momentum coefficient in `[0, 1]`.
    ///
    /// The fraction of the previous velocity kept at each step. Zero gives
    /// plain gradient descent.
    pub mass: f64,
}

/// Errors that can occur when setting up a gradient descent solver.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("mass must be within [0, 1], got {0}")]
    Mass(f64),

    #[error("starting point must have at least one dimension")]
    EmptyPoint,

    #[error("starting point coordinate {dimension} is not finite: {value}")]
    NonFinitePoint { dimension: usize, value: f64 },

    #[error("starting point has {point} dimensions but bounds have {bounds}")]
    DimensionMismatch { point: usize, bounds: usize },

    #[error("finite difference step has {actual} components, expected {expected}")]
    StepDimension { expected: usize, actual: usize },

    #[error("finite difference step {dimension} must be finite and non-zero, got {value}")]
    InvalidStep { dimension: usize, value: f64 },
}

impl Default for Config {
    fn default() -> Self {
        Self { mass: 0.5 }
    }
}

impl Config {
    /// Validates that the momentum coefficient lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Mass`] if `mass` is outside `[0, 1]` or NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.mass) {
            return Err(ConfigError::Mass(self.mass));
        }
        Ok(())
    }
}
