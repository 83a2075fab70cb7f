use minima_core::Bounds;

use super::ConfigError;

/// Where gradient descent starts, and whether its iterates are bounded.
#[derive(Debug, Clone, PartialEq)]
pub enum Start {
    /// Start at an explicit point; iterates are unconstrained.
    Point(Vec<f64>),

    /// Start at the center of the bounds; iterates are clamped to them.
    Midpoint(Bounds),

    /// Start at an explicit point; iterates are clamped to the bounds.
    ///
    /// The point itself is recorded as given, even if it lies outside the
    /// bounds. Clamping applies from the first step onward.
    Bounded { point: Vec<f64>, bounds: Bounds },
}

impl Start {
    /// Resolves the initial point and optional bounds.
    pub(super) fn resolve(self) -> Result<(Vec<f64>, Option<Bounds>), ConfigError> {
        let (point, bounds) = match self {
            Self::Point(point) => (point, None),
            Self::Midpoint(bounds) => (bounds.midpoint(), Some(bounds)),
            Self::Bounded { point, bounds } => {
                if point.len() != bounds.len() {
                    return Err(ConfigError::DimensionMismatch {
                        point: point.len(),
                        bounds: bounds.len(),
                    });
                }
                (point, Some(bounds))
            }
        };

        if point.is_empty() {
            return Err(ConfigError::EmptyPoint);
        }
        if let Some((dimension, &value)) = point.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinitePoint { dimension, value });
        }

        Ok((point, bounds))
    }
}

impl From<f64> for Start {
    /// Starts a one-dimensional search at `x`.
    fn from(x: f64) -> Self {
        Self::Point(vec![x])
    }
}

impl From<Vec<f64>> for Start {
    fn from(point: Vec<f64>) -> Self {
        Self::Point(point)
    }
}

impl From<Bounds> for Start {
    fn from(bounds: Bounds) -> Self {
        Self::Midpoint(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_is_unbounded() {
        let (point, bounds) = Start::from(vec![1.0, 2.0]).resolve().unwrap();
        assert_eq!(point, vec![1.0, 2.0]);
        assert!(bounds.is_none());
    }

    #[test]
    fn midpoint_starts_at_center_of_bounds() {
        let bounds = Bounds::new([[-1.0, 3.0], [2.0, 4.0]]).unwrap();
        let (point, resolved) = Start::Midpoint(bounds.clone()).resolve().unwrap();

        assert_eq!(point, vec![1.0, 3.0]);
        assert_eq!(resolved, Some(bounds));
    }

    #[test]
    fn bounded_point_must_match_bounds() {
        let bounds = Bounds::new([[0.0, 1.0]]).unwrap();
        let start = Start::Bounded {
            point: vec![0.5, 0.5],
            bounds,
        };

        assert_eq!(
            start.resolve(),
            Err(ConfigError::DimensionMismatch {
                point: 2,
                bounds: 1
            })
        );
    }

    #[test]
    fn empty_point_is_rejected() {
        assert_eq!(
            Start::Point(Vec::new()).resolve(),
            Err(ConfigError::EmptyPoint)
        );
    }

    #[test]
    fn non_finite_point_is_rejected() {
        assert!(matches!(
            Start::Point(vec![0.0, f64::NAN]).resolve(),
            Err(ConfigError::NonFinitePoint { dimension: 1, .. })
        ));
    }
}
