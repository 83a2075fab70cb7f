use thiserror::Error;

/// A closed interval `[min, max]` bounding one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Interval {
    min: f64,
    max: f64,
}

/// Axis-aligned box constraints, one [`Interval`] per dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")
)]
pub struct Bounds {
    intervals: Vec<Interval>,
}

/// Errors that can occur when constructing bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundsError {
    #[error("bounds must cover at least one dimension")]
    Empty,

    #[error("bound for dimension {dimension} is not finite: {value}")]
    NonFinite { dimension: usize, value: f64 },
}

impl Interval {
    /// Creates an interval from two limits.
    ///
    /// If the limits are reversed, they are automatically swapped.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::NonFinite`] if either limit is NaN or infinite.
    pub fn new(a: f64, b: f64) -> Result<Self, BoundsError> {
        for value in [a, b] {
            if !value.is_finite() {
                return Err(BoundsError::NonFinite {
                    dimension: 0,
                    value,
                });
            }
        }
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `max - min`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Returns `value` limited to the interval.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = BoundsError;

    fn try_from([a, b]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.min, interval.max]
    }
}

impl Bounds {
    /// Creates bounds from one `[a, b]` pair per dimension.
    ///
    /// Reversed pairs are swapped so that every interval has `min <= max`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Empty`] if no pairs are given, or
    /// [`BoundsError::NonFinite`] if any limit is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use minima_core::Bounds;
    ///
    /// let bounds = Bounds::new([[-1.0, 1.0], [2.0, -2.0]]).unwrap();
    ///
    /// assert_eq!(bounds.len(), 2);
    /// assert_eq!(bounds[1].min(), -2.0);
    /// assert_eq!(bounds.midpoint(), vec![0.0, 0.0]);
    /// ```
    pub fn new<I>(pairs: I) -> Result<Self, BoundsError>
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        let intervals = pairs
            .into_iter()
            .enumerate()
            .map(|(dimension, [a, b])| {
                Interval::new(a, b).map_err(|err| match err {
                    BoundsError::NonFinite { value, .. } => {
                        BoundsError::NonFinite { dimension, value }
                    }
                    BoundsError::Empty => BoundsError::Empty,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if intervals.is_empty() {
            return Err(BoundsError::Empty);
        }

        Ok(Self { intervals })
    }

    /// Returns the number of bounded dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always `false`: bounds cover at least one dimension.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn midpoint(&self) -> Vec<f64> {
        self.intervals.iter().map(Interval::midpoint).collect()
    }

    /// Returns the width of each dimension.
    #[must_use]
    pub fn widths(&self) -> Vec<f64> {
        self.intervals.iter().map(Interval::width).collect()
    }

    /// Clamps each coordinate of `x` into its interval, in place.
    ///
    /// Coordinates beyond the number of bounded dimensions are left untouched.
    pub fn clamp(&self, x: &mut [f64]) {
        for (value, interval) in x.iter_mut().zip(&self.intervals) {
            *value = interval.clamp(*value);
        }
    }

    /// Returns true if `x` has one coordinate per dimension and each lies
    /// within its interval.
    #[must_use]
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.intervals.len()
            && x
                .iter()
                .zip(&self.intervals)
                .all(|(value, interval)| interval.contains(*value))
    }
}

impl std::ops::Index<usize> for Bounds {
    type Output = Interval;

    fn index(&self, dimension: usize) -> &Interval {
        &self.intervals[dimension]
    }
}

impl<'a> IntoIterator for &'a Bounds {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl From<Interval> for Bounds {
    fn from(interval: Interval) -> Self {
        Self {
            intervals: vec![interval],
        }
    }
}

impl TryFrom<Vec<[f64; 2]>> for Bounds {
    type Error = BoundsError;

    fn try_from(pairs: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        Self::new(pairs)
    }
}

impl From<Bounds> for Vec<[f64; 2]> {
    fn from(bounds: Bounds) -> Self {
        bounds.intervals.into_iter().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn interval_auto_reverses_if_needed() {
        let interval = Interval::new(1.0, -2.0).unwrap();

        assert_relative_eq!(interval.min(), -2.0);
        assert_relative_eq!(interval.max(), 1.0);
        assert_relative_eq!(interval.width(), 3.0);
        assert_relative_eq!(interval.midpoint(), -0.5);
    }

    #[test]
    fn interval_rejects_non_finite_limits() {
        assert!(matches!(
            Interval::new(0.0, f64::INFINITY),
            Err(BoundsError::NonFinite { .. })
        ));
        assert!(Interval::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn interval_clamps_values() {
        let interval = Interval::new(-1.0, 1.0).unwrap();

        assert_relative_eq!(interval.clamp(-5.0), -1.0);
        assert_relative_eq!(interval.clamp(0.25), 0.25);
        assert_relative_eq!(interval.clamp(5.0), 1.0);
    }

    #[test]
    fn bounds_require_a_dimension() {
        let pairs: [[f64; 2]; 0] = [];
        assert_eq!(Bounds::new(pairs), Err(BoundsError::Empty));
    }

    #[test]
    fn bounds_report_offending_dimension() {
        let err = Bounds::new([[0.0, 1.0], [0.0, f64::NAN]]).unwrap_err();
        assert!(matches!(err, BoundsError::NonFinite { dimension: 1, .. }));
    }

    #[test]
    fn bounds_midpoint_and_widths() {
        let bounds = Bounds::new([[0.0, 4.0], [-2.0, -1.0]]).unwrap();

        assert_eq!(bounds.midpoint(), vec![2.0, -1.5]);
        assert_eq!(bounds.widths(), vec![4.0, 1.0]);
    }

    #[test]
    fn bounds_clamp_in_place() {
        let bounds = Bounds::new([[0.0, 1.0], [0.0, 1.0]]).unwrap();
        let mut x = vec![-0.5, 1.5];

        assert!(!bounds.contains(&x));
        bounds.clamp(&mut x);

        assert_eq!(x, vec![0.0, 1.0]);
        assert!(bounds.contains(&x));
    }

    #[test]
    fn contains_checks_dimension() {
        let bounds = Bounds::new([[0.0, 1.0]]).unwrap();
        assert!(!bounds.contains(&[0.5, 0.5]));
    }

    #[test]
    fn single_interval_converts_to_bounds() {
        let bounds = Bounds::from(Interval::new(3.0, 5.0).unwrap());
        assert_eq!(bounds.len(), 1);
        assert_relative_eq!(bounds[0].midpoint(), 4.0);
    }
}
