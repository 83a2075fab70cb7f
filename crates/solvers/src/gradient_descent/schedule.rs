/// Step-size schedule for gradient descent.
///
/// `step` is the 1-based index of the step being taken.
pub trait Schedule {
    fn alpha(&self, step: usize) -> f64;
}

impl<F> Schedule for F
where
    F: Fn(usize) -> f64,
{
    fn alpha(&self, step: usize) -> f64 {
        self(step)
    }
}

/// Step size decaying as `base + scale / step`.
///
/// The default, `0.05 + 0.3 / step`, takes large steps early and settles to
/// `0.05`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarmonicDecay {
    pub base: f64,
    pub scale: f64,
}

impl Default for HarmonicDecay {
    fn default() -> Self {
        Self {
            base: 0.05,
            scale: 0.3,
        }
    }
}

impl Schedule for HarmonicDecay {
    #[allow(clippy::cast_precision_loss)]
    fn alpha(&self, step: usize) -> f64 {
        self.base + self.scale / step as f64
    }
}
