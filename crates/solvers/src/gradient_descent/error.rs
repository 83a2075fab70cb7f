use thiserror::Error;

/// Errors that can occur while descending.
///
/// `E` is the error type of the gradient in use. For a
/// [`FiniteDifference`](super::FiniteDifference) gradient this is the
/// objective's own error type, passed through unchanged.
#[derive(Debug, Error)]
pub enum DescentError<E> {
    #[error("gradient evaluation failed")]
    Gradient(#[source] E),

    #[error("gradient has {actual} components, expected {expected}")]
    GradientLength { expected: usize, actual: usize },
}

impl<E> DescentError<E> {
    /// Returns the gradient's own error, if that is what failed.
    pub fn into_gradient_error(self) -> Option<E> {
        match self {
            Self::Gradient(err) => Some(err),
            Self::GradientLength { .. } => None,
        }
    }
}
