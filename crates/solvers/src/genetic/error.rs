use thiserror::Error;

/// Errors that can occur while breeding a generation.
///
/// `E` is the objective's own error type, passed through unchanged.
#[derive(Debug, Error)]
pub enum BreedError<E> {
    #[error("objective evaluation failed")]
    Objective(#[source] E),

    #[error("objective returned {actual} scores for a population of {expected}")]
    ScoreCount { expected: usize, actual: usize },
}

impl<E> BreedError<E> {
    /// Returns the objective's own error, if that is what failed.
    pub fn into_objective_error(self) -> Option<E> {
        match self {
            Self::Objective(err) => Some(err),
            Self::ScoreCount { .. } => None,
        }
    }
}
