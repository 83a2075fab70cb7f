use thiserror::Error;

/// How the population is perturbed after crossover.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mutation {
    /// Fraction of the population mutated each generation, in `[0, 1]`.
    pub fraction: f64,

    /// Noise standard deviation, relative to each dimension's bound width.
    pub magnitude: f64,
}

/// Configuration for the genetic solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Number of members in every generation.
    pub pop_size: usize,

    /// Number of candidates drawn for each tournament.
    pub trn_size: usize,

    pub mutation: Mutation,

    /// Number of parents blended into each child.
    pub num_parents: usize,

    /// Seed for the random number generator, or `None` to seed from entropy.
    pub seed: Option<u64>,
}

/// Errors that can occur when validating a genetic solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("population size must be positive")]
    PopSize,

    #[error("tournament size must be positive")]
    EmptyTournament,

    #[error("tournament size {trn_size} exceeds population size {pop_size}")]
    TournamentTooLarge { trn_size: usize, pop_size: usize },

    #[error("each child needs at least 2 parents, got {0}")]
    TooFewParents(usize),

    #[error("mutation fraction must be within [0, 1], got {0}")]
    MutationFraction(f64),

    #[error("mutation magnitude must be finite and non-negative, got {0}")]
    MutationMagnitude(f64),
}

impl Default for Mutation {
    /// Mutates 40% of the population by 1% of the bound widths.
    fn default() -> Self {
        Self {
            fraction: 0.4,
            magnitude: 0.01,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pop_size: 50,
            trn_size: 10,
            mutation: Mutation::default(),
            num_parents: 2,
            seed: None,
        }
    }
}

impl Config {
    /// Returns this config with a fixed random seed.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Validates sizes and mutation parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pop_size == 0 {
            return Err(ConfigError::PopSize);
        }
        if self.trn_size == 0 {
            return Err(ConfigError::EmptyTournament);
        }
        if self.trn_size > self.pop_size {
            return Err(ConfigError::TournamentTooLarge {
                trn_size: self.trn_size,
                pop_size: self.pop_size,
            });
        }
        if self.num_parents < 2 {
            return Err(ConfigError::TooFewParents(self.num_parents));
        }
        if !(0.0..=1.0).contains(&self.mutation.fraction) {
            return Err(ConfigError::MutationFraction(self.mutation.fraction));
        }
        if !self.mutation.magnitude.is_finite() || self.mutation.magnitude < 0.0 {
            return Err(ConfigError::MutationMagnitude(self.mutation.magnitude));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn tournament_may_equal_population() {
        let config = Config {
            pop_size: 10,
            trn_size: 10,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_tournament_larger_than_population() {
        let config = Config {
            pop_size: 5,
            trn_size: 6,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TournamentTooLarge {
                trn_size: 6,
                pop_size: 5
            })
        );
    }

    #[test]
    fn rejects_empty_population() {
        let config = Config {
            pop_size: 0,
            trn_size: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PopSize));
    }

    #[test]
    fn rejects_single_parent() {
        let config = Config {
            num_parents: 1,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooFewParents(1)));
    }

    #[test]
    fn rejects_bad_mutation() {
        let fraction = Config {
            mutation: Mutation {
                fraction: 1.2,
                magnitude: 0.01,
            },
            ..Config::default()
        };
        assert_eq!(fraction.validate(), Err(ConfigError::MutationFraction(1.2)));

        let magnitude = Config {
            mutation: Mutation {
                fraction: 0.4,
                magnitude: -0.5,
            },
            ..Config::default()
        };
        assert_eq!(
            magnitude.validate(),
            Err(ConfigError::MutationMagnitude(-0.5))
        );
    }

    #[test]
    fn with_seed_keeps_other_settings() {
        let config = Config::default().with_seed(7);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pop_size, 50);
    }
}
