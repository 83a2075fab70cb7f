//! Genetic minimization over a bounded box.
//!
//! # Algorithm
//!
//! Generation 0 is `pop_size` points drawn uniformly inside the bounds. Each
//! call to [`Genetic::breed`] advances one generation:
//!
//! 1. Score the current population with one call to the [`BatchObjective`].
//! 2. For each of `pop_size` children, pick `num_parents` parents by
//!    [`tournament`](operators::tournament) and blend them with
//!    [`crossover`](operators::crossover).
//! 3. [`mutate`](operators::mutate) a fixed fraction of the children.
//! 4. Record the children as the next generation.
//!
//! Scores therefore lag populations by one: after `g` calls to `breed`,
//! populations `0..=g` exist and scores exist for `0..g`.
//!
//! # Bounds
//!
//! The initial population respects the bounds. Crossover keeps children in
//! the box spanned by their parents, but mutation does not clamp, so later
//! generations may stray outside the bounds.
//!
//! # History
//!
//! Every population and score vector is kept, so memory grows linearly with
//! the number of generations.
//!
//! # Example
//!
//! ```
//! use minima_core::{Bounds, infallible};
//! use minima_solvers::genetic::{Config, Genetic};
//!
//! // f(x, y) = x² + y², scored for the whole population at once.
//! let f = infallible(|columns: &[Vec<f64>]| {
//!     columns[0]
//!         .iter()
//!         .zip(&columns[1])
//!         .map(|(x, y)| x * x + y * y)
//!         .collect::<Vec<_>>()
//! });
//! let bounds = Bounds::new([[-1.0, 1.0], [-2.0, 2.0]])?;
//! let config = Config { pop_size: 10, trn_size: 5, ..Config::default() };
//!
//! let mut solver = Genetic::new(f, bounds, config)?;
//! solver.breed()?;
//!
//! let best = solver.best(None).expect("one generation scored");
//! assert_eq!(best.x.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
pub mod operators;
mod stats;


pub use config::{Config, ConfigError, Mutation};
pub use error::BreedError;

use minima_core::{BatchObjective, Bounds};
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

/// The best member of a scored generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Best {
    /// The member's coordinates.
    pub x: Vec<f64>,

    /// The member's score.
    pub score: f64,

    /// The member's index within its generation.
    pub index: usize,
}

/// A genetic minimization solver.
#[derive(Debug, Clone)]
pub struct Genetic<F> {
    objective: F,
    bounds: Bounds,
    config: Config,
    rng: StdRng,
    populations: Vec<Vec<Vec<f64>>>,
    scores: Vec<Vec<f64>>,
}

impl<F: BatchObjective> Genetic<F> {
    /// Creates a solver and samples generation 0 inside the bounds.
    ///
    /// The objective is not called until the first [`Genetic::breed`], so a
    /// mismatch between the bounds and what the objective expects shows up
    /// there.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config is invalid.
    pub fn new(objective: F, bounds: Bounds, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let initial = operators::sample_uniform(&bounds, config.pop_size, &mut rng);

        debug!(
            nargs = bounds.len(),
            pop_size = config.pop_size,
            trn_size = config.trn_size,
            num_parents = config.num_parents,
            "created genetic solver"
        );

        Ok(Self {
            objective,
            bounds,
            config,
            rng,
            populations: vec![initial],
            scores: Vec::new(),
        })
    }

    /// Scores the current generation and breeds the next one.
    ///
    /// # Errors
    ///
    /// Returns a [`BreedError`] if the objective fails or returns the wrong
    /// number of scores. Nothing is recorded in that case.
    pub fn breed(&mut self) -> Result<(), BreedError<F::Error>> {
        let pop_size = self.config.pop_size;
        let population = &self.populations[self.populations.len() - 1];

        let scores = self
            .objective
            .call(&columns(population, self.bounds.len()))
            .map_err(BreedError::Objective)?;
        if scores.len() != pop_size {
            return Err(BreedError::ScoreCount {
                expected: pop_size,
                actual: scores.len(),
            });
        }

        let mut children = Vec::with_capacity(pop_size);
        let mut parents: Vec<&[f64]> = Vec::with_capacity(self.config.num_parents);
        for _ in 0..pop_size {
            parents.clear();
            for _ in 0..self.config.num_parents {
                let winner = operators::tournament(&scores, self.config.trn_size, &mut self.rng);
                parents.push(&population[winner]);
            }
            children.push(operators::crossover(&parents, &mut self.rng));
        }

        let mutated = operators::mutate(
            &mut children,
            &self.bounds,
            &self.config.mutation,
            &mut self.rng,
        );

        debug!(
            generation = self.generation(),
            best_score = scores[operators::lowest(&scores, 0..pop_size)],
            mutated = mutated.len(),
            "bred generation"
        );

        self.scores.push(scores);
        self.populations.push(children);
        Ok(())
    }

    /// Returns the current generation number, starting from 0.
    ///
    /// Equals the number of completed [`Genetic::breed`] calls.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.populations.len() - 1
    }

    /// Returns the best member of a scored generation.
    ///
    /// `None` selects the latest scored generation. Returns `None` if the
    /// generation has not been scored yet.
    #[must_use]
    pub fn best(&self, generation: Option<usize>) -> Option<Best> {
        let generation = generation.or_else(|| self.latest_scored())?;
        let scores = self.scores.get(generation)?;
        let index = operators::lowest(scores, 0..scores.len());
        Some(Best {
            x: self.populations[generation][index].clone(),
            score: scores[index],
            index,
        })
    }

    /// Returns the members of a generation.
    ///
    /// `None` selects the current generation.
    #[must_use]
    pub fn population(&self, generation: Option<usize>) -> Option<&[Vec<f64>]> {
        let generation = generation.unwrap_or(self.generation());
        self.populations.get(generation).map(Vec::as_slice)
    }

    /// Returns the scores of a generation, one per member.
    ///
    /// `None` selects the latest scored generation.
    #[must_use]
    pub fn population_scores(&self, generation: Option<usize>) -> Option<&[f64]> {
        let generation = generation.or_else(|| self.latest_scored())?;
        self.scores.get(generation).map(Vec::as_slice)
    }

    /// Returns the per-dimension mean of a generation.
    ///
    /// `None` selects the current generation.
    #[must_use]
    pub fn mean(&self, generation: Option<usize>) -> Option<Vec<f64>> {
        self.population(generation).map(stats::mean)
    }

    /// Returns the per-dimension standard deviation of a generation.
    ///
    /// This is the population standard deviation, dividing by `pop_size`.
    /// `None` selects the current generation.
    #[must_use]
    pub fn std(&self, generation: Option<usize>) -> Option<Vec<f64>> {
        self.population(generation).map(stats::std)
    }

    /// Returns every generation so far, starting with generation 0.
    #[must_use]
    pub fn populations(&self) -> &[Vec<Vec<f64>>] {
        &self.populations
    }

    /// Returns the scores of every scored generation.
    #[must_use]
    pub fn scores(&self) -> &[Vec<f64>] {
        &self.scores
    }

    /// Returns the dimension of the search space.
    #[must_use]
    pub fn nargs(&self) -> usize {
        self.bounds.len()
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn latest_scored(&self) -> Option<usize> {
        self.scores.len().checked_sub(1)
    }
}

/// Transposes a population into one column per dimension.
fn columns(population: &[Vec<f64>], nargs: usize) -> Vec<Vec<f64>> {
    (0..nargs)
        .map(|d| population.iter().map(|x| x[d]).collect())
        .collect()
}
