//! Selection, crossover and mutation operators.
//!
//! These are the building blocks of [`Genetic::breed`](super::Genetic::breed),
//! exposed so they can be used and tested on their own.

use minima_core::Bounds;
use rand::{Rng, seq::index};
use rand_distr::StandardNormal;

use super::Mutation;

/// Samples `count` points uniformly inside the bounds.
pub fn sample_uniform<R: Rng>(bounds: &Bounds, count: usize, rng: &mut R) -> Vec<Vec<f64>> {
    (0..count)
        .map(|_| {
            bounds
                .iter()
                .map(|interval| interval.min() + rng.r#gen::<f64>() * interval.width())
                .collect()
        })
        .collect()
}

/// Runs one tournament and returns the index of the winner.
///
/// Draws `size` distinct indices uniformly from `0..scores.len()` and picks
/// the one with the lowest score. On ties the candidate drawn first wins.
///
/// # Panics
///
/// Panics if `size` is zero or exceeds `scores.len()`.
pub fn tournament<R: Rng>(scores: &[f64], size: usize, rng: &mut R) -> usize {
    assert!(size > 0, "tournament needs at least one candidate");
    let candidates = index::sample(rng, scores.len(), size);
    lowest(scores, candidates.iter())
}

/// Returns the candidate index with the lowest score.
///
/// A NaN score loses to any number. The first of equal scores wins.
pub(super) fn lowest(scores: &[f64], candidates: impl IntoIterator<Item = usize>) -> usize {
    let mut candidates = candidates.into_iter();
    let Some(mut best) = candidates.next() else {
        return 0;
    };
    for candidate in candidates {
        if is_better(scores[candidate], scores[best]) {
            best = candidate;
        }
    }
    best
}

fn is_better(score: f64, best: f64) -> bool {
    score < best || (best.is_nan() && !score.is_nan())
}

/// Blends parents into a child, biased toward the first parent.
///
/// Each dimension starts with a weight budget of one. For every parent after
/// the first, a weight is drawn uniformly from `[0, budget)`, taken out of
/// the budget, and `weight * (parent - first)` is added to the child:
///
/// ```text
/// child = first + Σ w_j (parent_j - first)
/// ```
///
/// The first parent keeps the leftover weight `1 - Σ w_j`, which is usually
/// the largest share. A single parent is returned unchanged; no parents
/// yield an empty child.
pub fn crossover<R: Rng>(parents: &[&[f64]], rng: &mut R) -> Vec<f64> {
    let Some((first, rest)) = parents.split_first() else {
        return Vec::new();
    };

    let mut child = first.to_vec();
    let mut budget = vec![1.0; child.len()];

    for parent in rest {
        for (((c, b), p), p0) in child
            .iter_mut()
            .zip(budget.iter_mut())
            .zip(parent.iter())
            .zip(first.iter())
        {
            let weight = rng.r#gen::<f64>() * *b;
            *b -= weight;
            *c += weight * (p - p0);
        }
    }

    child
}

/// Returns how many members a generation of `pop_size` mutates.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn mutation_count(pop_size: usize, fraction: f64) -> usize {
    ((pop_size as f64 * fraction).floor() as usize).min(pop_size)
}

/// Adds Gaussian noise to a random subset of the population, in place.
///
/// Picks [`mutation_count`] distinct members without replacement. Each
/// coordinate of a picked member gets independent zero-mean noise with
/// standard deviation `magnitude * width` of that dimension's bound.
/// Mutated members are not clamped back into the bounds.
///
/// Returns the indices of the mutated members.
pub fn mutate<R: Rng>(
    population: &mut [Vec<f64>],
    bounds: &Bounds,
    mutation: &Mutation,
    rng: &mut R,
) -> Vec<usize> {
    let count = mutation_count(population.len(), mutation.fraction);
    let chosen = index::sample(rng, population.len(), count).into_vec();

    let sigmas: Vec<f64> = bounds
        .iter()
        .map(|interval| mutation.magnitude * interval.width())
        .collect();

    for &i in &chosen {
        for (x, sigma) in population[i].iter_mut().zip(&sigmas) {
            let z: f64 = rng.sample(StandardNormal);
            *x += z * sigma;
        }
    }

    chosen
}
