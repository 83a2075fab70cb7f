/// Per-dimension mean of a population.
#[allow(clippy::cast_precision_loss)]
pub(super) fn mean(population: &[Vec<f64>]) -> Vec<f64> {
    let nargs = population.first().map_or(0, Vec::len);
    let n = population.len() as f64;

    (0..nargs)
        .map(|d| population.iter().map(|x| x[d]).sum::<f64>() / n)
        .collect()
}

/// Per-dimension population standard deviation (divides by `n`, not `n - 1`).
#[allow(clippy::cast_precision_loss)]
pub(super) fn std(population: &[Vec<f64>]) -> Vec<f64> {
    let n = population.len() as f64;

    mean(population)
        .into_iter()
        .enumerate()
        .map(|(d, mu)| {
            let variance = population.iter().map(|x| (x[d] - mu).powi(2)).sum::<f64>() / n;
            variance.sqrt()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn mean_and_std_per_dimension() {
        let population = vec![vec![1.0, 10.0], vec![3.0, 10.0], vec![5.0, 10.0]];

        let mu = mean(&population);
        let sigma = std(&population);

        assert_relative_eq!(mu[0], 3.0);
        assert_relative_eq!(mu[1], 10.0);
        assert_relative_eq!(sigma[0], (8.0_f64 / 3.0).sqrt());
        assert_relative_eq!(sigma[1], 0.0);
    }

    #[test]
    fn empty_population_has_no_dimensions() {
        assert!(mean(&[]).is_empty());
        assert!(std(&[]).is_empty());
    }
}
