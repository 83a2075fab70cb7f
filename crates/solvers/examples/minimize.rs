//! Runs both minimizers on the Rosenbrock function and prints the result.
//!
//! # Usage
//!
//! ```text
//! cargo run --example minimize -- descent
//! cargo run --example minimize -- genetic
//! RUST_LOG=minima_solvers=trace cargo run --example minimize -- descent
//! ```
//!
//! Solver logs go through `tracing`. Set `RUST_LOG` to see them.

use std::error::Error;

use minima_core::{Bounds, infallible};
use minima_solvers::{genetic, gradient_descent};
use tracing_subscriber::EnvFilter;

/// f(x, y) = (1 - x)² + 100 (y - x²)², with its minimum at (1, 1).
fn rosenbrock(x: &[f64]) -> f64 {
    (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "genetic".into());
    match mode.as_str() {
        "descent" => descent(),
        "genetic" => evolve(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: minimize [descent|genetic]");
            std::process::exit(1);
        }
    }
}

fn bounds() -> Result<Bounds, Box<dyn Error>> {
    Ok(Bounds::new([[-2.0, 2.0], [-1.0, 3.0]])?)
}

fn descent() -> Result<(), Box<dyn Error>> {
    let start = gradient_descent::Start::Bounded {
        point: vec![-1.5, 2.0],
        bounds: bounds()?,
    };
    // The Rosenbrock valley is steep, so a small fixed step keeps momentum stable.
    let schedule = |_step: usize| 5e-4;

    let mut solver = gradient_descent::GradientDescent::from_objective(
        infallible(rosenbrock),
        start,
        &gradient_descent::Config { mass: 0.9 },
    )?;
    solver.descend_with(5000, &schedule)?;

    let x = solver.current();
    println!(
        "gradient descent: x = ({:.4}, {:.4}), f = {:.3e} after {} steps",
        x[0],
        x[1],
        rosenbrock(x),
        solver.iterations()
    );
    Ok(())
}

fn evolve() -> Result<(), Box<dyn Error>> {
    let objective = infallible(|columns: &[Vec<f64>]| {
        columns[0]
            .iter()
            .zip(&columns[1])
            .map(|(&x, &y)| rosenbrock(&[x, y]))
            .collect::<Vec<_>>()
    });
    let config = genetic::Config::default().with_seed(2024);

    let mut solver = genetic::Genetic::new(objective, bounds()?, config)?;
    for _ in 0..100 {
        solver.breed()?;
    }

    let best = solver.best(None).ok_or("no generation scored")?;
    println!(
        "genetic: x = ({:.4}, {:.4}), f = {:.3e} after {} generations",
        best.x[0],
        best.x[1],
        best.score,
        solver.generation()
    );
    Ok(())
}
