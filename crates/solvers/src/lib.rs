//! Heuristic minimizers for real-valued objectives.
//!
//! Both solvers are stateful and advance only when the caller asks them to.
//! There is no convergence test: the caller decides how many steps or
//! generations to run and inspects the recorded history in between.
//!
//! # Solvers
//!
//! - [`gradient_descent`]: momentum gradient descent on a single point, with
//!   an explicit or finite-difference gradient and optional box constraints
//! - [`genetic`]: a population evolved by tournament selection, blend
//!   crossover and Gaussian mutation inside box constraints

pub mod genetic;
pub mod gradient_descent;
