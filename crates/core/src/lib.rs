//! Core traits and types for the minima solvers.
//!
//! This crate defines the shared abstractions the solvers build on:
//!
//! - [`Objective`]: a scalar function of one point, to be minimized
//! - [`Gradient`]: the gradient of an objective at one point
//! - [`BatchObjective`]: an objective evaluated over a whole population at once
//! - [`Bounds`]: axis-aligned box constraints, one [`Interval`] per dimension
//!
//! Closures returning `Result` implement the traits directly. Infallible
//! closures can be adapted with [`infallible`].

mod bounds;
mod objective;

pub use bounds::{Bounds, BoundsError, Interval};
pub use objective::{BatchObjective, Gradient, Infallible, Objective, infallible};
