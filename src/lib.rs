//! Simulated annealing solver for the multiple 0/1 knapsack
//! assignment problem.
//!
//! Each of N objects is placed into at most one of K knapsacks (or
//! left unassigned), subject to a per-knapsack capacity bound, to
//! maximize total profit. The search is a single-solution trajectory:
//! one object is relocated per step, worsening moves are accepted
//! with a temperature-controlled Metropolis probability, and the
//! temperature cools linearly to zero over a fixed step budget.
//!
//! # Architecture
//!
//! - [`model`]: the problem data ([`model::Instance`]) and the binary
//!   assignment matrix ([`model::Assignment`]), with feasibility and
//!   profit evaluation.
//! - [`dataset`]: plain-text dataset loading (capacities, weights,
//!   profits, optional reference solution).
//! - [`sa`]: the annealer — configuration, pluggable operators
//!   (neighbor move, acceptance rule, cooling schedule), and the
//!   run loop.
//!
//! # Example
//!
//! ```
//! use knapsack_anneal::model::Instance;
//! use knapsack_anneal::sa::{AnnealConfig, Annealer};
//!
//! let instance = Instance::new(
//!     vec![10.0],
//!     vec![vec![5.0, 5.0, 5.0]],
//!     vec![vec![10.0, 20.0, 30.0]],
//!     None,
//! )
//! .unwrap();
//!
//! let config = AnnealConfig::default()
//!     .with_total_steps(5000)
//!     .with_seed(42);
//!
//! let result = Annealer::run(&instance, &config);
//! assert!(instance.is_feasible(&result.best));
//! ```

pub mod dataset;
pub mod model;
pub mod sa;
