//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the
//! physical annealing process. Accepts worsening moves with a
//! probability that decreases over time (temperature), allowing the
//! search to escape local optima; here the temperature cools linearly
//! to zero over a fixed step budget, ending in pure hill climbing.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod strategy;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, Annealer};
pub use strategy::{
    AcceptanceRule, CoolingSchedule, LinearCooling, Metropolis, NeighborOperator, RelocateMove,
};
