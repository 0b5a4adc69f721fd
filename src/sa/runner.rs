//! Annealing run loop.

use super::config::AnnealConfig;
use super::strategy::{
    AcceptanceRule, CoolingSchedule, LinearCooling, Metropolis, NeighborOperator, RelocateMove,
};
use crate::model::{Assignment, Instance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// The best feasible assignment found.
    pub best: Assignment,

    /// Profit of the best assignment.
    pub best_profit: f64,

    /// Total iterations executed (always `total_steps + 1`).
    pub iterations: usize,

    /// Temperature after the final cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Number of candidates discarded as infeasible.
    pub infeasible_discarded: usize,

    /// Best profit sampled at regular intervals for reporting.
    pub profit_history: Vec<f64>,
}

/// Executes the simulated annealing search.
pub struct Annealer;

impl Annealer {
    /// Runs the anneal with the default operators: single-object
    /// relocation, Metropolis acceptance at `config.sensitivity`,
    /// and linear cooling.
    pub fn run(instance: &Instance, config: &AnnealConfig) -> AnnealResult {
        let acceptance = Metropolis {
            sensitivity: config.sensitivity,
        };
        Self::run_with_operators(
            instance,
            config,
            &RelocateMove::default(),
            &acceptance,
            &LinearCooling,
        )
    }

    /// Runs the anneal with injected operators.
    ///
    /// The search starts from the all-zero assignment (profit 0) and
    /// executes exactly `total_steps + 1` iterations. Each iteration
    /// proposes one candidate; infeasible candidates are discarded
    /// without touching the state, strictly improving candidates are
    /// accepted unconditionally, and the rest are accepted by the
    /// acceptance rule against a uniform draw. The temperature is
    /// recomputed from the schedule after every step, so each
    /// acceptance decision sees a positive temperature under the
    /// default linear schedule.
    pub fn run_with_operators<N, A, C>(
        instance: &Instance,
        config: &AnnealConfig,
        neighbor: &N,
        acceptance: &A,
        cooling: &C,
    ) -> AnnealResult
    where
        N: NeighborOperator,
        A: AcceptanceRule,
        C: CoolingSchedule,
    {
        config.validate().expect("invalid AnnealConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Initialize: nothing assigned, zero profit.
        let mut current = Assignment::new(instance.num_knapsacks(), instance.num_objects());
        let mut current_profit = 0.0;
        let mut best = current.clone();
        let mut best_profit = 0.0;

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut infeasible_discarded = 0usize;

        let report_interval = (config.total_steps / 10).max(1);
        let mut profit_history = vec![best_profit];

        for step in 0..=config.total_steps {
            if step.is_multiple_of(report_interval) {
                debug!(step, temperature, profit = current_profit, "annealing progress");
            }

            let candidate = neighbor.propose(&current, instance, &mut rng);

            if instance.is_feasible(&candidate) {
                let candidate_profit = instance.profit(&candidate);

                let accept = if candidate_profit > current_profit {
                    improving_moves += 1;
                    true
                } else {
                    let probability =
                        acceptance.probability(candidate_profit, current_profit, temperature);
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    current = candidate;
                    current_profit = candidate_profit;
                    accepted_moves += 1;

                    if current_profit > best_profit {
                        best = current.clone();
                        best_profit = current_profit;
                    }
                }
            } else {
                // Infeasible candidates are a normal outcome of the
                // move operator; the step still cools below.
                infeasible_discarded += 1;
            }

            temperature = cooling.temperature(config.initial_temperature, step, config.total_steps);

            if step > 0 && step.is_multiple_of(report_interval) {
                profit_history.push(best_profit);
            }
        }

        if profit_history
            .last()
            .is_none_or(|&last| (last - best_profit).abs() > 1e-15)
        {
            profit_history.push(best_profit);
        }

        AnnealResult {
            best,
            best_profit,
            iterations: config.total_steps + 1,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            infeasible_discarded,
            profit_history,
        }
    }
}
