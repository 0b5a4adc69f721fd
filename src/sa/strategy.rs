//! Pluggable search operators.
//!
//! The annealer drives three injectable behaviors: a neighbor move,
//! an acceptance rule, and a cooling schedule. Each trait has one
//! default implementation; tests substitute deterministic fakes to
//! pin down the otherwise random outcomes.

use crate::model::{Assignment, Instance};
use rand::Rng;

/// Proposes a candidate assignment derived from the current one.
///
/// Implementations return an independent copy and leave the current
/// assignment untouched. They do not enforce feasibility; the caller
/// validates candidates and discards infeasible ones.
pub trait NeighborOperator {
    fn propose<R: Rng>(
        &self,
        current: &Assignment,
        instance: &Instance,
        rng: &mut R,
    ) -> Assignment;
}

/// Single-object relocation, the sole default move.
///
/// Picks one object uniformly at random, removes it from whichever
/// knapsack holds it, then with `reassign_probability` places it into
/// a uniformly random knapsack (possibly the one it just left) and
/// otherwise leaves it unassigned. The candidate differs from the
/// current assignment in at most one object's column.
#[derive(Debug, Clone)]
pub struct RelocateMove {
    /// Probability that the picked object is reassigned rather than
    /// left out.
    pub reassign_probability: f64,
}

impl Default for RelocateMove {
    fn default() -> Self {
        Self {
            reassign_probability: 0.9,
        }
    }
}

impl NeighborOperator for RelocateMove {
    fn propose<R: Rng>(
        &self,
        current: &Assignment,
        instance: &Instance,
        rng: &mut R,
    ) -> Assignment {
        let mut candidate = current.clone();
        let object = rng.random_range(0..instance.num_objects());

        candidate.clear(object);
        if rng.random_range(0.0..1.0) < self.reassign_probability {
            let knapsack = rng.random_range(0..instance.num_knapsacks());
            candidate.assign(knapsack, object);
        }
        candidate
    }
}

/// Decides how likely a candidate is to replace the current state.
///
/// The returned value is compared against a uniform draw in `[0, 1)`;
/// values of 1.0 or more always accept. Strictly improving candidates
/// are accepted by the run loop without consulting the rule.
pub trait AcceptanceRule {
    fn probability(&self, profit_new: f64, profit_current: f64, temperature: f64) -> f64;
}

/// Metropolis criterion: `exp((P_new - P_cur) / (k * T))`.
///
/// For a worsening candidate the probability lies in `(0, 1)` and
/// shrinks toward 0 as the temperature drops; an equal-profit
/// candidate evaluates to 1 and is always accepted. The formula is
/// undefined at `T = 0`, so non-positive temperatures reject
/// outright.
#[derive(Debug, Clone)]
pub struct Metropolis {
    /// Sensitivity constant `k`. Smaller values make the rule
    /// stricter at a given temperature.
    pub sensitivity: f64,
}

impl Default for Metropolis {
    fn default() -> Self {
        Self { sensitivity: 0.1 }
    }
}

impl AcceptanceRule for Metropolis {
    fn probability(&self, profit_new: f64, profit_current: f64, temperature: f64) -> f64 {
        if temperature <= 0.0 {
            return 0.0;
        }
        ((profit_new - profit_current) / (self.sensitivity * temperature)).exp()
    }
}

/// Computes the temperature for a given step, in closed form.
pub trait CoolingSchedule {
    fn temperature(&self, initial: f64, step: usize, total_steps: usize) -> f64;
}

/// Linear cooling: `T(step) = T_start * (1 - step / total_steps)`.
///
/// Equals `T_start` at step 0, reaches exactly 0 at the final step,
/// and decreases strictly in between. A zero step budget cools
/// straight to 0.
#[derive(Debug, Clone, Default)]
pub struct LinearCooling;

impl CoolingSchedule for LinearCooling {
    fn temperature(&self, initial: f64, step: usize, total_steps: usize) -> f64 {
        if total_steps == 0 {
            return 0.0;
        }
        initial * (1.0 - step as f64 / total_steps as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square_instance(knapsacks: usize, objects: usize) -> Instance {
        Instance::new(
            vec![100.0; knapsacks],
            vec![vec![1.0; objects]; knapsacks],
            vec![vec![1.0; objects]; knapsacks],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_metropolis_worsening_probability_in_unit_interval() {
        let rule = Metropolis::default();
        for &(new, cur, t) in &[(10.0, 20.0, 100.0), (0.0, 1.0, 50.0), (5.0, 45.0, 1.0)] {
            let p = rule.probability(new, cur, t);
            assert!(p > 0.0 && p < 1.0, "expected p in (0,1), got {p}");
        }
    }

    #[test]
    fn test_metropolis_vanishes_as_temperature_drops() {
        let rule = Metropolis::default();
        let warm = rule.probability(10.0, 20.0, 100.0);
        let cool = rule.probability(10.0, 20.0, 1.0);
        let cold = rule.probability(10.0, 20.0, 1e-9);
        assert!(cool < warm);
        assert!(cold < 1e-12, "expected near-zero acceptance, got {cold}");
    }

    #[test]
    fn test_metropolis_equal_profit_always_accepts() {
        let rule = Metropolis::default();
        assert_eq!(rule.probability(30.0, 30.0, 42.0), 1.0);
    }

    #[test]
    fn test_metropolis_zero_temperature_rejects() {
        let rule = Metropolis::default();
        assert_eq!(rule.probability(10.0, 20.0, 0.0), 0.0);
        assert_eq!(rule.probability(10.0, 20.0, -1.0), 0.0);
    }

    #[test]
    fn test_metropolis_sensitivity_scales_strictness() {
        let strict = Metropolis { sensitivity: 0.01 };
        let lenient = Metropolis { sensitivity: 1.0 };
        assert!(strict.probability(10.0, 20.0, 50.0) < lenient.probability(10.0, 20.0, 50.0));
    }

    #[test]
    fn test_linear_cooling_endpoints() {
        let schedule = LinearCooling;
        assert_eq!(schedule.temperature(100.0, 0, 5000), 100.0);
        assert_eq!(schedule.temperature(100.0, 5000, 5000), 0.0);
    }

    #[test]
    fn test_linear_cooling_strictly_decreasing() {
        let schedule = LinearCooling;
        let mut previous = f64::INFINITY;
        for step in 0..=100 {
            let t = schedule.temperature(100.0, step, 100);
            assert!(t < previous, "temperature must strictly decrease");
            previous = t;
        }
    }

    #[test]
    fn test_linear_cooling_zero_budget() {
        assert_eq!(LinearCooling.temperature(100.0, 0, 0), 0.0);
    }

    #[test]
    fn test_relocate_reassign_probability_zero_always_unassigns() {
        let instance = square_instance(3, 5);
        let mv = RelocateMove {
            reassign_probability: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(1);

        let mut current = Assignment::new(3, 5);
        for n in 0..5 {
            current.assign(n % 3, n);
        }
        for _ in 0..20 {
            let candidate = mv.propose(&current, &instance, &mut rng);
            let assigned = |a: &Assignment| (0..5).filter(|&n| a.knapsack_of(n).is_some()).count();
            assert_eq!(assigned(&candidate), assigned(&current) - 1);
        }
    }

    proptest! {
        #[test]
        fn prop_relocate_changes_at_most_one_column(
            positions in proptest::collection::vec(0usize..=3, 8),
            seed in any::<u64>(),
        ) {
            let instance = square_instance(3, 8);
            let current = Assignment::from_positions(3, &positions);
            let mut rng = StdRng::seed_from_u64(seed);

            let candidate = RelocateMove::default().propose(&current, &instance, &mut rng);

            let changed = (0..8)
                .filter(|&n| candidate.knapsack_of(n) != current.knapsack_of(n))
                .count();
            prop_assert!(changed <= 1);
            // The original is untouched.
            prop_assert_eq!(current.to_positions(), positions);
        }
    }
}
