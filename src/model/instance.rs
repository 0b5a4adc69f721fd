//! Immutable problem data.

use super::Assignment;
use thiserror::Error;

/// Shape errors raised when constructing an [`Instance`].
///
/// The optimizer itself performs no shape validation; dimensional
/// consistency is established once here, before any search starts.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The instance has no knapsacks or no objects.
    #[error("empty instance: at least one knapsack and one object are required")]
    Empty,

    /// The weights matrix has the wrong number of rows.
    #[error("weights matrix has {actual} rows, expected {expected} (one per capacity)")]
    WeightRows { expected: usize, actual: usize },

    /// A weights row has the wrong number of columns.
    #[error("weights row {row} has {actual} columns, expected {expected}")]
    WeightColumns {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The profits matrix has the wrong number of rows.
    #[error("profits matrix has {actual} rows, expected {expected} (one per capacity)")]
    ProfitRows { expected: usize, actual: usize },

    /// A profits row has the wrong number of columns.
    #[error("profits row {row} has {actual} columns, expected {expected}")]
    ProfitColumns {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The reference solution has the wrong length.
    #[error("reference solution has {actual} entries, expected {expected} (one per object)")]
    ReferenceLength { expected: usize, actual: usize },

    /// A reference solution entry names a nonexistent knapsack.
    #[error("reference solution entry {index} is {value}, outside 1..={knapsacks}")]
    ReferenceRange {
        index: usize,
        value: usize,
        knapsacks: usize,
    },
}

/// An instance of the multiple 0/1 knapsack assignment problem.
///
/// Holds K capacities, a K×N weights matrix, a K×N profits matrix,
/// and optionally a reference solution (1-based knapsack index per
/// object) used only for post-run comparison. All data is fixed for
/// the life of the instance.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    capacities: Vec<f64>,
    weights: Vec<Vec<f64>>,
    profits: Vec<Vec<f64>>,
    reference: Option<Vec<usize>>,
}

impl Instance {
    /// Builds an instance, validating dimensional consistency.
    ///
    /// `capacities` has length K; `weights` and `profits` are K rows
    /// of N columns; `reference`, when present, has one 1-based
    /// knapsack index per object (0 = unassigned).
    pub fn new(
        capacities: Vec<f64>,
        weights: Vec<Vec<f64>>,
        profits: Vec<Vec<f64>>,
        reference: Option<Vec<usize>>,
    ) -> Result<Self, ModelError> {
        let knapsacks = capacities.len();
        if knapsacks == 0 {
            return Err(ModelError::Empty);
        }
        if weights.len() != knapsacks {
            return Err(ModelError::WeightRows {
                expected: knapsacks,
                actual: weights.len(),
            });
        }
        let objects = weights[0].len();
        if objects == 0 {
            return Err(ModelError::Empty);
        }
        for (row, w) in weights.iter().enumerate() {
            if w.len() != objects {
                return Err(ModelError::WeightColumns {
                    row,
                    expected: objects,
                    actual: w.len(),
                });
            }
        }

        if profits.len() != knapsacks {
            return Err(ModelError::ProfitRows {
                expected: knapsacks,
                actual: profits.len(),
            });
        }
        for (row, p) in profits.iter().enumerate() {
            if p.len() != objects {
                return Err(ModelError::ProfitColumns {
                    row,
                    expected: objects,
                    actual: p.len(),
                });
            }
        }

        if let Some(ref positions) = reference {
            if positions.len() != objects {
                return Err(ModelError::ReferenceLength {
                    expected: objects,
                    actual: positions.len(),
                });
            }
            for (index, &value) in positions.iter().enumerate() {
                if value > knapsacks {
                    return Err(ModelError::ReferenceRange {
                        index,
                        value,
                        knapsacks,
                    });
                }
            }
        }

        Ok(Self {
            capacities,
            weights,
            profits,
            reference,
        })
    }

    /// Number of knapsacks K.
    pub fn num_knapsacks(&self) -> usize {
        self.capacities.len()
    }

    /// Number of objects N.
    pub fn num_objects(&self) -> usize {
        self.weights[0].len()
    }

    /// The capacity bounds, one per knapsack.
    pub fn capacities(&self) -> &[f64] {
        &self.capacities
    }

    /// The reference solution positions, if the instance carries one.
    pub fn reference(&self) -> Option<&[usize]> {
        self.reference.as_deref()
    }

    /// Whether `assignment` respects every knapsack's capacity.
    ///
    /// The all-zero assignment is always feasible.
    pub fn is_feasible(&self, assignment: &Assignment) -> bool {
        (0..self.num_knapsacks()).all(|k| {
            let load: f64 = (0..self.num_objects())
                .filter(|&n| assignment.is_set(k, n))
                .map(|n| self.weights[k][n])
                .sum();
            load <= self.capacities[k]
        })
    }

    /// Total profit of `assignment`: the sum of `profits[k][n]` over
    /// every occupied cell.
    pub fn profit(&self, assignment: &Assignment) -> f64 {
        let mut total = 0.0;
        for k in 0..self.num_knapsacks() {
            for n in 0..self.num_objects() {
                if assignment.is_set(k, n) {
                    total += self.profits[k][n];
                }
            }
        }
        total
    }

    /// The reference solution as an [`Assignment`], if present.
    pub fn reference_assignment(&self) -> Option<Assignment> {
        self.reference
            .as_ref()
            .map(|positions| Assignment::from_positions(self.num_knapsacks(), positions))
    }

    /// Profit of the reference solution, scored with the same
    /// evaluator as the search, for side-by-side reporting.
    pub fn reference_profit(&self) -> Option<f64> {
        self.reference_assignment().map(|a| self.profit(&a))
    }
}
