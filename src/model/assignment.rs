//! Binary assignment matrix.

/// A K×N binary matrix placing objects into knapsacks.
///
/// Cell `(k, n) = 1` means object `n` sits in knapsack `k`. Each
/// column holds at most one 1 — an object is in at most one knapsack,
/// or in none. [`Assignment::assign`] maintains the invariant by
/// clearing the object's column before setting the new cell.
///
/// Assignments are cloned for candidate generation and never mutated
/// once stored as the current or best state of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    knapsacks: usize,
    objects: usize,
    /// Row-major K×N cells.
    cells: Vec<u8>,
}

impl Assignment {
    /// Creates the all-zero assignment (every object unassigned).
    pub fn new(knapsacks: usize, objects: usize) -> Self {
        Self {
            knapsacks,
            objects,
            cells: vec![0; knapsacks * objects],
        }
    }

    /// Builds an assignment from 1-based knapsack positions, one per
    /// object, with 0 meaning unassigned.
    ///
    /// This is the shape reference solutions are distributed in.
    ///
    /// # Panics
    ///
    /// Panics if a position exceeds the number of knapsacks.
    pub fn from_positions(knapsacks: usize, positions: &[usize]) -> Self {
        let mut assignment = Self::new(knapsacks, positions.len());
        for (object, &position) in positions.iter().enumerate() {
            if position > 0 {
                assert!(
                    position <= knapsacks,
                    "position {position} for object {object} exceeds {knapsacks} knapsacks"
                );
                assignment.assign(position - 1, object);
            }
        }
        assignment
    }

    /// Number of knapsacks (rows).
    pub fn knapsacks(&self) -> usize {
        self.knapsacks
    }

    /// Number of objects (columns).
    pub fn objects(&self) -> usize {
        self.objects
    }

    /// Whether object `object` is placed in knapsack `knapsack`.
    pub fn is_set(&self, knapsack: usize, object: usize) -> bool {
        self.cells[knapsack * self.objects + object] != 0
    }

    /// The knapsack holding `object`, or `None` if unassigned.
    pub fn knapsack_of(&self, object: usize) -> Option<usize> {
        (0..self.knapsacks).find(|&k| self.is_set(k, object))
    }

    /// Places `object` into `knapsack`, removing it from any knapsack
    /// it currently occupies.
    pub fn assign(&mut self, knapsack: usize, object: usize) {
        self.clear(object);
        self.cells[knapsack * self.objects + object] = 1;
    }

    /// Removes `object` from whichever knapsack holds it.
    pub fn clear(&mut self, object: usize) {
        for k in 0..self.knapsacks {
            self.cells[k * self.objects + object] = 0;
        }
    }

    /// Converts to 1-based knapsack positions, one per object, with 0
    /// for unassigned objects.
    pub fn to_positions(&self) -> Vec<usize> {
        (0..self.objects)
            .map(|n| self.knapsack_of(n).map_or(0, |k| k + 1))
            .collect()
    }
}
