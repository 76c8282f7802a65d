// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Exhaustive 0/1 enumeration over every declared variable.
//!
//! Walks all `2^m` assignments, keeps the best feasible one, and therefore
//! proves optimality by construction. Only usable while `m` stays small — a
//! six-participant roster has 15 pair variables and 32,768 assignments, which
//! is instant; beyond [`MAX_VARIABLES`] the backend refuses rather than spin.
//! Useful as an optimality oracle in tests and for very small rosters without
//! a native solver; real workloads go through
//! [`HighsBackend`](crate::backend::highs::HighsBackend).

use crate::backend::{BackendOutcome, IntegerBackend, VariableAssignment};
use std::time::{Duration, Instant};

/// Variable count above which enumeration is refused.
pub const MAX_VARIABLES: usize = 24;

struct Row {
    variables: Vec<usize>,
    lower: f64,
    upper: f64,
}

/// A brute-force [`IntegerBackend`] for tiny models.
#[derive(Default)]
pub struct ExhaustiveSearchBackend {
    objective_weights: Vec<f64>,
    rows: Vec<Row>,
}

impl ExhaustiveSearchBackend {
    /// Creates an empty backend.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    fn row_satisfied(row: &Row, mask: u32) -> bool {
        let selected = row
            .variables
            .iter()
            .filter(|&&variable| mask & (1 << variable) != 0)
            .count() as f64;
        row.lower <= selected && selected <= row.upper
    }
}

impl IntegerBackend for ExhaustiveSearchBackend {
    type Variable = usize;

    fn declare_binary(&mut self, objective_weight: f64) -> usize {
        self.objective_weights.push(objective_weight);
        self.objective_weights.len() - 1
    }

    fn declare_bounded_row(&mut self, variables: &[usize], lower: f64, upper: f64) {
        self.rows.push(Row {
            variables: variables.to_vec(),
            lower,
            upper,
        });
    }

    fn maximize(self, time_limit: Option<Duration>) -> BackendOutcome {
        let num_variables = self.objective_weights.len();
        if num_variables > MAX_VARIABLES {
            return BackendOutcome::Aborted(format!(
                "{} variables exceed the exhaustive-search limit of {}",
                num_variables, MAX_VARIABLES
            ));
        }

        let start = Instant::now();
        let mut best: Option<(u32, f64)> = None;

        for mask in 0u32..1u32 << num_variables {
            // Clock check every 4,096 assignments keeps overhead negligible.
            if mask & 0xFFF == 0 {
                if let Some(limit) = time_limit {
                    if start.elapsed() >= limit {
                        return BackendOutcome::Aborted("time limit reached".to_string());
                    }
                }
            }

            if !self.rows.iter().all(|row| Self::row_satisfied(row, mask)) {
                continue;
            }

            let objective: f64 = self
                .objective_weights
                .iter()
                .enumerate()
                .filter(|(variable, _)| mask & (1 << variable) != 0)
                .map(|(_, weight)| weight)
                .sum();

            // Strict comparison keeps the lowest qualifying mask on ties,
            // making the result deterministic.
            if best.map_or(true, |(_, incumbent)| objective > incumbent) {
                best = Some((mask, objective));
            }
        }

        match best {
            Some((mask, _)) => {
                let values = (0..num_variables)
                    .map(|variable| {
                        if mask & (1 << variable) != 0 {
                            1.0
                        } else {
                            0.0
                        }
                    })
                    .collect();
                BackendOutcome::Optimal(VariableAssignment::new(values))
            }
            None => BackendOutcome::Infeasible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_heaviest_feasible_assignment() {
        let mut backend = ExhaustiveSearchBackend::new();
        let a = backend.declare_binary(1.0);
        let b = backend.declare_binary(2.0);
        let c = backend.declare_binary(3.0);
        // At most one of the three may be selected.
        backend.declare_bounded_row(&[a, b, c], 0.0, 1.0);

        match backend.maximize(None) {
            BackendOutcome::Optimal(assignment) => {
                assert_eq!(assignment.values(), &[0.0, 0.0, 1.0]);
            }
            other => panic!("expected Optimal, got {}", other),
        }
    }

    #[test]
    fn test_reports_infeasible_rows() {
        let mut backend = ExhaustiveSearchBackend::new();
        let a = backend.declare_binary(1.0);
        let b = backend.declare_binary(1.0);
        // Demand two selections of a single shared slot.
        backend.declare_bounded_row(&[a], 1.0, 1.0);
        backend.declare_bounded_row(&[b], 1.0, 1.0);
        backend.declare_bounded_row(&[a, b], 0.0, 1.0);

        assert_eq!(backend.maximize(None), BackendOutcome::Infeasible);
    }

    #[test]
    fn test_empty_model_is_optimal_and_empty() {
        let backend = ExhaustiveSearchBackend::new();
        match backend.maximize(None) {
            BackendOutcome::Optimal(assignment) => assert!(assignment.is_empty()),
            other => panic!("expected Optimal, got {}", other),
        }
    }

    #[test]
    fn test_refuses_oversized_models() {
        let mut backend = ExhaustiveSearchBackend::new();
        for _ in 0..=MAX_VARIABLES {
            backend.declare_binary(1.0);
        }
        assert!(matches!(
            backend.maximize(None),
            BackendOutcome::Aborted(_)
        ));
    }
}
