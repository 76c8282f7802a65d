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

//! The HiGHS adapter.
//!
//! Declares the matching program as a HiGHS row problem (integer columns in
//! `[0, 1]`, one range row per participant) and maps `HighsModelStatus` onto
//! [`BackendOutcome`]. Reaching the time limit is an abort, not a downgrade:
//! HiGHS may hold a feasible incumbent at that point, but an unproven
//! incumbent is never surfaced as a result.

use crate::backend::{BackendOutcome, IntegerBackend, VariableAssignment};
use highs::{Col, HighsModelStatus, RowProblem, Sense};
use std::time::Duration;

/// An [`IntegerBackend`] backed by the HiGHS mixed-integer solver.
///
/// One instance carries one model; [`IntegerBackend::maximize`] consumes it.
#[derive(Default)]
pub struct HighsBackend {
    problem: RowProblem,
}

impl HighsBackend {
    /// Creates an empty HiGHS model.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IntegerBackend for HighsBackend {
    type Variable = Col;

    fn declare_binary(&mut self, objective_weight: f64) -> Col {
        self.problem.add_integer_column(objective_weight, 0..=1)
    }

    fn declare_bounded_row(&mut self, variables: &[Col], lower: f64, upper: f64) {
        self.problem.add_row(
            lower..=upper,
            variables.iter().map(|&variable| (variable, 1.0)),
        );
    }

    fn maximize(self, time_limit: Option<Duration>) -> BackendOutcome {
        let mut model = self.problem.optimise(Sense::Maximise);
        model.set_option("output_flag", false);
        if let Some(limit) = time_limit {
            model.set_option("time_limit", limit.as_secs_f64());
        }

        let solved = model.solve();
        match solved.status() {
            HighsModelStatus::Optimal => BackendOutcome::Optimal(VariableAssignment::new(
                solved.get_solution().columns().to_vec(),
            )),
            // A model without columns solves trivially.
            HighsModelStatus::ModelEmpty => {
                BackendOutcome::Optimal(VariableAssignment::new(Vec::new()))
            }
            HighsModelStatus::Infeasible => BackendOutcome::Infeasible,
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                BackendOutcome::Unbounded
            }
            HighsModelStatus::ReachedTimeLimit => {
                BackendOutcome::Aborted("time limit reached".to_string())
            }
            other => BackendOutcome::Aborted(format!("HiGHS stopped with status {:?}", other)),
        }
    }
}
