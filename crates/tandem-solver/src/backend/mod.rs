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

//! Integer-optimization backends.
//!
//! The pipeline never talks to a concrete optimizer directly. It lowers a
//! [`MatchingProgram`] through the small capability surface of
//! [`IntegerBackend`] — declare a binary variable, declare a bounded row over
//! variables, maximize with an optional time limit — so any engine that can
//! do those three things can sit behind the pipeline. Two engines ship here:
//!
//! * [`HighsBackend`](crate::backend::highs::HighsBackend): the HiGHS
//!   mixed-integer solver, the default for real workloads.
//! * [`ExhaustiveSearchBackend`](crate::backend::exhaustive::ExhaustiveSearchBackend):
//!   plain enumeration, usable as an oracle on tiny rosters and in tests.

pub mod exhaustive;
pub mod highs;

use crate::program::{MatchingProgram, VariableIndex};
use std::time::Duration;
use tandem_model::index::ParticipantIndex;

/// The capability surface expected from an integer optimizer.
///
/// Variables are numbered by declaration order; the values inside an
/// [`Optimal`](BackendOutcome::Optimal) outcome use that same order.
/// `maximize` consumes the backend: a backend instance carries exactly one
/// model and is discarded after solving.
pub trait IntegerBackend {
    /// The backend's handle for a declared variable.
    type Variable: Copy;

    /// Declares a 0/1 integer variable with the given objective weight.
    fn declare_binary(&mut self, objective_weight: f64) -> Self::Variable;

    /// Declares the linear constraint
    /// `lower <= sum(variables) <= upper`.
    fn declare_bounded_row(&mut self, variables: &[Self::Variable], lower: f64, upper: f64);

    /// Maximizes the objective, stopping early if the time limit runs out.
    fn maximize(self, time_limit: Option<Duration>) -> BackendOutcome;
}

/// Per-variable values of an optimal solution, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableAssignment {
    values: Vec<f64>,
}

impl VariableAssignment {
    /// Wraps raw per-variable values.
    #[inline]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Returns the number of variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no variables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value of the given variable.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `variable` is out of bounds.
    #[inline]
    pub fn value(&self, variable: VariableIndex) -> f64 {
        debug_assert!(
            variable.get() < self.values.len(),
            "called `VariableAssignment::value` with variable index out of bounds: the len is {} but the index is {}",
            self.values.len(),
            variable.get()
        );

        self.values[variable.get()]
    }

    /// Returns all values in declaration order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// What an optimizer run ended with.
#[derive(Clone, Debug, PartialEq)]
pub enum BackendOutcome {
    /// A provably optimal assignment.
    Optimal(VariableAssignment),
    /// The model has no feasible solution.
    Infeasible,
    /// The objective is unbounded. Cannot legitimately happen for the bounded
    /// models built here.
    Unbounded,
    /// The optimizer stopped without a proven optimum (time limit, internal
    /// failure); the string describes why.
    Aborted(String),
}

impl std::fmt::Display for BackendOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimal(assignment) => {
                write!(f, "Optimal({} variables)", assignment.len())
            }
            Self::Infeasible => write!(f, "Infeasible"),
            Self::Unbounded => write!(f, "Unbounded"),
            Self::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Lowers a program into a backend and runs it.
///
/// Declares every decision variable with its objective weight, then one
/// degree row per participant over that participant's incident variables.
pub fn solve_program<B>(
    mut backend: B,
    program: &MatchingProgram,
    time_limit: Option<Duration>,
) -> BackendOutcome
where
    B: IntegerBackend,
{
    let variables: Vec<B::Variable> = program
        .variables()
        .iter()
        .map(|variable| backend.declare_binary(variable.weight()))
        .collect();

    let mut row = Vec::with_capacity(program.num_participants().saturating_sub(1));
    for k in 0..program.num_participants() {
        let participant = ParticipantIndex::new(k);
        let bounds = program.degree_bounds(participant);

        row.clear();
        row.extend(
            program
                .incident_variables(participant)
                .iter()
                .map(|&variable| variables[variable.get()]),
        );

        backend.declare_bounded_row(&row, f64::from(bounds.minimum()), f64::from(bounds.maximum()));
    }

    backend.maximize(time_limit)
}
