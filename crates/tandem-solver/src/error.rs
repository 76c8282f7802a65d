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

//! Error types for the matching pipeline.
//!
//! Failures fall into four families: rejected input, a model with no feasible
//! solution, an optimizer that could not finish, and violated internal
//! invariants. Nothing here is retried automatically; re-solving an
//! infeasible or mis-specified model cannot change the outcome, so retry
//! policy belongs to the caller. No partial matching is ever returned
//! alongside an error.

use tandem_model::{index::ParticipantIndex, matching::Pair, validate::InvalidInputError};

/// The external optimizer failed to produce a usable optimum.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The optimizer stopped before proving optimality (time limit, internal
    /// failure). The string describes the stop reason.
    Aborted(String),
    /// The optimizer reported an unbounded objective. Every variable in the
    /// formulation is bounded, so this signals optimizer misbehavior.
    Unbounded,
    /// A decision variable came back neither 0 nor 1 within tolerance.
    NonIntegral { pair: Pair, value: f64 },
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aborted(reason) => {
                write!(f, "Optimizer stopped without proving optimality: {}", reason)
            }
            Self::Unbounded => write!(
                f,
                "Optimizer reported an unbounded objective on a bounded model"
            ),
            Self::NonIntegral { pair, value } => write!(
                f,
                "Decision variable for pair {} has non-integral value {}",
                pair, value
            ),
        }
    }
}

impl std::error::Error for SolverError {}

/// A matching came back that violates the very constraints that produced it.
///
/// Always fatal and never auto-corrected: any of these means the formulation
/// or the backend adapter is buggy, not the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalInvariantError {
    /// A participant is booked beyond their cap.
    CapacityExceeded {
        participant: ParticipantIndex,
        booked: u32,
        capacity: u32,
    },
    /// The model demanded at least one meeting for this participant, yet the
    /// extracted matching has none.
    CoverageMissed { participant: ParticipantIndex },
    /// The same pair was selected twice.
    DuplicatePair { pair: Pair },
    /// The optimizer claimed infeasibility although the caps guarantee a
    /// fully covering matching exists.
    InfeasibleDespiteGuarantee,
}

impl std::fmt::Display for InternalInvariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded {
                participant,
                booked,
                capacity,
            } => write!(
                f,
                "Participant {} is booked {} times but capped at {}",
                participant.get(),
                booked,
                capacity
            ),
            Self::CoverageMissed { participant } => write!(
                f,
                "Participant {} was left unmatched although the model required coverage",
                participant.get()
            ),
            Self::DuplicatePair { pair } => {
                write!(f, "Pair {} was selected more than once", pair)
            }
            Self::InfeasibleDespiteGuarantee => write!(
                f,
                "Optimizer reported infeasibility although a fully covering matching provably exists"
            ),
        }
    }
}

impl std::error::Error for InternalInvariantError {}

/// The error type for matching requests.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchingError {
    /// The weight matrix or capacity vector was rejected before any model was
    /// built.
    InvalidInput(InvalidInputError),
    /// The model has no feasible solution.
    Infeasible,
    /// The external optimizer failed, timed out, or returned an ambiguous
    /// result.
    Solver(SolverError),
    /// An extracted matching or optimizer status contradicts the formulation.
    Invariant(InternalInvariantError),
}

impl std::fmt::Display for MatchingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            Self::Infeasible => write!(f, "The matching model has no feasible solution"),
            Self::Solver(e) => write!(f, "Solver error: {}", e),
            Self::Invariant(e) => write!(f, "Internal invariant violated: {}", e),
        }
    }
}

impl std::error::Error for MatchingError {}

impl From<InvalidInputError> for MatchingError {
    fn from(e: InvalidInputError) -> Self {
        Self::InvalidInput(e)
    }
}

impl From<SolverError> for MatchingError {
    fn from(e: SolverError) -> Self {
        Self::Solver(e)
    }
}

impl From<InternalInvariantError> for MatchingError {
    fn from(e: InternalInvariantError) -> Self {
        Self::Invariant(e)
    }
}
