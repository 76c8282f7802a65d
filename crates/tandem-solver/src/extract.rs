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

//! Reading a matching back out of an optimizer assignment.
//!
//! Numerical issues and solver bugs are rare but real, so the extractor does
//! not trust the assignment it is given: every value must be 0 or 1 within
//! tolerance, no pair may appear twice, and the resulting per-participant
//! meeting counts are re-checked against the degree bounds of the program
//! that produced the assignment. A violation is reported, never patched up.

use crate::{
    backend::VariableAssignment,
    error::{InternalInvariantError, MatchingError, SolverError},
    program::MatchingProgram,
};
use fixedbitset::FixedBitSet;
use tandem_core::num::tolerance::{as_binary, INTEGRALITY_TOLERANCE};
use tandem_model::{index::ParticipantIndex, matching::Matching};

/// Converts an optimal assignment into a verified [`Matching`].
///
/// # Panics
///
/// Panics if the assignment's length differs from the program's variable
/// count; the lowering in [`solve_program`](crate::backend::solve_program)
/// always produces matching lengths.
pub fn extract_matching(
    program: &MatchingProgram,
    assignment: &VariableAssignment,
) -> Result<Matching, MatchingError> {
    assert_eq!(
        assignment.len(),
        program.num_variables(),
        "called `extract_matching` with inconsistent lengths: the program has {} variables but the assignment has {}",
        program.num_variables(),
        assignment.len()
    );

    let n = program.num_participants();
    let mut selected = Vec::new();
    let mut seen_slots = FixedBitSet::with_capacity(n * n);
    let mut objective = 0.0;

    for (index, variable) in program.variables().iter().enumerate() {
        let value = assignment.values()[index];
        match as_binary(value, INTEGRALITY_TOLERANCE) {
            Some(false) => {}
            Some(true) => {
                let pair = variable.pair();
                let slot = pair.lower().get() * n + pair.upper().get();
                if seen_slots.put(slot) {
                    return Err(InternalInvariantError::DuplicatePair { pair }.into());
                }
                objective += variable.weight();
                selected.push(pair);
            }
            None => {
                return Err(SolverError::NonIntegral {
                    pair: variable.pair(),
                    value,
                }
                .into())
            }
        }
    }

    let matching = Matching::new(n, selected, objective);

    for k in 0..n {
        let participant = ParticipantIndex::new(k);
        let bounds = program.degree_bounds(participant);
        let booked = matching.degree(participant);

        if booked > bounds.maximum() {
            return Err(InternalInvariantError::CapacityExceeded {
                participant,
                booked,
                capacity: bounds.maximum(),
            }
            .into());
        }
        if booked < bounds.minimum() {
            return Err(InternalInvariantError::CoverageMissed { participant }.into());
        }
    }

    Ok(matching)
}
