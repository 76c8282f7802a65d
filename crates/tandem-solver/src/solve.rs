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

//! The matching pipeline and its public entry points.
//!
//! Every request runs the same stages: validate the inputs, build a fresh
//! program, lower it into a backend, and extract a verified matching from the
//! optimum. The inclusive variant inserts one decision before the build:
//! whether the caps prove that a fully covering matching exists, and only
//! then demands one. Each request is a single synchronous call over its own
//! model; nothing is shared or retried.

use crate::{
    backend::{highs::HighsBackend, solve_program, BackendOutcome, IntegerBackend},
    coverage::CapacityRegime,
    error::{InternalInvariantError, MatchingError, SolverError},
    extract::extract_matching,
    program::ProgramBuilder,
};
use std::time::Duration;
use tandem_model::{
    capacity::CapacityVector, matching::Matching, validate::validate, weights::WeightMatrix,
};
use tracing::{debug, warn};

/// Computes a maximum-weight b-matching.
///
/// Returns the matching maximizing the total score of selected pairs, subject
/// to every participant appearing in at most their cap of pairs. Some
/// participants may end up with no meeting at all; use
/// [`inclusive_matching`] to also cover everyone whenever that is possible.
///
/// `time_budget` bounds the optimizer's wall-clock time; exceeding it is an
/// error ([`SolverError`]), never a silently weaker matching.
///
/// # Errors
///
/// [`MatchingError::InvalidInput`] for rejected inputs,
/// [`MatchingError::Solver`] if the optimizer fails or times out.
pub fn maximize_weighted_b_matching(
    weights: &WeightMatrix,
    capacities: &CapacityVector,
    time_budget: Option<Duration>,
) -> Result<Matching, MatchingError> {
    maximize_weighted_b_matching_with(HighsBackend::new(), weights, capacities, time_budget)
}

/// [`maximize_weighted_b_matching`] over a caller-supplied backend.
pub fn maximize_weighted_b_matching_with<B>(
    backend: B,
    weights: &WeightMatrix,
    capacities: &CapacityVector,
    time_budget: Option<Duration>,
) -> Result<Matching, MatchingError>
where
    B: IntegerBackend,
{
    validate(weights, capacities)?;

    let n = weights.num_participants();
    if n <= 1 {
        return Ok(Matching::empty(n));
    }

    run_pipeline(backend, weights, capacities, false, time_budget)
}

/// Computes the most inclusive maximum-weight b-matching.
///
/// When at least one participant may take two or more meetings, a matching
/// covering everyone provably exists and the result is the best such
/// matching. When every cap is 1, coverage of everyone is not always possible
/// (an odd roster strands exactly one participant); the unconstrained optimum
/// is returned as-is, which on a complete positively scored graph leaves at
/// most one participant unmatched.
///
/// # Errors
///
/// As [`maximize_weighted_b_matching`]; additionally
/// [`MatchingError::Invariant`] if the optimizer claims infeasibility in the
/// regime where coverage is guaranteed, which would indicate a bug in the
/// formulation or backend rather than in the input.
pub fn inclusive_matching(
    weights: &WeightMatrix,
    capacities: &CapacityVector,
    time_budget: Option<Duration>,
) -> Result<Matching, MatchingError> {
    inclusive_matching_with(HighsBackend::new(), weights, capacities, time_budget)
}

/// [`inclusive_matching`] over a caller-supplied backend.
pub fn inclusive_matching_with<B>(
    backend: B,
    weights: &WeightMatrix,
    capacities: &CapacityVector,
    time_budget: Option<Duration>,
) -> Result<Matching, MatchingError>
where
    B: IntegerBackend,
{
    validate(weights, capacities)?;

    let n = weights.num_participants();
    if n <= 1 {
        return Ok(Matching::empty(n));
    }

    let regime = CapacityRegime::classify(capacities);
    debug!(?regime, num_participants = n, "decided coverage regime");

    let result = run_pipeline(
        backend,
        weights,
        capacities,
        regime.guarantees_full_coverage(),
        time_budget,
    );

    match result {
        Err(MatchingError::Infeasible) if regime.guarantees_full_coverage() => {
            Err(InternalInvariantError::InfeasibleDespiteGuarantee.into())
        }
        other => other,
    }
}

fn run_pipeline<B>(
    backend: B,
    weights: &WeightMatrix,
    capacities: &CapacityVector,
    require_full_coverage: bool,
    time_budget: Option<Duration>,
) -> Result<Matching, MatchingError>
where
    B: IntegerBackend,
{
    let program = ProgramBuilder::new(weights, capacities)
        .require_full_coverage(require_full_coverage)
        .build();

    debug!(
        num_participants = program.num_participants(),
        num_variables = program.num_variables(),
        require_full_coverage,
        "built matching program"
    );

    match solve_program(backend, &program, time_budget) {
        BackendOutcome::Optimal(assignment) => {
            let matching = extract_matching(&program, &assignment)?;
            debug!(
                num_pairs = matching.num_pairs(),
                objective = matching.objective_value(),
                "extracted matching"
            );
            Ok(matching)
        }
        BackendOutcome::Infeasible => Err(MatchingError::Infeasible),
        BackendOutcome::Unbounded => {
            warn!("optimizer reported an unbounded objective on a bounded model");
            Err(SolverError::Unbounded.into())
        }
        BackendOutcome::Aborted(reason) => Err(SolverError::Aborted(reason).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::exhaustive::ExhaustiveSearchBackend;
    use tandem_model::{index::ParticipantIndex, matching::Pair, validate::InvalidInputError};

    fn pi(i: usize) -> ParticipantIndex {
        ParticipantIndex::new(i)
    }

    fn pr(a: usize, b: usize) -> Pair {
        Pair::new(pi(a), pi(b))
    }

    fn uniform_weights(n: usize) -> WeightMatrix {
        let mut weights = WeightMatrix::new(n);
        for i in 0..n {
            for j in i + 1..n {
                weights.set_pair_weight(pi(i), pi(j), 1.0);
            }
        }
        weights
    }

    /// The worked four-participant instance: one participant with cap 2 and a
    /// heavy edge that crowds participant 3 out of the plain optimum.
    fn crowded_instance() -> (WeightMatrix, CapacityVector) {
        let mut weights = WeightMatrix::new(4);
        weights.set_pair_weight(pi(0), pi(1), 3.0);
        weights.set_pair_weight(pi(0), pi(2), 2.0);
        weights.set_pair_weight(pi(0), pi(3), 1.0);
        weights.set_pair_weight(pi(1), pi(2), 1.0);
        weights.set_pair_weight(pi(1), pi(3), 1.0);
        weights.set_pair_weight(pi(2), pi(3), 1.0);
        (weights, CapacityVector::from(vec![2, 1, 1, 1]))
    }

    #[test]
    fn test_triangle_unit_caps_matches_one_pair() {
        let weights = uniform_weights(3);
        let capacities = CapacityVector::uniform(3, 1);

        let matching = maximize_weighted_b_matching_with(
            ExhaustiveSearchBackend::new(),
            &weights,
            &capacities,
            None,
        )
        .expect("solvable");

        assert_eq!(matching.num_pairs(), 1);
        assert_eq!(matching.objective_value(), 1.0);
    }

    #[test]
    fn test_triangle_unit_caps_inclusive_leaves_one_out() {
        let weights = uniform_weights(3);
        let capacities = CapacityVector::uniform(3, 1);

        let matching =
            inclusive_matching_with(ExhaustiveSearchBackend::new(), &weights, &capacities, None)
                .expect("solvable without the floor");

        assert_eq!(matching.num_pairs(), 1);
        assert_eq!(matching.objective_value(), 1.0);
        assert_eq!(matching.uncovered().len(), 1);
    }

    #[test]
    fn test_four_unit_caps_inclusive_covers_everyone() {
        let weights = uniform_weights(4);
        let capacities = CapacityVector::uniform(4, 1);

        let matching =
            inclusive_matching_with(ExhaustiveSearchBackend::new(), &weights, &capacities, None)
                .expect("solvable");

        assert_eq!(matching.num_pairs(), 2);
        assert_eq!(matching.objective_value(), 2.0);
        assert!(matching.uncovered().is_empty());
    }

    #[test]
    fn test_triangle_with_one_expandable_cap_covers_everyone() {
        let weights = uniform_weights(3);
        let capacities = CapacityVector::from(vec![2, 1, 1]);

        let matching =
            inclusive_matching_with(ExhaustiveSearchBackend::new(), &weights, &capacities, None)
                .expect("coverage is guaranteed");

        assert_eq!(matching.num_pairs(), 2);
        assert_eq!(matching.objective_value(), 2.0);
        assert!(matching.uncovered().is_empty());
        assert_eq!(matching.degree(pi(0)), 2);
        assert_eq!(matching.degree(pi(1)), 1);
        assert_eq!(matching.degree(pi(2)), 1);
    }

    #[test]
    fn test_crowding_out_versus_inclusive() {
        let (weights, capacities) = crowded_instance();

        // The plain optimum books participant 0 twice and strands 3.
        let plain = maximize_weighted_b_matching_with(
            ExhaustiveSearchBackend::new(),
            &weights,
            &capacities,
            None,
        )
        .expect("solvable");
        assert_eq!(plain.pairs(), &[pr(0, 1), pr(0, 2)]);
        assert_eq!(plain.objective_value(), 5.0);
        assert_eq!(plain.uncovered(), vec![pi(3)]);

        // The inclusive optimum gives up a point to cover participant 3.
        let inclusive =
            inclusive_matching_with(ExhaustiveSearchBackend::new(), &weights, &capacities, None)
                .expect("coverage is guaranteed");
        assert_eq!(inclusive.pairs(), &[pr(0, 1), pr(2, 3)]);
        assert_eq!(inclusive.objective_value(), 4.0);
        assert!(inclusive.uncovered().is_empty());
    }

    #[test]
    fn test_tiny_rosters_are_trivially_empty() {
        for n in [0usize, 1] {
            let weights = uniform_weights(n);
            let capacities = CapacityVector::uniform(n, 1);

            let matching = inclusive_matching_with(
                ExhaustiveSearchBackend::new(),
                &weights,
                &capacities,
                None,
            )
            .expect("trivial");
            assert!(matching.is_empty());
            assert_eq!(matching.num_participants(), n);
        }
    }

    #[test]
    fn test_invalid_input_short_circuits() {
        let weights = uniform_weights(3);
        let capacities = CapacityVector::from(vec![1, 0, 1]);

        match maximize_weighted_b_matching_with(
            ExhaustiveSearchBackend::new(),
            &weights,
            &capacities,
            None,
        ) {
            Err(MatchingError::InvalidInput(InvalidInputError::ZeroCapacity { participant })) => {
                assert_eq!(participant, pi(1));
            }
            other => panic!("expected ZeroCapacity, got {:?}", other),
        }
    }

    #[test]
    fn test_two_participants_get_their_single_pair() {
        let weights = uniform_weights(2);
        let capacities = CapacityVector::uniform(2, 1);

        let matching =
            inclusive_matching_with(ExhaustiveSearchBackend::new(), &weights, &capacities, None)
                .expect("solvable");
        assert_eq!(matching.pairs(), &[pr(0, 1)]);
        assert!(matching.uncovered().is_empty());
    }
}
