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

//! The integer-programming formulation of a matching request.
//!
//! This is the standard edge formulation of b-matching: one 0/1 variable per
//! unordered participant pair, an objective that sums the scores of selected
//! pairs, and one degree row per participant bounding how many incident pairs
//! may be selected. The optional lower bound of one selected pair per
//! participant is the full-coverage requirement; whether it is sound to
//! request it is decided elsewhere
//! ([`CapacityRegime`](crate::coverage::CapacityRegime)) and this module
//! simply records the decision.
//!
//! A program is built fresh per request and discarded after solving; nothing
//! is cached between calls.

use tandem_core::utils::index::{TypedIndex, TypedIndexTag};
use tandem_model::{
    capacity::CapacityVector,
    index::ParticipantIndex,
    matching::Pair,
    weights::WeightMatrix,
};

/// A tag type for decision-variable indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct VariableIndexTag;

impl TypedIndexTag for VariableIndexTag {
    const NAME: &'static str = "VariableIndex";
}

/// A typed index into a program's decision-variable vector.
pub type VariableIndex = TypedIndex<VariableIndexTag>;

/// One 0/1 decision: is this pair matched, and what does it score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecisionVariable {
    pair: Pair,
    weight: f64,
}

impl DecisionVariable {
    /// Returns the unordered pair this variable selects.
    #[inline]
    pub fn pair(&self) -> Pair {
        self.pair
    }

    /// Returns the objective contribution when the pair is selected.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Inclusive bounds on how many incident pairs a participant may have
/// selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegreeBounds {
    minimum: u32,
    maximum: u32,
}

impl DegreeBounds {
    /// Returns the least number of selected incident pairs.
    #[inline]
    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    /// Returns the greatest number of selected incident pairs.
    #[inline]
    pub fn maximum(&self) -> u32 {
        self.maximum
    }
}

/// The complete model handed to an optimization backend.
///
/// Variables are ordered by upper-triangle walk of the score matrix; the
/// per-participant incidence lists index into that order. Assignments
/// returned by a backend use the same order.
#[derive(Clone, Debug)]
pub struct MatchingProgram {
    num_participants: usize,
    variables: Vec<DecisionVariable>,
    degree_bounds: Vec<DegreeBounds>,        // len = num_participants
    incidences: Vec<Vec<VariableIndex>>,     // len = num_participants
}

impl MatchingProgram {
    /// Returns the number of participants the program covers.
    #[inline]
    pub fn num_participants(&self) -> usize {
        self.num_participants
    }

    /// Returns the number of decision variables (unordered pairs).
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Returns all decision variables in declaration order.
    #[inline]
    pub fn variables(&self) -> &[DecisionVariable] {
        &self.variables
    }

    /// Returns the degree bounds for the given participant.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `participant` is out of bounds.
    #[inline]
    pub fn degree_bounds(&self, participant: ParticipantIndex) -> DegreeBounds {
        debug_assert!(
            participant.get() < self.num_participants,
            "called `MatchingProgram::degree_bounds` with participant index out of bounds: the len is {} but the index is {}",
            self.num_participants,
            participant.get()
        );

        self.degree_bounds[participant.get()]
    }

    /// Returns the variables whose pair contains the given participant.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `participant` is out of bounds.
    #[inline]
    pub fn incident_variables(&self, participant: ParticipantIndex) -> &[VariableIndex] {
        debug_assert!(
            participant.get() < self.num_participants,
            "called `MatchingProgram::incident_variables` with participant index out of bounds: the len is {} but the index is {}",
            self.num_participants,
            participant.get()
        );

        &self.incidences[participant.get()]
    }

    /// Returns `true` if the program demands at least one meeting per
    /// participant.
    #[inline]
    pub fn requires_full_coverage(&self) -> bool {
        self.degree_bounds.iter().any(|bounds| bounds.minimum > 0)
    }
}

/// Builds a [`MatchingProgram`] from validated inputs.
///
/// # Examples
///
/// ```rust
/// use tandem_model::capacity::CapacityVector;
/// use tandem_model::index::ParticipantIndex;
/// use tandem_model::weights::WeightMatrix;
/// use tandem_solver::program::ProgramBuilder;
///
/// let mut weights = WeightMatrix::new(3);
/// for (a, b) in [(0, 1), (0, 2), (1, 2)] {
///     weights.set_pair_weight(ParticipantIndex::new(a), ParticipantIndex::new(b), 1.0);
/// }
/// let capacities = CapacityVector::uniform(3, 1);
///
/// let program = ProgramBuilder::new(&weights, &capacities).build();
/// assert_eq!(program.num_variables(), 3);
/// assert!(!program.requires_full_coverage());
/// ```
pub struct ProgramBuilder<'a> {
    weights: &'a WeightMatrix,
    capacities: &'a CapacityVector,
    require_full_coverage: bool,
}

impl<'a> ProgramBuilder<'a> {
    /// Creates a builder over a score matrix and capacity vector of the same
    /// roster size.
    ///
    /// Inputs are expected to have passed
    /// [`validate`](tandem_model::validate::validate) already; the builder
    /// only asserts the sizes line up.
    pub fn new(weights: &'a WeightMatrix, capacities: &'a CapacityVector) -> Self {
        assert_eq!(
            weights.num_participants(),
            capacities.len(),
            "called `ProgramBuilder::new` with inconsistent roster sizes: weights cover {}, capacities have {}",
            weights.num_participants(),
            capacities.len()
        );

        Self {
            weights,
            capacities,
            require_full_coverage: false,
        }
    }

    /// Requests a lower bound of one selected pair per participant.
    ///
    /// Only sound when the caps guarantee such a matching exists; see
    /// [`CapacityRegime`](crate::coverage::CapacityRegime).
    #[inline]
    pub fn require_full_coverage(mut self, yes: bool) -> Self {
        self.require_full_coverage = yes;
        self
    }

    /// Builds the program.
    pub fn build(self) -> MatchingProgram {
        let n = self.weights.num_participants();
        let minimum = if self.require_full_coverage { 1 } else { 0 };

        let mut variables = Vec::with_capacity(self.weights.num_pairs());
        let mut incidences: Vec<Vec<VariableIndex>> =
            vec![Vec::with_capacity(n.saturating_sub(1)); n];

        for (a, b, weight) in self.weights.iter_pairs() {
            let variable = VariableIndex::new(variables.len());
            variables.push(DecisionVariable {
                pair: Pair::new(a, b),
                weight,
            });
            incidences[a.get()].push(variable);
            incidences[b.get()].push(variable);
        }

        let degree_bounds = self
            .capacities
            .iter()
            .map(|capacity| DegreeBounds {
                minimum,
                maximum: capacity,
            })
            .collect();

        MatchingProgram {
            num_participants: n,
            variables,
            degree_bounds,
            incidences,
        }
    }
}
