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

use crate::index::ParticipantIndex;

/// An unordered pair of distinct participants, stored in canonical order
/// (`lower < upper`).
///
/// # Examples
///
/// ```rust
/// use tandem_model::index::ParticipantIndex;
/// use tandem_model::matching::Pair;
///
/// let pair = Pair::new(ParticipantIndex::new(3), ParticipantIndex::new(1));
/// assert_eq!(pair.lower().get(), 1);
/// assert_eq!(pair.upper().get(), 3);
/// assert!(pair.touches(ParticipantIndex::new(3)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Pair {
    lower: ParticipantIndex,
    upper: ParticipantIndex,
}

impl Pair {
    /// Creates a pair from two distinct participants, normalizing order.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    pub fn new(a: ParticipantIndex, b: ParticipantIndex) -> Self {
        assert!(
            a != b,
            "called `Pair::new` with a self-pairing: participant {}",
            a.get()
        );

        if a < b {
            Self { lower: a, upper: b }
        } else {
            Self { lower: b, upper: a }
        }
    }

    /// Returns the smaller participant index.
    #[inline]
    pub fn lower(&self) -> ParticipantIndex {
        self.lower
    }

    /// Returns the larger participant index.
    #[inline]
    pub fn upper(&self) -> ParticipantIndex {
        self.upper
    }

    /// Returns `true` if the pair contains the given participant.
    #[inline]
    pub fn touches(&self, participant: ParticipantIndex) -> bool {
        self.lower == participant || self.upper == participant
    }

    /// Returns the other endpoint, or `None` if `participant` is not in the
    /// pair.
    #[inline]
    pub fn partner_of(&self, participant: ParticipantIndex) -> Option<ParticipantIndex> {
        if participant == self.lower {
            Some(self.upper)
        } else if participant == self.upper {
            Some(self.lower)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lower.get(), self.upper.get())
    }
}

/// The final assignment of pairwise meetings over a roster.
///
/// Holds the set of matched pairs, the total score they earn, and a
/// precomputed per-participant meeting count. A pair appears at most once; the
/// per-participant counts are derived from the pairs at construction time.
#[derive(Clone, Debug, PartialEq)]
pub struct Matching {
    pairs: Vec<Pair>,
    /// `degrees[k]` is the number of matched pairs containing participant `k`.
    degrees: Vec<u32>,
    objective_value: f64,
}

impl Matching {
    /// Constructs a matching over `num_participants` from its pairs and total
    /// score.
    ///
    /// # Panics
    ///
    /// Panics if any pair references a participant outside
    /// `0..num_participants`.
    pub fn new(num_participants: usize, pairs: Vec<Pair>, objective_value: f64) -> Self {
        let mut degrees = vec![0u32; num_participants];
        for pair in &pairs {
            assert!(
                pair.upper().get() < num_participants,
                "called `Matching::new` with pair {} out of bounds for {} participants",
                pair,
                num_participants
            );
            degrees[pair.lower().get()] += 1;
            degrees[pair.upper().get()] += 1;
        }

        Self {
            pairs,
            degrees,
            objective_value,
        }
    }

    /// Constructs the empty matching over `num_participants`.
    #[inline]
    pub fn empty(num_participants: usize) -> Self {
        Self::new(num_participants, Vec::new(), 0.0)
    }

    /// Returns the number of participants in the roster.
    #[inline]
    pub fn num_participants(&self) -> usize {
        self.degrees.len()
    }

    /// Returns the matched pairs.
    #[inline]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Returns the number of matched pairs.
    #[inline]
    pub fn num_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pair was matched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the total score of all matched pairs.
    #[inline]
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Returns the number of matched pairs containing the given participant.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `participant` is out of bounds.
    #[inline]
    pub fn degree(&self, participant: ParticipantIndex) -> u32 {
        debug_assert!(
            participant.get() < self.num_participants(),
            "called `Matching::degree` with participant index out of bounds: the len is {} but the index is {}",
            self.num_participants(),
            participant.get()
        );

        self.degrees[participant.get()]
    }

    /// Returns `true` if the participant appears in at least one pair.
    #[inline]
    pub fn is_covered(&self, participant: ParticipantIndex) -> bool {
        self.degree(participant) > 0
    }

    /// Returns all participants that appear in no pair, in roster order.
    pub fn uncovered(&self) -> Vec<ParticipantIndex> {
        self.degrees
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(k, _)| ParticipantIndex::new(k))
            .collect()
    }
}

impl std::fmt::Display for Matching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Matching Summary")?;
        writeln!(f, "   Objective Value: {}", self.objective_value)?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "   (No pairs matched)")?;
            return Ok(());
        }

        writeln!(f, "   {:<6} | {:<12} | {:<12}", "Pair", "Left", "Right")?;
        writeln!(f, "   {:-<6}-+-{:-<12}-+-{:-<12}", "", "", "")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            writeln!(
                f,
                "   {:<6} | {:<12} | {:<12}",
                i,
                pair.lower().get(),
                pair.upper().get()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi(i: usize) -> ParticipantIndex {
        ParticipantIndex::new(i)
    }

    fn pr(a: usize, b: usize) -> Pair {
        Pair::new(pi(a), pi(b))
    }

    #[test]
    fn test_pair_normalizes_order() {
        let pair = pr(4, 1);
        assert_eq!(pair.lower().get(), 1);
        assert_eq!(pair.upper().get(), 4);
        assert_eq!(pr(1, 4), pair);
    }

    #[test]
    #[should_panic(expected = "self-pairing")]
    fn test_pair_rejects_self_pairing() {
        let _ = pr(2, 2);
    }

    #[test]
    fn test_pair_partner_of() {
        let pair = pr(0, 3);
        assert_eq!(pair.partner_of(pi(0)), Some(pi(3)));
        assert_eq!(pair.partner_of(pi(3)), Some(pi(0)));
        assert_eq!(pair.partner_of(pi(1)), None);
    }

    #[test]
    fn test_matching_degrees_and_coverage() {
        let matching = Matching::new(4, vec![pr(0, 1), pr(0, 2)], 5.0);
        assert_eq!(matching.num_pairs(), 2);
        assert_eq!(matching.objective_value(), 5.0);
        assert_eq!(matching.degree(pi(0)), 2);
        assert_eq!(matching.degree(pi(1)), 1);
        assert_eq!(matching.degree(pi(3)), 0);
        assert!(matching.is_covered(pi(2)));
        assert!(!matching.is_covered(pi(3)));
        assert_eq!(matching.uncovered(), vec![pi(3)]);
    }

    #[test]
    fn test_empty_matching() {
        let matching = Matching::empty(3);
        assert!(matching.is_empty());
        assert_eq!(matching.objective_value(), 0.0);
        assert_eq!(matching.uncovered(), vec![pi(0), pi(1), pi(2)]);

        let none = Matching::empty(0);
        assert_eq!(none.num_participants(), 0);
        assert!(none.uncovered().is_empty());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_matching_rejects_out_of_range_pair() {
        let _ = Matching::new(2, vec![pr(0, 2)], 1.0);
    }

    #[test]
    fn test_display_lists_pairs() {
        let matching = Matching::new(3, vec![pr(2, 0)], 1.5);
        let rendered = format!("{}", matching);
        assert!(rendered.contains("Objective Value: 1.5"));
        assert!(rendered.contains("0"));
        assert!(rendered.contains("2"));
    }
}
