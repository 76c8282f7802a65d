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

//! Post-hoc coverage accounting for a computed matching.
//!
//! After solving, hosts typically want to report who got their full share of
//! meetings. The best any matching can do is book every participant up to
//! their cap, except that a single participant may end up exactly one meeting
//! short when the total capacity across the roster is odd. `CoverageReport`
//! checks a matching against that bar and lists everyone who fell below it.

use crate::{capacity::CapacityVector, index::ParticipantIndex, matching::Matching};

/// How a matching's meeting counts compare against the roster's caps.
///
/// # Examples
///
/// ```rust
/// use tandem_model::capacity::CapacityVector;
/// use tandem_model::coverage::CoverageReport;
/// use tandem_model::index::ParticipantIndex;
/// use tandem_model::matching::{Matching, Pair};
///
/// let pair = Pair::new(ParticipantIndex::new(0), ParticipantIndex::new(1));
/// let matching = Matching::new(3, vec![pair], 1.0);
/// let capacities = CapacityVector::uniform(3, 1);
///
/// let report = CoverageReport::for_matching(&matching, &capacities);
/// // Participant 2 is the single one left out, which is as good as it gets.
/// assert!(report.target_met());
/// assert_eq!(report.off_target(), &[ParticipantIndex::new(2)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageReport {
    target_met: bool,
    off_target: Vec<ParticipantIndex>,
}

impl CoverageReport {
    /// Compares a matching's per-participant meeting counts against the caps.
    ///
    /// The target is met when no participant exceeds their cap, at most one
    /// participant is off their cap, and that one participant (if any) is
    /// exactly one meeting short.
    ///
    /// # Panics
    ///
    /// Panics if the matching and the capacity vector disagree on roster
    /// size.
    pub fn for_matching(matching: &Matching, capacities: &CapacityVector) -> Self {
        assert_eq!(
            matching.num_participants(),
            capacities.len(),
            "called `CoverageReport::for_matching` with inconsistent roster sizes: matching has {}, capacities have {}",
            matching.num_participants(),
            capacities.len()
        );

        let mut off_target = Vec::new();
        let mut target_met = true;

        for k in 0..capacities.len() {
            let participant = ParticipantIndex::new(k);
            let booked = matching.degree(participant);
            let capacity = capacities.capacity(participant);

            if booked != capacity {
                off_target.push(participant);
            }
            if booked > capacity {
                target_met = false;
            }
        }

        if off_target.len() > 1 {
            target_met = false;
        }
        if let [single] = off_target.as_slice() {
            if matching.degree(*single) + 1 != capacities.capacity(*single) {
                target_met = false;
            }
        }

        Self {
            target_met,
            off_target,
        }
    }

    /// Returns `true` if the matching books everyone as fully as any matching
    /// can.
    #[inline]
    pub fn target_met(&self) -> bool {
        self.target_met
    }

    /// Returns the participants booked to something other than their cap, in
    /// roster order.
    #[inline]
    pub fn off_target(&self) -> &[ParticipantIndex] {
        &self.off_target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Pair;

    fn pi(i: usize) -> ParticipantIndex {
        ParticipantIndex::new(i)
    }

    fn pr(a: usize, b: usize) -> Pair {
        Pair::new(pi(a), pi(b))
    }

    fn report(
        num_participants: usize,
        pairs: Vec<Pair>,
        capacities: Vec<u32>,
    ) -> CoverageReport {
        let matching = Matching::new(num_participants, pairs, 0.0);
        CoverageReport::for_matching(&matching, &CapacityVector::from(capacities))
    }

    #[test]
    fn test_one_edge_over_three_unit_caps_meets_target() {
        let report = report(3, vec![pr(0, 1)], vec![1, 1, 1]);
        assert!(report.target_met());
        assert_eq!(report.off_target(), &[pi(2)]);
    }

    #[test]
    fn test_everyone_at_cap_meets_target() {
        let report = report(3, vec![pr(0, 1), pr(1, 2)], vec![1, 2, 1]);
        assert!(report.target_met());
        assert!(report.off_target().is_empty());
    }

    #[test]
    fn test_over_cap_fails_target() {
        let report = report(3, vec![pr(0, 1), pr(1, 2)], vec![1, 1, 1]);
        assert!(!report.target_met());
        assert_eq!(report.off_target(), &[pi(1)]);
    }

    #[test]
    fn test_two_participants_short_fails_target() {
        let report = report(3, vec![pr(0, 1)], vec![1, 2, 1]);
        assert!(!report.target_met());
        assert_eq!(report.off_target(), &[pi(1), pi(2)]);
    }

    #[test]
    fn test_single_participant_more_than_one_short_fails_target() {
        let report = report(3, vec![pr(0, 1), pr(0, 2), pr(1, 2)], vec![2, 2, 4]);
        assert!(!report.target_met());
        assert_eq!(report.off_target(), &[pi(2)]);
    }

    #[test]
    #[should_panic(expected = "inconsistent roster sizes")]
    fn test_mismatched_roster_sizes_panic() {
        let matching = Matching::empty(2);
        let _ = CoverageReport::for_matching(&matching, &CapacityVector::uniform(3, 1));
    }
}
