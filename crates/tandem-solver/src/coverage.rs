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

//! Deciding whether full coverage may be demanded.
//!
//! Asking the optimizer for at least one meeting per participant is only
//! legitimate when such a matching is certain to exist; otherwise the request
//! turns a solvable instance into an `Infeasible` answer even though a
//! perfectly good (non-covering) matching is available. That certainty can be
//! read off the capacity vector alone, so the decision is made up front as a
//! precondition — never by trying the constrained model and falling back.

use tandem_model::capacity::CapacityVector;

/// The two coverage regimes a capacity vector can fall into.
///
/// With every cap at 1, a matching is a set of disjoint pairs: an odd roster
/// always strands exactly one participant, so demanding full coverage would
/// be infeasible for every odd roster.
///
/// With any cap of 2 or more, a fully covering matching always exists. On a
/// complete graph, take any matching that leaves some participant `u`
/// unmatched; if everyone else were below cap too, the edge from `u` to them
/// could simply be added. So pick a participant `v` with cap >= 2 holding two
/// meetings: redirect one of them, say with `w`, into a meeting between `u`
/// and `w`. Then `u` gains coverage, `w` keeps their count, and `v` stays
/// covered by the other meeting. Repeating this covers everyone without ever
/// exceeding a cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityRegime {
    /// Every participant is capped at exactly one meeting.
    AllUnit,
    /// At least one participant may take two or more meetings.
    Expandable,
}

impl CapacityRegime {
    /// Classifies a capacity vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tandem_model::capacity::CapacityVector;
    /// use tandem_solver::coverage::CapacityRegime;
    ///
    /// let unit = CapacityVector::uniform(5, 1);
    /// assert_eq!(CapacityRegime::classify(&unit), CapacityRegime::AllUnit);
    ///
    /// let mixed = CapacityVector::from(vec![1, 2, 1]);
    /// assert_eq!(CapacityRegime::classify(&mixed), CapacityRegime::Expandable);
    /// ```
    pub fn classify(capacities: &CapacityVector) -> Self {
        if capacities.iter().any(|capacity| capacity > 1) {
            Self::Expandable
        } else {
            Self::AllUnit
        }
    }

    /// Returns `true` if a matching covering every participant is certain to
    /// exist, making the coverage floor safe to demand.
    #[inline]
    pub fn guarantees_full_coverage(&self) -> bool {
        matches!(self, Self::Expandable)
    }
}
