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

/// Per-participant caps on how many meetings each person may be assigned.
///
/// Index `k` holds the maximum number of matched pairs participant `k` may
/// appear in. Caps must be at least 1; that is enforced by
/// [`validate`](crate::validate::validate), not by this container.
///
/// # Examples
///
/// ```rust
/// use tandem_model::capacity::CapacityVector;
/// use tandem_model::index::ParticipantIndex;
///
/// let capacities = CapacityVector::from(vec![1, 2, 1]);
/// assert_eq!(capacities.capacity(ParticipantIndex::new(1)), 2);
/// assert_eq!(capacities.max_capacity(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityVector {
    capacities: Vec<u32>,
}

impl CapacityVector {
    /// Creates a vector giving every one of `num_participants` the same cap.
    pub fn uniform(num_participants: usize, capacity: u32) -> Self {
        Self {
            capacities: vec![capacity; num_participants],
        }
    }

    /// Returns the number of participants.
    #[inline]
    pub fn len(&self) -> usize {
        self.capacities.len()
    }

    /// Returns `true` if the roster is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacities.is_empty()
    }

    /// Returns the meeting cap for the given participant.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `participant` is out of bounds.
    #[inline]
    pub fn capacity(&self, participant: ParticipantIndex) -> u32 {
        debug_assert!(
            participant.get() < self.len(),
            "called `CapacityVector::capacity` with participant index out of bounds: the len is {} but the index is {}",
            self.len(),
            participant.get()
        );

        self.capacities[participant.get()]
    }

    /// Returns the largest cap in the roster, or `None` for an empty roster.
    #[inline]
    pub fn max_capacity(&self) -> Option<u32> {
        self.capacities.iter().copied().max()
    }

    /// Iterates over all caps in participant order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.capacities.iter().copied()
    }

    /// Returns the caps as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.capacities
    }
}

impl From<Vec<u32>> for CapacityVector {
    #[inline]
    fn from(capacities: Vec<u32>) -> Self {
        Self { capacities }
    }
}

impl From<&[u32]> for CapacityVector {
    #[inline]
    fn from(capacities: &[u32]) -> Self {
        Self {
            capacities: capacities.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi(i: usize) -> ParticipantIndex {
        ParticipantIndex::new(i)
    }

    #[test]
    fn test_uniform_and_accessors() {
        let capacities = CapacityVector::uniform(4, 2);
        assert_eq!(capacities.len(), 4);
        assert!(!capacities.is_empty());
        assert_eq!(capacities.capacity(pi(3)), 2);
        assert_eq!(capacities.max_capacity(), Some(2));
    }

    #[test]
    fn test_from_vec_preserves_order() {
        let capacities = CapacityVector::from(vec![1, 3, 2]);
        assert_eq!(capacities.capacity(pi(0)), 1);
        assert_eq!(capacities.capacity(pi(1)), 3);
        assert_eq!(capacities.capacity(pi(2)), 2);
        assert_eq!(capacities.as_slice(), &[1, 3, 2]);
    }

    #[test]
    fn test_empty_roster() {
        let capacities = CapacityVector::from(Vec::new());
        assert!(capacities.is_empty());
        assert_eq!(capacities.max_capacity(), None);
        assert_eq!(capacities.iter().count(), 0);
    }
}
