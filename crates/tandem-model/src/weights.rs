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

#[inline(always)]
fn flatten_index(
    num_participants: usize,
    row: ParticipantIndex,
    column: ParticipantIndex,
) -> usize {
    row.get() * num_participants + column.get()
}

/// The symmetric matrix of pairing scores over a participant roster.
///
/// Entry `(i, j)` holds the affinity score awarded when participants `i` and
/// `j` are matched with each other. The matrix is stored as a single
/// row-major vector; the diagonal is meaningless (a participant cannot meet
/// themselves) and stays at `0.0`.
///
/// `WeightMatrix` itself only guarantees squareness. Symmetry, strict
/// positivity, and a zero diagonal are checked by
/// [`validate`](crate::validate::validate) before any solving happens, so
/// matrices assembled from untrusted row data can be inspected rather than
/// trusted.
///
/// # Examples
///
/// ```rust
/// use tandem_model::index::ParticipantIndex;
/// use tandem_model::weights::WeightMatrix;
///
/// let mut weights = WeightMatrix::new(3);
/// weights.set_pair_weight(ParticipantIndex::new(0), ParticipantIndex::new(1), 2.5);
/// assert_eq!(
///     weights.weight(ParticipantIndex::new(1), ParticipantIndex::new(0)),
///     2.5
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightMatrix {
    num_participants: usize,
    weights: Vec<f64>, // len = num_participants * num_participants
}

impl WeightMatrix {
    /// Creates an all-zero score matrix for `num_participants` participants.
    ///
    /// An all-zero matrix is intentionally invalid input for the solver
    /// (off-diagonal scores must be strictly positive); callers are expected
    /// to fill in every pair via [`set_pair_weight`](Self::set_pair_weight).
    pub fn new(num_participants: usize) -> Self {
        Self {
            num_participants,
            weights: vec![0.0; num_participants * num_participants],
        }
    }

    /// Builds a matrix from row vectors, e.g. parsed or computed elsewhere.
    ///
    /// Every row must have exactly `rows.len()` entries. Returns the offending
    /// row length otherwise; all semantic checks (symmetry, positivity) are
    /// left to [`validate`](crate::validate::validate).
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RaggedRowsError> {
        let num_participants = rows.len();
        let mut weights = Vec::with_capacity(num_participants * num_participants);

        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != num_participants {
                return Err(RaggedRowsError {
                    row: ParticipantIndex::new(row_index),
                    row_len: row.len(),
                    expected_len: num_participants,
                });
            }
            weights.extend(row);
        }

        Ok(Self {
            num_participants,
            weights,
        })
    }

    /// Returns the number of participants this matrix covers.
    #[inline]
    pub fn num_participants(&self) -> usize {
        self.num_participants
    }

    /// Returns the number of unordered participant pairs.
    #[inline]
    pub fn num_pairs(&self) -> usize {
        self.num_participants * self.num_participants.saturating_sub(1) / 2
    }

    /// Returns the score for the given ordered entry.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if either index is out of bounds.
    #[inline]
    pub fn weight(&self, row: ParticipantIndex, column: ParticipantIndex) -> f64 {
        debug_assert!(
            row.get() < self.num_participants,
            "called `WeightMatrix::weight` with row index out of bounds: the len is {} but the index is {}",
            self.num_participants,
            row.get()
        );
        debug_assert!(
            column.get() < self.num_participants,
            "called `WeightMatrix::weight` with column index out of bounds: the len is {} but the index is {}",
            self.num_participants,
            column.get()
        );

        self.weights[flatten_index(self.num_participants, row, column)]
    }

    /// Sets the score for the unordered pair `{a, b}`, mirroring it into both
    /// matrix halves so the matrix stays symmetric by construction.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` (self-pairings carry no score) or if either index is
    /// out of bounds.
    pub fn set_pair_weight(&mut self, a: ParticipantIndex, b: ParticipantIndex, weight: f64) {
        assert!(
            a != b,
            "called `WeightMatrix::set_pair_weight` with a self-pairing: participant {}",
            a.get()
        );
        assert!(
            a.get() < self.num_participants && b.get() < self.num_participants,
            "called `WeightMatrix::set_pair_weight` with participant index out of bounds: the len is {} but the indices are {} and {}",
            self.num_participants,
            a.get(),
            b.get()
        );

        self.weights[flatten_index(self.num_participants, a, b)] = weight;
        self.weights[flatten_index(self.num_participants, b, a)] = weight;
    }

    /// Iterates over all unordered pairs `{i, j}`, `i < j`, with their scores
    /// as read from the upper triangle.
    pub fn iter_pairs(
        &self,
    ) -> impl Iterator<Item = (ParticipantIndex, ParticipantIndex, f64)> + '_ {
        let n = self.num_participants;
        (0..n).flat_map(move |i| {
            (i + 1..n).map(move |j| {
                let a = ParticipantIndex::new(i);
                let b = ParticipantIndex::new(j);
                (a, b, self.weight(a, b))
            })
        })
    }
}

/// A row of differing length was passed to [`WeightMatrix::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaggedRowsError {
    /// The first row whose length does not match the row count.
    pub row: ParticipantIndex,
    /// That row's actual length.
    pub row_len: usize,
    /// The expected length (the number of rows).
    pub expected_len: usize,
}

impl std::fmt::Display for RaggedRowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Row {} has {} entries but a square matrix over {} participants needs {}",
            self.row.get(),
            self.row_len,
            self.expected_len,
            self.expected_len
        )
    }
}

impl std::error::Error for RaggedRowsError {}
