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

//! Input validation for matching requests.
//!
//! The matching formulation and its coverage guarantees are only sound on a
//! complete graph with strictly positive, symmetric scores and caps of at
//! least one meeting per participant. This module checks exactly those
//! properties, before any optimization model is built, and reports the first
//! violation with the indices and values involved. Inputs that fall outside
//! the sound regime (zero scores, missing edges encoded as NaN, sparse data)
//! are rejected rather than interpreted.

use crate::{capacity::CapacityVector, index::ParticipantIndex, weights::WeightMatrix};
use tandem_core::num::tolerance::{approx_eq, SYMMETRY_TOLERANCE};

/// The error type for rejected matching inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// The score matrix and the capacity vector disagree on roster size.
    SizeMismatch {
        /// Participants covered by the score matrix.
        num_participants: usize,
        /// Entries in the capacity vector.
        num_capacities: usize,
    },
    /// A score is NaN or infinite.
    NonFiniteWeight {
        row: ParticipantIndex,
        column: ParticipantIndex,
        weight: f64,
    },
    /// A mirrored pair of entries disagrees beyond tolerance.
    AsymmetricWeight {
        row: ParticipantIndex,
        column: ParticipantIndex,
        forward: f64,
        backward: f64,
    },
    /// An off-diagonal score is zero or negative.
    NonPositiveWeight {
        row: ParticipantIndex,
        column: ParticipantIndex,
        weight: f64,
    },
    /// A diagonal entry carries a score; self-pairings are meaningless.
    SelfPairingWeight {
        participant: ParticipantIndex,
        weight: f64,
    },
    /// A participant has a meeting cap of zero.
    ZeroCapacity { participant: ParticipantIndex },
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SizeMismatch {
                num_participants,
                num_capacities,
            } => write!(
                f,
                "Score matrix covers {} participants but the capacity vector has {} entries",
                num_participants, num_capacities
            ),
            Self::NonFiniteWeight {
                row,
                column,
                weight,
            } => write!(
                f,
                "Score for pair ({}, {}) is not finite: {}",
                row.get(),
                column.get(),
                weight
            ),
            Self::AsymmetricWeight {
                row,
                column,
                forward,
                backward,
            } => write!(
                f,
                "Score matrix is asymmetric at ({}, {}): {} forward vs {} backward",
                row.get(),
                column.get(),
                forward,
                backward
            ),
            Self::NonPositiveWeight {
                row,
                column,
                weight,
            } => write!(
                f,
                "Score for pair ({}, {}) must be strictly positive, got {}",
                row.get(),
                column.get(),
                weight
            ),
            Self::SelfPairingWeight {
                participant,
                weight,
            } => write!(
                f,
                "Participant {} has a non-zero self-pairing score: {}",
                participant.get(),
                weight
            ),
            Self::ZeroCapacity { participant } => write!(
                f,
                "Participant {} has a meeting cap of zero; caps must be at least 1",
                participant.get()
            ),
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// Validates a score matrix and capacity vector as a matching instance.
///
/// Checks, in order: matching roster sizes, zero diagonal, and for every
/// unordered pair a finite, symmetric (within [`SYMMETRY_TOLERANCE`]),
/// strictly positive score; finally that every cap is at least 1. Returns the
/// first violation found. Pure check, no side effects.
///
/// # Examples
///
/// ```rust
/// use tandem_model::capacity::CapacityVector;
/// use tandem_model::validate::validate;
/// use tandem_model::weights::WeightMatrix;
/// use tandem_model::index::ParticipantIndex;
///
/// let mut weights = WeightMatrix::new(2);
/// weights.set_pair_weight(ParticipantIndex::new(0), ParticipantIndex::new(1), 1.0);
/// let capacities = CapacityVector::uniform(2, 1);
/// assert!(validate(&weights, &capacities).is_ok());
/// ```
pub fn validate(
    weights: &WeightMatrix,
    capacities: &CapacityVector,
) -> Result<(), InvalidInputError> {
    let n = weights.num_participants();

    if n != capacities.len() {
        return Err(InvalidInputError::SizeMismatch {
            num_participants: n,
            num_capacities: capacities.len(),
        });
    }

    for i in 0..n {
        let participant = ParticipantIndex::new(i);
        let diagonal = weights.weight(participant, participant);
        if diagonal != 0.0 {
            return Err(InvalidInputError::SelfPairingWeight {
                participant,
                weight: diagonal,
            });
        }
    }

    for i in 0..n {
        for j in i + 1..n {
            let row = ParticipantIndex::new(i);
            let column = ParticipantIndex::new(j);
            let forward = weights.weight(row, column);
            let backward = weights.weight(column, row);

            if !forward.is_finite() {
                return Err(InvalidInputError::NonFiniteWeight {
                    row,
                    column,
                    weight: forward,
                });
            }
            if !backward.is_finite() {
                return Err(InvalidInputError::NonFiniteWeight {
                    row: column,
                    column: row,
                    weight: backward,
                });
            }
            if !approx_eq(forward, backward, SYMMETRY_TOLERANCE) {
                return Err(InvalidInputError::AsymmetricWeight {
                    row,
                    column,
                    forward,
                    backward,
                });
            }
            if forward <= 0.0 {
                return Err(InvalidInputError::NonPositiveWeight {
                    row,
                    column,
                    weight: forward,
                });
            }
        }
    }

    for (k, capacity) in capacities.iter().enumerate() {
        if capacity == 0 {
            return Err(InvalidInputError::ZeroCapacity {
                participant: ParticipantIndex::new(k),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi(i: usize) -> ParticipantIndex {
        ParticipantIndex::new(i)
    }

    fn complete_weights(n: usize, weight: f64) -> WeightMatrix {
        let mut weights = WeightMatrix::new(n);
        for i in 0..n {
            for j in i + 1..n {
                weights.set_pair_weight(pi(i), pi(j), weight);
            }
        }
        weights
    }

    #[test]
    fn test_accepts_complete_positive_instance() {
        let weights = complete_weights(4, 1.0);
        let capacities = CapacityVector::uniform(4, 2);
        assert!(validate(&weights, &capacities).is_ok());
    }

    #[test]
    fn test_accepts_empty_roster() {
        let weights = WeightMatrix::new(0);
        let capacities = CapacityVector::from(Vec::new());
        assert!(validate(&weights, &capacities).is_ok());
    }

    #[test]
    fn test_rejects_size_mismatch() {
        let weights = complete_weights(3, 1.0);
        let capacities = CapacityVector::uniform(4, 1);
        match validate(&weights, &capacities) {
            Err(InvalidInputError::SizeMismatch {
                num_participants,
                num_capacities,
            }) => {
                assert_eq!(num_participants, 3);
                assert_eq!(num_capacities, 4);
            }
            other => panic!("expected SizeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_asymmetric_matrix() {
        let weights = WeightMatrix::from_rows(vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 2.0],
            vec![1.0, 2.5, 0.0],
        ])
        .unwrap();
        let capacities = CapacityVector::uniform(3, 1);
        match validate(&weights, &capacities) {
            Err(InvalidInputError::AsymmetricWeight {
                row,
                column,
                forward,
                backward,
            }) => {
                assert_eq!((row.get(), column.get()), (1, 2));
                assert_eq!(forward, 2.0);
                assert_eq!(backward, 2.5);
            }
            other => panic!("expected AsymmetricWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_weight() {
        let mut weights = complete_weights(3, 1.0);
        weights.set_pair_weight(pi(0), pi(2), 0.0);
        let capacities = CapacityVector::uniform(3, 1);
        match validate(&weights, &capacities) {
            Err(InvalidInputError::NonPositiveWeight { row, column, weight }) => {
                assert_eq!((row.get(), column.get()), (0, 2));
                assert_eq!(weight, 0.0);
            }
            other => panic!("expected NonPositiveWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_weight() {
        let mut weights = complete_weights(3, 1.0);
        weights.set_pair_weight(pi(1), pi(2), -0.5);
        let capacities = CapacityVector::uniform(3, 1);
        assert!(matches!(
            validate(&weights, &capacities),
            Err(InvalidInputError::NonPositiveWeight { .. })
        ));
    }

    #[test]
    fn test_rejects_nan_weight() {
        let mut weights = complete_weights(3, 1.0);
        weights.set_pair_weight(pi(0), pi(1), f64::NAN);
        let capacities = CapacityVector::uniform(3, 1);
        assert!(matches!(
            validate(&weights, &capacities),
            Err(InvalidInputError::NonFiniteWeight { .. })
        ));
    }

    #[test]
    fn test_rejects_self_pairing_score() {
        let weights = WeightMatrix::from_rows(vec![vec![0.5, 1.0], vec![1.0, 0.0]]).unwrap();
        let capacities = CapacityVector::uniform(2, 1);
        match validate(&weights, &capacities) {
            Err(InvalidInputError::SelfPairingWeight {
                participant,
                weight,
            }) => {
                assert_eq!(participant.get(), 0);
                assert_eq!(weight, 0.5);
            }
            other => panic!("expected SelfPairingWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let weights = complete_weights(4, 1.0);
        let capacities = CapacityVector::from(vec![1, 2, 0, 3]);
        match validate(&weights, &capacities) {
            Err(InvalidInputError::ZeroCapacity { participant }) => {
                assert_eq!(participant.get(), 2);
            }
            other => panic!("expected ZeroCapacity, got {:?}", other),
        }
    }

    #[test]
    fn test_symmetry_tolerance_allows_tiny_drift() {
        // The two halves differ, but below tolerance.
        let rows = vec![vec![0.0, 1.0], vec![1.0 + 1e-12, 0.0]];
        let weights = WeightMatrix::from_rows(rows).unwrap();
        let capacities = CapacityVector::uniform(2, 1);
        assert!(validate(&weights, &capacities).is_ok());
    }
}
