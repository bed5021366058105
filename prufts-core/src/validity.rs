//! Occurrence-count validation of sequences.
//!
//! A sequence claiming to serialize an `n`-leaf
//! coalescent tree must have length `2n - 3`, mention
//! only internal labels, name the root `2n - 1` exactly
//! once, and name every other internal label exactly
//! twice.  The counts fall out of degree accounting:
//! decoding starts every node at degree one and each
//! appearance adds one, so a degree-3 internal node needs
//! two appearances and the degree-2 root needs one.

use thiserror::Error;

use crate::newtypes::NodeLabel;
use crate::prufer::decode;
use crate::prufer::encode;
use crate::prufer::PruferSequence;

/// Error type for sequences that cannot serialize a
/// coalescent tree.
#[derive(Error, Debug, PartialEq)]
pub enum SequenceError {
    /// Fewer than two leaves.
    #[error("a coalescent tree needs at least 2 leaves, got {found}")]
    TooFewLeaves {
        /// The claimed leaf count
        found: u32,
    },
    /// The root label `2n - 1` does not fit the label space.
    #[error("no room for internal labels above {found} leaves")]
    TooManyLeaves {
        /// The claimed leaf count
        found: u32,
    },
    /// Length other than `2n - 3`.
    #[error("length {found} does not match the {expected} expected for {leaves} leaves")]
    LengthMismatch {
        /// The claimed leaf count
        leaves: u32,
        /// `2n - 3`
        expected: usize,
        /// The actual length
        found: usize,
    },
    /// `2n - 3` is odd for every `n`.
    #[error("length {found} is even; no leaf count yields it")]
    EvenLength {
        /// The actual length
        found: usize,
    },
    /// Length implies a leaf count outside the label space.
    #[error("length {found} implies more leaves than the label space holds")]
    TooLong {
        /// The actual length
        found: usize,
    },
    /// A symbol outside the internal-label range, leaf
    /// labels included.
    #[error("symbol {found} outside the internal range {low}..={high}")]
    LabelOutOfRange {
        /// The offending symbol
        found: NodeLabel,
        /// First internal label, `n + 1`
        low: NodeLabel,
        /// The root label, `2n - 1`
        high: NodeLabel,
    },
    /// The root must appear exactly once.
    #[error("root {root} appears {found} times instead of once")]
    RootOccurrence {
        /// The root label
        root: NodeLabel,
        /// How often it appeared
        found: usize,
    },
    /// Every non-root internal label must appear exactly
    /// twice; zero occurrences is as invalid as three.
    #[error("internal label {label} appears {found} times instead of twice")]
    InternalOccurrence {
        /// The offending label
        label: NodeLabel,
        /// How often it appeared
        found: usize,
    },
    /// The pending-leaf pool drained mid-reconstruction.
    #[error("ran out of pending leaves while decoding")]
    EmptyLeafPool,
}

/// Alias for a [`Result`](std::result::Result) whose error
/// type is [`SequenceError`].
pub type SequenceResult<T> = std::result::Result<T, SequenceError>;

/// The leaf count a sequence length admits.
///
/// Inverts `L = 2n - 3`.  Used by [`decode`] to pick the
/// leaf/internal split before validating.
///
/// # Examples
///
/// ```
/// assert_eq!(prufts_core::implied_leaf_count(3).unwrap(), 3);
/// assert!(prufts_core::implied_leaf_count(4).is_err());
/// ```
pub fn implied_leaf_count(len: usize) -> SequenceResult<u32> {
    if len % 2 == 0 {
        return Err(SequenceError::EvenLength { found: len });
    }
    u32::try_from(len / 2 + 2).map_err(|_| SequenceError::TooLong { found: len })
}

/// Check that `sequence` can serialize a coalescent tree
/// over `leaves` leaves.
///
/// The checks run in order: length, label range, root
/// occurrence, internal occurrences.  The first violation
/// is returned.
///
/// # Examples
///
/// ```
/// use prufts_core::PruferSequence;
///
/// let good = PruferSequence::from(vec![4, 4, 5]);
/// assert!(prufts_core::validate(&good, 3).is_ok());
/// // the root, 5, must appear exactly once
/// let bad = PruferSequence::from(vec![4, 5, 5]);
/// assert!(prufts_core::validate(&bad, 3).is_err());
/// ```
pub fn validate(sequence: &PruferSequence, leaves: u32) -> SequenceResult<()> {
    if leaves < 2 {
        return Err(SequenceError::TooFewLeaves { found: leaves });
    }
    let root = u32::try_from(2 * u64::from(leaves) - 1)
        .map_err(|_| SequenceError::TooManyLeaves { found: leaves })?;
    let expected = (2 * u64::from(leaves) - 3) as usize;
    if sequence.len() != expected {
        return Err(SequenceError::LengthMismatch {
            leaves,
            expected,
            found: sequence.len(),
        });
    }
    let low = NodeLabel::from(leaves + 1);
    let high = NodeLabel::from(root);
    // one occurrence slot per internal label n+1..=2n-1
    let mut counts = vec![0usize; leaves as usize - 1];
    for symbol in sequence.iter() {
        if *symbol < low || *symbol > high {
            return Err(SequenceError::LabelOutOfRange {
                found: *symbol,
                low,
                high,
            });
        }
        counts[usize::from(*symbol) - leaves as usize - 1] += 1;
    }
    let root_count = counts[leaves as usize - 2];
    if root_count != 1 {
        return Err(SequenceError::RootOccurrence {
            root: high,
            found: root_count,
        });
    }
    for (offset, count) in counts.iter().take(leaves as usize - 2).enumerate() {
        if *count != 2 {
            return Err(SequenceError::InternalOccurrence {
                label: NodeLabel::from(leaves + 1 + offset as u32),
                found: *count,
            });
        }
    }
    Ok(())
}

/// Decode, re-encode, and sum the symbol-wise differences.
///
/// A cheap equality oracle: the result is 0 for every
/// sequence passing [`validate`].
///
/// # Errors
///
/// Propagates failures from either codec direction.
///
/// # Examples
///
/// ```
/// let sequence = prufts_core::PruferSequence::from(vec![4, 4, 5]);
/// assert_eq!(prufts_core::roundtrip_error(&sequence).unwrap(), 0);
/// ```
pub fn roundtrip_error(sequence: &PruferSequence) -> Result<i64, crate::Error> {
    let topology = decode(sequence)?;
    let back = encode(&topology)?;
    Ok(sequence
        .iter()
        .zip(back.iter())
        .map(|(a, b)| i64::from(u32::from(*b)) - i64::from(u32::from(*a)))
        .sum())
}

#[cfg(test)]
mod test_validity {
    use super::*;

    #[test]
    fn test_validate_three_leaf_scenario() {
        assert!(validate(&PruferSequence::from(vec![4, 4, 5]), 3).is_ok());
    }

    #[test]
    fn test_validate_rejects_double_root() {
        assert_eq!(
            validate(&PruferSequence::from(vec![4, 5, 5]), 3).unwrap_err(),
            SequenceError::RootOccurrence {
                root: NodeLabel::from(5),
                found: 2,
            }
        );
    }

    #[test]
    fn test_validate_rejects_missing_root() {
        assert_eq!(
            validate(&PruferSequence::from(vec![4, 4, 4]), 3).unwrap_err(),
            SequenceError::RootOccurrence {
                root: NodeLabel::from(5),
                found: 0,
            }
        );
    }

    #[test]
    fn test_validate_rejects_leaf_label() {
        assert_eq!(
            validate(&PruferSequence::from(vec![1, 4, 5]), 3).unwrap_err(),
            SequenceError::LabelOutOfRange {
                found: NodeLabel::from(1),
                low: NodeLabel::from(4),
                high: NodeLabel::from(5),
            }
        );
    }

    #[test]
    fn test_validate_rejects_symbol_above_root() {
        // 6 is past the root, 5, for three leaves
        assert_eq!(
            validate(&PruferSequence::from(vec![4, 4, 6]), 3).unwrap_err(),
            SequenceError::LabelOutOfRange {
                found: NodeLabel::from(6),
                low: NodeLabel::from(4),
                high: NodeLabel::from(5),
            }
        );
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        assert_eq!(
            validate(&PruferSequence::from(vec![4, 4, 5]), 4).unwrap_err(),
            SequenceError::LengthMismatch {
                leaves: 4,
                expected: 5,
                found: 3,
            }
        );
    }

    #[test]
    fn test_validate_rejects_small_samples() {
        for leaves in [0, 1] {
            assert_eq!(
                validate(&PruferSequence::default(), leaves).unwrap_err(),
                SequenceError::TooFewLeaves { found: leaves }
            );
        }
    }

    #[test]
    fn test_validate_rejects_huge_samples() {
        // 2n - 1 overflows u32 before the length is even looked at
        assert_eq!(
            validate(&PruferSequence::default(), u32::MAX).unwrap_err(),
            SequenceError::TooManyLeaves { found: u32::MAX }
        );
    }

    #[test]
    fn test_validate_rejects_internal_miscounts() {
        // internal 5 appears three times, so 6 cannot appear twice
        assert_eq!(
            validate(&PruferSequence::from(vec![5, 5, 5, 6, 7]), 4).unwrap_err(),
            SequenceError::InternalOccurrence {
                label: NodeLabel::from(5),
                found: 3,
            }
        );
        // and once is one short
        assert_eq!(
            validate(&PruferSequence::from(vec![5, 6, 6, 6, 7]), 4).unwrap_err(),
            SequenceError::InternalOccurrence {
                label: NodeLabel::from(5),
                found: 1,
            }
        );
    }

    #[test]
    fn test_validate_rejects_absent_internal_label() {
        // every symbol is in range and the root appears once,
        // but internal 6 is never mentioned at all
        assert_eq!(
            validate(&PruferSequence::from(vec![7, 7, 8, 8, 8, 8, 9]), 5).unwrap_err(),
            SequenceError::InternalOccurrence {
                label: NodeLabel::from(6),
                found: 0,
            }
        );
    }

    #[test]
    fn test_validate_two_leaves() {
        assert!(validate(&PruferSequence::from(vec![3]), 2).is_ok());
        assert!(validate(&PruferSequence::from(vec![2]), 2).is_err());
        assert_eq!(
            validate(&PruferSequence::default(), 2).unwrap_err(),
            SequenceError::LengthMismatch {
                leaves: 2,
                expected: 1,
                found: 0,
            }
        );
    }

    #[test]
    fn test_implied_leaf_count() {
        assert_eq!(implied_leaf_count(1).unwrap(), 2);
        assert_eq!(implied_leaf_count(3).unwrap(), 3);
        assert_eq!(implied_leaf_count(5).unwrap(), 4);
        assert_eq!(
            implied_leaf_count(0).unwrap_err(),
            SequenceError::EvenLength { found: 0 }
        );
        assert_eq!(
            implied_leaf_count(4).unwrap_err(),
            SequenceError::EvenLength { found: 4 }
        );
        assert_eq!(
            implied_leaf_count(usize::MAX).unwrap_err(),
            SequenceError::TooLong { found: usize::MAX }
        );
    }

    #[test]
    fn test_roundtrip_error_is_zero_for_valid_sequences() {
        for raw in [vec![4, 4, 5], vec![5, 5, 6, 6, 7], vec![3]] {
            let sequence = PruferSequence::from(raw);
            assert_eq!(roundtrip_error(&sequence).unwrap(), 0);
        }
    }

    #[test]
    fn test_roundtrip_error_propagates_sequence_errors() {
        let bad = PruferSequence::from(vec![4, 5, 5]);
        assert!(matches!(
            roundtrip_error(&bad),
            Err(crate::Error::SequenceError { .. })
        ));
    }
}
