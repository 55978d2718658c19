//! Conversions between byte strings and symbol slices.
//!
//! These are thin loops over the per-symbol operations, for callers that
//! hold text and want symbols (or the reverse) without a sequence container.

use cyanea_core::{CyaneaError, Result};
use tracing::debug;

use crate::alphabet::{Alphabet, Semialphabet};
use crate::nucleotide::NucleotideAlphabet;

/// Convert every byte of `bytes`, lossily.
///
/// ```
/// use cyanea_alphabet::{seq, Dna4};
///
/// let dna: Vec<Dna4> = seq::parse(b"acgN");
/// assert_eq!(seq::to_string(&dna), "ACGA");
/// ```
pub fn parse<A: Alphabet>(bytes: impl AsRef<[u8]>) -> Vec<A> {
    bytes.as_ref().iter().map(|&c| A::from_char(c)).collect()
}

/// Convert every byte of `bytes`, failing on the first byte that is not
/// valid for `A`.
///
/// The error carries the position and the offending character.
pub fn parse_strict<A: Alphabet>(bytes: impl AsRef<[u8]>) -> Result<Vec<A>> {
    bytes
        .as_ref()
        .iter()
        .enumerate()
        .map(|(position, &c)| {
            A::from_char_strict(c).map_err(|source| {
                debug!(position, character = c, alphabet = A::NAME, "rejected invalid character");
                CyaneaError::InvalidSequence { position, source }
            })
        })
        .collect()
}

/// Canonical characters of `symbols` as a string.
pub fn to_string<A: Alphabet>(symbols: &[A]) -> String {
    symbols.iter().map(|s| s.to_char() as char).collect()
}

/// Canonical characters of `symbols` as bytes.
pub fn to_bytes<A: Alphabet>(symbols: &[A]) -> Vec<u8> {
    symbols.iter().map(|s| s.to_char()).collect()
}

/// Ranks of `symbols`.
pub fn to_ranks<A: Semialphabet>(symbols: &[A]) -> Vec<u32> {
    symbols.iter().map(|s| s.to_rank()).collect()
}

/// Reverse complement of a nucleotide sequence.
pub fn reverse_complement<N: NucleotideAlphabet>(symbols: &[N]) -> Vec<N> {
    symbols.iter().rev().map(|n| n.complement()).collect()
}
