//! Structured error types for the Cyanea ecosystem.

use thiserror::Error;

/// A character that has no precise mapping in the target alphabet.
///
/// Produced by strict character assignment. Lossy assignment never fails.
/// With the `serde` feature it serializes; it does not deserialize, since
/// the alphabet name is borrowed for `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("invalid character {} for alphabet {alphabet}", describe_byte(.character))]
pub struct InvalidCharacter {
    /// The rejected input byte.
    pub character: u8,
    /// Name of the alphabet that rejected it.
    pub alphabet: &'static str,
}

impl InvalidCharacter {
    /// Create a new error for `character` rejected by `alphabet`.
    pub const fn new(character: u8, alphabet: &'static str) -> Self {
        Self {
            character,
            alphabet,
        }
    }
}

fn describe_byte(b: &u8) -> String {
    if b.is_ascii_graphic() {
        format!("'{}' (0x{:02X})", *b as char, b)
    } else {
        format!("0x{:02X}", b)
    }
}

/// Unified error type for all Cyanea operations.
#[derive(Debug, Error)]
pub enum CyaneaError {
    /// A single character rejected by strict assignment.
    #[error(transparent)]
    InvalidCharacter(#[from] InvalidCharacter),

    /// A character rejected while converting a whole sequence.
    #[error("invalid sequence at position {position}: {source}")]
    InvalidSequence {
        /// Zero-based offset of the offending byte.
        position: usize,
        /// The underlying character error.
        #[source]
        source: InvalidCharacter,
    },

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the Cyanea ecosystem.
pub type Result<T> = std::result::Result<T, CyaneaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_character_message_names_alphabet() {
        let err = InvalidCharacter::new(b'N', "Dna4");
        assert_eq!(err.to_string(), "invalid character 'N' (0x4E) for alphabet Dna4");
    }

    #[test]
    fn non_printable_bytes_render_as_hex() {
        let err = InvalidCharacter::new(0x07, "Dna4");
        assert_eq!(err.to_string(), "invalid character 0x07 for alphabet Dna4");
    }

    #[test]
    fn converts_into_cyanea_error() {
        let err: CyaneaError = InvalidCharacter::new(b'#', "Aa27").into();
        assert!(matches!(err, CyaneaError::InvalidCharacter(e) if e.character == b'#'));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn invalid_character_is_serializable() {
        fn assert_serialize<T: serde::Serialize>(_: &T) {}
        assert_serialize(&InvalidCharacter::new(b'N', "Dna4"));
    }

    #[test]
    fn sequence_error_keeps_source() {
        use std::error::Error as _;
        let err = CyaneaError::InvalidSequence {
            position: 3,
            source: InvalidCharacter::new(b'X', "Dna5"),
        };
        assert!(err.to_string().starts_with("invalid sequence at position 3"));
        assert!(err.source().is_some());
    }
}
