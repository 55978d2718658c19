//! CIGAR operations as an alphabet.
//!
//! Ranks follow the BAM operation codes (`M`=0 … `X`=8), with `B` (back)
//! appended as 9 the way htslib numbers it.

use crate::table::CharTables;

table_alphabet! {
    /// CIGAR operation: `M`, `I`, `D`, `N`, `S`, `H`, `P`, `=`, `X`, `B`.
    ///
    /// Unknown bytes become `M`.
    pub struct CigarOp = CharTables::new(b"MIDNSHP=XB", 0);
}

impl CigarOp {
    pub const MATCH: Self = Self(0);
    pub const INSERTION: Self = Self(1);
    pub const DELETION: Self = Self(2);
    pub const SKIP: Self = Self(3);
    pub const SOFT_CLIP: Self = Self(4);
    pub const HARD_CLIP: Self = Self(5);
    pub const PADDING: Self = Self(6);
    pub const SEQUENCE_MATCH: Self = Self(7);
    pub const SEQUENCE_MISMATCH: Self = Self(8);
    pub const BACK: Self = Self(9);

    /// Whether the operation consumes query (read) bases: `M I S = X`.
    pub const fn consumes_query(self) -> bool {
        matches!(self.0, 0 | 1 | 4 | 7 | 8)
    }

    /// Whether the operation consumes reference bases: `M D N = X`.
    pub const fn consumes_reference(self) -> bool {
        matches!(self.0, 0 | 2 | 3 | 7 | 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Alphabet, Semialphabet};
    use crate::test_util::{check_alphabet_laws, check_case_insensitive};

    #[test]
    fn bam_operation_codes() {
        for (code, &c) in b"MIDNSHP=XB".iter().enumerate() {
            assert_eq!(CigarOp::from_char(c).to_rank(), code as u32);
        }
        assert_eq!(CigarOp::BACK.to_char(), b'B');
        check_alphabet_laws::<CigarOp>();
        check_case_insensitive::<CigarOp>();
    }

    #[test]
    fn consumption() {
        let ops = CigarOp::lit(b"MIDNSHP=XB");
        let query: Vec<bool> = ops.iter().map(|op| op.consumes_query()).collect();
        let reference: Vec<bool> = ops.iter().map(|op| op.consumes_reference()).collect();
        assert_eq!(query, [true, true, false, false, true, false, false, true, true, false]);
        assert_eq!(reference, [true, false, true, true, false, false, false, true, true, false]);
    }

    #[test]
    fn unknown_is_match() {
        assert_eq!(CigarOp::from_char(b'?'), CigarOp::MATCH);
        assert!(CigarOp::from_char_strict(b'?').is_err());
    }
}
