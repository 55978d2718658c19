//! The SAM/BAM 4-bit nucleotide alphabet.

use crate::table::CharTables;

table_alphabet! {
    /// Sixteen-letter alphabet in BAM 4-bit encoding order:
    /// `=ACMGRSVTWYHKDBN`, where `=` means "same as reference".
    ///
    /// Ranks equal the BAM sequence codes. `U` is read as `T`; unknown bytes
    /// become `N`.
    pub struct Dna16Sam = CharTables::new(b"=ACMGRSVTWYHKDBN", 15).synonym(b'U', 8);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Alphabet, Semialphabet};
    use crate::nucleotide::NucleotideAlphabet;

    #[test]
    fn ranks_match_bam_codes() {
        for (code, &c) in b"=ACMGRSVTWYHKDBN".iter().enumerate() {
            assert_eq!(Dna16Sam::from_char(c).to_rank(), code as u32);
        }
    }

    #[test]
    fn equals_complements_to_n() {
        let eq = Dna16Sam::from_char(b'=');
        assert_eq!(eq.complement().to_char(), b'N');
        assert_eq!(Dna16Sam::from_char(b'A').complement().to_char(), b'T');
    }

    #[test]
    fn unknown_is_n() {
        assert_eq!(Dna16Sam::from_char(b'x').to_char(), b'N');
        assert_eq!(Dna16Sam::from_char(b'u').to_char(), b'T');
    }
}
