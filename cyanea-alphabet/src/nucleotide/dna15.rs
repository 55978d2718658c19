//! The full IUPAC nucleotide alphabets.

use crate::table::CharTables;

table_alphabet! {
    /// Fifteen-letter DNA alphabet covering every IUPAC code, in alphabetical
    /// order: `ABCDGHKMNRSTVWY`.
    ///
    /// `U` is read as `T`; unknown bytes become `N`.
    pub struct Dna15 = CharTables::new(b"ABCDGHKMNRSTVWY", 8).synonym(b'U', 11);
}

table_alphabet! {
    /// Fifteen-letter RNA alphabet, rank-identical to [`Dna15`] with `U` in
    /// place of `T`.
    pub struct Rna15 = CharTables::new(b"ABCDGHKMNRSUVWY", 8).synonym(b'T', 11);
}

/// Set of unambiguous bases (bit 0 = A, 1 = C, 2 = G, 3 = T) for each
/// [`Dna15`] rank.
pub(crate) const DNA15_BASES: [u8; 15] = {
    let mut masks = [0u8; 15];
    let mut r = 0;
    while r < 15 {
        masks[r] = match Dna15::TABLES.char_of(r as u8) {
            b'A' => 0b0001,
            b'C' => 0b0010,
            b'G' => 0b0100,
            b'T' => 0b1000,
            b'R' => 0b0101,
            b'Y' => 0b1010,
            b'S' => 0b0110,
            b'W' => 0b1001,
            b'K' => 0b1100,
            b'M' => 0b0011,
            b'B' => 0b1110,
            b'D' => 0b1101,
            b'H' => 0b1011,
            b'V' => 0b0111,
            _ => 0b1111,
        };
        r += 1;
    }
    masks
};

impl Dna15 {
    /// Whether this symbol stands for more than one base.
    pub const fn is_ambiguous(self) -> bool {
        DNA15_BASES[self.0 as usize].count_ones() > 1
    }
}

impl Rna15 {
    /// Whether this symbol stands for more than one base.
    pub const fn is_ambiguous(self) -> bool {
        DNA15_BASES[self.0 as usize].count_ones() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Alphabet, Semialphabet};
    use crate::nucleotide::NucleotideAlphabet;

    #[test]
    fn alphabetical_ranks() {
        assert_eq!(Dna15::SIZE, 15);
        assert_eq!(Dna15::from_char(b'A').to_rank(), 0);
        assert_eq!(Dna15::from_char(b'N').to_rank(), 8);
        assert_eq!(Dna15::from_char(b'T').to_rank(), 11);
        assert_eq!(Dna15::from_char(b'Y').to_rank(), 14);
    }

    #[test]
    fn unknown_is_n() {
        assert_eq!(Dna15::from_char(b'X'), Dna15::from_char(b'N'));
        assert_eq!(Dna15::from_char(b'='), Dna15::from_char(b'N'));
        assert!(!Dna15::char_is_valid(b'X'));
    }

    #[test]
    fn complement_of_ambiguity_codes() {
        let pairs = [(b'R', b'Y'), (b'K', b'M'), (b'B', b'V'), (b'D', b'H'), (b'S', b'S'), (b'W', b'W'), (b'N', b'N')];
        for (a, b) in pairs {
            assert_eq!(Dna15::from_char(a).complement().to_char(), b);
        }
        assert_eq!(Rna15::from_char(b'A').complement().to_char(), b'U');
    }

    #[test]
    fn base_masks() {
        assert_eq!(DNA15_BASES[Dna15::from_char(b'R').rank() as usize], 0b0101);
        assert_eq!(DNA15_BASES[Dna15::from_char(b'N').rank() as usize], 0b1111);
        assert!(Dna15::from_char(b'N').is_ambiguous());
        assert!(!Dna15::from_char(b'G').is_ambiguous());
        assert!(Rna15::from_char(b'y').is_ambiguous());
    }
}
