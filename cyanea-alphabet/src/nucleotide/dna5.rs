//! The five-letter nucleotide alphabets.

use crate::table::CharTables;

const AMBIGUOUS: &[u8] = b"RYSWKMBDHV";

/// `symbols` with every ambiguity code collapsed onto `n`, and `synonym`
/// read exactly as `synonym_rank`.
const fn five_letter(symbols: &[u8], n: u8, synonym: u8, synonym_rank: u8) -> CharTables {
    let mut tables = CharTables::new(symbols, n).synonym(synonym, synonym_rank);
    let mut i = 0;
    while i < AMBIGUOUS.len() {
        tables = tables.alias(AMBIGUOUS[i], n);
        i += 1;
    }
    tables
}

table_alphabet! {
    /// Five-letter DNA alphabet: `A`, `C`, `G`, `N`, `T` (in rank order).
    ///
    /// `U` is read as `T`. Ambiguity codes and unknown bytes become `N`.
    pub struct Dna5 = five_letter(b"ACGNT", 3, b'U', 4);
}

impl Dna5 {
    pub const A: Self = Self(0);
    pub const C: Self = Self(1);
    pub const G: Self = Self(2);
    pub const N: Self = Self(3);
    pub const T: Self = Self(4);
}

table_alphabet! {
    /// Five-letter RNA alphabet: `A`, `C`, `G`, `N`, `U` (in rank order).
    ///
    /// `T` is read as `U`. Ambiguity codes and unknown bytes become `N`.
    pub struct Rna5 = five_letter(b"ACGNU", 3, b'T', 4);
}

impl Rna5 {
    pub const A: Self = Self(0);
    pub const C: Self = Self(1);
    pub const G: Self = Self(2);
    pub const N: Self = Self(3);
    pub const U: Self = Self(4);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Alphabet, Semialphabet};
    use crate::nucleotide::NucleotideAlphabet;

    #[test]
    fn n_sits_between_g_and_t() {
        assert_eq!(Dna5::SIZE, 5);
        assert_eq!(Dna5::N.to_rank(), 3);
        assert_eq!(Dna5::T.to_char(), b'T');
    }

    #[test]
    fn ambiguity_and_unknown_become_n() {
        for &c in b"RYSWKMBDHVrysw#0 " {
            assert_eq!(Dna5::from_char(c), Dna5::N, "{}", c as char);
            assert!(!Dna5::char_is_valid(c));
        }
        assert!(Dna5::char_is_valid(b'N'));
        assert!(Dna5::char_is_valid(b'n'));
    }

    #[test]
    fn complement_keeps_n() {
        assert_eq!(Dna5::N.complement(), Dna5::N);
        assert_eq!(Dna5::A.complement(), Dna5::T);
        assert_eq!(Rna5::A.complement(), Rna5::U);
    }

    #[test]
    fn synonyms() {
        assert_eq!(Dna5::from_char(b'u'), Dna5::T);
        assert_eq!(Rna5::from_char(b't'), Rna5::U);
    }
}
