//! The full IUPAC amino acid alphabet.

use crate::table::CharTables;

table_alphabet! {
    /// Twenty-seven letter amino acid alphabet: `A`–`Z` in alphabetical order
    /// followed by the terminator `*`.
    ///
    /// Besides the 20 canonical amino acids this covers selenocysteine (`U`),
    /// pyrrolysine (`O`), the ambiguity codes `B` (D/N), `Z` (E/Q), `J` (I/L)
    /// and `X`. Unknown bytes become `X`.
    pub struct Aa27 = CharTables::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ*", 23);
}

impl Aa27 {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(6);
    pub const H: Self = Self(7);
    pub const I: Self = Self(8);
    pub const J: Self = Self(9);
    pub const K: Self = Self(10);
    pub const L: Self = Self(11);
    pub const M: Self = Self(12);
    pub const N: Self = Self(13);
    pub const O: Self = Self(14);
    pub const P: Self = Self(15);
    pub const Q: Self = Self(16);
    pub const R: Self = Self(17);
    pub const S: Self = Self(18);
    pub const T: Self = Self(19);
    pub const U: Self = Self(20);
    pub const V: Self = Self(21);
    pub const W: Self = Self(22);
    pub const X: Self = Self(23);
    pub const Y: Self = Self(24);
    pub const Z: Self = Self(25);
    /// Stop codon marker `*`.
    pub const TERMINATOR: Self = Self(26);

    /// Whether this is the terminator `*`.
    pub const fn is_terminator(self) -> bool {
        self.0 == Self::TERMINATOR.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Alphabet, Semialphabet};

    #[test]
    fn letters_then_terminator() {
        assert_eq!(Aa27::SIZE, 27);
        assert_eq!(Aa27::from_char(b'L'), Aa27::L);
        assert_eq!(Aa27::from_char(b'*').to_rank(), 26);
        assert!(Aa27::TERMINATOR.is_terminator());
        assert!(!Aa27::W.is_terminator());
    }

    #[test]
    fn unknown_is_x() {
        assert_eq!(Aa27::from_char(b'#'), Aa27::X);
        assert_eq!(Aa27::from_char(b'1'), Aa27::X);
        assert!(Aa27::from_char_strict(b'#').is_err());
        assert!(Aa27::from_char_strict(b'x').is_ok());
    }

    #[test]
    fn literals() {
        const FELINE: [Aa27; 6] = Aa27::lit(b"FELINE");
        assert_eq!(FELINE[0], Aa27::F);
        assert_eq!(FELINE[5], Aa27::E);
    }
}
