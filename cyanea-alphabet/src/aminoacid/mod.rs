//! Amino acid alphabets.
//!
//! - [`Aa27`]: the 26 IUPAC letters plus the terminator `*`
//! - [`Aa20`]: the 20 canonical amino acids
//! - [`Aa10Murphy`], [`Aa10Li`]: reduced alphabets of 10 physico-chemical groups

mod aa10;
mod aa20;
mod aa27;

pub use aa10::{Aa10Li, Aa10Murphy};
pub use aa20::Aa20;
pub use aa27::Aa27;

use crate::alphabet::Alphabet;

/// Operations shared by all amino acid alphabets.
pub trait AminoAcidAlphabet: Alphabet {
    /// The [`Aa27`] symbol with the same character.
    #[inline]
    fn to_aa27(self) -> Aa27 {
        Aa27::from_char(self.to_char())
    }
}

impl AminoAcidAlphabet for Aa27 {
    #[inline]
    fn to_aa27(self) -> Aa27 {
        self
    }
}

impl AminoAcidAlphabet for Aa20 {}
impl AminoAcidAlphabet for Aa10Murphy {}
impl AminoAcidAlphabet for Aa10Li {}

impl From<Aa20> for Aa27 {
    #[inline]
    fn from(value: Aa20) -> Self {
        value.to_aa27()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Semialphabet;
    use crate::test_util::{check_alphabet_laws, check_case_insensitive};

    #[test]
    fn all_amino_acid_alphabets_obey_laws() {
        check_alphabet_laws::<Aa27>();
        check_alphabet_laws::<Aa20>();
        check_alphabet_laws::<Aa10Murphy>();
        check_alphabet_laws::<Aa10Li>();
    }

    #[test]
    fn all_amino_acid_alphabets_fold_case() {
        check_case_insensitive::<Aa27>();
        check_case_insensitive::<Aa20>();
        check_case_insensitive::<Aa10Murphy>();
        check_case_insensitive::<Aa10Li>();
    }

    #[test]
    fn widening_to_aa27_keeps_the_letter() {
        for r in 0..Aa20::SIZE {
            let aa = Aa20::from_rank(r);
            assert_eq!(Aa27::from(aa).to_char(), aa.to_char());
        }
    }

    #[test]
    fn reduced_alphabets_widen_to_group_letter() {
        assert_eq!(Aa10Murphy::from_char(b'L').to_aa27(), Aa27::I);
        assert_eq!(Aa10Li::from_char(b'L').to_aa27(), Aa27::J);
    }
}
