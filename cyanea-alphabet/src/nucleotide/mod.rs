//! Nucleotide alphabets.
//!
//! | Alphabet | Size | Symbols | Unknown → |
//! |----------|------|---------|-----------|
//! | [`Dna4`] / [`Rna4`] | 4 | `ACGT` / `ACGU` | `A` |
//! | [`Dna5`] / [`Rna5`] | 5 | `ACGNT` / `ACGNU` | `N` |
//! | [`Dna15`] / [`Rna15`] | 15 | full IUPAC, alphabetical | `N` |
//! | [`Dna16Sam`] | 16 | `=ACMGRSVTWYHKDBN` (BAM order) | `N` |
//! | [`Dna3Bs`] | 3 | `AGT` (bisulfite) | `A` |
//!
//! DNA alphabets accept `U` as an exact synonym of `T`, and RNA alphabets
//! accept `T` for `U`. Ambiguity codes an alphabet cannot represent collapse
//! onto one representative, documented on each type.

mod dna15;
mod dna16sam;
mod dna3bs;
mod dna4;
mod dna5;

pub use dna15::{Dna15, Rna15};
pub(crate) use dna15::DNA15_BASES;
pub use dna16sam::Dna16Sam;
pub use dna3bs::Dna3Bs;
pub use dna4::{Dna4, Rna4};
pub use dna5::{Dna5, Rna5};

use crate::alphabet::Alphabet;
use crate::table::CharTables;

/// Operations shared by all nucleotide alphabets.
pub trait NucleotideAlphabet: Alphabet {
    /// Whether the alphabet is exactly `A C G T/U` in rank order, so that the
    /// ranks of a triplet index the 64-entry codon table directly.
    const ACGT_RANKS: bool = false;

    /// Watson-Crick complement (IUPAC codes complement to the code of the
    /// complementary set).
    fn complement(self) -> Self;

    /// Nearest [`Dna15`] symbol, used when translating degenerate input.
    ///
    /// Symbols with no IUPAC meaning (such as SAM's `=`) become `N`.
    #[inline]
    fn to_dna15(self) -> Dna15 {
        Dna15::from_char(self.to_char())
    }
}

/// IUPAC complement of a nucleotide character (uppercase).
///
/// `=` (match to reference) has no meaningful complement and becomes `N`.
pub const fn iupac_complement(c: u8) -> u8 {
    match c {
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'R' => b'Y', // A|G → T|C
        b'Y' => b'R',
        b'S' => b'S', // G|C → C|G
        b'W' => b'W', // A|T → T|A
        b'K' => b'M', // G|T → C|A
        b'M' => b'K',
        b'B' => b'V', // C|G|T → G|C|A
        b'V' => b'B',
        b'D' => b'H', // A|G|T → T|C|A
        b'H' => b'D',
        b'N' | b'=' => b'N',
        other => other,
    }
}

/// Most nucleotides any alphabet here defines.
const MAX_NUCLEOTIDES: usize = 16;

/// Whether `tables` rank exactly `A C G T`, or `A C G U`.
const fn has_acgt_ranks(tables: &CharTables) -> bool {
    tables.size() == 4
        && tables.char_of(0) == b'A'
        && tables.char_of(1) == b'C'
        && tables.char_of(2) == b'G'
        && matches!(tables.char_of(3), b'T' | b'U')
}

/// Complement rank of every rank, derived from the canonical characters.
const fn complement_ranks(tables: &CharTables) -> [u8; MAX_NUCLEOTIDES] {
    assert!(tables.size() as usize <= MAX_NUCLEOTIDES);
    let mut out = [0u8; MAX_NUCLEOTIDES];
    let mut r = 0;
    while r < tables.size() as usize {
        out[r] = tables.rank_of(iupac_complement(tables.char_of(r as u8)));
        r += 1;
    }
    out
}

macro_rules! impl_nucleotide {
    ($($name:ident),+ $(,)?) => {$(
        impl NucleotideAlphabet for $name {
            const ACGT_RANKS: bool = has_acgt_ranks(&$name::TABLES);

            #[inline]
            fn complement(self) -> Self {
                const COMPLEMENT: [u8; MAX_NUCLEOTIDES] = complement_ranks(&$name::TABLES);
                <Self as $crate::Semialphabet>::from_rank(COMPLEMENT[self.rank() as usize] as u32)
            }
        }
    )+};
}

impl_nucleotide!(Dna4, Rna4, Dna5, Rna5, Dna15, Rna15, Dna16Sam, Dna3Bs);

impl_rank_conversion! {
    Dna4 => Rna4,
    Rna4 => Dna4,
    Dna5 => Rna5,
    Rna5 => Dna5,
    Dna15 => Rna15,
    Rna15 => Dna15,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Semialphabet;
    use crate::test_util::{check_alphabet_laws, check_case_insensitive};

    fn check_complement_involution<N: NucleotideAlphabet>() {
        for r in 0..N::SIZE {
            let n = N::from_rank(r);
            assert_eq!(n.complement().complement(), n, "{:?}", n);
        }
    }

    #[test]
    fn all_nucleotide_alphabets_obey_laws() {
        check_alphabet_laws::<Dna4>();
        check_alphabet_laws::<Rna4>();
        check_alphabet_laws::<Dna5>();
        check_alphabet_laws::<Rna5>();
        check_alphabet_laws::<Dna15>();
        check_alphabet_laws::<Rna15>();
        check_alphabet_laws::<Dna16Sam>();
        check_alphabet_laws::<Dna3Bs>();
    }

    #[test]
    fn all_nucleotide_alphabets_fold_case() {
        check_case_insensitive::<Dna4>();
        check_case_insensitive::<Rna4>();
        check_case_insensitive::<Dna5>();
        check_case_insensitive::<Rna5>();
        check_case_insensitive::<Dna15>();
        check_case_insensitive::<Rna15>();
        check_case_insensitive::<Dna16Sam>();
        check_case_insensitive::<Dna3Bs>();
    }

    #[test]
    fn complement_is_an_involution() {
        check_complement_involution::<Dna4>();
        check_complement_involution::<Rna4>();
        check_complement_involution::<Dna5>();
        check_complement_involution::<Rna5>();
        check_complement_involution::<Dna15>();
        check_complement_involution::<Rna15>();
    }

    #[test]
    fn only_four_letter_acgt_alphabets_index_codons_by_rank() {
        assert!(Dna4::ACGT_RANKS);
        assert!(Rna4::ACGT_RANKS);
        assert!(!Dna3Bs::ACGT_RANKS);
        assert!(!Dna5::ACGT_RANKS);
        assert!(!Dna15::ACGT_RANKS);
        assert!(!Dna16Sam::ACGT_RANKS);
    }

    #[test]
    fn same_size_conversions_keep_rank() {
        assert_eq!(Rna4::from(Dna4::T), Rna4::U);
        assert_eq!(Dna5::from(Rna5::N), Dna5::N);
        assert_eq!(Dna15::from(Rna15::from_char(b'U')), Dna15::from_char(b'T'));
    }

    #[test]
    fn to_dna15_keeps_ambiguity_where_possible() {
        assert_eq!(Dna5::N.to_dna15(), Dna15::from_char(b'N'));
        assert_eq!(Rna4::U.to_dna15(), Dna15::from_char(b'T'));
        assert_eq!(Dna16Sam::from_char(b'R').to_dna15(), Dna15::from_char(b'R'));
        assert_eq!(Dna16Sam::from_char(b'=').to_dna15(), Dna15::from_char(b'N'));
    }

    #[test]
    fn iupac_complement_pairs() {
        for (c, comp) in [(b'A', b'T'), (b'C', b'G'), (b'R', b'Y'), (b'K', b'M'), (b'B', b'V'), (b'D', b'H')] {
            assert_eq!(iupac_complement(c), comp);
            assert_eq!(iupac_complement(comp), c);
        }
        assert_eq!(iupac_complement(b'U'), b'A');
        assert_eq!(iupac_complement(b'='), b'N');
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::alphabet::{Alphabet, Semialphabet};
    use crate::seq;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn canonical_text_round_trips(ranks in proptest::collection::vec(0u32..15, 0..200)) {
            let dna: Vec<Dna15> = ranks.iter().map(|&r| Dna15::from_rank(r)).collect();
            let text = seq::to_bytes(&dna);
            prop_assert_eq!(seq::parse_strict::<Dna15>(&text).unwrap(), dna);
        }

        #[test]
        fn strict_agrees_with_lossy_on_valid_bytes(c in any::<u8>()) {
            match Dna5::from_char_strict(c) {
                Ok(strict) => prop_assert_eq!(strict, Dna5::from_char(c)),
                Err(err) => {
                    prop_assert!(!Dna5::char_is_valid(c));
                    prop_assert_eq!(err.character, c);
                }
            }
        }

        #[test]
        fn reverse_complement_is_an_involution(text in "[ACGTRYSWKMBDHVN]{0,100}") {
            let dna: Vec<Dna15> = seq::parse(text.as_bytes());
            prop_assert_eq!(seq::reverse_complement(&seq::reverse_complement(&dna)), dna);
        }
    }
}
