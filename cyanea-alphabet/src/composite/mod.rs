//! Composite alphabets.
//!
//! - [`Variant`] is a sum type: a symbol of exactly one of several
//!   alternative alphabets, with the alternatives laid end to end in one
//!   rank space.
//! - [`Tuple`] is a product type: one symbol of each component alphabet,
//!   packed into one mixed-radix rank.
//!
//! Both store a single `u32` rank, so composite symbols are as cheap to copy
//! and compare as the plain alphabets. The named composites below cover the
//! common cases.

mod tuple;
mod variant;

pub use tuple::{Component, ComponentAt, Components, Field, Tuple, MAX_COMPONENTS};
pub use variant::{AlternativeAt, Alternatives, CharAlternatives, Variant, MAX_ALTERNATIVES};

use crate::alphabet::{Alphabet, Semialphabet};
use crate::aminoacid::{Aa27, AminoAcidAlphabet};
use crate::gap::Gap;
use crate::nucleotide::{Dna15, NucleotideAlphabet};
use crate::quality::QualityAlphabet;
use crate::structure::{Dssp9, SecondaryStructure};

/// An alphabet extended with the gap symbol `-`.
pub type Gapped<A> = Variant<(A, Gap)>;

/// A sequence symbol paired with a quality score.
pub type Qualified<A, Q> = Tuple<(A, Q)>;

/// A nucleotide paired with an RNA structure annotation.
pub type StructuredRna<N, S> = Tuple<(N, S)>;

/// An amino acid paired with its DSSP secondary structure class.
pub type StructuredAa = Tuple<(Aa27, Dssp9)>;

impl<A: Alphabet> Variant<(A, Gap)> {
    /// The gap.
    #[inline]
    pub fn gap() -> Self {
        Self::new::<1>(Gap::GAP)
    }

    #[inline]
    pub fn is_gap(self) -> bool {
        self.holds::<1>()
    }

    /// The underlying symbol, `None` for the gap.
    #[inline]
    pub fn symbol(self) -> Option<A> {
        self.get::<0>()
    }
}

impl<A: Alphabet> From<A> for Variant<(A, Gap)> {
    #[inline]
    fn from(value: A) -> Self {
        Self::new::<0>(value)
    }
}

impl<A: Semialphabet, B: Semialphabet> Tuple<(A, B)> {
    /// The sequence (first) component.
    #[inline]
    pub fn sequence(self) -> A {
        self.get::<0>()
    }

    #[inline]
    pub fn set_sequence(&mut self, value: impl Into<A>) -> &mut Self {
        self.set::<0>(value)
    }
}

impl<A: Semialphabet, Q: QualityAlphabet> Tuple<(A, Q)> {
    #[inline]
    pub fn quality(self) -> Q {
        self.get::<1>()
    }

    #[inline]
    pub fn set_quality(&mut self, value: impl Into<Q>) -> &mut Self {
        self.set::<1>(value)
    }

    /// Phred score of the quality component.
    #[inline]
    pub fn phred(self) -> i8 {
        self.quality().to_phred()
    }
}

impl<A: Semialphabet, S: SecondaryStructure> Tuple<(A, S)> {
    #[inline]
    pub fn structure(self) -> S {
        self.get::<1>()
    }

    #[inline]
    pub fn set_structure(&mut self, value: impl Into<S>) -> &mut Self {
        self.set::<1>(value)
    }
}

/// Complementing a gapped nucleotide keeps gaps in place.
impl<N: NucleotideAlphabet> NucleotideAlphabet for Variant<(N, Gap)> {
    #[inline]
    fn complement(self) -> Self {
        match self.symbol() {
            Some(n) => Self::new::<0>(n.complement()),
            None => self,
        }
    }
}

/// Complementing keeps the second component (quality, structure).
impl<N: NucleotideAlphabet, B: Semialphabet> NucleotideAlphabet for Tuple<(N, B)> {
    const ACGT_RANKS: bool = N::ACGT_RANKS && B::SIZE == 1;

    #[inline]
    fn complement(self) -> Self {
        self.with::<0>(self.get::<0>().complement())
    }

    #[inline]
    fn to_dna15(self) -> Dna15 {
        self.get::<0>().to_dna15()
    }
}

impl<A: AminoAcidAlphabet, B: Semialphabet> AminoAcidAlphabet for Tuple<(A, B)> {
    #[inline]
    fn to_aa27(self) -> Aa27 {
        self.get::<0>().to_aa27()
    }
}
