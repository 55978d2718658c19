//! The four-letter nucleotide alphabets.

use crate::table::CharTables;

table_alphabet! {
    /// Four-letter DNA alphabet: `A`, `C`, `G`, `T`.
    ///
    /// `U` is read as `T`. Ambiguity codes collapse onto one base: `R`, `W`,
    /// `M`, `D`, `H`, `V` and `N` become `A`; `Y`, `S` and `B` become `C`;
    /// `K` becomes `G`. Any other byte becomes `A`.
    ///
    /// ```
    /// use cyanea_alphabet::{Alphabet, Dna4, Semialphabet};
    ///
    /// assert_eq!(Dna4::from_char(b'a'), Dna4::A);
    /// assert_eq!(Dna4::from_char(b'U'), Dna4::T);
    /// assert!(Dna4::from_char_strict(b'N').is_err());
    /// assert_eq!(Dna4::lit(b"GATTACA").len(), 7);
    /// ```
    pub struct Dna4 = CharTables::new(b"ACGT", 0)
        .synonym(b'U', 3)
        .alias(b'R', 0)
        .alias(b'Y', 1)
        .alias(b'S', 1)
        .alias(b'W', 0)
        .alias(b'K', 2)
        .alias(b'M', 0)
        .alias(b'B', 1)
        .alias(b'D', 0)
        .alias(b'H', 0)
        .alias(b'V', 0)
        .alias(b'N', 0);
}

impl Dna4 {
    pub const A: Self = Self(0);
    pub const C: Self = Self(1);
    pub const G: Self = Self(2);
    pub const T: Self = Self(3);
}

table_alphabet! {
    /// Four-letter RNA alphabet: `A`, `C`, `G`, `U`.
    ///
    /// Rank-identical to [`Dna4`]; `T` is read as `U` and ambiguity codes
    /// collapse the same way.
    pub struct Rna4 = CharTables::new(b"ACGU", 0)
        .synonym(b'T', 3)
        .alias(b'R', 0)
        .alias(b'Y', 1)
        .alias(b'S', 1)
        .alias(b'W', 0)
        .alias(b'K', 2)
        .alias(b'M', 0)
        .alias(b'B', 1)
        .alias(b'D', 0)
        .alias(b'H', 0)
        .alias(b'V', 0)
        .alias(b'N', 0);
}

impl Rna4 {
    pub const A: Self = Self(0);
    pub const C: Self = Self(1);
    pub const G: Self = Self(2);
    pub const U: Self = Self(3);
}
