//! Bisulfite-converted DNA.

use crate::table::CharTables;

table_alphabet! {
    /// Three-letter alphabet of bisulfite-converted DNA: `A`, `G`, `T`.
    ///
    /// Unmethylated `C` reads as `T`, so `C` (and `U`) map to `T`, but only
    /// `U` is valid under strict assignment. Ambiguity codes collapse after
    /// the same conversion: `Y` becomes `T`; `S`, `K` and `B` become `G`;
    /// `R`, `W`, `M`, `D`, `H`, `V` and `N` become `A`. Unknown bytes become
    /// `A`.
    pub struct Dna3Bs = CharTables::new(b"AGT", 0)
        .synonym(b'U', 2)
        .alias(b'C', 2)
        .alias(b'R', 0)
        .alias(b'Y', 2)
        .alias(b'S', 1)
        .alias(b'W', 0)
        .alias(b'K', 1)
        .alias(b'M', 0)
        .alias(b'B', 1)
        .alias(b'D', 0)
        .alias(b'H', 0)
        .alias(b'V', 0)
        .alias(b'N', 0);
}

impl Dna3Bs {
    pub const A: Self = Self(0);
    pub const G: Self = Self(1);
    pub const T: Self = Self(2);
}
