//! The canonical amino acid alphabet.

use crate::table::CharTables;

table_alphabet! {
    /// The 20 canonical amino acids, `ACDEFGHIKLMNPQRSTVWY`.
    ///
    /// Non-canonical letters are replaced by the closest canonical one:
    /// `B` → `D`, `J` → `L`, `O` → `L`, `U` → `C`, `Z` → `E`, `X` → `S` and
    /// `*` → `W`. Unknown bytes become `S`.
    pub struct Aa20 = CharTables::new(b"ACDEFGHIKLMNPQRSTVWY", 15)
        .alias(b'B', 2)
        .alias(b'J', 9)
        .alias(b'O', 9)
        .alias(b'U', 1)
        .alias(b'Z', 3)
        .alias(b'X', 15)
        .alias(b'*', 18);
}
