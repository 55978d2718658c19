//! The gap symbol.

use crate::table::CharTables;

table_alphabet! {
    /// Single-symbol alphabet holding the alignment gap `-`.
    ///
    /// Every byte converts to the gap; only `-` is valid.
    pub struct Gap = CharTables::new(b"-", 0);
}

impl Gap {
    pub const GAP: Self = Self(0);
}
