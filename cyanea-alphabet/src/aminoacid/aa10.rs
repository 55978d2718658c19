//! Reduced amino acid alphabets.

use crate::table::CharTables;

table_alphabet! {
    /// Murphy et al. (2000) reduction to 10 groups, each written as its
    /// representative letter:
    ///
    /// | Symbol | Members |
    /// |--------|---------|
    /// | `A` | A |
    /// | `B` | B D E N Q Z |
    /// | `C` | C U |
    /// | `F` | F W Y |
    /// | `G` | G |
    /// | `H` | H |
    /// | `I` | I J L M V |
    /// | `K` | K O R |
    /// | `P` | P |
    /// | `S` | S T |
    ///
    /// `X`, `*` and unknown bytes become `S`.
    pub struct Aa10Murphy = CharTables::new(b"ABCFGHIKPS", 9)
        .alias(b'D', 1)
        .alias(b'E', 1)
        .alias(b'N', 1)
        .alias(b'Q', 1)
        .alias(b'Z', 1)
        .alias(b'U', 2)
        .alias(b'W', 3)
        .alias(b'Y', 3)
        .alias(b'J', 6)
        .alias(b'L', 6)
        .alias(b'M', 6)
        .alias(b'V', 6)
        .alias(b'O', 7)
        .alias(b'R', 7)
        .alias(b'T', 9);
}

table_alphabet! {
    /// Li et al. (2003) reduction to 10 groups, each written as its
    /// representative letter:
    ///
    /// | Symbol | Members |
    /// |--------|---------|
    /// | `A` | A S T |
    /// | `B` | B D E Q Z |
    /// | `C` | C U |
    /// | `F` | F W Y |
    /// | `G` | G |
    /// | `H` | H N |
    /// | `I` | I V |
    /// | `J` | J L M |
    /// | `K` | K O R |
    /// | `P` | P |
    ///
    /// `X`, `*` and unknown bytes become `A`.
    pub struct Aa10Li = CharTables::new(b"ABCFGHIJKP", 0)
        .alias(b'S', 0)
        .alias(b'T', 0)
        .alias(b'D', 1)
        .alias(b'E', 1)
        .alias(b'Q', 1)
        .alias(b'Z', 1)
        .alias(b'U', 2)
        .alias(b'W', 3)
        .alias(b'Y', 3)
        .alias(b'N', 5)
        .alias(b'V', 6)
        .alias(b'L', 7)
        .alias(b'M', 7)
        .alias(b'O', 8)
        .alias(b'R', 8);
}
