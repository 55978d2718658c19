//! Secondary structure alphabets.
//!
//! RNA structure notations ([`DotBracket3`], [`Wuss51`]) describe base
//! pairing with bracket characters and implement [`RnaStructureAlphabet`].
//! [`Dssp9`] holds the DSSP protein secondary structure classes.

use crate::alphabet::{Alphabet, Semialphabet};
use crate::table::CharTables;

/// Marker for alphabets that annotate secondary structure.
pub trait SecondaryStructure: Alphabet {}

/// Base-pairing queries for RNA structure notations.
pub trait RnaStructureAlphabet: SecondaryStructure {
    /// Number of distinct bracket kinds, i.e. how deeply pseudoknots can
    /// nest in this notation.
    const MAX_PSEUDOKNOT_DEPTH: u8;

    /// Whether this symbol opens a base pair.
    fn is_pair_open(self) -> bool;

    /// Whether this symbol closes a base pair.
    fn is_pair_close(self) -> bool;

    /// Whether this symbol marks an unpaired position.
    #[inline]
    fn is_unpaired(self) -> bool {
        !self.is_pair_open() && !self.is_pair_close()
    }

    /// Bracket kind of a pairing symbol, `None` for unpaired positions.
    fn pseudoknot_id(self) -> Option<u8>;
}

table_alphabet! {
    /// Dot-bracket notation: `.` unpaired, `(` and `)` paired. Unknown bytes
    /// become `.`.
    pub struct DotBracket3 = CharTables::new(b".()", 0);
}

impl DotBracket3 {
    pub const UNPAIRED: Self = Self(0);
    pub const PAIR_OPEN: Self = Self(1);
    pub const PAIR_CLOSE: Self = Self(2);
}

impl SecondaryStructure for DotBracket3 {}

impl RnaStructureAlphabet for DotBracket3 {
    const MAX_PSEUDOKNOT_DEPTH: u8 = 1;

    #[inline]
    fn is_pair_open(self) -> bool {
        self == Self::PAIR_OPEN
    }

    #[inline]
    fn is_pair_close(self) -> bool {
        self == Self::PAIR_CLOSE
    }

    #[inline]
    fn pseudoknot_id(self) -> Option<u8> {
        (self != Self::UNPAIRED).then_some(0)
    }
}

/// Unpaired WUSS symbols; the bracket pairs follow them in the rank order.
const WUSS_UNPAIRED: u8 = 7;

table_alphabet! {
    /// WUSS notation with 51 symbols: seven unpaired markers `.:,-_~;`,
    /// the bracket pairs `<>`, `()`, `[]`, `{}`, and the pseudoknot letter
    /// pairs `Aa` through `Rr`.
    ///
    /// Upper- and lowercase letters are different symbols (opening and
    /// closing), so no case folding applies. Unknown bytes become `.`.
    pub struct Wuss51 = CharTables::case_sensitive(
        b".:,-_~;<>()[]{}AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRr",
        0,
    );
}

impl SecondaryStructure for Wuss51 {}

impl RnaStructureAlphabet for Wuss51 {
    const MAX_PSEUDOKNOT_DEPTH: u8 = (51 - WUSS_UNPAIRED) / 2;

    #[inline]
    fn is_pair_open(self) -> bool {
        self.0 >= WUSS_UNPAIRED && (self.0 - WUSS_UNPAIRED) % 2 == 0
    }

    #[inline]
    fn is_pair_close(self) -> bool {
        self.0 >= WUSS_UNPAIRED && (self.0 - WUSS_UNPAIRED) % 2 == 1
    }

    #[inline]
    fn pseudoknot_id(self) -> Option<u8> {
        (self.0 >= WUSS_UNPAIRED).then(|| (self.0 - WUSS_UNPAIRED) / 2)
    }
}

impl From<DotBracket3> for Wuss51 {
    #[inline]
    fn from(value: DotBracket3) -> Self {
        Self::from_char(value.to_char())
    }
}

table_alphabet! {
    /// DSSP protein secondary structure classes: `H` (α-helix), `B`
    /// (β-bridge), `E` (strand), `G` (3₁₀ helix), `I` (π-helix), `T` (turn),
    /// `S` (bend), `C` (coil) and `X` (unknown). Unknown bytes become `X`.
    pub struct Dssp9 = CharTables::new(b"HBEGITSCX", 8);
}

impl SecondaryStructure for Dssp9 {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{check_alphabet_laws, check_case_insensitive};

    #[test]
    fn structure_alphabets_obey_laws() {
        check_alphabet_laws::<DotBracket3>();
        check_alphabet_laws::<Wuss51>();
        check_alphabet_laws::<Dssp9>();
        check_case_insensitive::<Dssp9>();
    }

    #[test]
    fn dot_bracket_pairing() {
        let s = DotBracket3::lit(b"((.))");
        assert!(s[0].is_pair_open());
        assert!(s[2].is_unpaired());
        assert!(s[4].is_pair_close());
        assert_eq!(s[2].pseudoknot_id(), None);
        assert_eq!(s[3].pseudoknot_id(), Some(0));
        assert_eq!(DotBracket3::from_char(b'x'), DotBracket3::UNPAIRED);
    }

    #[test]
    fn wuss_size_and_depth() {
        assert_eq!(Wuss51::SIZE, 51);
        assert_eq!(Wuss51::MAX_PSEUDOKNOT_DEPTH, 22);
    }

    #[test]
    fn wuss_brackets_and_letters() {
        for &c in b".:,-_~;" {
            assert!(Wuss51::from_char(c).is_unpaired(), "{}", c as char);
        }
        let open = Wuss51::from_char(b'<');
        let close = Wuss51::from_char(b'>');
        assert!(open.is_pair_open() && close.is_pair_close());
        assert_eq!(open.pseudoknot_id(), Some(0));
        assert_eq!(Wuss51::from_char(b'{').pseudoknot_id(), Some(3));
        assert_eq!(Wuss51::from_char(b'A').pseudoknot_id(), Some(4));
        assert_eq!(Wuss51::from_char(b'r').pseudoknot_id(), Some(21));
        assert!(Wuss51::from_char(b'A').is_pair_open());
        assert!(Wuss51::from_char(b'a').is_pair_close());
    }

    #[test]
    fn wuss_is_case_sensitive() {
        assert_ne!(Wuss51::from_char(b'A'), Wuss51::from_char(b'a'));
        assert_eq!(Wuss51::from_char(b'S').to_char(), b'.');
        assert!(!Wuss51::char_is_valid(b'S'));
    }

    #[test]
    fn dot_bracket_widens_to_wuss() {
        assert_eq!(Wuss51::from(DotBracket3::PAIR_OPEN).to_char(), b'(');
        assert_eq!(Wuss51::from(DotBracket3::UNPAIRED).to_char(), b'.');
    }

    #[test]
    fn dssp_classes() {
        assert_eq!(Dssp9::SIZE, 9);
        assert_eq!(Dssp9::from_char(b'h').to_char(), b'H');
        assert_eq!(Dssp9::from_char(b'?').to_char(), b'X');
    }
}
