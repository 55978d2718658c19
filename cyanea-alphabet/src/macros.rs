/// Define a table-backed alphabet.
///
/// Generates a `u8` rank newtype together with its [`Semialphabet`] and
/// [`Alphabet`] implementations, `Debug`/`Display`, and the compile-time
/// literal constructors `lit_char` and `lit`. The tables are given as a
/// constant [`CharTables`](crate::table::CharTables) expression.
///
/// ```
/// use cyanea_alphabet::table::CharTables;
/// use cyanea_alphabet::{table_alphabet, Alphabet, Semialphabet};
///
/// table_alphabet! {
///     /// Purine/pyrimidine alphabet.
///     pub struct Ry = CharTables::new(b"RY", 0)
///         .alias(b'A', 0)
///         .alias(b'G', 0)
///         .alias(b'C', 1)
///         .alias(b'T', 1);
/// }
///
/// const PURINE: Ry = Ry::lit_char(b'R');
/// assert_eq!(Ry::SIZE, 2);
/// assert_eq!(Ry::from_char(b'c').to_char(), b'Y');
/// assert_eq!(PURINE.to_rank(), 0);
/// assert!(Ry::from_char_strict(b'G').is_err());
/// ```
///
/// A literal character the alphabet does not accept fails the build:
///
/// ```compile_fail
/// use cyanea_alphabet::Dna4;
///
/// const AMBIGUOUS: Dna4 = Dna4::lit_char(b'N');
/// assert_eq!(AMBIGUOUS, Dna4::A);
/// ```
///
/// ```compile_fail
/// use cyanea_alphabet::Aa20;
///
/// const PEPTIDE: [Aa20; 4] = Aa20::lit(b"MKX*");
/// assert_eq!(PEPTIDE.len(), 4);
/// ```
///
/// [`Semialphabet`]: crate::Semialphabet
/// [`Alphabet`]: crate::Alphabet
#[macro_export]
macro_rules! table_alphabet {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $tables:expr;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        $vis struct $name(u8);

        impl $name {
            /// Lookup tables backing this alphabet.
            pub const TABLES: $crate::table::CharTables = $tables;

            /// Symbol for a valid character, usable in constants.
            ///
            /// An invalid character panics, which fails the build when the
            /// call is evaluated in a `const` or `static`.
            pub const fn lit_char(c: u8) -> Self {
                if !Self::TABLES.is_valid(c) {
                    panic!("invalid character in alphabet literal");
                }
                Self(Self::TABLES.rank_of(c))
            }

            /// Symbols for a string of valid characters, usable in constants.
            pub const fn lit<const N: usize>(chars: &[u8; N]) -> [Self; N] {
                let mut out = [Self(0); N];
                let mut i = 0;
                while i < N {
                    out[i] = Self::lit_char(chars[i]);
                    i += 1;
                }
                out
            }

            /// Rank as a `u8`.
            #[inline]
            pub const fn rank(self) -> u8 {
                self.0
            }

            /// Canonical character, usable in constants.
            #[inline]
            pub const fn as_char(self) -> u8 {
                Self::TABLES.char_of(self.0)
            }
        }

        impl $crate::Semialphabet for $name {
            const NAME: &'static str = stringify!($name);
            const SIZE: u32 = Self::TABLES.size() as u32;

            #[inline]
            fn to_rank(self) -> u32 {
                self.0 as u32
            }

            #[inline]
            fn from_rank(rank: u32) -> Self {
                debug_assert!(
                    rank < <Self as $crate::Semialphabet>::SIZE,
                    "rank {} out of range for {}",
                    rank,
                    stringify!($name)
                );
                Self(rank as u8)
            }
        }

        impl $crate::Alphabet for $name {
            #[inline]
            fn to_char(self) -> u8 {
                Self::TABLES.char_of(self.0)
            }

            #[inline]
            fn from_char(c: u8) -> Self {
                Self(Self::TABLES.rank_of(c))
            }

            #[inline]
            fn char_is_valid(c: u8) -> bool {
                Self::TABLES.is_valid(c)
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.as_char() as char)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.as_char() as char)
            }
        }
    };
}

/// Rank-preserving `From` conversions between same-size alphabets.
macro_rules! impl_rank_conversion {
    ($($a:ty => $b:ty),+ $(,)?) => {$(
        impl From<$a> for $b {
            #[inline]
            fn from(value: $a) -> Self {
                $crate::alphabet::convert_by_rank(value)
            }
        }
    )+};
}
