//! The alphabet capability set.
//!
//! Every symbol type is a small `Copy` value identified by its *rank*, a dense
//! index in `0..SIZE`. [`Semialphabet`] covers the rank side; [`Alphabet`]
//! adds the character side (canonical display character, lossy and strict
//! character assignment, and the validity predicate).
//!
//! # Resolution order
//!
//! Generic code only ever names the traits, so the implementation used for a
//! type is fixed statically, once per type:
//!
//! 1. **Own implementation**: a type written for this crate implements
//!    [`Semialphabet`]/[`Alphabet`] directly (all alphabets in this crate,
//!    plus anything built with [`table_alphabet!`](crate::table_alphabet)).
//! 2. **External adapter**: a type you do not own is wrapped in
//!    [`Adapted<A>`], where `A` is your [`AlphabetAdapter`] supplying the
//!    operations as free-standing functions.
//! 3. **Library default**: `u8` is an alphabet of 256 symbols whose char is
//!    itself, and `u16` a semialphabet of 65 536 symbols.
//!
//! Coherence guarantees that at most one of these applies to any given type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use cyanea_core::InvalidCharacter;

use crate::table::{rank_width, CHAR_DOMAIN};

/// Compile-time description of an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    /// Number of distinct symbols.
    pub size: u32,
    /// Smallest unsigned integer width (8, 16 or 32 bits) that holds `size - 1`.
    pub rank_width: u32,
    /// Number of distinct input code units considered by char conversion.
    pub char_domain: u32,
}

impl Descriptor {
    /// Describe an alphabet with `size` symbols.
    pub const fn new(size: u32) -> Self {
        assert!(size >= 1, "an alphabet needs at least one symbol");
        Self {
            size,
            rank_width: rank_width(size),
            char_domain: CHAR_DOMAIN as u32,
        }
    }
}

/// A type whose values are identified by a rank in `0..SIZE`.
///
/// Equality and ordering of implementors must agree with their ranks.
pub trait Semialphabet: Copy + Eq + Ord + Hash + fmt::Debug + 'static {
    /// Human-readable name (e.g. "Dna4").
    const NAME: &'static str;

    /// Number of symbols, at least 1.
    const SIZE: u32;

    /// Size, rank width and char domain.
    const DESCRIPTOR: Descriptor = Descriptor::new(Self::SIZE);

    /// Rank of this symbol, always `< SIZE`.
    fn to_rank(self) -> u32;

    /// Symbol with the given rank.
    ///
    /// `rank` must be `< SIZE`. This is an unchecked fast path: debug builds
    /// panic on violation, release builds return an unspecified symbol.
    fn from_rank(rank: u32) -> Self;

    /// Overwrite this symbol with the one of rank `rank` (same precondition as
    /// [`from_rank`](Self::from_rank)).
    #[inline]
    fn assign_rank(&mut self, rank: u32) -> &mut Self {
        *self = Self::from_rank(rank);
        self
    }
}

/// A [`Semialphabet`] with a bidirectional character mapping.
pub trait Alphabet: Semialphabet {
    /// Canonical display character.
    fn to_char(self) -> u8;

    /// Symbol for `c`. Never fails: unknown and ambiguous characters resolve
    /// to the alphabet's documented default or representative.
    fn from_char(c: u8) -> Self;

    /// Whether `c` maps to a symbol without loss of information.
    fn char_is_valid(c: u8) -> bool;

    /// Symbol for `c`, or an error if `c` is not valid for this alphabet.
    #[inline]
    fn from_char_strict(c: u8) -> Result<Self, InvalidCharacter> {
        if Self::char_is_valid(c) {
            Ok(Self::from_char(c))
        } else {
            Err(InvalidCharacter::new(c, Self::NAME))
        }
    }

    /// Lossy in-place character assignment.
    ///
    /// Composite alphabets override this to change only the part of the
    /// symbol that carries the character.
    #[inline]
    fn assign_char(&mut self, c: u8) -> &mut Self {
        *self = Self::from_char(c);
        self
    }

    /// Strict in-place character assignment.
    ///
    /// On error the symbol is left unchanged.
    #[inline]
    fn assign_char_strict(&mut self, c: u8) -> Result<&mut Self, InvalidCharacter> {
        if Self::char_is_valid(c) {
            Ok(self.assign_char(c))
        } else {
            Err(InvalidCharacter::new(c, Self::NAME))
        }
    }
}

// ---------------------------------------------------------------------------
// Free-function surface
// ---------------------------------------------------------------------------

/// Number of symbols in `A`.
#[inline]
pub const fn size<A: Semialphabet>() -> u32 {
    A::SIZE
}

/// Rank of `symbol`.
#[inline]
pub fn to_rank<A: Semialphabet>(symbol: A) -> u32 {
    symbol.to_rank()
}

/// Assign `rank` to `symbol`; `rank` must be `< A::SIZE`.
#[inline]
pub fn assign_rank<A: Semialphabet>(rank: u32, symbol: &mut A) {
    symbol.assign_rank(rank);
}

/// Canonical character of `symbol`.
#[inline]
pub fn to_char<A: Alphabet>(symbol: A) -> u8 {
    symbol.to_char()
}

/// Lossy assignment of `c` to `symbol`.
#[inline]
pub fn assign_char<A: Alphabet>(c: u8, symbol: &mut A) {
    symbol.assign_char(c);
}

/// Strict assignment of `c` to `symbol`.
#[inline]
pub fn assign_char_strict<A: Alphabet>(c: u8, symbol: &mut A) -> Result<(), InvalidCharacter> {
    symbol.assign_char_strict(c).map(|_| ())
}

/// Whether `c` is valid for `A`.
#[inline]
pub fn char_is_valid<A: Alphabet>(c: u8) -> bool {
    A::char_is_valid(c)
}

/// Reinterpret `value` as a symbol of `B` with the same rank.
///
/// Both alphabets must have the same size; this is checked at compile time.
/// Nothing checks that the two alphabets agree on what their ranks mean.
///
/// ```
/// use cyanea_alphabet::{convert_by_rank, Dna4, Rna4};
///
/// let u: Rna4 = convert_by_rank(Dna4::T);
/// assert_eq!(u, Rna4::U);
/// ```
#[inline]
pub fn convert_by_rank<A: Semialphabet, B: Semialphabet>(value: A) -> B {
    let () = SameSize::<A, B>::CHECK;
    B::from_rank(value.to_rank())
}

struct SameSize<A, B>(PhantomData<(A, B)>);

impl<A: Semialphabet, B: Semialphabet> SameSize<A, B> {
    const CHECK: () = assert!(A::SIZE == B::SIZE, "rank conversion requires alphabets of equal size");
}

// ---------------------------------------------------------------------------
// Library defaults
// ---------------------------------------------------------------------------

impl Semialphabet for u8 {
    const NAME: &'static str = "u8";
    const SIZE: u32 = 1 << 8;

    #[inline]
    fn to_rank(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_rank(rank: u32) -> Self {
        debug_assert!(rank < Self::SIZE, "rank {} out of range for u8", rank);
        rank as u8
    }
}

impl Alphabet for u8 {
    #[inline]
    fn to_char(self) -> u8 {
        self
    }

    #[inline]
    fn from_char(c: u8) -> Self {
        c
    }

    #[inline]
    fn char_is_valid(_c: u8) -> bool {
        true
    }
}

impl Semialphabet for u16 {
    const NAME: &'static str = "u16";
    const SIZE: u32 = 1 << 16;

    #[inline]
    fn to_rank(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_rank(rank: u32) -> Self {
        debug_assert!(rank < Self::SIZE, "rank {} out of range for u16", rank);
        rank as u16
    }
}

// ---------------------------------------------------------------------------
// External adapters
// ---------------------------------------------------------------------------

/// Free-standing alphabet operations for a type this crate does not own.
///
/// Implement it on a marker type and use [`Adapted<Self>`] wherever an
/// [`Alphabet`] is expected.
///
/// ```
/// use std::cmp::Ordering;
/// use cyanea_alphabet::{Adapted, AlphabetAdapter, Alphabet, Semialphabet};
///
/// struct Comparison;
///
/// impl AlphabetAdapter for Comparison {
///     type Target = Ordering;
///     const NAME: &'static str = "Comparison";
///     const SIZE: u32 = 3;
///
///     fn to_rank(value: Ordering) -> u32 {
///         (value as i8 + 1) as u32
///     }
///     fn from_rank(rank: u32) -> Ordering {
///         [Ordering::Less, Ordering::Equal, Ordering::Greater][rank as usize]
///     }
///     fn to_char(value: Ordering) -> u8 {
///         b"<=>"[Self::to_rank(value) as usize]
///     }
///     fn from_char(c: u8) -> Ordering {
///         match c {
///             b'<' => Ordering::Less,
///             b'>' => Ordering::Greater,
///             _ => Ordering::Equal,
///         }
///     }
///     fn char_is_valid(c: u8) -> bool {
///         matches!(c, b'<' | b'=' | b'>')
///     }
/// }
///
/// let gt = Adapted::<Comparison>::from_char(b'>');
/// assert_eq!(gt.to_rank(), 2);
/// assert_eq!(gt.into_inner(), Ordering::Greater);
/// ```
pub trait AlphabetAdapter: 'static {
    /// The adapted type.
    type Target: Copy + Eq + fmt::Debug + 'static;

    /// Human-readable name.
    const NAME: &'static str;

    /// Number of symbols.
    const SIZE: u32;

    /// Rank of `value`.
    fn to_rank(value: Self::Target) -> u32;

    /// Value of rank `rank` (`rank < SIZE`).
    fn from_rank(rank: u32) -> Self::Target;

    /// Canonical character of `value`.
    fn to_char(value: Self::Target) -> u8;

    /// Lossy conversion of `c`.
    fn from_char(c: u8) -> Self::Target;

    /// Whether `c` converts without loss.
    fn char_is_valid(c: u8) -> bool;
}

/// A foreign value viewed through an [`AlphabetAdapter`].
pub struct Adapted<A: AlphabetAdapter> {
    value: A::Target,
    _adapter: PhantomData<fn() -> A>,
}

impl<A: AlphabetAdapter> Adapted<A> {
    /// Wrap `value`.
    pub fn new(value: A::Target) -> Self {
        Self {
            value,
            _adapter: PhantomData,
        }
    }

    /// Unwrap the adapted value.
    pub fn into_inner(self) -> A::Target {
        self.value
    }
}

impl<A: AlphabetAdapter> Clone for Adapted<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: AlphabetAdapter> Copy for Adapted<A> {}

impl<A: AlphabetAdapter> PartialEq for Adapted<A> {
    fn eq(&self, other: &Self) -> bool {
        A::to_rank(self.value) == A::to_rank(other.value)
    }
}

impl<A: AlphabetAdapter> Eq for Adapted<A> {}

impl<A: AlphabetAdapter> PartialOrd for Adapted<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: AlphabetAdapter> Ord for Adapted<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        A::to_rank(self.value).cmp(&A::to_rank(other.value))
    }
}

impl<A: AlphabetAdapter> Hash for Adapted<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        A::to_rank(self.value).hash(state);
    }
}

impl<A: AlphabetAdapter> fmt::Debug for Adapted<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", A::NAME, self.value)
    }
}

impl<A: AlphabetAdapter> Semialphabet for Adapted<A> {
    const NAME: &'static str = A::NAME;
    const SIZE: u32 = A::SIZE;

    #[inline]
    fn to_rank(self) -> u32 {
        A::to_rank(self.value)
    }

    #[inline]
    fn from_rank(rank: u32) -> Self {
        debug_assert!(rank < A::SIZE, "rank {} out of range for {}", rank, A::NAME);
        Self::new(A::from_rank(rank))
    }
}

impl<A: AlphabetAdapter> Alphabet for Adapted<A> {
    #[inline]
    fn to_char(self) -> u8 {
        A::to_char(self.value)
    }

    #[inline]
    fn from_char(c: u8) -> Self {
        Self::new(A::from_char(c))
    }

    #[inline]
    fn char_is_valid(c: u8) -> bool {
        A::char_is_valid(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::check_alphabet_laws;

    struct Comparison;

    impl AlphabetAdapter for Comparison {
        type Target = Ordering;
        const NAME: &'static str = "Comparison";
        const SIZE: u32 = 3;

        fn to_rank(value: Ordering) -> u32 {
            (value as i8 + 1) as u32
        }

        fn from_rank(rank: u32) -> Ordering {
            [Ordering::Less, Ordering::Equal, Ordering::Greater][rank as usize]
        }

        fn to_char(value: Ordering) -> u8 {
            b"<=>"[Self::to_rank(value) as usize]
        }

        fn from_char(c: u8) -> Ordering {
            match c {
                b'<' => Ordering::Less,
                b'>' => Ordering::Greater,
                _ => Ordering::Equal,
            }
        }

        fn char_is_valid(c: u8) -> bool {
            matches!(c, b'<' | b'=' | b'>')
        }
    }

    #[test]
    fn u8_is_its_own_alphabet() {
        assert_eq!(size::<u8>(), 256);
        assert_eq!(u8::DESCRIPTOR.rank_width, 8);
        for c in 0..=255u8 {
            assert_eq!(to_rank(c), c as u32);
            assert_eq!(to_char(c), c);
            assert!(char_is_valid::<u8>(c));
        }
        check_alphabet_laws::<u8>();
    }

    #[test]
    fn u16_is_a_semialphabet() {
        assert_eq!(size::<u16>(), 65_536);
        assert_eq!(u16::DESCRIPTOR.rank_width, 16);
        let mut v = 0u16;
        assign_rank(65_535, &mut v);
        assert_eq!(v, u16::MAX);
    }

    #[test]
    fn adapter_supplies_operations() {
        let mut sym = Adapted::<Comparison>::new(Ordering::Less);
        assert_eq!(sym.to_rank(), 0);
        assert_eq!(sym.to_char(), b'<');
        assign_char(b'>', &mut sym);
        assert_eq!(sym.into_inner(), Ordering::Greater);
        assert!(assign_char_strict(b'?', &mut sym).is_err());
        assert_eq!(sym.into_inner(), Ordering::Greater);
        check_alphabet_laws::<Adapted<Comparison>>();
    }

    #[test]
    fn adapted_ordering_follows_rank() {
        let lt = Adapted::<Comparison>::from_rank(0);
        let gt = Adapted::<Comparison>::from_rank(2);
        assert!(lt < gt);
        assert_eq!(format!("{:?}", gt), "Comparison(Greater)");
    }

    #[test]
    fn strict_error_names_the_alphabet() {
        let err = Adapted::<Comparison>::from_char_strict(b'x').unwrap_err();
        assert_eq!(err.character, b'x');
        assert_eq!(err.alphabet, "Comparison");
    }
}
