//! Sum-type composite: one symbol out of several alternative alphabets.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::alphabet::{convert_by_rank, Alphabet, Semialphabet};

/// Most alternatives a [`Variant`] can combine.
pub const MAX_ALTERNATIVES: usize = 5;

/// A tuple of alphabets usable as the alternatives of a [`Variant`].
///
/// Implemented for tuples of two to five [`Semialphabet`]s. Alternative `i`
/// occupies the combined ranks `OFFSETS[i]..OFFSETS[i + 1]`.
pub trait Alternatives: Copy + 'static {
    /// Number of alternatives.
    const COUNT: usize;

    /// Name of the first alternative, which also receives characters no
    /// alternative accepts.
    const NAME: &'static str;

    /// Prefix sums of the alternative sizes. Entries past `COUNT` repeat the
    /// total.
    const OFFSETS: [u32; MAX_ALTERNATIVES + 1];

    /// Sum of the alternative sizes.
    const SIZE: u32 = Self::OFFSETS[Self::COUNT];

    /// Index of the alternative whose interval contains `rank`.
    ///
    /// Ranks past the end are attributed to the last alternative.
    #[inline]
    fn alternative_of(rank: u32) -> usize {
        let mut i = 0;
        while i + 1 < Self::COUNT && rank >= Self::OFFSETS[i + 1] {
            i += 1;
        }
        i
    }

    /// Debug-format the symbol of combined rank `rank`.
    fn fmt_symbol(rank: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Alternatives that all carry characters.
pub trait CharAlternatives: Alternatives {
    /// Character of the symbol of combined rank `rank`.
    fn char_of(rank: u32) -> u8;

    /// Combined rank for `c`: the first alternative that accepts `c` wins,
    /// otherwise the first alternative converts it lossily.
    fn rank_of(c: u8) -> u32;

    /// Whether any alternative accepts `c`.
    fn is_valid(c: u8) -> bool;
}

/// Type of alternative `I`.
pub trait AlternativeAt<const I: usize>: Alternatives {
    type Type: Semialphabet;
}

/// Prefix sums of `sizes`, failing the build on overflow.
const fn offsets(sizes: &[u32]) -> [u32; MAX_ALTERNATIVES + 1] {
    assert!(sizes.len() <= MAX_ALTERNATIVES, "too many alternatives");
    let mut out = [0u32; MAX_ALTERNATIVES + 1];
    let mut i = 0;
    while i < MAX_ALTERNATIVES {
        out[i + 1] = if i < sizes.len() {
            match out[i].checked_add(sizes[i]) {
                Some(total) => total,
                None => panic!("variant size exceeds u32::MAX"),
            }
        } else {
            out[i]
        };
        i += 1;
    }
    out
}

macro_rules! impl_alternatives {
    (@base $count:literal; [$($g:ident),+]; $i0:tt => $t0:ident $(, $i:tt => $t:ident)*) => {
        impl<$($g: Semialphabet),+> Alternatives for ($($g,)+) {
            const COUNT: usize = $count;
            const NAME: &'static str = <$t0 as Semialphabet>::NAME;
            const OFFSETS: [u32; MAX_ALTERNATIVES + 1] = offsets(&[$(<$g as Semialphabet>::SIZE),+]);

            fn fmt_symbol(rank: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match Self::alternative_of(rank) {
                    $i0 => fmt::Debug::fmt(&<$t0 as Semialphabet>::from_rank(rank - Self::OFFSETS[$i0]), f),
                    $( $i => fmt::Debug::fmt(&<$t as Semialphabet>::from_rank(rank - Self::OFFSETS[$i]), f), )*
                    _ => unreachable!(),
                }
            }
        }

        impl<$($g: Alphabet),+> CharAlternatives for ($($g,)+) {
            fn char_of(rank: u32) -> u8 {
                match Self::alternative_of(rank) {
                    $i0 => <$t0 as Semialphabet>::from_rank(rank - Self::OFFSETS[$i0]).to_char(),
                    $( $i => <$t as Semialphabet>::from_rank(rank - Self::OFFSETS[$i]).to_char(), )*
                    _ => unreachable!(),
                }
            }

            fn rank_of(c: u8) -> u32 {
                if <$t0 as Alphabet>::char_is_valid(c) {
                    return <$t0 as Alphabet>::from_char(c).to_rank();
                }
                $(
                    if <$t as Alphabet>::char_is_valid(c) {
                        return Self::OFFSETS[$i] + <$t as Alphabet>::from_char(c).to_rank();
                    }
                )*
                <$t0 as Alphabet>::from_char(c).to_rank()
            }

            fn is_valid(c: u8) -> bool {
                <$t0 as Alphabet>::char_is_valid(c) $(|| <$t as Alphabet>::char_is_valid(c))*
            }
        }
    };
    (@at [$($g:ident),+]; $i:tt => $t:ident) => {
        impl<$($g: Semialphabet),+> AlternativeAt<$i> for ($($g,)+) {
            type Type = $t;
        }
    };
    ($count:literal; $gens:tt; $($i:tt => $t:ident),+) => {
        impl_alternatives!(@base $count; $gens; $($i => $t),+);
        $( impl_alternatives!(@at $gens; $i => $t); )+
    };
}

impl_alternatives!(2; [A, B]; 0 => A, 1 => B);
impl_alternatives!(3; [A, B, C]; 0 => A, 1 => B, 2 => C);
impl_alternatives!(4; [A, B, C, D]; 0 => A, 1 => B, 2 => C, 3 => D);
impl_alternatives!(5; [A, B, C, D, E]; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);

/// A symbol drawn from exactly one of the alternative alphabets in `T`.
///
/// The combined rank of a symbol of alternative `i` is `OFFSETS[i]` plus its
/// own rank, so the alternatives partition `0..SIZE` in declaration order.
///
/// ```
/// use cyanea_alphabet::{Alphabet, Dna5, Gap, Semialphabet, Variant};
///
/// type Gapped5 = Variant<(Dna5, Gap)>;
///
/// assert_eq!(Gapped5::SIZE, 6);
/// let gap = Gapped5::new::<1>(Gap::GAP);
/// assert_eq!(gap.to_rank(), 5);
/// assert_eq!(Gapped5::from_char(b'g').get::<0>(), Some(Dna5::G));
/// assert_eq!(Gapped5::from_char(b'-'), gap);
/// ```
pub struct Variant<T> {
    rank: u32,
    _alternatives: PhantomData<fn() -> T>,
}

impl<T: Alternatives> Variant<T> {
    #[inline]
    fn from_combined(rank: u32) -> Self {
        Self {
            rank,
            _alternatives: PhantomData,
        }
    }

    /// Symbol of alternative `I`.
    #[inline]
    pub fn new<const I: usize>(value: <T as AlternativeAt<I>>::Type) -> Self
    where
        T: AlternativeAt<I>,
    {
        Self::from_combined(T::OFFSETS[I] + value.to_rank())
    }

    /// Overwrite with a symbol of alternative `I`.
    #[inline]
    pub fn set<const I: usize>(&mut self, value: <T as AlternativeAt<I>>::Type) -> &mut Self
    where
        T: AlternativeAt<I>,
    {
        *self = Self::new::<I>(value);
        self
    }

    /// Index of the alternative this symbol belongs to.
    #[inline]
    pub fn index(self) -> usize {
        T::alternative_of(self.rank)
    }

    /// Whether this symbol belongs to alternative `I`.
    #[inline]
    pub fn holds<const I: usize>(self) -> bool
    where
        T: AlternativeAt<I>,
    {
        self.index() == I
    }

    /// The symbol as alternative `I`, if it belongs to it.
    #[inline]
    pub fn get<const I: usize>(self) -> Option<<T as AlternativeAt<I>>::Type>
    where
        T: AlternativeAt<I>,
    {
        self.holds::<I>()
            .then(|| <<T as AlternativeAt<I>>::Type as Semialphabet>::from_rank(self.rank - T::OFFSETS[I]))
    }

    /// Reinterpret the combined rank as a symbol of another alphabet of the
    /// same size. Nothing checks that the two agree on character meaning.
    #[inline]
    pub fn reinterpret<B: Semialphabet>(self) -> B {
        convert_by_rank(self)
    }
}

impl<T> Clone for Variant<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Variant<T> {}

impl<T> PartialEq for Variant<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl<T> Eq for Variant<T> {}

impl<T> PartialOrd for Variant<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Variant<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl<T> Hash for Variant<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl<T: Alternatives> Default for Variant<T> {
    fn default() -> Self {
        Self::from_combined(0)
    }
}

impl<T: Alternatives> fmt::Debug for Variant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fmt_symbol(self.rank, f)
    }
}

impl<T: CharAlternatives> fmt::Display for Variant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char() as char)
    }
}

impl<T: Alternatives> Semialphabet for Variant<T> {
    const NAME: &'static str = T::NAME;
    const SIZE: u32 = T::SIZE;

    #[inline]
    fn to_rank(self) -> u32 {
        self.rank
    }

    #[inline]
    fn from_rank(rank: u32) -> Self {
        debug_assert!(rank < T::SIZE, "rank {} out of range for Variant", rank);
        Self::from_combined(rank)
    }
}

impl<T: CharAlternatives> Alphabet for Variant<T> {
    #[inline]
    fn to_char(self) -> u8 {
        T::char_of(self.rank)
    }

    #[inline]
    fn from_char(c: u8) -> Self {
        Self::from_combined(T::rank_of(c))
    }

    #[inline]
    fn char_is_valid(c: u8) -> bool {
        T::is_valid(c)
    }
}
