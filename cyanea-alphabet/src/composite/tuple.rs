//! Product-type composite: one symbol from each of several alphabets, packed
//! into a single mixed-radix rank.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use cyanea_core::InvalidCharacter;

use crate::alphabet::{Alphabet, Semialphabet};

/// Most components a [`Tuple`] can combine.
pub const MAX_COMPONENTS: usize = 5;

/// A tuple of alphabets usable as the components of a [`Tuple`].
///
/// Implemented for tuples of two to five [`Semialphabet`]s. Component `i`
/// is the digit `(rank / WEIGHTS[i]) % SIZES[i]` of the combined rank, the
/// first component being the most significant.
pub trait Components: Copy + fmt::Debug + 'static {
    /// Number of components.
    const COUNT: usize;

    /// Name of the first component, the one carrying the characters.
    const NAME: &'static str;

    /// Component sizes. Entries past `COUNT` are 1.
    const SIZES: [u32; MAX_COMPONENTS];

    /// Weight of each digit: the product of the sizes of all later
    /// components.
    const WEIGHTS: [u32; MAX_COMPONENTS];

    /// Product of the component sizes.
    const SIZE: u32 = Self::SIZES[0] * Self::WEIGHTS[0];

    /// Combined rank of the component values.
    fn combine(self) -> u32;

    /// Component values of a combined rank.
    fn split(rank: u32) -> Self;

    /// Rank of component `i` within a combined rank.
    #[inline]
    fn digit(rank: u32, i: usize) -> u32 {
        (rank / Self::WEIGHTS[i]) % Self::SIZES[i]
    }
}

/// Type of component `I`.
pub trait ComponentAt<const I: usize>: Components {
    type Type: Semialphabet;
}

/// Mixed-radix weights of `sizes`, failing the build on overflow.
const fn weights(sizes: &[u32]) -> [u32; MAX_COMPONENTS] {
    assert!(sizes.len() <= MAX_COMPONENTS, "too many components");
    let mut out = [1u32; MAX_COMPONENTS];
    let mut i = sizes.len();
    while i > 1 {
        i -= 1;
        out[i - 1] = match out[i].checked_mul(sizes[i]) {
            Some(w) => w,
            None => panic!("tuple size exceeds u32::MAX"),
        };
    }
    assert!(out[0].checked_mul(sizes[0]).is_some(), "tuple size exceeds u32::MAX");
    out
}

const fn padded(sizes: &[u32]) -> [u32; MAX_COMPONENTS] {
    let mut out = [1u32; MAX_COMPONENTS];
    let mut i = 0;
    while i < sizes.len() {
        out[i] = sizes[i];
        i += 1;
    }
    out
}

macro_rules! impl_components {
    (@base $count:literal; [$g0:ident $(, $g:ident)*]; $($i:tt => $t:ident),+) => {
        impl<$g0: Semialphabet $(, $g: Semialphabet)*> Components for ($g0, $($g,)*) {
            const COUNT: usize = $count;
            const NAME: &'static str = <$g0 as Semialphabet>::NAME;
            const SIZES: [u32; MAX_COMPONENTS] = padded(&[<$g0 as Semialphabet>::SIZE $(, <$g as Semialphabet>::SIZE)*]);
            const WEIGHTS: [u32; MAX_COMPONENTS] = weights(&[<$g0 as Semialphabet>::SIZE $(, <$g as Semialphabet>::SIZE)*]);

            #[inline]
            fn combine(self) -> u32 {
                0 $(+ self.$i.to_rank() * Self::WEIGHTS[$i])+
            }

            #[inline]
            fn split(rank: u32) -> Self {
                ($(<$t as Semialphabet>::from_rank(Self::digit(rank, $i)),)+)
            }
        }
    };
    (@at [$($g:ident),+]; $i:tt => $t:ident) => {
        impl<$($g: Semialphabet),+> ComponentAt<$i> for ($($g,)+) {
            type Type = $t;
        }
    };
    ($count:literal; $gens:tt; $($i:tt => $t:ident),+) => {
        impl_components!(@base $count; $gens; $($i => $t),+);
        $( impl_components!(@at $gens; $i => $t); )+
    };
}

impl_components!(2; [A, B]; 0 => A, 1 => B);
impl_components!(3; [A, B, C]; 0 => A, 1 => B, 2 => C);
impl_components!(4; [A, B, C, D]; 0 => A, 1 => B, 2 => C, 3 => D);
impl_components!(5; [A, B, C, D, E]; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);

/// Shorthand for the type of component `I` of `T`.
pub type Component<T, const I: usize> = <T as ComponentAt<I>>::Type;

/// One symbol of each component alphabet in `T`, stored as one rank.
///
/// When the first component is an [`Alphabet`], the tuple is one as well:
/// its characters are those of the first component, and character
/// assignment leaves the other components untouched.
///
/// ```
/// use cyanea_alphabet::{Alphabet, Dna4, Phred42, QualityAlphabet, Semialphabet, Tuple};
///
/// let mut base = Tuple::new((Dna4::G, Phred42::from_phred(7)));
/// assert_eq!(base.to_rank(), 2 * 42 + 7);
///
/// base.set::<0>(Dna4::A);
/// assert_eq!(base.to_rank(), 7);
///
/// base.field::<1>().update(|q| Phred42::from_phred(q.to_phred() + 1));
/// let (n, q) = base.into_components();
/// assert_eq!((n.to_char(), q.to_phred()), (b'A', 8));
/// ```
pub struct Tuple<T> {
    rank: u32,
    _components: PhantomData<fn() -> T>,
}

impl<T: Components> Tuple<T> {
    #[inline]
    fn from_combined(rank: u32) -> Self {
        Self {
            rank,
            _components: PhantomData,
        }
    }

    /// Pack the component values.
    #[inline]
    pub fn new(components: T) -> Self {
        Self::from_combined(components.combine())
    }

    /// Unpack into the component values.
    #[inline]
    pub fn into_components(self) -> T {
        T::split(self.rank)
    }

    /// Value of component `I`.
    #[inline]
    pub fn get<const I: usize>(self) -> Component<T, I>
    where
        T: ComponentAt<I>,
    {
        <Component<T, I> as Semialphabet>::from_rank(T::digit(self.rank, I))
    }

    /// Replace component `I`, leaving the others unchanged.
    ///
    /// Accepts anything convertible into the component type, such as a
    /// same-size nucleotide alphabet.
    #[inline]
    pub fn set<const I: usize>(&mut self, value: impl Into<Component<T, I>>) -> &mut Self
    where
        T: ComponentAt<I>,
    {
        self.set_digit(I, value.into().to_rank());
        self
    }

    /// Copy of `self` with component `I` replaced.
    #[inline]
    pub fn with<const I: usize>(mut self, value: impl Into<Component<T, I>>) -> Self
    where
        T: ComponentAt<I>,
    {
        self.set::<I>(value);
        self
    }

    /// Proxy reference to component `I`.
    #[inline]
    pub fn field<const I: usize>(&mut self) -> Field<'_, T, I>
    where
        T: ComponentAt<I>,
    {
        Field { tuple: self }
    }

    #[inline]
    fn set_digit(&mut self, i: usize, digit: u32) {
        let weight = T::WEIGHTS[i];
        let old = T::digit(self.rank, i);
        self.rank = self.rank - old * weight + digit * weight;
    }
}

/// Read/write view of one component of a [`Tuple`].
///
/// Reading decodes the digit; writing rewrites the combined rank.
pub struct Field<'a, T, const I: usize> {
    tuple: &'a mut Tuple<T>,
}

impl<'a, T, const I: usize> Field<'a, T, I>
where
    T: ComponentAt<I>,
{
    #[inline]
    pub fn get(&self) -> Component<T, I> {
        self.tuple.get::<I>()
    }

    #[inline]
    pub fn set(&mut self, value: impl Into<Component<T, I>>) -> &mut Self {
        self.tuple.set::<I>(value);
        self
    }

    /// Read, transform and write back the component.
    #[inline]
    pub fn update(&mut self, f: impl FnOnce(Component<T, I>) -> Component<T, I>) -> &mut Self {
        let value = f(self.get());
        self.set(value)
    }

    /// Rank of the component within its own alphabet.
    #[inline]
    pub fn rank(&self) -> u32 {
        T::digit(self.tuple.rank, I)
    }

    /// Assign the component by rank (`rank` must be below its size).
    #[inline]
    pub fn assign_rank(&mut self, rank: u32) -> &mut Self {
        debug_assert!(rank < T::SIZES[I], "rank {} out of range for component {}", rank, I);
        self.tuple.set_digit(I, rank);
        self
    }
}

impl<'a, T, const I: usize> Field<'a, T, I>
where
    T: ComponentAt<I>,
    Component<T, I>: Alphabet,
{
    #[inline]
    pub fn to_char(&self) -> u8 {
        self.get().to_char()
    }

    /// Lossy character assignment of the component.
    #[inline]
    pub fn assign_char(&mut self, c: u8) -> &mut Self {
        self.set(<Component<T, I> as Alphabet>::from_char(c))
    }

    /// Strict character assignment of the component; unchanged on error.
    #[inline]
    pub fn assign_char_strict(&mut self, c: u8) -> Result<&mut Self, InvalidCharacter> {
        let value = <Component<T, I> as Alphabet>::from_char_strict(c)?;
        Ok(self.set(value))
    }
}

impl<'a, T, const I: usize> fmt::Debug for Field<'a, T, I>
where
    T: ComponentAt<I>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

impl<T> Clone for Tuple<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Tuple<T> {}

impl<T> PartialEq for Tuple<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl<T> Eq for Tuple<T> {}

impl<T> PartialOrd for Tuple<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Tuple<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl<T> Hash for Tuple<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl<T: Components> Default for Tuple<T> {
    fn default() -> Self {
        Self::from_combined(0)
    }
}

impl<T: Components> From<T> for Tuple<T> {
    #[inline]
    fn from(components: T) -> Self {
        Self::new(components)
    }
}

impl<T: Components> fmt::Debug for Tuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tuple{:?}", self.into_components())
    }
}

impl<T: Components> Semialphabet for Tuple<T> {
    const NAME: &'static str = T::NAME;
    const SIZE: u32 = T::SIZE;

    #[inline]
    fn to_rank(self) -> u32 {
        self.rank
    }

    #[inline]
    fn from_rank(rank: u32) -> Self {
        debug_assert!(rank < T::SIZE, "rank {} out of range for Tuple", rank);
        Self::from_combined(rank)
    }
}

impl<T> Alphabet for Tuple<T>
where
    T: ComponentAt<0>,
    Component<T, 0>: Alphabet,
{
    #[inline]
    fn to_char(self) -> u8 {
        self.get::<0>().to_char()
    }

    /// Symbol whose first component is `c`; the others take rank 0.
    #[inline]
    fn from_char(c: u8) -> Self {
        Self::default().with::<0>(<Component<T, 0> as Alphabet>::from_char(c))
    }

    #[inline]
    fn char_is_valid(c: u8) -> bool {
        <Component<T, 0> as Alphabet>::char_is_valid(c)
    }

    /// Replace only the first component.
    #[inline]
    fn assign_char(&mut self, c: u8) -> &mut Self {
        self.set::<0>(<Component<T, 0> as Alphabet>::from_char(c))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::nucleotide::Dna4;
    use crate::quality::Phred42;
    use crate::structure::DotBracket3;
    use proptest::prelude::*;

    type Triple = Tuple<(Dna4, Phred42, DotBracket3)>;

    proptest! {
        #[test]
        fn digits_recover_component_ranks(n in 0u32..4, q in 0u32..42, s in 0u32..3) {
            let t = Triple::new((Dna4::from_rank(n), Phred42::from_rank(q), DotBracket3::from_rank(s)));
            prop_assert_eq!(t.to_rank(), n * 126 + q * 3 + s);
            prop_assert_eq!(t.get::<0>().to_rank(), n);
            prop_assert_eq!(t.get::<1>().to_rank(), q);
            prop_assert_eq!(t.get::<2>().to_rank(), s);
        }

        #[test]
        fn writing_a_field_changes_only_that_digit(
            n in 0u32..4,
            q in 0u32..42,
            s in 0u32..3,
            new_q in 0u32..42,
        ) {
            let mut t = Triple::new((Dna4::from_rank(n), Phred42::from_rank(q), DotBracket3::from_rank(s)));
            t.field::<1>().assign_rank(new_q);
            prop_assert_eq!(t.get::<0>().to_rank(), n);
            prop_assert_eq!(t.get::<1>().to_rank(), new_q);
            prop_assert_eq!(t.get::<2>().to_rank(), s);
            prop_assert_eq!(t.to_rank(), n * 126 + new_q * 3 + s);
        }
    }
}
