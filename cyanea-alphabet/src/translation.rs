//! Codon translation: NCBI genetic codes and multi-frame translation.
//!
//! Every [`GeneticCode`] holds two tables, both built at compile time:
//!
//! - a 64-entry table indexed by `rank(n1) * 16 + rank(n2) * 4 + rank(n3)`
//!   for alphabets ranking exactly `A C G T/U`;
//! - a 3 375-entry table indexed by [`Dna15`] triplets for every other
//!   nucleotide alphabet. Symbols are first reduced to their [`Dna15`]
//!   representative; a triplet translates to the amino acid shared by all of
//!   its expansions, else to `B` (D/N), `Z` (E/Q) or `J` (I/L), else `X`.
//!
//! Supports 7 NCBI genetic code tables (1, 2, 3, 4, 5, 6, 11).
//!
//! ```
//! use cyanea_alphabet::translation::{GeneticCode, TranslationFrames};
//! use cyanea_alphabet::{seq, Dna4};
//!
//! let dna: Vec<Dna4> = seq::parse(b"ATGGCCTAA");
//! let code = GeneticCode::standard();
//! let protein: Vec<u8> = code.translate(&dna).map(|aa| aa.as_char()).collect();
//! assert_eq!(protein, b"MA*");
//!
//! let lengths: Vec<usize> = code
//!     .translate_frames(&dna, TranslationFrames::FORWARD)
//!     .map(|frame| frame.len())
//!     .collect();
//! assert_eq!(lengths, [3, 2, 2]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use bitflags::bitflags;
use cyanea_core::{CyaneaError, Result};
use tracing::debug;

use crate::alphabet::{Alphabet, Semialphabet};
use crate::aminoacid::Aa27;
use crate::nucleotide::{Dna15, Dna4, NucleotideAlphabet, DNA15_BASES};

/// Number of [`Dna15`] triplets.
const DEGENERATE_CODONS: usize = 15 * 15 * 15;

// ---------------------------------------------------------------------------
// Genetic code table identifier
// ---------------------------------------------------------------------------

/// NCBI genetic code table identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneticCodeId {
    Standard = 1,
    VertebrateMitochondrial = 2,
    YeastMitochondrial = 3,
    MycoplasmaSpiroplasma = 4,
    InvertebrateMitochondrial = 5,
    CiliateNuclear = 6,
    BacterialPlastid = 11,
}

impl GeneticCodeId {
    /// All supported tables, in NCBI order.
    pub const ALL: [Self; 7] = [
        Self::Standard,
        Self::VertebrateMitochondrial,
        Self::YeastMitochondrial,
        Self::MycoplasmaSpiroplasma,
        Self::InvertebrateMitochondrial,
        Self::CiliateNuclear,
        Self::BacterialPlastid,
    ];

    /// Look up a table by its NCBI number.
    pub fn from_ncbi(number: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.ncbi() == number)
            .ok_or_else(|| CyaneaError::InvalidInput(format!("unsupported NCBI genetic code table {number}")))
    }

    /// NCBI table number.
    pub const fn ncbi(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for GeneticCodeId {
    type Error = CyaneaError;

    fn try_from(number: u8) -> Result<Self> {
        Self::from_ncbi(number)
    }
}

// ---------------------------------------------------------------------------
// Genetic code tables
// ---------------------------------------------------------------------------

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT

/// Standard genetic code (NCBI Table 1).
const TABLE1_AA: &[u8; 64] = b"\
    KNKNTTTTRSRSIIMI\
    QHQHPPPPRRRRLLLL\
    EDEDAAAAGGGGVVVV\
    *Y*YSSSS*CWCLFLF";

/// Vertebrate mitochondrial (NCBI Table 2).
/// UGA=Trp, AGA=Stop, AGG=Stop, AUA=Met
const TABLE2_AA: &[u8; 64] = b"\
    KNKNTTTT*S*SMIMI\
    QHQHPPPPRRRRLLLL\
    EDEDAAAAGGGGVVVV\
    *Y*YSSSSWCWCLFLF";

/// Yeast mitochondrial (NCBI Table 3).
/// CUN=Thr, UGA=Trp, AUA=Met
const TABLE3_AA: &[u8; 64] = b"\
    KNKNTTTTRSRSMIMI\
    QHQHPPPPRRRRTTTT\
    EDEDAAAAGGGGVVVV\
    *Y*YSSSSWCWCLFLF";

/// Mycoplasma/Spiroplasma (NCBI Table 4).
/// UGA=Trp
const TABLE4_AA: &[u8; 64] = b"\
    KNKNTTTTRSRSIIMI\
    QHQHPPPPRRRRLLLL\
    EDEDAAAAGGGGVVVV\
    *Y*YSSSSWCWCLFLF";

/// Invertebrate mitochondrial (NCBI Table 5).
/// AGA=Ser, AGG=Ser, UGA=Trp, AUA=Met
const TABLE5_AA: &[u8; 64] = b"\
    KNKNTTTTSSSSMIMI\
    QHQHPPPPRRRRLLLL\
    EDEDAAAAGGGGVVVV\
    *Y*YSSSSWCWCLFLF";

/// Ciliate nuclear (NCBI Table 6).
/// UAA=Gln, UAG=Gln
const TABLE6_AA: &[u8; 64] = b"\
    KNKNTTTTRSRSIIMI\
    QHQHPPPPRRRRLLLL\
    EDEDAAAAGGGGVVVV\
    QYQYSSSS*CWCLFLF";

/// Bacterial, archaeal and plant plastid (NCBI Table 11).
/// Same amino acids as the standard code, more start codons.
const TABLE11_AA: &[u8; 64] = TABLE1_AA;

const TABLE1_STARTS: &[&[u8; 3]] = &[b"TTG", b"CTG", b"ATG"];
const TABLE2_STARTS: &[&[u8; 3]] = &[b"ATT", b"ATC", b"ATA", b"ATG", b"GTG"];
const TABLE3_STARTS: &[&[u8; 3]] = &[b"ATA", b"ATG"];
const TABLE4_STARTS: &[&[u8; 3]] = &[b"TTA", b"TTG", b"CTG", b"ATT", b"ATC", b"ATA", b"ATG", b"GTG"];
const TABLE5_STARTS: &[&[u8; 3]] = &[b"TTG", b"ATT", b"ATC", b"ATA", b"ATG", b"GTG"];
const TABLE6_STARTS: &[&[u8; 3]] = &[b"ATG"];
const TABLE11_STARTS: &[&[u8; 3]] = &[b"TTG", b"CTG", b"ATT", b"ATC", b"ATA", b"ATG", b"GTG"];

pub static STANDARD: GeneticCode =
    GeneticCode::build(GeneticCodeId::Standard, "Standard", TABLE1_AA, TABLE1_STARTS);
pub static VERTEBRATE_MITOCHONDRIAL: GeneticCode = GeneticCode::build(
    GeneticCodeId::VertebrateMitochondrial,
    "Vertebrate Mitochondrial",
    TABLE2_AA,
    TABLE2_STARTS,
);
pub static YEAST_MITOCHONDRIAL: GeneticCode = GeneticCode::build(
    GeneticCodeId::YeastMitochondrial,
    "Yeast Mitochondrial",
    TABLE3_AA,
    TABLE3_STARTS,
);
pub static MYCOPLASMA_SPIROPLASMA: GeneticCode = GeneticCode::build(
    GeneticCodeId::MycoplasmaSpiroplasma,
    "Mycoplasma/Spiroplasma",
    TABLE4_AA,
    TABLE4_STARTS,
);
pub static INVERTEBRATE_MITOCHONDRIAL: GeneticCode = GeneticCode::build(
    GeneticCodeId::InvertebrateMitochondrial,
    "Invertebrate Mitochondrial",
    TABLE5_AA,
    TABLE5_STARTS,
);
pub static CILIATE_NUCLEAR: GeneticCode =
    GeneticCode::build(GeneticCodeId::CiliateNuclear, "Ciliate Nuclear", TABLE6_AA, TABLE6_STARTS);
pub static BACTERIAL_PLASTID: GeneticCode = GeneticCode::build(
    GeneticCodeId::BacterialPlastid,
    "Bacterial/Plant Plastid",
    TABLE11_AA,
    TABLE11_STARTS,
);

// ---------------------------------------------------------------------------
// Compile-time table construction
// ---------------------------------------------------------------------------

const fn codon_index_const(codon: &[u8; 3]) -> usize {
    Dna4::lit_char(codon[0]).rank() as usize * 16
        + Dna4::lit_char(codon[1]).rank() as usize * 4
        + Dna4::lit_char(codon[2]).rank() as usize
}

const fn amino_acid_of_rank(rank: u32) -> Aa27 {
    Aa27::lit_char(Aa27::TABLES.char_of(rank as u8))
}

const fn amino_acid_bit(aa: Aa27) -> u32 {
    1 << aa.rank()
}

/// Single amino acid (or the closest ambiguity code) for a set of amino
/// acids given as a bitmask of [`Aa27`] ranks.
const fn resolve_amino_acids(set: u32) -> Aa27 {
    let asx = amino_acid_bit(Aa27::D) | amino_acid_bit(Aa27::N);
    let glx = amino_acid_bit(Aa27::E) | amino_acid_bit(Aa27::Q);
    let xle = amino_acid_bit(Aa27::I) | amino_acid_bit(Aa27::L);

    if set.count_ones() == 1 {
        amino_acid_of_rank(set.trailing_zeros())
    } else if set & !asx == 0 {
        Aa27::B
    } else if set & !glx == 0 {
        Aa27::Z
    } else if set & !xle == 0 {
        Aa27::J
    } else {
        Aa27::X
    }
}

/// Translation of every [`Dna15`] triplet, indexed by
/// `r1 * 225 + r2 * 15 + r3`.
///
/// The amino acid sets are unioned one codon position at a time (third,
/// then second, then first), which keeps compile-time evaluation linear in
/// the table size.
const fn degenerate_table(amino_acids: &[Aa27; 64]) -> [Aa27; DEGENERATE_CODONS] {
    // third[a][b][k]: bases a, b followed by Dna15 rank k
    let mut third = [[[0u32; 15]; 4]; 4];
    let mut a = 0;
    while a < 4 {
        let mut b = 0;
        while b < 4 {
            let mut k = 0;
            while k < 15 {
                let mut set = 0;
                let mut c = 0;
                while c < 4 {
                    if DNA15_BASES[k] & (1 << c) != 0 {
                        set |= amino_acid_bit(amino_acids[a * 16 + b * 4 + c]);
                    }
                    c += 1;
                }
                third[a][b][k] = set;
                k += 1;
            }
            b += 1;
        }
        a += 1;
    }

    // second[a][j][k]: base a followed by Dna15 ranks j, k
    let mut second = [[[0u32; 15]; 15]; 4];
    let mut a = 0;
    while a < 4 {
        let mut j = 0;
        while j < 15 {
            let mut k = 0;
            while k < 15 {
                let mut set = 0;
                let mut b = 0;
                while b < 4 {
                    if DNA15_BASES[j] & (1 << b) != 0 {
                        set |= third[a][b][k];
                    }
                    b += 1;
                }
                second[a][j][k] = set;
                k += 1;
            }
            j += 1;
        }
        a += 1;
    }

    let mut out = [Aa27::X; DEGENERATE_CODONS];
    let mut i = 0;
    while i < 15 {
        let mut j = 0;
        while j < 15 {
            let mut k = 0;
            while k < 15 {
                let mut set = 0;
                let mut a = 0;
                while a < 4 {
                    if DNA15_BASES[i] & (1 << a) != 0 {
                        set |= second[a][j][k];
                    }
                    a += 1;
                }
                out[i * 225 + j * 15 + k] = resolve_amino_acids(set);
                k += 1;
            }
            j += 1;
        }
        i += 1;
    }
    out
}

// ---------------------------------------------------------------------------
// GeneticCode
// ---------------------------------------------------------------------------

/// A genetic code translation table.
///
/// The seven supported codes are statics; get one with
/// [`GeneticCode::from_id`] or [`GeneticCode::standard`].
pub struct GeneticCode {
    id: GeneticCodeId,
    name: &'static str,
    amino_acids: [Aa27; 64],
    starts: [bool; 64],
    degenerate: [Aa27; DEGENERATE_CODONS],
}

impl GeneticCode {
    const fn build(
        id: GeneticCodeId,
        name: &'static str,
        amino_acids: &[u8; 64],
        start_codons: &[&[u8; 3]],
    ) -> Self {
        let amino_acids = Aa27::lit(amino_acids);

        let mut starts = [false; 64];
        let mut i = 0;
        while i < start_codons.len() {
            starts[codon_index_const(start_codons[i])] = true;
            i += 1;
        }

        Self {
            id,
            name,
            amino_acids,
            starts,
            degenerate: degenerate_table(&amino_acids),
        }
    }

    /// The genetic code with NCBI identifier `id`.
    pub fn from_id(id: GeneticCodeId) -> &'static Self {
        match id {
            GeneticCodeId::Standard => &STANDARD,
            GeneticCodeId::VertebrateMitochondrial => &VERTEBRATE_MITOCHONDRIAL,
            GeneticCodeId::YeastMitochondrial => &YEAST_MITOCHONDRIAL,
            GeneticCodeId::MycoplasmaSpiroplasma => &MYCOPLASMA_SPIROPLASMA,
            GeneticCodeId::InvertebrateMitochondrial => &INVERTEBRATE_MITOCHONDRIAL,
            GeneticCodeId::CiliateNuclear => &CILIATE_NUCLEAR,
            GeneticCodeId::BacterialPlastid => &BACTERIAL_PLASTID,
        }
    }

    /// The standard genetic code (NCBI Table 1).
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Table identifier.
    pub fn id(&self) -> GeneticCodeId {
        self.id
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Translate one triplet.
    ///
    /// Alphabets ranking exactly `A C G T/U`
    /// ([`NucleotideAlphabet::ACGT_RANKS`]) index the codon table directly.
    /// Any other nucleotide alphabet is reduced to [`Dna15`] first; ambiguity
    /// the triplet cannot resolve yields an ambiguity code or `X`.
    #[inline]
    pub fn translate_triplet<N: NucleotideAlphabet>(&self, n1: N, n2: N, n3: N) -> Aa27 {
        if N::ACGT_RANKS {
            let idx = n1.to_rank() * 16 + n2.to_rank() * 4 + n3.to_rank();
            self.amino_acids[idx as usize]
        } else {
            self.translate_dna15(n1.to_dna15(), n2.to_dna15(), n3.to_dna15())
        }
    }

    #[inline]
    fn translate_dna15(&self, n1: Dna15, n2: Dna15, n3: Dna15) -> Aa27 {
        let idx = n1.to_rank() * 225 + n2.to_rank() * 15 + n3.to_rank();
        self.degenerate[idx as usize]
    }

    /// Translate a codon given as characters.
    ///
    /// Accepts DNA and RNA in either case, and IUPAC ambiguity codes.
    /// Returns `None` if `codon` is not three bytes long. Stop codons
    /// translate to [`Aa27::TERMINATOR`].
    pub fn translate_codon(&self, codon: &[u8]) -> Option<Aa27> {
        match *codon {
            [c1, c2, c3] => Some(self.translate_dna15(
                Dna15::from_char(c1),
                Dna15::from_char(c2),
                Dna15::from_char(c3),
            )),
            _ => None,
        }
    }

    /// Check whether a codon is a start codon in this table.
    ///
    /// Only unambiguous codons can be starts.
    pub fn is_start(&self, codon: &[u8]) -> bool {
        codon_index(codon).map_or(false, |idx| self.starts[idx])
    }

    /// Check whether a codon is a stop codon in this table.
    ///
    /// An ambiguous codon counts when every expansion is a stop (e.g. `TAR`).
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        self.translate_codon(codon)
            .map_or(false, |aa| aa.is_terminator())
    }

    /// All start codons for this table (as DNA), in codon order.
    pub fn start_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&i| self.starts[i])
            .map(index_to_codon)
            .collect()
    }

    /// All stop codons for this table (as DNA), in codon order.
    pub fn stop_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&i| self.amino_acids[i].is_terminator())
            .map(index_to_codon)
            .collect()
    }

    /// Lazily translate the first forward frame of `seq`.
    ///
    /// Stop codons are kept as [`Aa27::TERMINATOR`]; a trailing partial
    /// codon is ignored.
    pub fn translate<'a, N: NucleotideAlphabet>(&'a self, seq: &'a [N]) -> TranslatedFrame<'a, N> {
        TranslatedFrame::new(self, seq, Frame::Forward0)
    }

    /// Lazily translate one frame of `seq`.
    pub fn translate_frame<'a, N: NucleotideAlphabet>(
        &'a self,
        seq: &'a [N],
        frame: Frame,
    ) -> TranslatedFrame<'a, N> {
        TranslatedFrame::new(self, seq, frame)
    }

    /// Lazily translate every frame selected in `frames`, forward frames
    /// first.
    pub fn translate_frames<'a, N: NucleotideAlphabet>(
        &'a self,
        seq: &'a [N],
        frames: TranslationFrames,
    ) -> impl Iterator<Item = TranslatedFrame<'a, N>> + 'a {
        debug!(code = self.name, ?frames, len = seq.len(), "planning multi-frame translation");
        Frame::ALL
            .into_iter()
            .filter(move |frame| frames.contains(frame.flag()))
            .map(move |frame| TranslatedFrame::new(self, seq, frame))
    }

    /// Eagerly translate every frame selected in `frames`, one rayon task per
    /// frame.
    #[cfg(feature = "parallel")]
    pub fn translate_frames_par<N>(&self, seq: &[N], frames: TranslationFrames) -> Vec<(Frame, Vec<Aa27>)>
    where
        N: NucleotideAlphabet + Send + Sync,
    {
        use rayon::prelude::*;

        debug!(code = self.name, ?frames, len = seq.len(), "translating frames in parallel");
        let selected: Vec<Frame> = frames.frames().collect();
        selected
            .into_par_iter()
            .map(|frame| (frame, TranslatedFrame::new(self, seq, frame).collect()))
            .collect()
    }
}

impl fmt::Debug for GeneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneticCode")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Convert an unambiguous 3-base codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    match *codon {
        [c1, c2, c3] => {
            let b1 = Dna4::from_char_strict(c1).ok()?;
            let b2 = Dna4::from_char_strict(c2).ok()?;
            let b3 = Dna4::from_char_strict(c3).ok()?;
            Some(b1.rank() as usize * 16 + b2.rank() as usize * 4 + b3.rank() as usize)
        }
        _ => None,
    }
}

/// Convert an index in [0, 64) back to a codon (as DNA: A/C/G/T).
fn index_to_codon(idx: usize) -> [u8; 3] {
    let base = |rank: usize| Dna4::from_rank(rank as u32).to_char();
    [base(idx >> 4), base((idx >> 2) & 3), base(idx & 3)]
}

/// Translate one triplet with the standard genetic code.
///
/// ```
/// use cyanea_alphabet::translation::translate_triplet;
/// use cyanea_alphabet::{Aa27, Dna4};
///
/// assert_eq!(translate_triplet(Dna4::C, Dna4::T, Dna4::A), Aa27::L);
/// ```
#[inline]
pub fn translate_triplet<N: NucleotideAlphabet>(n1: N, n2: N, n3: N) -> Aa27 {
    STANDARD.translate_triplet(n1, n2, n3)
}

// ---------------------------------------------------------------------------
// Frames
// ---------------------------------------------------------------------------

/// One of the six reading frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frame {
    Forward0,
    Forward1,
    Forward2,
    Reverse0,
    Reverse1,
    Reverse2,
}

impl Frame {
    pub const ALL: [Self; 6] = [
        Self::Forward0,
        Self::Forward1,
        Self::Forward2,
        Self::Reverse0,
        Self::Reverse1,
        Self::Reverse2,
    ];

    /// Offset of the first codon (in the reverse complement for reverse
    /// frames).
    pub const fn offset(self) -> usize {
        match self {
            Self::Forward0 | Self::Reverse0 => 0,
            Self::Forward1 | Self::Reverse1 => 1,
            Self::Forward2 | Self::Reverse2 => 2,
        }
    }

    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::Reverse0 | Self::Reverse1 | Self::Reverse2)
    }

    /// The flag selecting this frame.
    pub const fn flag(self) -> TranslationFrames {
        match self {
            Self::Forward0 => TranslationFrames::FORWARD_0,
            Self::Forward1 => TranslationFrames::FORWARD_1,
            Self::Forward2 => TranslationFrames::FORWARD_2,
            Self::Reverse0 => TranslationFrames::REVERSE_0,
            Self::Reverse1 => TranslationFrames::REVERSE_1,
            Self::Reverse2 => TranslationFrames::REVERSE_2,
        }
    }
}

bitflags! {
    /// A set of reading frames to translate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TranslationFrames: u8 {
        const FORWARD_0 = 1;
        const FORWARD_1 = 1 << 1;
        const FORWARD_2 = 1 << 2;
        const REVERSE_0 = 1 << 3;
        const REVERSE_1 = 1 << 4;
        const REVERSE_2 = 1 << 5;
        const FORWARD = Self::FORWARD_0.bits() | Self::FORWARD_1.bits() | Self::FORWARD_2.bits();
        const REVERSE = Self::REVERSE_0.bits() | Self::REVERSE_1.bits() | Self::REVERSE_2.bits();
        const SIX_FRAME = Self::FORWARD.bits() | Self::REVERSE.bits();
    }
}

impl TranslationFrames {
    /// Parse a raw frame mask, rejecting unknown bits.
    pub fn from_mask(bits: u8) -> Result<Self> {
        Self::from_bits(bits)
            .ok_or_else(|| CyaneaError::InvalidInput(format!("invalid translation frame bits {bits:#04x}")))
    }

    /// Selected frames, forward frames first.
    pub fn frames(self) -> impl Iterator<Item = Frame> {
        Frame::ALL.into_iter().filter(move |frame| self.contains(frame.flag()))
    }
}

impl From<Frame> for TranslationFrames {
    fn from(frame: Frame) -> Self {
        frame.flag()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TranslationFrames {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TranslationFrames {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Self::from_bits(bits)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid translation frame bits: {bits:#x}")))
    }
}

// ---------------------------------------------------------------------------
// Lazy frame translation
// ---------------------------------------------------------------------------

/// Lazy translation of one reading frame.
///
/// Yields `⌊(n − offset) / 3⌋` amino acids for an input of length `n`.
/// Reverse frames read the reverse complement of the input without
/// materializing it.
#[derive(Clone)]
pub struct TranslatedFrame<'a, N> {
    code: &'a GeneticCode,
    seq: &'a [N],
    frame: Frame,
    front: usize,
    back: usize,
}

impl<'a, N: NucleotideAlphabet> TranslatedFrame<'a, N> {
    fn new(code: &'a GeneticCode, seq: &'a [N], frame: Frame) -> Self {
        Self {
            code,
            seq,
            frame,
            front: 0,
            back: seq.len().saturating_sub(frame.offset()) / 3,
        }
    }

    /// The frame being translated.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Amino acid of codon `i` of this frame.
    #[inline]
    fn codon(&self, i: usize) -> Aa27 {
        let start = self.frame.offset() + 3 * i;
        if self.frame.is_reverse() {
            let p = self.seq.len() - 1 - start;
            self.code.translate_triplet(
                self.seq[p].complement(),
                self.seq[p - 1].complement(),
                self.seq[p - 2].complement(),
            )
        } else {
            self.code
                .translate_triplet(self.seq[start], self.seq[start + 1], self.seq[start + 2])
        }
    }
}

impl<'a, N: NucleotideAlphabet> Iterator for TranslatedFrame<'a, N> {
    type Item = Aa27;

    #[inline]
    fn next(&mut self) -> Option<Aa27> {
        if self.front == self.back {
            return None;
        }
        let aa = self.codon(self.front);
        self.front += 1;
        Some(aa)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, N: NucleotideAlphabet> DoubleEndedIterator for TranslatedFrame<'a, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Aa27> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.codon(self.back))
    }
}

impl<'a, N: NucleotideAlphabet> ExactSizeIterator for TranslatedFrame<'a, N> {}

impl<'a, N: NucleotideAlphabet> FusedIterator for TranslatedFrame<'a, N> {}

impl<'a, N> fmt::Debug for TranslatedFrame<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatedFrame")
            .field("code", &self.code.name)
            .field("frame", &self.frame)
            .field("remaining", &(self.back - self.front))
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::nucleotide::Dna15;
    use proptest::prelude::*;

    fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<Dna4>> {
        proptest::collection::vec(
            prop_oneof![Just(Dna4::A), Just(Dna4::C), Just(Dna4::G), Just(Dna4::T)],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn translation_is_deterministic(r1 in 0u32..15, r2 in 0u32..15, r3 in 0u32..15) {
            let (n1, n2, n3) = (Dna15::from_rank(r1), Dna15::from_rank(r2), Dna15::from_rank(r3));
            let code = GeneticCode::standard();
            prop_assert_eq!(code.translate_triplet(n1, n2, n3), code.translate_triplet(n1, n2, n3));
        }

        #[test]
        fn frame_lengths(seq in dna_seq(60)) {
            let code = GeneticCode::standard();
            for frame in code.translate_frames(&seq, TranslationFrames::SIX_FRAME) {
                let expected = seq.len().saturating_sub(frame.frame().offset()) / 3;
                prop_assert_eq!(frame.len(), expected);
                prop_assert_eq!(frame.count(), expected);
            }
        }

        #[test]
        fn reverse_frame_equals_forward_frame_of_reverse_complement(seq in dna_seq(60)) {
            let code = GeneticCode::standard();
            let rc: Vec<Dna4> = seq.iter().rev().map(|n| n.complement()).collect();
            for (reverse, forward) in [
                (Frame::Reverse0, Frame::Forward0),
                (Frame::Reverse1, Frame::Forward1),
                (Frame::Reverse2, Frame::Forward2),
            ] {
                let a: Vec<Aa27> = code.translate_frame(&seq, reverse).collect();
                let b: Vec<Aa27> = code.translate_frame(&rc, forward).collect();
                prop_assert_eq!(a, b);
            }
        }
    }
}
