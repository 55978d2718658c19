//! Rank-encoded biological alphabets for the Cyanea bioinformatics ecosystem.
//!
//! Every symbol is a small `Copy` value identified by a dense rank, with a
//! canonical character and compile-time lookup tables for both directions:
//!
//! - **Capability set**: [`Semialphabet`] and [`Alphabet`], adapters for
//!   foreign types ([`AlphabetAdapter`]) and defaults for `u8`/`u16`
//! - **Nucleotides**: [`Dna4`], [`Dna5`], [`Dna15`], [`Dna16Sam`],
//!   [`Dna3Bs`] and their RNA counterparts
//! - **Amino acids**: [`Aa27`], [`Aa20`], [`Aa10Murphy`], [`Aa10Li`]
//! - **Quality scores**: [`Phred42`], [`Phred63`], [`Phred94`],
//!   [`Phred68Solexa`]
//! - **Structure**: [`DotBracket3`], [`Wuss51`], [`Dssp9`]
//! - **Other**: [`Gap`], [`CigarOp`]
//! - **Composites**: [`Variant`] (one of several alphabets) and [`Tuple`]
//!   (one of each), with [`Gapped`] and [`Qualified`] for the usual cases
//! - **Translation**: NCBI genetic codes and lazy six-frame translation
//!
//! # Example
//!
//! ```
//! use cyanea_alphabet::{Alphabet, Dna4, Semialphabet};
//!
//! // Lowercase folds to uppercase, U reads as T
//! assert_eq!(Dna4::from_char(b'a'), Dna4::from_char(b'A'));
//! assert_eq!(Dna4::from_char(b'U'), Dna4::T);
//!
//! // Ambiguity codes collapse under lossy assignment but fail strict assignment
//! assert_eq!(Dna4::from_char(b'N').to_char(), b'A');
//! let mut base = Dna4::G;
//! assert!(base.assign_char_strict(b'N').is_err());
//! assert_eq!(base, Dna4::G);
//!
//! // Literals are checked at compile time
//! const START: [Dna4; 3] = Dna4::lit(b"ATG");
//! assert_eq!(START.map(|n| n.to_rank()), [0, 3, 2]);
//! ```

#[macro_use]
mod macros;

pub mod alphabet;
pub mod aminoacid;
pub mod cigar;
pub mod composite;
pub mod gap;
pub mod nucleotide;
pub mod quality;
pub mod seq;
pub mod structure;
pub mod table;
pub mod translation;

// Re-export the capability set
pub use alphabet::{convert_by_rank, Adapted, Alphabet, AlphabetAdapter, Descriptor, Semialphabet};

// Re-export concrete alphabets and their traits
pub use aminoacid::{Aa10Li, Aa10Murphy, Aa20, Aa27, AminoAcidAlphabet};
pub use cigar::CigarOp;
pub use gap::Gap;
pub use nucleotide::{Dna15, Dna16Sam, Dna3Bs, Dna4, Dna5, NucleotideAlphabet, Rna15, Rna4, Rna5};
pub use quality::{Phred42, Phred63, Phred68Solexa, Phred94, QualityAlphabet};
pub use structure::{DotBracket3, Dssp9, RnaStructureAlphabet, SecondaryStructure, Wuss51};

// Re-export composites
pub use composite::{Gapped, Qualified, StructuredAa, StructuredRna, Tuple, Variant};

// Re-export translation
pub use translation::{translate_triplet, Frame, GeneticCode, GeneticCodeId, TranslationFrames};

// Re-export error types
pub use cyanea_core::{CyaneaError, InvalidCharacter, Result};
