//! Phred quality score alphabets.
//!
//! Each alphabet covers a contiguous range of quality scores whose characters
//! are the contiguous ASCII range starting at the alphabet's offset
//! character. Characters outside the range clamp to the nearest end under
//! lossy assignment and are rejected under strict assignment.
//!
//! | Alphabet | Scores | Characters |
//! |----------|--------|------------|
//! | [`Phred42`] | 0–41 | `!`–`J` (Phred+33, Illumina 1.8+) |
//! | [`Phred63`] | 0–62 | `!`–`_` |
//! | [`Phred94`] | 0–93 | `!`–`~` (full Phred+33 range) |
//! | [`Phred68Solexa`] | −5–62 | `;`–`~` (Solexa+64) |

use crate::alphabet::{Alphabet, Semialphabet};
use crate::table::CharTables;

/// Operations shared by quality alphabets.
pub trait QualityAlphabet: Alphabet {
    /// Quality score of rank 0.
    const PHRED_OFFSET: i8;

    /// Quality score of this symbol.
    #[inline]
    fn to_phred(self) -> i8 {
        (self.to_rank() as i32 + Self::PHRED_OFFSET as i32) as i8
    }

    /// Symbol for a quality score, clamped into the alphabet's range.
    #[inline]
    fn from_phred(phred: i8) -> Self {
        let rank = (phred as i32 - Self::PHRED_OFFSET as i32).clamp(0, Self::SIZE as i32 - 1);
        Self::from_rank(rank as u32)
    }

    /// Overwrite this symbol with the (clamped) quality score `phred`.
    #[inline]
    fn assign_phred(&mut self, phred: i8) -> &mut Self {
        *self = Self::from_phred(phred);
        self
    }

    /// Probability that the base call is wrong: 10^(-Q/10).
    fn error_probability(self) -> f64 {
        10.0_f64.powf(-(self.to_phred() as f64) / 10.0)
    }

    /// The symbol of another quality alphabet with the same score (clamped).
    #[inline]
    fn convert<Q: QualityAlphabet>(self) -> Q {
        Q::from_phred(self.to_phred())
    }
}

table_alphabet! {
    /// Phred scores 0–41 in Phred+33 encoding (`!`–`J`).
    pub struct Phred42 = CharTables::contiguous(b'!', 42);
}

table_alphabet! {
    /// Phred scores 0–62 in Phred+33 encoding (`!`–`_`).
    pub struct Phred63 = CharTables::contiguous(b'!', 63);
}

table_alphabet! {
    /// Phred scores 0–93 in Phred+33 encoding (`!`–`~`).
    pub struct Phred94 = CharTables::contiguous(b'!', 94);
}

table_alphabet! {
    /// Solexa scores −5–62 in Solexa+64 encoding (`;`–`~`).
    pub struct Phred68Solexa = CharTables::contiguous(b';', 68);
}

impl QualityAlphabet for Phred42 {
    const PHRED_OFFSET: i8 = 0;
}

impl QualityAlphabet for Phred63 {
    const PHRED_OFFSET: i8 = 0;
}

impl QualityAlphabet for Phred94 {
    const PHRED_OFFSET: i8 = 0;
}

impl QualityAlphabet for Phred68Solexa {
    const PHRED_OFFSET: i8 = -5;

    /// Solexa scores are log-odds: Q = -10 log10(p / (1 - p)).
    fn error_probability(self) -> f64 {
        let odds = 10.0_f64.powf(-(self.to_phred() as f64) / 10.0);
        odds / (1.0 + odds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::check_alphabet_laws;

    #[test]
    fn quality_alphabets_obey_laws() {
        check_alphabet_laws::<Phred42>();
        check_alphabet_laws::<Phred63>();
        check_alphabet_laws::<Phred94>();
        check_alphabet_laws::<Phred68Solexa>();
    }

    #[test]
    fn phred33_characters() {
        // '!' = 33 → Q0, 'I' = 73 → Q40
        assert_eq!(Phred42::from_char(b'!').to_phred(), 0);
        assert_eq!(Phred42::from_char(b'I').to_phred(), 40);
        assert_eq!(Phred42::from_phred(40).to_char(), b'I');
        assert_eq!(Phred94::from_phred(93).to_char(), b'~');
    }

    #[test]
    fn out_of_range_characters_clamp() {
        assert_eq!(Phred42::from_char(b'~').to_phred(), 41);
        assert_eq!(Phred42::from_char(b' ').to_phred(), 0);
        assert!(Phred42::from_char_strict(b'K').is_err());
        assert!(Phred42::from_char_strict(b'J').is_ok());
    }

    #[test]
    fn lowercase_is_a_different_score() {
        assert_ne!(Phred94::from_char(b'a'), Phred94::from_char(b'A'));
    }

    #[test]
    fn out_of_range_scores_clamp() {
        assert_eq!(Phred42::from_phred(60).to_phred(), 41);
        assert_eq!(Phred42::from_phred(-3).to_phred(), 0);
        assert_eq!(Phred68Solexa::from_phred(-10).to_phred(), -5);
    }

    #[test]
    fn solexa_offsets() {
        assert_eq!(Phred68Solexa::SIZE, 68);
        assert_eq!(Phred68Solexa::from_char(b';').to_phred(), -5);
        assert_eq!(Phred68Solexa::from_char(b'@').to_phred(), 0);
        assert_eq!(Phred68Solexa::from_phred(62).to_char(), b'~');
    }

    #[test]
    fn error_probability() {
        let p = Phred42::from_phred(10).error_probability();
        assert!((p - 0.1).abs() < 1e-10);
        let p = Phred42::from_phred(20).error_probability();
        assert!((p - 0.01).abs() < 1e-10);
        // Solexa Q0 means even odds
        let p = Phred68Solexa::from_phred(0).error_probability();
        assert!((p - 0.5).abs() < 1e-10);
    }

    #[test]
    fn convert_between_quality_alphabets() {
        let high = Phred94::from_phred(70);
        assert_eq!(high.convert::<Phred42>().to_phred(), 41);
        assert_eq!(Phred42::from_phred(30).convert::<Phred63>().to_phred(), 30);
        assert_eq!(Phred68Solexa::from_phred(-5).convert::<Phred42>().to_phred(), 0);
    }

    #[test]
    fn assign_phred_in_place() {
        let mut q = Phred42::default();
        q.assign_phred(25);
        assert_eq!(q.to_char(), b':');
    }
}
