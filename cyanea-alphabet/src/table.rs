//! Compile-time rank/char lookup tables.
//!
//! [`CharTables`] holds the three tables behind every table-backed alphabet:
//! `rank → char`, `char → rank` and the strict-validity mask. All of them are
//! built by `const fn`s, so each alphabet's tables are constants baked into the
//! binary and lookups are single indexed loads.
//!
//! Building a letter alphabet:
//!
//! ```
//! use cyanea_alphabet::table::CharTables;
//!
//! // Purine/pyrimidine alphabet: canonical R and Y, everything else reads as R.
//! const RY: CharTables = CharTables::new(b"RY", 0)
//!     .alias(b'A', 0)
//!     .alias(b'G', 0)
//!     .alias(b'C', 1)
//!     .alias(b'T', 1);
//!
//! assert_eq!(RY.rank_of(b'y'), 1);
//! assert_eq!(RY.rank_of(b'g'), 0);
//! assert!(RY.is_valid(b'r'));
//! assert!(!RY.is_valid(b'G'));
//! ```

/// Number of distinct input code units considered by char conversion.
pub const CHAR_DOMAIN: usize = 256;

/// Rank/char lookup tables for an alphabet of at most 256 symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharTables {
    size: u16,
    rank_to_char: [u8; CHAR_DOMAIN],
    char_to_rank: [u8; CHAR_DOMAIN],
    valid: [bool; CHAR_DOMAIN],
}

impl CharTables {
    /// Build tables for a letter alphabet.
    ///
    /// `symbols` lists the canonical character of each rank in rank order.
    /// Each canonical character maps to its rank, and so does its lowercase
    /// form unless that lowercase form is itself canonical. Every other byte
    /// maps to `unknown`. Only canonical characters and their folded lowercase
    /// forms are valid.
    ///
    /// Panics (at compile time when used in a constant) if `symbols` is empty,
    /// longer than 256, contains duplicates, or `unknown` is out of range.
    pub const fn new(symbols: &[u8], unknown: u8) -> Self {
        let mut tables = Self::canonical(symbols, unknown);

        let mut r = 0;
        while r < symbols.len() {
            let c = symbols[r];
            let lower = c.to_ascii_lowercase();
            if lower != c && !tables.is_canonical(lower) {
                tables.char_to_rank[lower as usize] = r as u8;
                tables.valid[lower as usize] = true;
            }
            r += 1;
        }
        tables
    }

    /// Build tables with no case folding.
    ///
    /// Used by alphabets whose upper- and lowercase letters carry different
    /// meaning (structure notations, punctuation-only alphabets).
    pub const fn case_sensitive(symbols: &[u8], unknown: u8) -> Self {
        Self::canonical(symbols, unknown)
    }

    /// Build tables for `size` symbols whose characters are the contiguous
    /// bytes starting at `first`.
    ///
    /// Bytes below the range map to rank 0, bytes above it to the last rank.
    /// Only bytes inside the range are valid. This is the layout of the Phred
    /// quality alphabets.
    pub const fn contiguous(first: u8, size: u16) -> Self {
        assert!(size >= 1 && size as usize <= CHAR_DOMAIN, "alphabet size must be in 1..=256");
        assert!(first as usize + size as usize <= CHAR_DOMAIN, "character range exceeds the char domain");

        let mut rank_to_char = [0u8; CHAR_DOMAIN];
        let mut char_to_rank = [0u8; CHAR_DOMAIN];
        let mut valid = [false; CHAR_DOMAIN];
        let last = first as usize + size as usize - 1;

        let mut c = 0;
        while c < CHAR_DOMAIN {
            if c < first as usize {
                char_to_rank[c] = 0;
            } else if c > last {
                char_to_rank[c] = (size - 1) as u8;
            } else {
                let r = c - first as usize;
                char_to_rank[c] = r as u8;
                rank_to_char[r] = c as u8;
                valid[c] = true;
            }
            c += 1;
        }

        Self {
            size,
            rank_to_char,
            char_to_rank,
            valid,
        }
    }

    /// Map `c` (and its lowercase form) to `rank` without making it valid.
    ///
    /// This is how ambiguity codes are collapsed onto one representative.
    /// Panics if `c` is a canonical character or `rank` is out of range.
    pub const fn alias(self, c: u8, rank: u8) -> Self {
        self.map_char(c, rank, false)
    }

    /// Map `c` (and its lowercase form) to `rank` and mark it valid.
    ///
    /// For characters that name the same symbol exactly, such as `U` in a
    /// DNA alphabet.
    pub const fn synonym(self, c: u8, rank: u8) -> Self {
        self.map_char(c, rank, true)
    }

    /// Number of symbols.
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Canonical character of `rank`.
    #[inline]
    pub const fn char_of(&self, rank: u8) -> u8 {
        self.rank_to_char[rank as usize]
    }

    /// Rank assigned to `c` by lossy conversion.
    #[inline]
    pub const fn rank_of(&self, c: u8) -> u8 {
        self.char_to_rank[c as usize]
    }

    /// Whether `c` converts to a rank without loss.
    #[inline]
    pub const fn is_valid(&self, c: u8) -> bool {
        self.valid[c as usize]
    }

    /// Whether `c` is the canonical character of some rank.
    pub const fn is_canonical(&self, c: u8) -> bool {
        let mut r = 0;
        while r < self.size as usize {
            if self.rank_to_char[r] == c {
                return true;
            }
            r += 1;
        }
        false
    }

    const fn canonical(symbols: &[u8], unknown: u8) -> Self {
        assert!(
            !symbols.is_empty() && symbols.len() <= CHAR_DOMAIN,
            "alphabet size must be in 1..=256"
        );
        assert!((unknown as usize) < symbols.len(), "unknown rank out of range");

        let mut rank_to_char = [0u8; CHAR_DOMAIN];
        let mut char_to_rank = [unknown; CHAR_DOMAIN];
        let mut valid = [false; CHAR_DOMAIN];

        let mut r = 0;
        while r < symbols.len() {
            let c = symbols[r];
            assert!(!valid[c as usize], "duplicate canonical character");
            rank_to_char[r] = c;
            char_to_rank[c as usize] = r as u8;
            valid[c as usize] = true;
            r += 1;
        }

        Self {
            size: symbols.len() as u16,
            rank_to_char,
            char_to_rank,
            valid,
        }
    }

    const fn map_char(mut self, c: u8, rank: u8, valid: bool) -> Self {
        assert!((rank as u16) < self.size, "alias rank out of range");
        assert!(!self.is_canonical(c), "cannot alias a canonical character");
        self.char_to_rank[c as usize] = rank;
        self.valid[c as usize] = valid;

        let lower = c.to_ascii_lowercase();
        if lower != c && !self.is_canonical(lower) {
            self.char_to_rank[lower as usize] = rank;
            self.valid[lower as usize] = valid;
        }
        self
    }
}

/// Smallest unsigned integer width, in bits, able to hold every rank of an
/// alphabet with `size` symbols.
pub const fn rank_width(size: u32) -> u32 {
    if size <= 1 << 8 {
        8
    } else if size <= 1 << 16 {
        16
    } else {
        32
    }
}
