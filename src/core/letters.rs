//! Alphabet constants and a compact set over `a..=z`
//!
//! Excluded and guessed letters are tracked as a 26-bit set. The frequency
//! ordering is the fixed tie-break table for guess selection.

use std::fmt;

/// The lowercase English alphabet in natural order
pub const ALPHABET: [u8; 26] = *b"abcdefghijklmnopqrstuvwxyz";

/// Letters ordered by general English frequency, most common first
///
/// Used as the deterministic tie-break when two letters score equally.
pub const FREQUENCY_ORDER: &[u8; 26] = b"etaoinsrhdlucmfywgpbvkxqjz";

/// Rank of a letter in [`FREQUENCY_ORDER`] (0 = most common)
///
/// Letters outside the table sort last.
#[must_use]
pub fn frequency_rank(letter: u8) -> usize {
    FREQUENCY_ORDER
        .iter()
        .position(|&l| l == letter)
        .unwrap_or(FREQUENCY_ORDER.len())
}

/// A set of lowercase ASCII letters stored as a bitmask
///
/// Cheap to copy and compare; insertion of anything outside `a..=z` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Add a letter to the set
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 |= 1 << (letter - b'a');
        }
    }

    /// Return a copy of the set with `letter` added
    #[must_use]
    pub fn with(mut self, letter: u8) -> Self {
        self.insert(letter);
        self
    }

    /// Check whether the set contains a letter
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    /// Number of letters in the set
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check whether the set is empty
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Union of two sets
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether the sets share any letter
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterate over the letters in the set in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        ALPHABET.into_iter().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl std::str::FromStr for LetterSet {
    type Err = String;

    /// Parse a set from a run of letters like `"xqz"`
    ///
    /// Whitespace and commas are allowed as separators; anything else is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::EMPTY;
        for ch in s.chars() {
            match ch {
                'a'..='z' => set.insert(ch as u8),
                'A'..='Z' => set.insert(ch.to_ascii_lowercase() as u8),
                ' ' | ',' => {}
                _ => return Err(format!("Invalid letter in set: {ch:?}")),
            }
        }
        Ok(set)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
