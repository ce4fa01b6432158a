//! The braille alphabet: a fixed table from the 26 letters to their dot patterns.

mod cell;

pub use cell::*;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Number of letters in the alphabet.
pub const LETTER_COUNT: usize = 26;

/// Dot patterns for 'a' through 'z', indexed by letter.
const PATTERNS: [DotSet; LETTER_COUNT] = [
    DotSet::from_positions(&[0]),             // a
    DotSet::from_positions(&[0, 2]),          // b
    DotSet::from_positions(&[0, 1]),          // c
    DotSet::from_positions(&[0, 1, 3]),       // d
    DotSet::from_positions(&[0, 3]),          // e
    DotSet::from_positions(&[0, 1, 2]),       // f
    DotSet::from_positions(&[0, 1, 2, 3]),    // g
    DotSet::from_positions(&[0, 2, 3]),       // h
    DotSet::from_positions(&[1, 2]),          // i
    DotSet::from_positions(&[1, 2, 3]),       // j
    DotSet::from_positions(&[0, 4]),          // k
    DotSet::from_positions(&[0, 2, 4]),       // l
    DotSet::from_positions(&[0, 1, 4]),       // m
    DotSet::from_positions(&[0, 1, 3, 4]),    // n
    DotSet::from_positions(&[0, 3, 4]),       // o
    DotSet::from_positions(&[0, 1, 2, 4]),    // p
    DotSet::from_positions(&[0, 1, 2, 3, 4]), // q
    DotSet::from_positions(&[0, 2, 3, 4]),    // r
    DotSet::from_positions(&[1, 2, 4]),       // s
    DotSet::from_positions(&[1, 2, 3, 4]),    // t
    DotSet::from_positions(&[0, 4, 5]),       // u
    DotSet::from_positions(&[0, 2, 4, 5]),    // v
    DotSet::from_positions(&[1, 2, 3, 5]),    // w
    DotSet::from_positions(&[0, 1, 4, 5]),    // x
    DotSet::from_positions(&[0, 1, 3, 4, 5]), // y
    DotSet::from_positions(&[0, 3, 4, 5]),    // z
];

/// A letter of the alphabet, stored as its zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    pub fn from_index(index: usize) -> Result<Self, RulesError> {
        if index < LETTER_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(RulesError::InvalidLetterIndex(index))
        }
    }

    /// Letter at `index` modulo 26.
    pub fn from_index_wrapping(index: usize) -> Self {
        Self((index % LETTER_COUNT) as u8)
    }

    /// Parse a letter, ignoring case.
    pub fn from_char(c: char) -> Result<Self, RulesError> {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Ok(Self(lower as u8 - b'a'))
        } else {
            Err(RulesError::UnknownLetter(c))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The lowercase character for this letter.
    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }

    pub fn pattern(self) -> DotSet {
        PATTERNS[self.index()]
    }

    /// All letters from 'a' to 'z'.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..LETTER_COUNT as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = RulesError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The dots that must be raised to write `letter`.
pub fn pattern_for(letter: Letter) -> DotSet {
    letter.pattern()
}

/// Number of letters a target can be drawn from.
pub fn letter_count() -> usize {
    LETTER_COUNT
}

/// Number of dots a learner has to tap for `letter`.
pub fn required_dot_count(letter: Letter) -> usize {
    letter.pattern().len()
}

/// Reverse lookup: the letter written by exactly these dots, if any.
pub fn letter_for_pattern(pattern: DotSet) -> Option<Letter> {
    PATTERNS
        .iter()
        .position(|candidate| *candidate == pattern)
        .map(|index| Letter(index as u8))
}

/// One row of the alphabet reference chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub letter: Letter,
    pub pattern: DotSet,
    pub glyph: char,
}

/// The whole alphabet in order, for the reference chart.
pub fn alphabet_chart() -> Vec<ChartEntry> {
    Letter::all()
        .map(|letter| ChartEntry {
            letter,
            pattern: letter.pattern(),
            glyph: letter.pattern().to_unicode(),
        })
        .collect()
}

/// Letter shown by the title card animation at a given tick (e.g. seconds
/// since the epoch). Cycles through the alphabet once every 26 ticks.
pub fn showcase_letter(tick: u64) -> Letter {
    Letter::from_index_wrapping((tick % LETTER_COUNT as u64) as usize)
}
