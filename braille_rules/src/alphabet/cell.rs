//! The six-dot braille cell: dot positions and sets of dots.
//!
//! Positions are numbered row by row across the two columns:
//!
//! ```text
//! +---+---+
//! | 0 | 1 |
//! +---+---+
//! | 2 | 3 |
//! +---+---+
//! | 4 | 5 |
//! +---+---+
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Number of dots in a cell.
pub const CELL_DOTS: usize = 6;

/// Rows in a cell.
pub const CELL_ROWS: u8 = 3;

/// Columns in a cell.
pub const CELL_COLUMNS: u8 = 2;

/// Base code point of the Unicode braille patterns block.
const UNICODE_BRAILLE_BASE: u32 = 0x2800;

/// Unicode bit for each position. Unicode numbers dots down the left
/// column first (1, 2, 3) and then the right column (4, 5, 6).
const UNICODE_BITS: [u8; CELL_DOTS] = [0, 3, 1, 4, 2, 5];

/// One of the six dot locations in a braille cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DotPosition(u8);

impl DotPosition {
    pub const TOP_LEFT: DotPosition = DotPosition(0);
    pub const TOP_RIGHT: DotPosition = DotPosition(1);
    pub const MIDDLE_LEFT: DotPosition = DotPosition(2);
    pub const MIDDLE_RIGHT: DotPosition = DotPosition(3);
    pub const BOTTOM_LEFT: DotPosition = DotPosition(4);
    pub const BOTTOM_RIGHT: DotPosition = DotPosition(5);

    /// Every position in reading order.
    pub const ALL: [DotPosition; CELL_DOTS] = [
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::MIDDLE_LEFT,
        Self::MIDDLE_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
    ];

    /// Validate a raw position index.
    pub fn new(index: u8) -> Result<Self, RulesError> {
        if (index as usize) < CELL_DOTS {
            Ok(Self(index))
        } else {
            Err(RulesError::InvalidDotPosition(index))
        }
    }

    /// Position at the given row (0-2) and column (0-1).
    pub fn at(row: u8, column: u8) -> Option<Self> {
        if row < CELL_ROWS && column < CELL_COLUMNS {
            Some(Self(row * CELL_COLUMNS + column))
        } else {
            None
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn row(self) -> u8 {
        self.0 / CELL_COLUMNS
    }

    pub fn column(self) -> u8 {
        self.0 % CELL_COLUMNS
    }

    /// Human-readable name of the position, e.g. "middle-right".
    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "top-left",
            1 => "top-right",
            2 => "middle-left",
            3 => "middle-right",
            4 => "bottom-left",
            _ => "bottom-right",
        }
    }

    fn bit(self) -> u8 {
        1 << self.0
    }
}

impl TryFrom<u8> for DotPosition {
    type Error = RulesError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<DotPosition> for u8 {
    fn from(position: DotPosition) -> Self {
        position.0
    }
}

impl std::fmt::Display for DotPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A set of dot positions, stored as a 6-bit mask.
///
/// Serializes as the ascending list of position indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<DotPosition>", into = "Vec<DotPosition>")]
pub struct DotSet(u8);

impl DotSet {
    pub const EMPTY: DotSet = DotSet(0);

    /// Build a set from table data. Only used for compile-time constants.
    pub(crate) const fn from_positions(positions: &[u8]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < positions.len() {
            assert!((positions[i] as usize) < CELL_DOTS, "dot position out of range");
            bits |= 1 << positions[i];
            i += 1;
        }
        Self(bits)
    }

    /// Build a set from raw indices, rejecting anything outside the cell.
    pub fn try_from_indices(indices: &[u8]) -> Result<Self, RulesError> {
        indices
            .iter()
            .map(|&index| DotPosition::new(index))
            .collect()
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, position: DotPosition) -> bool {
        self.0 & position.bit() != 0
    }

    /// Add a position. Returns `true` if it was not already present.
    pub fn insert(&mut self, position: DotPosition) -> bool {
        let added = !self.contains(position);
        self.0 |= position.bit();
        added
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Positions in `self` that are not in `other`.
    pub fn difference(self, other: DotSet) -> DotSet {
        DotSet(self.0 & !other.0)
    }

    pub fn is_subset(self, other: DotSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate positions in reading order.
    pub fn iter(self) -> impl Iterator<Item = DotPosition> {
        DotPosition::ALL
            .into_iter()
            .filter(move |position| self.contains(*position))
    }

    /// The matching character from the Unicode braille patterns block.
    pub fn to_unicode(self) -> char {
        let offset = self.iter().fold(0u32, |acc, position| {
            acc | 1 << UNICODE_BITS[position.index() as usize]
        });
        char::from_u32(UNICODE_BRAILLE_BASE + offset).unwrap_or(' ')
    }

    /// Draw the cell as three lines of two characters.
    pub fn render(self, filled: char, empty: char) -> String {
        let mut out = String::with_capacity(CELL_DOTS * 4 + 2);
        for row in 0..CELL_ROWS {
            if row > 0 {
                out.push('\n');
            }
            for column in 0..CELL_COLUMNS {
                let lit = DotPosition::at(row, column).is_some_and(|p| self.contains(p));
                out.push(if lit { filled } else { empty });
            }
        }
        out
    }
}

impl FromIterator<DotPosition> for DotSet {
    fn from_iter<I: IntoIterator<Item = DotPosition>>(iter: I) -> Self {
        let mut set = DotSet::EMPTY;
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl From<Vec<DotPosition>> for DotSet {
    fn from(positions: Vec<DotPosition>) -> Self {
        positions.into_iter().collect()
    }
}

impl From<DotSet> for Vec<DotPosition> {
    fn from(set: DotSet) -> Self {
        set.iter().collect()
    }
}

impl std::fmt::Display for DotSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, position) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", position.index())?;
        }
        write!(f, "}}")
    }
}
