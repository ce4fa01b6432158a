//! Boundary errors for the rules crate.

use thiserror::Error;

use crate::alphabet::{DotSet, Letter};

/// Raised when untyped input fails to convert into a letter or dot position.
///
/// A wrong dot is not an error; it is reported as [`crate::Signal::Mistake`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("dot position {0} is outside the braille cell (expected 0-5)")]
    InvalidDotPosition(u8),
    #[error("letter index {0} is out of range (expected 0-25)")]
    InvalidLetterIndex(usize),
    #[error("'{0}' is not a letter of the braille alphabet")]
    UnknownLetter(char),
    #[error("marks {marked} are not all part of the pattern for '{target}'")]
    MarksOutsidePattern { target: Letter, marked: DotSet },
}
