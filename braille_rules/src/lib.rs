//! # Braille Rules
//!
//! The rules crate for Braille Buddy - the six-dot Braille alphabet and the
//! round state machine that checks a learner's dot selections against it.
//! This crate holds no presentation, audio, or randomness; callers drive it
//! one selection at a time and react to the returned [`Signal`].

pub mod alphabet;
pub mod error;
pub mod round;

pub use alphabet::*;
pub use error::*;
pub use round::*;
