//! Target letter selection.

use braille_rules::{letter_count, Letter};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::TutorConfig;

/// Chooses the target letter for each new round.
pub trait LetterPicker {
    fn pick(&mut self) -> Letter;
}

/// Uniformly random letters.
#[derive(Debug, Clone)]
pub struct RandomLetterPicker {
    rng: SmallRng,
}

impl RandomLetterPicker {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Use the configured seed when there is one.
    pub fn from_config(config: &TutorConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl LetterPicker for RandomLetterPicker {
    fn pick(&mut self) -> Letter {
        Letter::from_index_wrapping(self.rng.gen_range(0..letter_count()))
    }
}

/// Replays a fixed list of letters, starting over at the end.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    letters: Vec<Letter>,
    next: usize,
}

impl ScriptedPicker {
    /// An empty script falls back to 'a'.
    pub fn new(letters: impl IntoIterator<Item = Letter>) -> Self {
        Self {
            letters: letters.into_iter().collect(),
            next: 0,
        }
    }

    /// Script from a word, skipping anything that is not a letter.
    pub fn from_word(word: &str) -> Self {
        Self::new(word.chars().filter_map(|c| Letter::from_char(c).ok()))
    }
}

impl LetterPicker for ScriptedPicker {
    fn pick(&mut self) -> Letter {
        let Some(letter) = self.letters.get(self.next % self.letters.len().max(1)) else {
            return Letter::from_index_wrapping(0);
        };
        self.next += 1;
        *letter
    }
}
