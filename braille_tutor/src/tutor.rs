//! Top-level game modes: the menu and the training screen.

use braille_rules::{showcase_letter, Letter};
use serde::{Deserialize, Serialize};

use crate::config::TutorConfig;
use crate::error::TutorError;
use crate::feedback::FeedbackSink;
use crate::session::{LetterPicker, RandomLetterPicker, TrainingSession};

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameMode {
    #[default]
    Menu,
    Train,
}

/// Owns the configuration and, while training, the running session.
#[derive(Debug, Default)]
pub struct Tutor {
    config: TutorConfig,
    session: Option<TrainingSession>,
}

impl Tutor {
    pub fn new(config: TutorConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    /// Replace the configuration. A running session keeps the options it
    /// started with.
    pub fn set_config(&mut self, config: TutorConfig) {
        self.config = config;
    }

    pub fn mode(&self) -> GameMode {
        if self.session.is_some() {
            GameMode::Train
        } else {
            GameMode::Menu
        }
    }

    /// Letter on the animated title card at `tick`.
    pub fn title_card(tick: u64) -> Letter {
        showcase_letter(tick)
    }

    /// Enter training with letters drawn at random (seeded from config when
    /// a seed is set). Restarts any session already running.
    pub fn start_training(&mut self, feedback: Box<dyn FeedbackSink>) -> &mut TrainingSession {
        let picker = RandomLetterPicker::from_config(&self.config);
        self.start_training_with(Box::new(picker), feedback)
    }

    /// Enter training with an explicit letter picker.
    pub fn start_training_with(
        &mut self,
        picker: Box<dyn LetterPicker>,
        feedback: Box<dyn FeedbackSink>,
    ) -> &mut TrainingSession {
        if let Some(previous) = self.session.take() {
            log::warn!(
                "restarting training; session {} dropped with score {}",
                previous.id(),
                previous.score()
            );
        }
        log::info!("entering training mode");
        self.session
            .insert(TrainingSession::new(self.config.clone(), picker, feedback))
    }

    /// Back to the menu. The round is discarded; returns the final score.
    pub fn exit_training(&mut self) -> Result<u32, TutorError> {
        let session = self.session.take().ok_or(TutorError::NotTraining)?;
        log::info!(
            "session {} ended with score {}",
            session.id(),
            session.score()
        );
        Ok(session.score())
    }

    pub fn session(&self) -> Option<&TrainingSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Result<&mut TrainingSession, TutorError> {
        self.session.as_mut().ok_or(TutorError::NotTraining)
    }
}
