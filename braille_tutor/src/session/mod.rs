//! Training sessions - the game loop around a single [`Round`].
//!
//! A session owns the current round, the score, and the two overlays of the
//! game screen: the mistake overlay raised by a wrong dot, and the
//! completion overlay raised when the letter is finished.

mod picker;

pub use picker::*;

use braille_rules::{
    required_dot_count, DotPosition, DotSet, Letter, Round, RoundState, Signal,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::TutorConfig;
use crate::error::TutorError;
use crate::events::SessionEvent;
use crate::feedback::{Cue, Feedback, FeedbackSink};

/// Unique identifier for training sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// On-demand hint for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub letter: Letter,
    pub dots_to_tap: usize,
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hint: Tap {} bubble(s).", self.dots_to_tap)
    }
}

/// Everything a renderer needs to draw the game screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: SessionId,
    pub target: Letter,
    pub marked: DotSet,
    pub required: usize,
    pub state: RoundState,
    pub score: u32,
    pub mistakes: u32,
    pub mistake_pending: bool,
    pub colorblind: bool,
    pub upscale_card: bool,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, TutorError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// An endless run of rounds with a running score.
///
/// Every call that changes the session queues [`SessionEvent`]s. The host
/// is expected to call [`TrainingSession::drain_events`] after each
/// interaction; undrained events accumulate for the life of the session.
pub struct TrainingSession {
    id: SessionId,
    config: TutorConfig,
    picker: Box<dyn LetterPicker>,
    feedback: Box<dyn FeedbackSink>,
    round: Round,
    score: u32,
    mistakes: u32,
    mistake_pending: bool,
    events: Vec<SessionEvent>,
}

impl TrainingSession {
    /// Start a session; the first letter comes from `picker`.
    pub fn new(
        config: TutorConfig,
        mut picker: Box<dyn LetterPicker>,
        feedback: Box<dyn FeedbackSink>,
    ) -> Self {
        let first = picker.pick();
        let mut session = Self {
            id: SessionId::new(),
            config,
            picker,
            feedback,
            round: Round::new(first),
            score: 0,
            mistakes: 0,
            mistake_pending: false,
            events: Vec::new(),
        };
        log::info!("training session {} started", session.id);
        session.begin(first);
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn target(&self) -> Letter {
        self.round.target()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Wrong taps over the whole session.
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Restart the round on the letter at `letter_index` (0 = 'a').
    pub fn start_round(&mut self, letter_index: usize) -> Result<(), TutorError> {
        let letter = Letter::from_index(letter_index)?;
        self.begin(letter);
        Ok(())
    }

    /// Handle one dot tap.
    pub fn select_dot(&mut self, position: DotPosition) -> Signal {
        // Taps behind the completion overlay never reach the card.
        if self.round.is_complete() {
            return Signal::Ignored;
        }
        self.emit(Feedback::Haptic);

        let before = self.round.current_marks();
        let signal = self.round.select_dot(position);

        match signal {
            Signal::Progress => {
                if before != self.round.current_marks() {
                    self.events.push(SessionEvent::DotMarked { position });
                }
            }
            Signal::Mistake => {
                log::debug!(
                    "session {}: {} is not part of '{}'",
                    self.id,
                    position,
                    self.round.target()
                );
                self.mistakes += 1;
                self.mistake_pending = true;
                self.emit(Feedback::Sound(Cue::Wrong));
                self.events.push(SessionEvent::Mistake { position });
            }
            Signal::Complete => {
                self.score += 1;
                log::info!(
                    "session {}: completed '{}', score {}",
                    self.id,
                    self.round.target(),
                    self.score
                );
                self.emit(Feedback::Sound(Cue::Correct));
                self.events.push(SessionEvent::DotMarked { position });
                self.events.push(SessionEvent::RoundComplete {
                    letter: self.round.target(),
                });
                self.events
                    .push(SessionEvent::ScoreChanged { score: self.score });
            }
            Signal::Ignored => {}
        }

        signal
    }

    /// Handle a tap given as a raw index from an untyped caller.
    pub fn select_raw(&mut self, index: u8) -> Result<Signal, TutorError> {
        let position = DotPosition::new(index)?;
        Ok(self.select_dot(position))
    }

    /// Dots the learner has marked correctly this round.
    pub fn current_marks(&self) -> DotSet {
        self.round.current_marks()
    }

    /// Number of dots the letter at `letter_index` needs.
    pub fn required_dot_count(letter_index: usize) -> Result<usize, TutorError> {
        Ok(required_dot_count(Letter::from_index(letter_index)?))
    }

    pub fn hint(&self) -> Hint {
        Hint {
            letter: self.round.target(),
            dots_to_tap: self.round.required_count(),
        }
    }

    pub fn score_report(&self) -> String {
        format!("Your session score is {}", self.score)
    }

    pub fn is_mistake_pending(&self) -> bool {
        self.mistake_pending
    }

    pub fn is_round_complete(&self) -> bool {
        self.round.is_complete()
    }

    /// Dismiss the mistake overlay. Marked dots stay marked.
    pub fn acknowledge_mistake(&mut self) {
        if !self.mistake_pending {
            return;
        }
        self.emit(Feedback::Sound(Cue::Click));
        self.mistake_pending = false;
        self.events.push(SessionEvent::MistakeAcknowledged);
    }

    /// Leave the completion overlay and move on to a freshly picked letter.
    pub fn next_round(&mut self) -> Result<Letter, TutorError> {
        if !self.round.is_complete() {
            return Err(TutorError::RoundInProgress);
        }
        self.emit(Feedback::Sound(Cue::Click));
        let letter = self.picker.pick();
        self.begin(letter);
        Ok(letter)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session: self.id,
            target: self.round.target(),
            marked: self.round.current_marks(),
            required: self.round.required_count(),
            state: self.round.state(),
            score: self.score,
            mistakes: self.mistakes,
            mistake_pending: self.mistake_pending,
            colorblind: self.config.colorblind,
            upscale_card: self.config.upscale_card,
        }
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn begin(&mut self, letter: Letter) {
        self.round.start(letter);
        self.mistake_pending = false;
        log::debug!(
            "session {}: new round for '{}' ({} dots)",
            self.id,
            letter,
            self.round.required_count()
        );
        self.events.push(SessionEvent::RoundStarted {
            letter,
            required: self.round.required_count(),
        });
    }

    fn emit(&mut self, feedback: Feedback) {
        if feedback.allowed_by(&self.config) {
            self.feedback.play(feedback);
        }
    }
}

impl std::fmt::Debug for TrainingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainingSession")
            .field("id", &self.id)
            .field("round", &self.round)
            .field("score", &self.score)
            .field("mistakes", &self.mistakes)
            .field("mistake_pending", &self.mistake_pending)
            .finish_non_exhaustive()
    }
}
