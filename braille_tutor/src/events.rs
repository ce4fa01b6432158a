//! Session events, queued for the presentation layer.
//!
//! A session appends events as it handles each call; the host drains them
//! after every interaction to update the score display and overlays.

use braille_rules::{DotPosition, Letter};
use serde::{Deserialize, Serialize};

/// Something the presentation layer may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new target letter is on the card.
    RoundStarted { letter: Letter, required: usize },

    /// A required dot was marked for the first time.
    DotMarked { position: DotPosition },

    /// A dot outside the target pattern was tapped. Raises the mistake overlay.
    Mistake { position: DotPosition },

    /// The mistake overlay was dismissed ("Try Again").
    MistakeAcknowledged,

    /// Every required dot is marked. Raises the completion overlay.
    RoundComplete { letter: Letter },

    /// The session score changed.
    ScoreChanged { score: u32 },
}

impl SessionEvent {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::RoundStarted { .. } => "round_started",
            SessionEvent::DotMarked { .. } => "dot_marked",
            SessionEvent::Mistake { .. } => "mistake",
            SessionEvent::MistakeAcknowledged => "mistake_acknowledged",
            SessionEvent::RoundComplete { .. } => "round_complete",
            SessionEvent::ScoreChanged { .. } => "score_changed",
        }
    }
}
