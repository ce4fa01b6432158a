//! Feedback cues and the sinks that play them.
//!
//! The session decides *which* cue fits an interaction and whether the
//! configuration allows it; a [`FeedbackSink`] decides how to play it.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::TutorConfig;

/// Sounds the game can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// An overlay button was pressed.
    Click,
    /// A round was completed.
    Correct,
    /// A wrong dot was tapped.
    Wrong,
}

/// A single piece of feedback for the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    Sound(Cue),
    /// A light tap, sent for every dot selection.
    Haptic,
}

impl Feedback {
    /// Whether the configuration lets this feedback through.
    pub fn allowed_by(&self, config: &TutorConfig) -> bool {
        match self {
            Feedback::Sound(_) => config.sounds,
            Feedback::Haptic => config.haptics,
        }
    }
}

/// Plays feedback on whatever the platform offers.
pub trait FeedbackSink {
    fn play(&mut self, feedback: Feedback);
}

/// Discards all feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn play(&mut self, _feedback: Feedback) {}
}

/// Keeps every cue it receives. Clones share the same record, so a host
/// can hand one clone to a session and read another, e.g. to caption cues
/// for learners with sound off or to forward them on its own schedule.
/// `clear` drops what has been read.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    played: Rc<RefCell<Vec<Feedback>>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything played so far, oldest first.
    pub fn played(&self) -> Vec<Feedback> {
        self.played.borrow().clone()
    }

    /// Sounds played so far, skipping haptics.
    pub fn sounds(&self) -> Vec<Cue> {
        self.played
            .borrow()
            .iter()
            .filter_map(|feedback| match feedback {
                Feedback::Sound(cue) => Some(*cue),
                Feedback::Haptic => None,
            })
            .collect()
    }

    pub fn haptic_count(&self) -> usize {
        self.played
            .borrow()
            .iter()
            .filter(|feedback| **feedback == Feedback::Haptic)
            .count()
    }

    pub fn clear(&self) {
        self.played.borrow_mut().clear();
    }
}

impl FeedbackSink for RecordingFeedback {
    fn play(&mut self, feedback: Feedback) {
        self.played.borrow_mut().push(feedback);
    }
}
