//! # Braille Tutor
//!
//! The training loop for Braille Buddy. This crate drives rounds from
//! `braille_rules`: it picks target letters, keeps score, offers hints, and
//! tells the presentation layer what happened.
//!
//! ## Core Components
//!
//! - **session**: A training session - one round at a time, score, overlays, snapshots
//! - **feedback**: Sound and haptic cues, delivered to an injected sink
//! - **events**: Session events for the presentation layer to drain and render
//! - **config**: Feedback toggles and display options loaded from TOML
//! - **tutor**: Menu/training mode switching
//!
//! ## Design Philosophy
//!
//! - **Pull-Based**: Every transition returns its outcome; nothing is observed reactively
//! - **Injected Collaborators**: Randomness and feedback playback are traits, not globals
//! - **Forgiving**: Mistakes are notifications, never penalties

pub mod config;
pub mod error;
pub mod events;
pub mod feedback;
pub mod session;
pub mod tutor;

pub use config::*;
pub use error::*;
pub use events::*;
pub use feedback::*;
pub use session::*;
pub use tutor::*;
