//! SafeSteps Quiz Engine
//!
//! Platform-agnostic core logic for the SafeSteps safety-education app.
//! This crate provides the content pools, the session state machine and
//! scoring without UI or platform-specific dependencies.

pub mod bubble;
pub mod circles;
pub mod decisions;
pub mod scenarios;
pub mod score;
pub mod session;
pub mod settings;
pub mod sorting;

// Re-export commonly used types
pub use bubble::{Proximity, SPACE_POOL, SpaceScenario, VisualDistance};
pub use circles::{CHARACTER_POOL, Character, Circle};
pub use decisions::{DECISION_POOL, DecisionCategory, DecisionChoice, DecisionScenario};
pub use scenarios::{SCENARIO_POOL, SafetyScenario, ScenarioCategory};
pub use score::{SessionSummary, StarTier, percentage};
pub use session::{
    QuizItem, QuizSession, RoundOutcome, SESSION_LENGTHS, SessionConfig, SessionError,
    SessionPhase, draw_session,
};
pub use settings::{Difficulty, PhotoRole, Settings, SettingsError};
pub use sorting::{SORTING_POOL, SortingCategory, SortingItem, Visibility};

/// Trait for the audio/voice feedback a platform plays on round outcomes.
/// Implementations are fire-and-forget; a failing backend must never stall
/// or fail a session.
pub trait OutcomeNotifier {
    /// Play the success or failure cue for an answered round.
    fn play_outcome(&self, correct: bool);

    /// Narrate explanation text aloud, replacing any narration in progress.
    fn speak(&self, text: &str);
}

/// Notifier that does nothing; used in tests and headless contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl OutcomeNotifier for SilentNotifier {
    fn play_outcome(&self, _correct: bool) {}
    fn speak(&self, _text: &str) {}
}

/// Trait for abstracting settings and photo persistence
/// Platform-specific implementations should provide this
pub trait SettingsStore {
    type Error: std::error::Error;

    /// Load the stored settings, falling back to defaults when nothing was
    /// saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached.
    fn load_settings(&self) -> Result<Settings, Self::Error>;

    /// Persist the settings blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    fn save_settings(&self, settings: &Settings) -> Result<(), Self::Error>;

    /// Load a stored family photo as a data URI, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached.
    fn load_photo(&self, role: PhotoRole) -> Result<Option<String>, Self::Error>;

    /// Store a family photo data URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the photo cannot be written.
    fn save_photo(&self, role: PhotoRole, data_uri: &str) -> Result<(), Self::Error>;

    /// Remove a stored family photo.
    ///
    /// # Errors
    ///
    /// Returns an error if the photo cannot be removed.
    fn clear_photo(&self, role: PhotoRole) -> Result<(), Self::Error>;

    /// Clear every per-game progress record.
    ///
    /// # Errors
    ///
    /// Returns an error if the progress records cannot be removed.
    fn reset_progress(&self) -> Result<(), Self::Error>;
}
