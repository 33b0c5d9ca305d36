//! Parent-configurable settings persisted as a single JSON blob.
use serde::{Deserialize, Serialize};

/// Difficulty preset, persisted for the parent dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Which family photo slot a stored picture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoRole {
    Mom,
    Dad,
}

impl PhotoRole {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PhotoRole::Mom => "Mom",
            PhotoRole::Dad => "Dad",
        }
    }
}

/// All parent-facing preferences. Serialized in camelCase so exports stay
/// readable; every field has a default so partial imports still parse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
    #[serde(default)]
    pub voice_enabled: bool,
    #[serde(default = "default_true")]
    pub show_progress: bool,
    /// Session time limit in minutes; 0 means unlimited.
    #[serde(default)]
    pub time_limit: u32,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
    #[serde(default = "default_true")]
    pub show_hints: bool,
    #[serde(default)]
    pub auto_advance: bool,
    #[serde(default)]
    pub notifications: bool,
}

fn default_true() -> bool {
    true
}

fn default_difficulty() -> Difficulty {
    Difficulty::Medium
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            voice_enabled: false,
            show_progress: true,
            time_limit: 0,
            difficulty: Difficulty::Medium,
            show_hints: true,
            auto_advance: false,
            notifications: false,
        }
    }
}

/// Settings blob problems surfaced to the import dialog.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("settings document must be a JSON object")]
    NotAnObject,
}

impl Settings {
    /// Pretty JSON for the export download.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails, which plain data never does
    /// in practice.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an imported document. Missing fields fall back to their
    /// defaults; anything that is not a JSON object, or an object with a
    /// wrong-typed field, rejects the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotAnObject`] for non-object documents and
    /// [`SettingsError::Parse`] for invalid JSON or wrong-typed fields.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        // serde would happily read a struct out of a JSON sequence, so the
        // object check has to happen before the typed parse.
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(SettingsError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run() {
        let s = Settings::default();
        assert!(s.sound_enabled);
        assert!(!s.voice_enabled);
        assert!(s.show_progress);
        assert_eq!(s.time_limit, 0);
        assert_eq!(s.difficulty, Difficulty::Medium);
        assert!(s.show_hints);
        assert!(!s.auto_advance);
        assert!(!s.notifications);
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let mut s = Settings::default();
        s.voice_enabled = true;
        s.time_limit = 20;
        s.difficulty = Difficulty::Hard;
        s.auto_advance = true;
        let json = s.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn serializes_camel_case_keys() {
        let json = Settings::default().to_json().unwrap();
        assert!(json.contains("\"soundEnabled\""));
        assert!(json.contains("\"showHints\""));
        assert!(json.contains("\"timeLimit\""));
        assert!(json.contains("\"difficulty\": \"medium\""));
    }

    #[test]
    fn partial_document_fills_defaults() {
        let s = Settings::from_json(r#"{"voiceEnabled":true}"#).unwrap();
        assert!(s.voice_enabled);
        assert!(s.sound_enabled);
        assert_eq!(s.difficulty, Difficulty::Medium);
    }

    #[test]
    fn wrong_types_reject_the_document() {
        assert!(Settings::from_json(r#"{"soundEnabled":"loud"}"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn non_object_documents_are_rejected() {
        for doc in ["[]", "[1,2,3]", "null", "true", "42", "\"settings\""] {
            assert!(
                matches!(Settings::from_json(doc), Err(SettingsError::NotAnObject)),
                "{doc} should be rejected as a non-object"
            );
        }
    }
}
