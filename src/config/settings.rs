//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and
//! `Clone` so they can be round-tripped through TOML files and shared
//! across tasks.

use anyhow::Result;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::AppPaths;

// ---------------------------------------------------------------------------
// CorpusConfig
// ---------------------------------------------------------------------------

/// Where the speech corpus lives on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Path to the Common Voice `validated.tsv` manifest.
    pub manifest: PathBuf,
    /// Directory holding the audio clips named in the manifest.
    pub clips_dir: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        let root = PathBuf::from("mcv-scripted-id-v24.0/cv-corpus-24.0-2025-12-05/id");
        Self {
            manifest: root.join("validated.tsv"),
            clips_dir: root.join("clips"),
        }
    }
}

// ---------------------------------------------------------------------------
// QuizConfig
// ---------------------------------------------------------------------------

/// Quiz behavior settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Difficulty pool used when a start request names no level
    /// (`"easy"`, `"normal"`, `"hard"`, or `"all"`).
    pub default_level: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_level: "all".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// DailyConfig
// ---------------------------------------------------------------------------

/// Settings for the recurring daily quiz prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyConfig {
    /// Whether the daily prompt fires at all.
    pub enabled: bool,
    /// Wall-clock fire time as `"HH:MM"` local time.
    pub time: String,
    /// Destination identifier for the transport (e.g. a channel id).
    /// `None` disables the feature even when `enabled` is set.
    pub destination: Option<String>,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            time: "08:00".into(),
            destination: None,
        }
    }
}

impl DailyConfig {
    /// Parse the configured fire time, or `None` when malformed.
    pub fn fire_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, "%H:%M").ok()
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use simak::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Corpus locations.
    pub corpus: CorpusConfig,
    /// Quiz behavior.
    pub quiz: QuizConfig,
    /// Daily prompt scheduling.
    pub daily: DailyConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist
    /// yet (first-run scenario) so callers never need to special-case a
    /// missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(original, loaded);
    }

    /// `load_from` on a non-existent path must return `Default` without
    /// error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.quiz.default_level, "all");
        assert!(!cfg.daily.enabled);
        assert_eq!(cfg.daily.time, "08:00");
        assert!(cfg.daily.destination.is_none());
        assert!(cfg
            .corpus
            .manifest
            .file_name()
            .is_some_and(|n| n == "validated.tsv"));
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.corpus.manifest = PathBuf::from("/data/id/validated.tsv");
        cfg.corpus.clips_dir = PathBuf::from("/data/id/clips");
        cfg.quiz.default_level = "easy".into();
        cfg.daily.enabled = true;
        cfg.daily.time = "19:30".into();
        cfg.daily.destination = Some("study-channel".into());

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    // --- DailyConfig::fire_time ---

    #[test]
    fn fire_time_parses_hh_mm() {
        let daily = DailyConfig {
            time: "19:30".into(),
            ..DailyConfig::default()
        };
        let t = daily.fire_time().unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
    }

    #[test]
    fn malformed_fire_time_is_none() {
        let daily = DailyConfig {
            time: "sometime".into(),
            ..DailyConfig::default()
        };
        assert!(daily.fire_time().is_none());
    }
}
