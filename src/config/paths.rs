//! Cross-platform application paths using the `dirs` crate.
//!
//! Config dir (settings + data files):
//!   Windows: %APPDATA%\simak\
//!   macOS:   ~/Library/Application Support/simak/
//!   Linux:   ~/.config/simak/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml`, `glossary.json`, `questions.json`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Full path to `glossary.json` (bilingual word dictionary).
    pub glossary_file: PathBuf,
    /// Full path to `questions.json` (trivia question list).
    pub questions_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "simak";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot
    /// provide a standard path (should be extremely rare in practice).
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let glossary_file = config_dir.join("glossary.json");
        let questions_file = config_dir.join("questions.json");

        Self {
            config_dir,
            settings_file,
            glossary_file,
            questions_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
