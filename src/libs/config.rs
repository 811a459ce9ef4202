//! Configuration management for the worklog application.
//!
//! Settings live in a JSON file inside the platform application data
//! directory and are grouped into optional modules, so the file only ever
//! contains what the user actually configured. An interactive wizard
//! (`worklog init`) fills the modules in; missing modules fall back to
//! built-in defaults at the point of use.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\worklog\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/worklog/config.json`
//! - **Linux**: `~/.local/share/lacodda/worklog/config.json`

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Notes shown by `note list` when neither a flag nor config says otherwise.
pub const DEFAULT_NOTE_LIMIT: u32 = 20;

/// Quick-capture behavior.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CaptureConfig {
    /// Project assigned to captured tasks when none is passed on the
    /// command line. An empty string disables the default.
    pub default_project: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfig {
            default_project: String::new(),
        }
    }
}

/// Listing and rendering preferences.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// How many notes `note list` shows by default.
    pub note_limit: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            note_limit: DEFAULT_NOTE_LIMIT,
        }
    }
}

/// Main configuration container.
///
/// Each module is optional; `skip_serializing_if` keeps unconfigured
/// modules out of the JSON file entirely.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<CaptureConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error: it yields the default configuration
    /// so the application works without any setup.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the available modules, prompts for each selected one with
    /// current values as defaults, and returns the updated configuration
    /// for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec!["Capture", "Display"];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Capture" => {
                    let default = config.capture.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleCapture);
                    config.capture = Some(CaptureConfig {
                        default_project: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultProject.to_string())
                            .default(default.default_project)
                            .allow_empty(true)
                            .interact_text()?,
                    });
                }
                "Display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        note_limit: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptNoteLimit.to_string())
                            .default(default.note_limit)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Default project for quick capture, if one is configured.
    pub fn default_project(&self) -> Option<String> {
        self.capture
            .as_ref()
            .map(|c| c.default_project.trim().to_string())
            .filter(|name| !name.is_empty())
    }

    /// Note list limit, falling back to [`DEFAULT_NOTE_LIMIT`].
    pub fn note_limit(&self) -> u32 {
        self.display.as_ref().map(|d| d.note_limit).unwrap_or(DEFAULT_NOTE_LIMIT)
    }
}
