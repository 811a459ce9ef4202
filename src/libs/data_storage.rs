//! Filesystem locations for application data.
//!
//! The database and the configuration file live together in one
//! per-user directory, resolved from the platform's conventional data
//! root. The directory is created lazily the first time a path inside
//! it is requested.

use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "lacodda";
pub const APP_NAME: &str = "worklog";

#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        Self {
            base_path: Path::new(&data_root()).join(VENDOR_NAME).join(APP_NAME),
        }
    }

    /// Returns the absolute path for `file_name` inside the application
    /// data directory, creating the directory when it does not exist yet.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform data root, falling back to the current directory when the
/// relevant environment variable is unset.
fn data_root() -> String {
    match OS {
        "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
        "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
        _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
    }
}
