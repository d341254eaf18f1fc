//! CLI configuration from environment variables.
use std::env;
use std::path::PathBuf;

const SAVE_FILE: &str = "armory.json";

/// Settings the binary needs before it parses any command.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub save_path: PathBuf,
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARMORY_SAVE_PATH` - Save file to inspect (default: platform data dir)
    /// - `CONTENT_DATA_DIR` - Catalog directory (default: content built into the binary)
    /// - `ARMORY_LOG_DIR` - Also write logs to `armory.log` in this directory
    pub fn from_env() -> Self {
        Self {
            save_path: read_path("ARMORY_SAVE_PATH").unwrap_or_else(default_save_path),
            data_dir: read_path("CONTENT_DATA_DIR"),
            log_dir: read_path("ARMORY_LOG_DIR"),
        }
    }
}

/// Platform data directory, e.g. `~/.local/share/armory/armory.json` on Linux.
pub fn default_save_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "armory")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join(SAVE_FILE)
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_save_path_names_file() {
        assert!(default_save_path().ends_with(SAVE_FILE));
    }
}
