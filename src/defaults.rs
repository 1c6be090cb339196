//! Default values for four-key configuration.
//!
//! This module provides centralized default values used across commands,
//! so every command resolves the registry file the same way.

use std::path::PathBuf;

/// File name of the repository registry inside the config directory.
pub const DEFAULT_CONFIG_FILENAME: &str = "repositories.yaml";

/// Registry file used when no platform config directory is available.
pub const FALLBACK_CONFIG_FILENAME: &str = ".four-key.yaml";

/// Returns the default path of the repository registry.
///
/// Uses the platform-appropriate config directory:
/// - Linux: `~/.config/four-key/repositories.yaml` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/four-key/repositories.yaml`
/// - Windows: `{FOLDERID_RoamingAppData}\four-key\repositories.yaml`
///
/// Falls back to `.four-key.yaml` in the current directory if the platform
/// config directory cannot be determined.
///
/// This can be overridden by the `--config` CLI flag or the
/// `FOUR_KEY_CONFIG` environment variable.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("four-key").join(DEFAULT_CONFIG_FILENAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_CONFIG_FILENAME))
}
