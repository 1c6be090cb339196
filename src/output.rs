//! # Output Configuration
//!
//! Controls how the CLI decorates its messages: status markers, and
//! highlighted repository names when the terminal supports color.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust
//! use four_key::output::OutputConfig;
//!
//! let output = OutputConfig::from_env_and_flag("never");
//! assert_eq!(output.success_marker(), "[OK]");
//! assert_eq!(output.highlight("four-key"), "four-key");
//! ```

use std::env;

use console::style;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of `--color`: `always` forces decoration
    /// on (overriding `NO_COLOR`), `never` turns it off, and anything else
    /// detects support from the environment and stdout.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // Presence alone disables colors, even when empty
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// Marker printed before a successful mutation.
    pub fn success_marker(&self) -> &'static str {
        self.pick("✅", "[OK]")
    }

    /// Marker printed before a listing summary.
    pub fn list_marker(&self) -> &'static str {
        self.pick("📦", "[LIST]")
    }

    /// Repository name styled for emphasis when colors are on.
    pub fn highlight(&self, text: &str) -> String {
        if self.use_color {
            style(text).cyan().bold().force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    fn pick(&self, decorated: &'static str, plain: &'static str) -> &'static str {
        if self.use_color {
            decorated
        } else {
            plain
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
