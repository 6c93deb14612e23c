//! Configuration surface for the FaultFrame dispatcher
//!
//! The serde-visible part of the configuration lives here. The custom
//! error predicate is a function and is installed on the dispatcher
//! directly, not through this crate.

mod loader;
mod update;

pub use loader::ConfigError;
pub use update::ConfigUpdate;

use faultframe_core::Framework;
use serde::Deserialize;

/// Top-level FaultFrame configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaultFrameConfig {
    /// Backend framework whose parser handles incoming errors
    #[serde(default)]
    pub framework: Framework,
    /// Whether error handling is active at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Whether accepted errors are forwarded to the presenter
    #[serde(default = "default_true")]
    pub show_toast: bool,
    /// Only surface errors with these status codes (empty imposes no restriction)
    #[serde(default)]
    pub handle_only_status_codes: Vec<u16>,
    /// Never surface errors with these status codes
    #[serde(default)]
    pub ignore_status_codes: Vec<u16>,
    /// Cosmetic options forwarded to the presenter untouched
    #[serde(default)]
    pub display: DisplayOptions,
}

impl Default for FaultFrameConfig {
    fn default() -> Self {
        Self {
            framework: Framework::default(),
            enabled: true,
            show_toast: true,
            handle_only_status_codes: Vec::new(),
            ignore_status_codes: Vec::new(),
            display: DisplayOptions::default(),
        }
    }
}

impl FaultFrameConfig {
    /// Configuration for a given framework with everything else defaulted
    #[must_use]
    pub fn for_framework(framework: Framework) -> Self {
        Self {
            framework,
            ..Self::default()
        }
    }
}

/// Presentation options the core carries but never interprets
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayOptions {
    /// Color theme
    #[serde(default)]
    pub theme: Theme,
    /// Screen corner for toast notifications
    #[serde(default)]
    pub toast_position: ToastPosition,
    /// Toast auto-dismiss delay in milliseconds
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    /// Cap on rendered stack lines
    #[serde(default)]
    pub max_stack_lines: Option<usize>,
    /// Path prefix stripped from file paths when copying
    #[serde(default)]
    pub strip_path_prefix: Option<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            toast_position: ToastPosition::default(),
            toast_duration_ms: default_toast_duration_ms(),
            max_stack_lines: None,
            strip_path_prefix: None,
        }
    }
}

/// Color theme for the presenter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Dark theme
    #[default]
    Dark,
    /// Light theme
    Light,
}

/// Screen corner where toasts appear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPosition {
    /// Top left corner
    TopLeft,
    /// Top right corner
    TopRight,
    /// Bottom left corner
    BottomLeft,
    /// Bottom right corner
    #[default]
    BottomRight,
}

const fn default_true() -> bool {
    true
}

const fn default_toast_duration_ms() -> u64 {
    10_000
}
