use faultframe_core::Framework;
use serde::Deserialize;

use crate::{DisplayOptions, FaultFrameConfig, Theme, ToastPosition};

/// Partial configuration overlay
///
/// Used by explicit reconfiguration calls and by the get-or-create
/// factory when an instance already exists: only the fields present in
/// the update replace the corresponding config fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigUpdate {
    /// Replace the active framework parser
    #[serde(default)]
    pub framework: Option<Framework>,
    /// Replace the enabled flag
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Replace the display toggle
    #[serde(default)]
    pub show_toast: Option<bool>,
    /// Replace the allow-list
    #[serde(default)]
    pub handle_only_status_codes: Option<Vec<u16>>,
    /// Replace the deny-list
    #[serde(default)]
    pub ignore_status_codes: Option<Vec<u16>>,
    /// Replace the theme
    #[serde(default)]
    pub theme: Option<Theme>,
    /// Replace the toast position
    #[serde(default)]
    pub toast_position: Option<ToastPosition>,
    /// Replace the toast duration
    #[serde(default)]
    pub toast_duration_ms: Option<u64>,
    /// Replace the stack line cap
    #[serde(default)]
    pub max_stack_lines: Option<usize>,
    /// Replace the stripped path prefix
    #[serde(default)]
    pub strip_path_prefix: Option<String>,
}

impl ConfigUpdate {
    /// Update that only switches the framework
    #[must_use]
    pub fn framework(framework: Framework) -> Self {
        Self {
            framework: Some(framework),
            ..Self::default()
        }
    }
}

impl FaultFrameConfig {
    /// Apply a partial update, leaving absent fields unchanged
    pub fn merge(&mut self, update: ConfigUpdate) {
        let ConfigUpdate {
            framework,
            enabled,
            show_toast,
            handle_only_status_codes,
            ignore_status_codes,
            theme,
            toast_position,
            toast_duration_ms,
            max_stack_lines,
            strip_path_prefix,
        } = update;

        merge_field(&mut self.framework, framework);
        merge_field(&mut self.enabled, enabled);
        merge_field(&mut self.show_toast, show_toast);
        merge_field(&mut self.handle_only_status_codes, handle_only_status_codes);
        merge_field(&mut self.ignore_status_codes, ignore_status_codes);

        let DisplayOptions {
            theme: current_theme,
            toast_position: current_position,
            toast_duration_ms: current_duration,
            max_stack_lines: current_cap,
            strip_path_prefix: current_prefix,
        } = &mut self.display;

        merge_field(current_theme, theme);
        merge_field(current_position, toast_position);
        merge_field(current_duration, toast_duration_ms);

        if max_stack_lines.is_some() {
            *current_cap = max_stack_lines;
        }
        if strip_path_prefix.is_some() {
            *current_prefix = strip_path_prefix;
        }
    }
}

fn merge_field<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
