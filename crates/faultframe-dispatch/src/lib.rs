//! Dispatch controller: decides whether an error event is surfaced
//!
//! Owns the configuration, runs each incoming [`RawErrorEvent`] through
//! the active framework parser, applies the suppression policy (dedup,
//! allow/deny lists, custom predicate), and forwards accepted errors to
//! the presenter. Handling is synchronous and runs to completion for
//! every event; all discards are silent apart from debug logging.

#![allow(clippy::must_use_candidate)]

pub mod global;

mod fingerprint;

pub use fingerprint::Fingerprint;

use std::sync::Mutex;
use std::time::{Duration, Instant};

use faultframe_config::{ConfigUpdate, DisplayOptions, FaultFrameConfig};
use faultframe_core::{CanonicalError, RawErrorEvent};
use faultframe_parsers::{FrameworkParser, parser_for};

/// Window within which an identical error is considered a duplicate
const DUPLICATE_WINDOW: Duration = Duration::from_millis(1000);

/// Outbound collaborator that renders accepted errors
///
/// Invoked at most once per accepted event.
pub trait Presenter: Send + Sync {
    /// Render one canonical error under the configured display options
    fn present(&self, error: &CanonicalError, display: &DisplayOptions);
}

/// Presenter that renders nothing
///
/// For embedders that only consume [`Outcome`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn present(&self, _error: &CanonicalError, _display: &DisplayOptions) {}
}

/// Custom filter hook over parsed errors
///
/// Only an explicit `Some(false)` vetoes an error; `None` and
/// `Some(true)` both let it through.
pub type ErrorPredicate = Box<dyn Fn(&CanonicalError) -> Option<bool> + Send + Sync>;

/// Terminal result of handling one event
#[derive(Debug)]
pub enum Outcome {
    /// The error passed the policy and was handed to the presenter
    Presented(CanonicalError),
    /// The error was discarded
    Suppressed(SuppressReason),
}

impl Outcome {
    /// Whether the event reached the presenter
    #[must_use]
    pub const fn is_presented(&self) -> bool {
        matches!(self, Self::Presented(_))
    }
}

/// Why an event was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// Error handling is disabled
    Disabled,
    /// Same fingerprint as the previous error, within the duplicate window
    Duplicate,
    /// A non-empty allow-list does not contain the parsed status
    NotInAllowList,
    /// The deny-list contains the parsed status
    InDenyList,
    /// The custom predicate returned an explicit veto
    Vetoed,
    /// Accepted by the policy, but the display toggle is off
    DisplayDisabled,
}

/// Mutable controller state, guarded as one unit so each event's
/// read-modify-write of the dedup slot is atomic
struct DispatchState {
    config: FaultFrameConfig,
    parser: &'static dyn FrameworkParser,
    last_error: Option<(Fingerprint, Instant)>,
}

/// The dispatch controller
///
/// Explicitly constructed and explicitly passed; embedders that need one
/// process-wide instance use [`global::init`] instead of module state.
pub struct Dispatcher {
    state: Mutex<DispatchState>,
    on_error: Mutex<Option<ErrorPredicate>>,
    presenter: Mutex<Box<dyn Presenter>>,
}

impl Dispatcher {
    /// Controller with a no-op presenter
    #[must_use]
    pub fn new(config: FaultFrameConfig) -> Self {
        Self::with_presenter(config, Box::new(NoopPresenter))
    }

    /// Controller forwarding accepted errors to the given presenter
    #[must_use]
    pub fn with_presenter(config: FaultFrameConfig, presenter: Box<dyn Presenter>) -> Self {
        let parser = parser_for(config.framework);

        Self {
            state: Mutex::new(DispatchState {
                config,
                parser,
                last_error: None,
            }),
            on_error: Mutex::new(None),
            presenter: Mutex::new(presenter),
        }
    }

    /// Handle one raw error event, terminal in one pass
    pub fn handle(&self, event: &RawErrorEvent) -> Outcome {
        let (parsed, show_toast, display) = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

            if !state.config.enabled {
                tracing::debug!("error handling disabled, discarding event");
                return Outcome::Suppressed(SuppressReason::Disabled);
            }

            // Parsers are total; this always yields a usable error
            let parsed = state.parser.parse(event);

            // Single-slot dedup: only the most recent error is remembered,
            // and the slot is updated even when a later filter discards
            let fingerprint = Fingerprint::of(&parsed);
            let now = Instant::now();

            if let Some((last, seen_at)) = &state.last_error
                && *last == fingerprint
                && now.duration_since(*seen_at) < DUPLICATE_WINDOW
            {
                tracing::debug!(status = ?parsed.status, "duplicate error within window, discarding");
                return Outcome::Suppressed(SuppressReason::Duplicate);
            }

            state.last_error = Some((fingerprint, now));

            let allow = &state.config.handle_only_status_codes;
            if !allow.is_empty() && !parsed.status.is_some_and(|status| allow.contains(&status)) {
                tracing::debug!(status = ?parsed.status, "status not in allow-list, discarding");
                return Outcome::Suppressed(SuppressReason::NotInAllowList);
            }

            let deny = &state.config.ignore_status_codes;
            if !deny.is_empty() && parsed.status.is_some_and(|status| deny.contains(&status)) {
                tracing::debug!(status = ?parsed.status, "status in deny-list, discarding");
                return Outcome::Suppressed(SuppressReason::InDenyList);
            }

            (parsed, state.config.show_toast, state.config.display.clone())
        };

        {
            let on_error = self.on_error.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(predicate) = on_error.as_ref()
                && predicate(&parsed) == Some(false)
            {
                tracing::debug!("error vetoed by custom predicate, discarding");
                return Outcome::Suppressed(SuppressReason::Vetoed);
            }
        }

        if !show_toast {
            tracing::debug!("display toggle off, not presenting");
            return Outcome::Suppressed(SuppressReason::DisplayDisabled);
        }

        tracing::debug!(
            status = ?parsed.status,
            framework = %parsed.framework,
            title = %parsed.title,
            "presenting error"
        );

        {
            let presenter = self.presenter.lock().unwrap_or_else(|e| e.into_inner());
            presenter.present(&parsed, &display);
        }

        Outcome::Presented(parsed)
    }

    /// Apply a partial configuration update
    ///
    /// Re-selects the active parser when the framework changes.
    pub fn configure(&self, update: ConfigUpdate) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.config.merge(update);
        state.parser = parser_for(state.config.framework);
    }

    /// Replace the whole configuration, preserving dedup state
    pub fn replace_config(&self, config: FaultFrameConfig) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.parser = parser_for(config.framework);
        state.config = config;
    }

    /// Toggle error handling
    pub fn set_enabled(&self, enabled: bool) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.config.enabled = enabled;
    }

    /// Install or clear the custom error predicate
    pub fn set_on_error(&self, predicate: Option<ErrorPredicate>) {
        let mut slot = self.on_error.lock().unwrap_or_else(|e| e.into_inner());
        *slot = predicate;
    }

    /// Replace the presenter
    pub fn set_presenter(&self, presenter: Box<dyn Presenter>) {
        let mut slot = self.presenter.lock().unwrap_or_else(|e| e.into_inner());
        *slot = presenter;
    }

    /// Copy of the current configuration
    #[must_use]
    pub fn config(&self) -> FaultFrameConfig {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.config.clone()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
