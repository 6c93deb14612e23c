//! Optional process-wide dispatcher instance
//!
//! The library core holds no implicit module state; embedders that need
//! one shared controller gate it through this explicit
//! get-or-create-with-merge factory. Repeat initialization overlays the
//! update onto the existing instance's configuration in place — fields
//! the update does not mention, dedup state, predicate, and presenter
//! all survive — rather than replacing the instance.

use std::sync::OnceLock;

use faultframe_config::{ConfigUpdate, FaultFrameConfig};

use crate::Dispatcher;

static INSTANCE: OnceLock<Dispatcher> = OnceLock::new();

/// Get or create the process-wide dispatcher
///
/// The first call creates an instance with the default configuration and
/// overlays `update` onto it; later calls overlay `update` onto the
/// existing instance and return it. Racing first calls both land on the
/// same instance and both updates are applied.
pub fn init(update: ConfigUpdate) -> &'static Dispatcher {
    let dispatcher = INSTANCE.get_or_init(|| {
        tracing::debug!("creating process-wide dispatcher");
        Dispatcher::new(FaultFrameConfig::default())
    });
    dispatcher.configure(update);
    dispatcher
}

/// The process-wide dispatcher, if one was initialized
#[must_use]
pub fn get() -> Option<&'static Dispatcher> {
    INSTANCE.get()
}
