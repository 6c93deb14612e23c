//! Core data model shared by all FaultFrame crates
//!
//! Defines the inbound event contract produced by transport adapters and
//! the canonical error representation produced by the framework parsers.

mod canonical;
mod event;

pub use canonical::{CanonicalError, Framework, StackFrame};
pub use event::{RawErrorEvent, RequestInfo};
