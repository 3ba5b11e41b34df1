//! Observability infrastructure for TurboCommerce components.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with component context
//! - `LogBuilder` - Fluent field builder for single entries
//!
//! Entries are forwarded to the `tracing` facade, so whichever subscriber the
//! host installs (console in the browser, fmt on native) receives them.

mod logging;

pub use logging::*;
