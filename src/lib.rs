#![deny(missing_docs)]
//! Compile-time generated, strongly-typed structured logging.
//!
//! A logging *contract* is a trait whose methods each declare one message:
//! a numeric id, a severity, and a template with named placeholders. The
//! [`contract`] attribute expands that declaration into
//!
//! - one *carrier* struct per message, with inherent `ID` / `LEVEL` / `NAME`
//!   / `TEMPLATE` constants and an `emit` function that gates on
//!   [`Sink::enabled`] and constructs nothing when the severity is off,
//! - a [`Capture`] implementation per carrier, exposing the parameters as
//!   ordered `(name, value)` pairs and rendering the template only on
//!   demand,
//! - a delegating `{Trait}Logger<S>` adapter implementing the trait by
//!   forwarding every method to its carrier's emission function.
//!
//! Defective contracts are rejected at compile time, and every defect is
//! reported in a single compile: malformed templates, placeholders without a
//! matching parameter, reused ids or names, and parameter types outside the
//! closed capture set.
//!
//! # Example
//!
//! ```
//! use std::sync::Mutex;
//!
//! use logwright::{contract, Level, Record, Sink};
//!
//! #[contract]
//! pub trait NetworkEvents {
//!     /// The socket could not be opened.
//!     #[event(id = 0, level = "critical", message = "Could not open socket to `{host_name}`")]
//!     fn connection_failed(&self, host_name: &str);
//! }
//!
//! #[derive(Default)]
//! struct Memory(Mutex<Vec<String>>);
//!
//! impl Sink for Memory {
//!     fn enabled(&self, level: Level) -> bool {
//!         level >= Level::Info
//!     }
//!
//!     fn emit(&self, record: &Record<'_>) {
//!         let line = format!("{}: {}", record.level(), record.render());
//!         self.0.lock().unwrap().push(line);
//!     }
//! }
//!
//! let sink = Memory::default();
//! let log = NetworkEventsLogger::new(&sink);
//! log.connection_failed("microsoft.com");
//!
//! let lines = sink.0.lock().unwrap();
//! assert_eq!(lines[0], "CRITICAL: Could not open socket to `microsoft.com`");
//! ```
//!
//! Sinks that only want structure skip rendering entirely and walk
//! [`Record::properties`]; the capture is borrowed from the emitting stack
//! frame, so nothing is copied or allocated until a sink asks.

pub mod capture;
pub mod level;
pub mod record;
pub mod sink;
pub mod value;

/// The `#[contract]` attribute macro. See the crate documentation.
pub use logwright_macros::contract;

// Re-export the whole surface so callers can do `logwright::Sink`.
pub use crate::{
    capture::{Capture, Properties},
    level::{Level, ParseLevelError},
    record::Record,
    sink::Sink,
    value::Value,
};
