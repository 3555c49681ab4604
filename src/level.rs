//! Message severities.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Severity of a declared message, ordered from least to most severe.
///
/// The ordering is what sinks gate on: a sink observing [`Level::Warn`]
/// observes everything at `Warn` and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Finest-grained diagnostic detail.
    Trace,
    /// Information useful while debugging.
    Debug,
    /// Routine operational messages.
    Info,
    /// Something unexpected that the component recovered from.
    Warn,
    /// An operation failed.
    Error,
    /// The component cannot continue.
    Critical,
}

impl Level {
    /// Every severity, least severe first.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Critical,
    ];

    /// Uppercase name, matching the `Display` output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level `{0}`")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-insensitive; `information` and `warning` are accepted as
    /// spelled-out aliases, matching the `#[event(level = ...)]` surface.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.to_ascii_lowercase().as_str() {
            "trace" => Level::Trace,
            "debug" => Level::Debug,
            "info" | "information" => Level::Info,
            "warn" | "warning" => Level::Warn,
            "error" => Level::Error,
            "critical" => Level::Critical,
            _ => return Err(ParseLevelError(s.to_owned())),
        };
        Ok(level)
    }
}
