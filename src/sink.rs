//! The consumer side of a contract.

use std::sync::Arc;

use crate::{level::Level, record::Record};

/// Where generated emission functions deliver their records.
///
/// `enabled` is the severity gate. Generated code asks it first and builds
/// nothing when the answer is no, so a disabled message costs one virtual
/// call and a branch. `emit` only runs after `enabled` returned true for the
/// record's level.
pub trait Sink {
    /// Does this sink currently observe `level`?
    fn enabled(&self, level: Level) -> bool;

    /// Deliver one record.
    fn emit(&self, record: &Record<'_>);
}

impl<S: Sink + ?Sized> Sink for &S {
    fn enabled(&self, level: Level) -> bool {
        S::enabled(self, level)
    }

    fn emit(&self, record: &Record<'_>) {
        S::emit(self, record)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn enabled(&self, level: Level) -> bool {
        S::enabled(self, level)
    }

    fn emit(&self, record: &Record<'_>) {
        S::emit(self, record)
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn enabled(&self, level: Level) -> bool {
        S::enabled(self, level)
    }

    fn emit(&self, record: &Record<'_>) {
        S::emit(self, record)
    }
}
