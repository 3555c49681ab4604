//! The unit handed to sinks.

use std::fmt;

use crate::{
    capture::{Capture, Properties},
    level::Level,
};

/// One emission, as delivered to a [`Sink`](crate::sink::Sink).
///
/// A record borrows its capture from the emitting stack frame; nothing is
/// rendered or copied until the sink asks. Records are `Copy`, so a sink can
/// pass them around freely within the emission call.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    level: Level,
    id: u32,
    name: &'static str,
    template: &'static str,
    values: &'a dyn Capture,
}

impl<'a> Record<'a> {
    /// Assemble a record. Called by generated emission functions.
    pub fn new(
        level: Level,
        id: u32,
        name: &'static str,
        template: &'static str,
        values: &'a dyn Capture,
    ) -> Self {
        Record {
            level,
            id,
            name,
            template,
            values,
        }
    }

    /// Declared severity of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Declared numeric id, unique within the contract.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Effective event name: the declared override, or the declaring
    /// method's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The raw message template, escapes intact.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// The structured capture behind this record.
    pub fn values(&self) -> &'a dyn Capture {
        self.values
    }

    /// Substitute the captured values into the template. Allocates; sinks
    /// that only need structure should use [`Record::properties`].
    pub fn render(&self) -> String {
        self.values.render()
    }

    /// Iterate the captured `(name, value)` pairs without rendering.
    pub fn properties(&self) -> Properties<'a> {
        Properties::new(self.values)
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}
