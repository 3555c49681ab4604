//! Structured access to an event's captured parameters.

use crate::value::Value;

/// A message's captured parameters, in declaration order.
///
/// Implemented by the carrier structs `#[contract]` generates. The trait is
/// object safe, so sinks receive captures as `&dyn Capture` and decide per
/// record whether to walk the pairs, render the text, or both.
pub trait Capture {
    /// Number of captured parameters.
    fn len(&self) -> usize;

    /// The `(name, value)` pair at `index`, following parameter declaration
    /// order. `None` once `index` is out of range.
    fn get(&self, index: usize) -> Option<(&'static str, Value<'_>)>;

    /// Substitute the captured values into the message template.
    ///
    /// This is the only allocating path; sinks that consume captures
    /// structurally never pay for it.
    fn render(&self) -> String;

    /// True when the message captures nothing.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the captured pairs without rendering.
    fn properties(&self) -> Properties<'_>
    where
        Self: Sized,
    {
        Properties::new(self)
    }
}

/// Iterator over a capture's `(name, value)` pairs.
#[derive(Clone, Copy)]
pub struct Properties<'a> {
    capture: &'a dyn Capture,
    index: usize,
}

impl<'a> Properties<'a> {
    /// Iterate `capture`'s pairs. Useful when all that's in hand is a
    /// `&dyn Capture`, where the sized [`Capture::properties`] method is
    /// unavailable.
    pub fn new(capture: &'a dyn Capture) -> Self {
        Properties { capture, index: 0 }
    }
}

impl<'a> Iterator for Properties<'a> {
    type Item = (&'static str, Value<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.capture.get(self.index)?;
        self.index += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capture.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Properties<'_> {}

impl std::iter::FusedIterator for Properties<'_> {}
