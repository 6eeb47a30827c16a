use super::{AxisRange, EventSource, InputError, RawEvent};
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

/// Canned event stream standing in for a real device in tests.
///
/// The script is exactly what the consumer will see, so `drain` and
/// `settle` are no-ops here (and nothing sleeps).
pub(crate) struct ScriptedSource {
    events: VecDeque<RawEvent>,
    ranges: HashMap<u16, AxisRange>,
}

impl ScriptedSource {
    pub(crate) fn new<I>(events: I) -> Self
    where
        I: IntoIterator<Item = RawEvent>,
    {
        Self {
            events: events.into_iter().collect(),
            ranges: HashMap::new(),
        }
    }

    pub(crate) fn with_axis(mut self, code: u16, min: i32, max: i32) -> Self {
        self.ranges.insert(code, AxisRange { min, max });
        self
    }
}

impl EventSource for ScriptedSource {
    fn next_event(&mut self) -> Result<RawEvent, InputError> {
        self.events.pop_front().ok_or_else(|| {
            InputError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "scripted event stream ran out",
            ))
        })
    }

    fn drain(&mut self) -> Result<(), InputError> {
        Ok(())
    }

    fn axis_range(&self, code: u16) -> Option<AxisRange> {
        self.ranges.get(&code).copied()
    }

    fn settle(&mut self, _window: Duration) -> Result<(), InputError> {
        Ok(())
    }
}
