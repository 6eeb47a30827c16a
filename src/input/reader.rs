use super::{AxisRange, Extreme, InputError, PhysicalAxis, PhysicalKey, RawEvent};
use std::time::Duration;

/// Outcome of waiting for an axis to hit an end of its range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisProbe {
    Extreme(Extreme, PhysicalAxis),
    Cancelled,
}

/// Blocking event stream from one input device.
///
/// The wizards only ever talk to this trait, so tests can feed them a
/// scripted stream instead of real hardware.
pub trait EventSource {
    /// Block until the device reports another event.
    fn next_event(&mut self) -> Result<RawEvent, InputError>;

    /// Throw away everything already queued, without blocking.
    fn drain(&mut self) -> Result<(), InputError>;

    /// Capability range for an absolute axis, if the device reports one.
    fn axis_range(&self, code: u16) -> Option<AxisRange>;

    /// Debounce between prompts: give the user a moment to let go, then
    /// drop whatever that produced.
    fn settle(&mut self, window: Duration) -> Result<(), InputError> {
        std::thread::sleep(window);
        self.drain()
    }

    /// Block until a key goes down. Releases, autorepeat and axis noise
    /// are ignored.
    fn next_key_press(&mut self) -> Result<PhysicalKey, InputError> {
        loop {
            if let RawEvent::Key { code, value: 1 } = self.next_event()? {
                return Ok(PhysicalKey::new(code));
            }
        }
    }

    /// Block until some axis reaches an end of its reported range, or the
    /// cancel key (if any) goes down.
    ///
    /// Partial deflections don't count; neither do axes the device
    /// reports no usable range for.
    fn next_extreme_axis(&mut self, cancel_key: Option<u16>) -> Result<AxisProbe, InputError> {
        loop {
            match self.next_event()? {
                RawEvent::Key { code, value: 1 } if Some(code) == cancel_key => {
                    return Ok(AxisProbe::Cancelled);
                }
                RawEvent::Axis { code, value } => {
                    let Some(range) = self.axis_range(code) else {
                        continue;
                    };
                    if range.min >= range.max {
                        continue;
                    }
                    if value <= range.min {
                        return Ok(AxisProbe::Extreme(Extreme::Min, PhysicalAxis::new(code)));
                    }
                    if value >= range.max {
                        return Ok(AxisProbe::Extreme(Extreme::Max, PhysicalAxis::new(code)));
                    }
                }
                _ => {}
            }
        }
    }
}
