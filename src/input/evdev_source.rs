use super::{AxisRange, EventSource, InputError, RawEvent};
use evdev::{Device, EventType};
use std::collections::{HashMap, VecDeque};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

/// `EventSource` over a real `/dev/input/event*` node.
pub struct EvdevSource {
    device: Device,
    ranges: HashMap<u16, AxisRange>,
    // fetch_events hands back whole batches; they queue here so callers
    // can take one event at a time.
    queued: VecDeque<RawEvent>,
}

impl EvdevSource {
    pub fn open(path: &Path) -> Result<Self, InputError> {
        let device = Device::open(path)?;
        log::info!(
            "Opened {} ({})",
            path.display(),
            device.name().unwrap_or("unnamed device")
        );

        let ranges: HashMap<u16, AxisRange> = if let Ok(info) = device.get_absinfo() {
            info.map(|(axis, info)| {
                (axis.0, AxisRange { min: info.minimum(), max: info.maximum() })
            })
            .collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            device,
            ranges,
            queued: VecDeque::new(),
        })
    }
}

impl EventSource for EvdevSource {
    fn next_event(&mut self) -> Result<RawEvent, InputError> {
        loop {
            if let Some(event) = self.queued.pop_front() {
                return Ok(event);
            }

            match self.device.fetch_events() {
                Ok(events) => {
                    for event in events {
                        self.queued.push_back(classify(&event));
                    }
                }
                Err(e) if e.kind() == ErrorKind::WouldBlock => {
                    std::thread::sleep(Duration::from_millis(10));
                }
                Err(e) => {
                    log::error!("Failed to fetch evdev events: {}", e);
                    return Err(InputError::Disconnected);
                }
            }
        }
    }

    fn drain(&mut self) -> Result<(), InputError> {
        self.queued.clear();

        self.device.set_nonblocking(true)?;
        let result = loop {
            match self.device.fetch_events() {
                Ok(events) => {
                    for _ in events {}
                }
                Err(e) if e.kind() == ErrorKind::WouldBlock => break Ok(()),
                Err(e) => {
                    log::error!("Failed to drain evdev events: {}", e);
                    break Err(InputError::Disconnected);
                }
            }
        };
        self.device.set_nonblocking(false)?;

        result
    }

    fn axis_range(&self, code: u16) -> Option<AxisRange> {
        self.ranges.get(&code).copied()
    }
}

fn classify(event: &evdev::InputEvent) -> RawEvent {
    if event.event_type() == EventType::KEY {
        RawEvent::Key { code: event.code(), value: event.value() }
    } else if event.event_type() == EventType::ABSOLUTE {
        RawEvent::Axis { code: event.code(), value: event.value() }
    } else {
        RawEvent::Other
    }
}
