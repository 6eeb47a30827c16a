mod reader;
pub mod evdev_source;

pub use reader::*;

#[cfg(test)]
pub(crate) mod testing;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input device error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input device disconnected")]
    Disconnected,
}

/// One event off the device, stripped down to what the wizards care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    Key { code: u16, value: i32 },
    Axis { code: u16, value: i32 },
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Min,
    Max,
}

/// Reported capability range for one absolute axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalKey {
    pub code: u16,
    pub name: String,
}

impl PhysicalKey {
    pub fn new(code: u16) -> Self {
        Self { code, name: key_name(code) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalAxis {
    pub code: u16,
    pub name: String,
}

impl PhysicalAxis {
    pub fn new(code: u16) -> Self {
        Self { code, name: axis_name(code) }
    }
}

/// Kernel name for a key code (KEY_A, BTN_SOUTH, ...), or the bare code
/// for keys the tables don't know.
pub fn key_name(code: u16) -> String {
    let name = format!("{:?}", evdev::KeyCode::new(code));
    if name.starts_with("KEY_") || name.starts_with("BTN_") {
        name
    } else {
        code.to_string()
    }
}

/// Same thing for absolute axes (ABS_X, ABS_RZ, ...).
pub fn axis_name(code: u16) -> String {
    let name = format!("{:?}", evdev::AbsoluteAxisCode(code));
    if name.starts_with("ABS_") {
        name
    } else {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_get_symbolic_names() {
        assert_eq!(key_name(30), "KEY_A");
        assert_eq!(key_name(0x130), "BTN_SOUTH");
        assert_eq!(axis_name(0), "ABS_X");
        assert_eq!(axis_name(1), "ABS_Y");
    }

    #[test]
    fn unknown_codes_fall_back_to_numbers() {
        assert_eq!(key_name(u16::MAX), "65535");
        assert_eq!(axis_name(0x3e), "62");
    }
}
