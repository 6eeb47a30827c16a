use crate::input::{Extreme, PhysicalAxis, PhysicalKey};

/// Buttons xboxdrv understands, in the order the wizard asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalButton {
    Start,
    Back,
    Guide,
    A,
    B,
    X,
    Y,
    Black,
    White,
    Lb,
    Rb,
    Lt,
    Rt,
    Tl,
    Tr,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    Green,
    Red,
    Blue,
    Yellow,
    Orange,
}

impl CanonicalButton {
    pub const ALL: [CanonicalButton; 24] = [
        CanonicalButton::Start,
        CanonicalButton::Back,
        CanonicalButton::Guide,
        CanonicalButton::A,
        CanonicalButton::B,
        CanonicalButton::X,
        CanonicalButton::Y,
        CanonicalButton::Black,
        CanonicalButton::White,
        CanonicalButton::Lb,
        CanonicalButton::Rb,
        CanonicalButton::Lt,
        CanonicalButton::Rt,
        CanonicalButton::Tl,
        CanonicalButton::Tr,
        CanonicalButton::DpadUp,
        CanonicalButton::DpadDown,
        CanonicalButton::DpadLeft,
        CanonicalButton::DpadRight,
        CanonicalButton::Green,
        CanonicalButton::Red,
        CanonicalButton::Blue,
        CanonicalButton::Yellow,
        CanonicalButton::Orange,
    ];

    /// The name xboxdrv expects in --evdev-keymap entries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Back => "back",
            Self::Guide => "guide",
            Self::A => "a",
            Self::B => "b",
            Self::X => "x",
            Self::Y => "y",
            Self::Black => "black",
            Self::White => "white",
            Self::Lb => "lb",
            Self::Rb => "rb",
            Self::Lt => "lt",
            Self::Rt => "rt",
            Self::Tl => "tl",
            Self::Tr => "tr",
            Self::DpadUp => "du",
            Self::DpadDown => "dd",
            Self::DpadLeft => "dl",
            Self::DpadRight => "dr",
            Self::Green => "green",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
        }
    }

    /// What we call it when prompting.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Back => "Back",
            Self::Guide => "Guide (the logo button)",
            Self::A => "A",
            Self::B => "B",
            Self::X => "X",
            Self::Y => "Y",
            Self::Black => "Black",
            Self::White => "White",
            Self::Lb => "Left bumper",
            Self::Rb => "Right bumper",
            Self::Lt => "Left trigger (as a button)",
            Self::Rt => "Right trigger (as a button)",
            Self::Tl => "Left stick click",
            Self::Tr => "Right stick click",
            Self::DpadUp => "D-pad up",
            Self::DpadDown => "D-pad down",
            Self::DpadLeft => "D-pad left",
            Self::DpadRight => "D-pad right",
            Self::Green => "Green fret",
            Self::Red => "Red fret",
            Self::Blue => "Blue fret",
            Self::Yellow => "Yellow fret",
            Self::Orange => "Orange fret",
        }
    }
}

/// Axes xboxdrv understands, in the order the wizard asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalAxis {
    X1,
    Y1,
    X2,
    Y2,
    Lt,
    Rt,
}

/// How an axis gets sampled during the wizard.
#[derive(Debug, Clone, Copy)]
pub enum AxisShape {
    /// Sampled in both directions.
    Stick {
        directions: [&'static str; 2],
        /// Extremes the two directions hit when the axis is not inverted.
        natural: (Extreme, Extreme),
    },
    /// Sampled once, at full pull.
    Trigger,
}

impl CanonicalAxis {
    pub const ALL: [CanonicalAxis; 6] = [
        CanonicalAxis::X1,
        CanonicalAxis::Y1,
        CanonicalAxis::X2,
        CanonicalAxis::Y2,
        CanonicalAxis::Lt,
        CanonicalAxis::Rt,
    ];

    /// The name xboxdrv expects in --evdev-absmap and --axismap entries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::X1 => "x1",
            Self::Y1 => "y1",
            Self::X2 => "x2",
            Self::Y2 => "y2",
            Self::Lt => "lt",
            Self::Rt => "rt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::X1 | Self::Y1 => "left stick",
            Self::X2 | Self::Y2 => "right stick",
            Self::Lt => "left trigger",
            Self::Rt => "right trigger",
        }
    }

    pub fn shape(&self) -> AxisShape {
        match self {
            Self::X1 | Self::X2 => AxisShape::Stick {
                directions: ["left", "right"],
                natural: (Extreme::Min, Extreme::Max),
            },
            // xboxdrv's vertical axes point up, evdev pads report up as the
            // minimum, so a stock pad lands inverted here. Keep this as
            // data; do not re-derive it.
            Self::Y1 | Self::Y2 => AxisShape::Stick {
                directions: ["up", "down"],
                natural: (Extreme::Max, Extreme::Min),
            },
            Self::Lt | Self::Rt => AxisShape::Trigger,
        }
    }
}

/// Physical key -> canonical button assignments, in capture order.
#[derive(Debug, Clone, Default)]
pub struct ButtonMapping {
    entries: Vec<(PhysicalKey, CanonicalButton)>,
}

impl ButtonMapping {
    /// Record an assignment. Refused (returning false) if either side is
    /// already taken; first assignment wins.
    pub fn insert(&mut self, key: PhysicalKey, button: CanonicalButton) -> bool {
        if self.is_assigned(key.code) || self.key_for(button).is_some() {
            return false;
        }
        self.entries.push((key, button));
        true
    }

    pub fn is_assigned(&self, code: u16) -> bool {
        self.entries.iter().any(|(key, _)| key.code == code)
    }

    pub fn key_for(&self, button: CanonicalButton) -> Option<&PhysicalKey> {
        self.entries
            .iter()
            .find(|(_, assigned)| *assigned == button)
            .map(|(key, _)| key)
    }

    /// The earliest key the user bound, if any.
    pub fn first_key(&self) -> Option<&PhysicalKey> {
        self.entries.first().map(|(key, _)| key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (PhysicalKey, CanonicalButton)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One captured axis: where it lives on the device and whether it runs
/// backwards relative to xboxdrv's convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisEntry {
    pub axis: CanonicalAxis,
    pub physical: PhysicalAxis,
    pub inverted: bool,
}

/// Canonical axis assignments, in capture order. A missing axis means
/// the user skipped it.
#[derive(Debug, Clone, Default)]
pub struct AxisMapping {
    entries: Vec<AxisEntry>,
}

impl AxisMapping {
    /// Record an entry; refused if the canonical axis already has one.
    pub fn insert(&mut self, entry: AxisEntry) -> bool {
        if self.entry_for(entry.axis).is_some() {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn entry_for(&self, axis: CanonicalAxis) -> Option<&AxisEntry> {
        self.entries.iter().find(|entry| entry.axis == axis)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AxisEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
