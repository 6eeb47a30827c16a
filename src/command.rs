use crate::mapping::{AxisMapping, ButtonMapping};

/// Stands in for the device path in the stored command; emulate mode
/// swaps the real path in right before launching.
pub const DEVICE_PLACEHOLDER: &str = "{}";

/// Assemble the full xboxdrv invocation from one session's mappings.
///
/// Entries come out in capture order, so the same session always produces
/// the same text. Categories nobody mapped are left out entirely; the
/// text has to survive a whitespace split back into an argv later.
pub fn build(buttons: &ButtonMapping, axes: &AxisMapping) -> String {
    let mut command = format!("sudo xboxdrv --evdev {}", DEVICE_PLACEHOLDER);

    let keymap: Vec<String> = buttons
        .iter()
        .map(|(key, button)| format!("{}={}", key.name, button.name()))
        .collect();
    if !keymap.is_empty() {
        command.push_str(" --evdev-keymap ");
        command.push_str(&keymap.join(","));
    }

    let absmap: Vec<String> = axes
        .iter()
        .map(|entry| format!("{}={}", entry.physical.name, entry.axis.name()))
        .collect();
    if !absmap.is_empty() {
        command.push_str(" --evdev-absmap ");
        command.push_str(&absmap.join(","));
    }

    let inversions: Vec<String> = axes
        .iter()
        .filter(|entry| entry.inverted)
        .map(|entry| format!("-{}={}", entry.axis.name(), entry.axis.name()))
        .collect();
    if !inversions.is_empty() {
        command.push_str(" --axismap ");
        command.push_str(&inversions.join(","));
    }

    command.push_str(" --mimic-xpad --silent");
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::ScriptedSource;
    use crate::input::{PhysicalAxis, PhysicalKey, RawEvent};
    use crate::mapping::{AxisEntry, CanonicalAxis, CanonicalButton};
    use crate::wizard::{axismap, keymap};

    fn sample_mappings() -> (ButtonMapping, AxisMapping) {
        let mut buttons = ButtonMapping::default();
        buttons.insert(PhysicalKey::new(0x13b), CanonicalButton::Start);
        buttons.insert(PhysicalKey::new(0x130), CanonicalButton::A);

        let mut axes = AxisMapping::default();
        axes.insert(AxisEntry {
            axis: CanonicalAxis::X1,
            physical: PhysicalAxis::new(0),
            inverted: false,
        });
        axes.insert(AxisEntry {
            axis: CanonicalAxis::Y1,
            physical: PhysicalAxis::new(1),
            inverted: true,
        });

        (buttons, axes)
    }

    #[test]
    fn full_command_in_capture_order() {
        let (buttons, axes) = sample_mappings();
        assert_eq!(
            build(&buttons, &axes),
            "sudo xboxdrv --evdev {} \
             --evdev-keymap BTN_START=start,BTN_SOUTH=a \
             --evdev-absmap ABS_X=x1,ABS_Y=y1 \
             --axismap -y1=y1 \
             --mimic-xpad --silent"
        );
    }

    #[test]
    fn build_is_deterministic() {
        let (buttons, axes) = sample_mappings();
        assert_eq!(build(&buttons, &axes), build(&buttons, &axes));
    }

    #[test]
    fn empty_mappings_leave_their_options_out() {
        let command = build(&ButtonMapping::default(), &AxisMapping::default());
        assert_eq!(command, "sudo xboxdrv --evdev {} --mimic-xpad --silent");
        assert!(!command.contains("--evdev-keymap"));
        assert!(!command.contains("--evdev-absmap"));
        assert!(!command.contains("--axismap"));
    }

    #[test]
    fn uninverted_axes_produce_no_axismap() {
        let mut axes = AxisMapping::default();
        axes.insert(AxisEntry {
            axis: CanonicalAxis::X2,
            physical: PhysicalAxis::new(3),
            inverted: false,
        });

        let command = build(&ButtonMapping::default(), &axes);
        assert!(command.contains("--evdev-absmap ABS_RX=x2"));
        assert!(!command.contains("--axismap"));
    }

    #[test]
    fn wizard_to_command_round_trip() {
        // One button (KEY_A for a), one stick direction pair on ABS_X,
        // natural polarity. The built command carries both and nothing in
        // the inversion list.
        let mut source = ScriptedSource::new([
            RawEvent::Key { code: 30, value: 1 },
            RawEvent::Key { code: 30, value: 0 },
            RawEvent::Axis { code: 0, value: 0 },
            RawEvent::Axis { code: 0, value: 255 },
        ])
        .with_axis(0, 0, 255);

        let buttons =
            keymap::collect_button_mapping(&mut source, &[CanonicalButton::A]).unwrap();
        let axes =
            axismap::collect_axis_mapping(&mut source, &buttons, &[CanonicalAxis::X1]).unwrap();

        let command = build(&buttons, &axes);
        assert!(command.contains("--evdev-keymap KEY_A=a"));
        assert!(command.contains("--evdev-absmap ABS_X=x1"));
        assert!(!command.contains("--axismap"));
    }
}
