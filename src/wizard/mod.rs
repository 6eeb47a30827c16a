pub mod axismap;
pub mod keymap;

use crate::input::{EventSource, InputError};
use crate::mapping::{AxisMapping, ButtonMapping, CanonicalAxis, CanonicalButton};

/// One full interactive mapping session over an already-opened device.
pub fn run_session(
    source: &mut dyn EventSource,
) -> Result<(ButtonMapping, AxisMapping), InputError> {
    let buttons = keymap::collect_button_mapping(source, &CanonicalButton::ALL)?;
    let axes = axismap::collect_axis_mapping(source, &buttons, &CanonicalAxis::ALL)?;
    Ok((buttons, axes))
}
