use crate::input::{AxisProbe, EventSource, Extreme, InputError, PhysicalAxis, PhysicalKey};
use crate::mapping::{AxisEntry, AxisMapping, AxisShape, ButtonMapping, CanonicalAxis, CanonicalButton};
use std::time::Duration;

/// Quiet period before each axis prompt, so leftover motion from the
/// previous answer isn't read as this one.
const QUERY_SETTLE: Duration = Duration::from_millis(300);

/// Walk the axis catalog, capturing each axis's physical identity and
/// polarity by asking the user to hold it at its extremes.
pub fn collect_axis_mapping(
    source: &mut dyn EventSource,
    buttons: &ButtonMapping,
    catalog: &[CanonicalAxis],
) -> Result<AxisMapping, InputError> {
    let cancel = cancel_key(buttons);
    let cancel_code = cancel.as_ref().map(|key| key.code);

    println!();
    println!("Sticks and triggers.");
    if let Some(key) = &cancel {
        println!("To skip an axis your controller doesn't have, press {}.", key.name);
    }

    let mut mapping = AxisMapping::default();
    for &axis in catalog {
        let entry = match axis.shape() {
            AxisShape::Stick { directions, natural } => {
                map_stick(source, axis, directions, natural, cancel_code)?
            }
            AxisShape::Trigger => map_trigger(source, axis, cancel_code)?,
        };

        match entry {
            Some(entry) => {
                println!(
                    "  {} -> {}{}",
                    axis.name(),
                    entry.physical.name,
                    if entry.inverted { " (inverted)" } else { "" }
                );
                mapping.insert(entry);
            }
            None => println!("  {} skipped.", axis.name()),
        }
    }

    println!("{} of {} axes bound.", mapping.len(), catalog.len());
    Ok(mapping)
}

/// The skip key for axis prompts: whatever the user bound to start, or
/// failing that the first button they bound at all.
fn cancel_key(buttons: &ButtonMapping) -> Option<PhysicalKey> {
    buttons
        .key_for(CanonicalButton::Start)
        .or_else(|| buttons.first_key())
        .cloned()
}

/// How the two directional readings of a stick axis fit together.
#[derive(Debug, Clone, PartialEq, Eq)]
enum StickVerdict {
    Confirmed { inverted: bool },
    DifferentAxes,
    SameExtreme,
}

/// Pair two directional readings into one judgment. They confirm each
/// other only if they came from the same physical axis and hit opposite
/// ends of it; the polarity falls out of which end the first direction
/// hit, compared against the axis's natural pair.
fn resolve_stick_samples(
    first: &(Extreme, PhysicalAxis),
    second: &(Extreme, PhysicalAxis),
    natural: (Extreme, Extreme),
) -> StickVerdict {
    if first.1.code != second.1.code {
        return StickVerdict::DifferentAxes;
    }
    if first.0 == second.0 {
        return StickVerdict::SameExtreme;
    }
    StickVerdict::Confirmed { inverted: (first.0, second.0) != natural }
}

fn map_stick(
    source: &mut dyn EventSource,
    axis: CanonicalAxis,
    directions: [&'static str; 2],
    natural: (Extreme, Extreme),
    cancel: Option<u16>,
) -> Result<Option<AxisEntry>, InputError> {
    loop {
        let Some(first) = probe_direction(source, axis, directions[0], cancel)? else {
            return Ok(None);
        };
        let Some(second) = probe_direction(source, axis, directions[1], cancel)? else {
            return Ok(None);
        };

        match resolve_stick_samples(&first, &second, natural) {
            StickVerdict::Confirmed { inverted } => {
                return Ok(Some(AxisEntry { axis, physical: first.1, inverted }));
            }
            StickVerdict::DifferentAxes => {
                println!(
                    "  The two directions moved different axes ({} and {}). Starting the {} over.",
                    first.1.name,
                    second.1.name,
                    axis.label()
                );
            }
            StickVerdict::SameExtreme => {
                println!(
                    "  Both directions hit the same end of {}. Starting the {} over.",
                    first.1.name,
                    axis.label()
                );
            }
        }
    }
}

fn probe_direction(
    source: &mut dyn EventSource,
    axis: CanonicalAxis,
    direction: &str,
    cancel: Option<u16>,
) -> Result<Option<(Extreme, PhysicalAxis)>, InputError> {
    source.settle(QUERY_SETTLE)?;
    println!("  Push the {} all the way {} and hold it.", axis.label(), direction);

    match source.next_extreme_axis(cancel)? {
        AxisProbe::Cancelled => Ok(None),
        AxisProbe::Extreme(extreme, physical) => Ok(Some((extreme, physical))),
    }
}

fn map_trigger(
    source: &mut dyn EventSource,
    axis: CanonicalAxis,
    cancel: Option<u16>,
) -> Result<Option<AxisEntry>, InputError> {
    source.settle(QUERY_SETTLE)?;
    println!("  Pull the {} all the way in and hold it.", axis.label());

    match source.next_extreme_axis(cancel)? {
        AxisProbe::Cancelled => Ok(None),
        AxisProbe::Extreme(extreme, physical) => Ok(Some(AxisEntry {
            axis,
            physical,
            // A full pull should read as the maximum; bottoming out at the
            // minimum means the axis runs backwards.
            inverted: extreme == Extreme::Min,
        })),
    }
}
