use crate::input::{EventSource, InputError};
use crate::mapping::{ButtonMapping, CanonicalButton};
use std::io::Write;

/// Walk the button catalog, capturing one key press per button.
///
/// Pressing a key that's already bound skips the current button; that's
/// how the user says their controller doesn't have it.
pub fn collect_button_mapping(
    source: &mut dyn EventSource,
    catalog: &[CanonicalButton],
) -> Result<ButtonMapping, InputError> {
    let mut mapping = ButtonMapping::default();

    println!();
    println!("Buttons. Press the control you want for each one.");
    println!("To skip a button your controller doesn't have, press any button you've already used.");

    for &button in catalog {
        print!("  {:<28}", button.label());
        let _ = std::io::stdout().flush();

        let key = source.next_key_press()?;
        if mapping.insert(key.clone(), button) {
            println!("{}", key.name);
            log::debug!("Bound {} to {}", key.name, button.name());
        } else {
            println!("(skipped)");
        }
    }

    println!("{} of {} buttons bound.", mapping.len(), catalog.len());
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::ScriptedSource;
    use crate::input::RawEvent;
    use std::collections::HashSet;

    fn press(code: u16) -> [RawEvent; 2] {
        [
            RawEvent::Key { code, value: 1 },
            RawEvent::Key { code, value: 0 },
        ]
    }

    #[test]
    fn repeated_key_skips_the_current_button() {
        let script: Vec<RawEvent> = [press(10), press(10), press(11)].concat();
        let mut source = ScriptedSource::new(script);

        let catalog = [CanonicalButton::A, CanonicalButton::B, CanonicalButton::X];
        let mapping = collect_button_mapping(&mut source, &catalog).unwrap();

        assert_eq!(mapping.key_for(CanonicalButton::A).map(|k| k.code), Some(10));
        assert!(mapping.key_for(CanonicalButton::B).is_none());
        assert_eq!(mapping.key_for(CanonicalButton::X).map(|k| k.code), Some(11));
    }

    #[test]
    fn bound_keys_stay_distinct() {
        let script: Vec<RawEvent> = [press(5), press(5), press(6), press(5), press(6)].concat();
        let mut source = ScriptedSource::new(script);

        let catalog = [
            CanonicalButton::Start,
            CanonicalButton::Back,
            CanonicalButton::Guide,
            CanonicalButton::A,
            CanonicalButton::B,
        ];
        let mapping = collect_button_mapping(&mut source, &catalog).unwrap();

        let codes: Vec<u16> = mapping.iter().map(|(key, _)| key.code).collect();
        let distinct: HashSet<u16> = codes.iter().copied().collect();
        assert_eq!(codes.len(), distinct.len());
        assert_eq!(codes, vec![5, 6]);
    }

    #[test]
    fn axis_noise_between_presses_is_ignored() {
        let mut source = ScriptedSource::new([
            RawEvent::Axis { code: 0, value: 255 },
            RawEvent::Key { code: 7, value: 0 },
            RawEvent::Key { code: 7, value: 1 },
        ]);

        let mapping = collect_button_mapping(&mut source, &[CanonicalButton::A]).unwrap();
        assert_eq!(mapping.key_for(CanonicalButton::A).map(|k| k.code), Some(7));
    }
}
