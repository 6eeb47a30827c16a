use crate::command::DEVICE_PLACEHOLDER;
use crate::store::CommandStore;
use anyhow::bail;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What --emulate says when nothing has been saved yet.
pub const NO_COMMAND_MSG: &str =
    "Controller config does not exist yet. Run padmap --setup first.";

/// Drop the detected device path into the stored command.
pub fn fill_device(command: &str, device: &Path) -> String {
    command.replacen(DEVICE_PLACEHOLDER, &device.to_string_lossy(), 1)
}

/// Split the stored text back into an argv and run it to completion.
pub fn spawn(command: &str) -> anyhow::Result<()> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("stored emulator command is empty");
    };

    log::info!("Running: {}", command);
    match Command::new(program).args(parts).status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => {
            log::warn!("{} exited with {}", program, status);
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            bail!("{} is not installed (or not on PATH)", program)
        }
        Err(e) => bail!("failed to run {}: {}", program, e),
    }
}

/// Everything between "padmap --emulate" and the emulator owning the
/// controller. Device detection and the launch come in as closures so the
/// no-config path is testable without hardware.
pub fn run_emulate<D, L>(store: &CommandStore, detect: D, launch: L) -> anyhow::Result<()>
where
    D: FnOnce() -> anyhow::Result<PathBuf>,
    L: FnOnce(&str) -> anyhow::Result<()>,
{
    let Some(command) = store.load() else {
        bail!(NO_COMMAND_MSG);
    };

    let device = detect()?;
    let command = fill_device(&command, &device);
    launch(&command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_replaced_exactly_once() {
        assert_eq!(
            fill_device("sudo xboxdrv --evdev {} --silent", Path::new("/dev/input/event7")),
            "sudo xboxdrv --evdev /dev/input/event7 --silent"
        );
        assert_eq!(fill_device("a {} b {}", Path::new("/dev/x")), "a /dev/x b {}");
    }

    #[test]
    fn missing_config_reports_and_never_detects_or_launches() {
        let store = CommandStore::at(std::env::temp_dir().join("padmap-emulate-absent.json"));
        let _ = std::fs::remove_file(store.path());

        let result = run_emulate(
            &store,
            || panic!("device detection ran without a saved command"),
            |_| panic!("emulator launched without a saved command"),
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("config does not exist"));
        assert!(err.to_string().contains("--setup"));
    }

    #[test]
    fn saved_command_reaches_the_launcher_with_the_device_in_place() {
        let store = CommandStore::at(std::env::temp_dir().join("padmap-emulate-launch.json"));
        store.save("sudo xboxdrv --evdev {} --silent").unwrap();

        let mut launched = None;
        run_emulate(
            &store,
            || Ok(PathBuf::from("/dev/input/event5")),
            |command| {
                launched = Some(command.to_string());
                Ok(())
            },
        )
        .unwrap();

        assert_eq!(
            launched.as_deref(),
            Some("sudo xboxdrv --evdev /dev/input/event5 --silent")
        );

        let _ = std::fs::remove_file(store.path());
    }
}
