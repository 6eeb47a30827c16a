use evdev::Device;
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::PathBuf;
use std::time::Duration;

const INPUT_DIR: &str = "/dev/input";

/// How long the user gets to let go of the control after we pick a device.
const SELECT_SETTLE: Duration = Duration::from_millis(800);

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("no readable input devices under /dev/input (are you in the input group?)")]
    NoDevices,
    #[error("failed to scan input devices: {0}")]
    Io(#[from] io::Error),
}

/// A set of candidate devices the selection loop can poll.
///
/// Split out as a trait so the zero/one/many readiness policy is testable
/// without hardware.
trait ScanSource {
    /// Block until at least one candidate is readable; return their
    /// indexes. Dead candidates get dropped along the way, so indexes are
    /// only valid until the next call.
    fn wait_ready(&mut self) -> Result<Vec<usize>, ScanError>;

    /// Read and throw away whatever a candidate has queued.
    fn discard_pending(&mut self, index: usize) -> Result<(), ScanError>;

    fn remaining(&self) -> usize;
}

/// Keep polling until a readiness window has exactly one active device.
///
/// Several devices chattering at once (or none) means we can't tell which
/// one the user is holding, so the window's input is discarded and the
/// wait starts over.
fn choose_active(source: &mut impl ScanSource) -> Result<usize, ScanError> {
    loop {
        if source.remaining() == 0 {
            return Err(ScanError::NoDevices);
        }

        let ready = source.wait_ready()?;
        match ready.len() {
            1 => return Ok(ready[0]),
            0 => continue,
            _ => {
                for index in ready {
                    source.discard_pending(index)?;
                }
            }
        }
    }
}

struct EvdevScan {
    devices: Vec<(PathBuf, Device)>,
}

impl EvdevScan {
    fn open_all() -> Result<Self, ScanError> {
        let entries = match std::fs::read_dir(INPUT_DIR) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ScanError::NoDevices),
            Err(e) => return Err(e.into()),
        };

        let mut devices = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !file_name.starts_with("event") {
                continue;
            }

            match Device::open(&path) {
                Ok(mut device) => {
                    // The scanner only ever reads after poll says there's
                    // something there, so these stay non-blocking for good.
                    if let Err(e) = device.set_nonblocking(true) {
                        log::warn!("Failed to set {} non-blocking: {}", path.display(), e);
                        continue;
                    }
                    devices.push((path, device));
                }
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    log::debug!("Skipping {} (permission denied)", path.display());
                }
                Err(e) => {
                    log::warn!("Failed to open {}: {}", path.display(), e);
                }
            }
        }

        if devices.is_empty() {
            return Err(ScanError::NoDevices);
        }
        log::info!("Watching {} input devices", devices.len());
        Ok(Self { devices })
    }
}

impl ScanSource for EvdevScan {
    fn wait_ready(&mut self) -> Result<Vec<usize>, ScanError> {
        loop {
            let mut fds: Vec<libc::pollfd> = self
                .devices
                .iter()
                .map(|(_, device)| libc::pollfd {
                    fd: device.as_raw_fd(),
                    events: libc::POLLIN,
                    revents: 0,
                })
                .collect();

            let poll_result =
                unsafe { libc::poll(fds.as_mut_ptr(), fds.len() as libc::nfds_t, -1) };

            if poll_result < 0 {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    continue;
                }
                return Err(err.into());
            }

            let mut ready = Vec::new();
            let mut index = 0;
            for pollfd in &fds {
                // Unplugged devices poll as error/hangup forever; drop them
                // so they can't wedge the wait.
                if pollfd.revents & (libc::POLLERR | libc::POLLHUP | libc::POLLNVAL) != 0 {
                    let (path, _) = self.devices.remove(index);
                    log::warn!("{} went away during scan", path.display());
                    continue;
                }
                if pollfd.revents & libc::POLLIN != 0 {
                    ready.push(index);
                }
                index += 1;
            }

            return Ok(ready);
        }
    }

    fn discard_pending(&mut self, index: usize) -> Result<(), ScanError> {
        let (path, device) = &mut self.devices[index];
        loop {
            match device.fetch_events() {
                Ok(events) => {
                    for _ in events {}
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) => {
                    // Next poll window will flag this one dead.
                    log::debug!("Read error on {} while discarding: {}", path.display(), e);
                    break;
                }
            }
        }
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.devices.len()
    }
}

/// Figure out which event device the user is holding: open everything
/// readable, wait until exactly one produces input, hand back its path.
///
/// The device is not kept open. Whoever uses the path re-opens it, and a
/// fresh evdev open doesn't see events queued before it, so the press
/// that won the scan can't leak into whatever reads the device next.
pub fn detect_gamepad() -> Result<PathBuf, ScanError> {
    println!("Press any button on the controller you want to use.");

    let mut scan = EvdevScan::open_all()?;
    let winner = choose_active(&mut scan)?;

    let (path, device) = &scan.devices[winner];
    let name = device.name().unwrap_or("unknown device");
    println!("Detected {} ({}).", path.display(), name);
    log::info!("Selected input device {} ({})", path.display(), name);

    // Give the user a moment to let go before anything reads this device.
    std::thread::sleep(SELECT_SETTLE);

    Ok(path.clone())
}
