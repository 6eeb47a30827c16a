use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const STORE_DIR: &str = "padmap";
const STORE_FILE: &str = "command.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedCommand {
    command: String,
}

/// Where the built emulator command lives between a --setup run and the
/// --emulate runs that follow.
pub struct CommandStore {
    path: PathBuf,
}

impl CommandStore {
    pub fn at_default_path() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self { path: base.join(STORE_DIR).join(STORE_FILE) }
    }

    #[cfg(test)]
    pub(crate) fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Option<String> {
        if self.path.exists() {
            match std::fs::read_to_string(&self.path) {
                Ok(contents) => match serde_json::from_str::<SavedCommand>(&contents) {
                    Ok(saved) => {
                        log::info!("Loaded command from {:?}", self.path);
                        return Some(saved.command);
                    }
                    Err(e) => {
                        log::error!("Failed to parse {:?}: {}", self.path, e);
                    }
                },
                Err(e) => {
                    log::error!("Failed to read {:?}: {}", self.path, e);
                }
            }
        }
        None
    }

    pub fn save(&self, command: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&SavedCommand {
            command: command.to_string(),
        })?;
        std::fs::write(&self.path, contents)?;
        log::info!("Saved command to {:?}", self.path);
        Ok(())
    }
}
