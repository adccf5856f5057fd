use std::path::{Path, PathBuf};

use crate::config::VmConfig;
use crate::error::QmgrError;
use crate::paths::{self, CONFIG_EXT};

/// Named VM configs stored as one pretty-printed JSON file each.
///
/// Saving an existing name overwrites it; nothing here ever deletes a file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        paths::config_file(&self.dir, name)
    }

    /// Names of all stored configs, in directory order.
    ///
    /// A missing directory means nothing has been created yet.
    pub fn list(&self) -> Result<Vec<String>, QmgrError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(dir = %self.dir.display(), "config directory does not exist");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(QmgrError::Io {
                    context: format!("reading config directory {}", self.dir.display()),
                    source: e,
                });
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| QmgrError::Io {
                context: format!("reading config directory {}", self.dir.display()),
                source: e,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(CONFIG_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        Ok(names)
    }

    pub fn load(&self, name: &str) -> Result<VmConfig, QmgrError> {
        let path = self.path(name);
        let contents = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                QmgrError::ConfigNotFound {
                    path: path.display().to_string(),
                }
            } else {
                QmgrError::Io {
                    context: format!("opening config {}", path.display()),
                    source,
                }
            }
        })?;

        let config: VmConfig =
            facet_json::from_str(&contents).map_err(|e| QmgrError::ConfigParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(name, path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write `config` under `name`, creating the directory if needed.
    /// Returns the path written.
    pub fn save(&self, name: &str, config: &VmConfig) -> Result<PathBuf, QmgrError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| QmgrError::Io {
            context: format!("creating config directory {}", self.dir.display()),
            source: e,
        })?;

        let mut json = facet_json::to_string_pretty(config).map_err(|e| QmgrError::ConfigEncode {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        json.push('\n');

        let path = self.path(name);
        std::fs::write(&path, json).map_err(|e| QmgrError::Io {
            context: format!("creating config {}", path.display()),
            source: e,
        })?;

        tracing::debug!(name, path = %path.display(), "saved config");
        Ok(path)
    }
}
