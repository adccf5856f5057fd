use std::path::{Path, PathBuf};

use crate::error::QmgrError;

/// Extension of stored VM configs.
pub const CONFIG_EXT: &str = "json";

/// Per-user storage layout: `<root>/configs/` and `<root>/disks/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub disk_dir: PathBuf,
}

impl Dirs {
    /// Layout rooted at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_dir: root.join("configs"),
            disk_dir: root.join("disks"),
            root,
        }
    }

    /// Resolve the root from `QMGR_HOME`, falling back to `~/.config/qmgr`.
    pub fn resolve(home_override: Option<&str>) -> Result<Self, QmgrError> {
        if let Some(root) = home_override.filter(|s| !s.is_empty()) {
            return Ok(Self::at(root));
        }
        let home = dirs::home_dir().ok_or(QmgrError::NoHomeDir)?;
        Ok(Self::at(home.join(".config").join("qmgr")))
    }

    /// Path to the stored config for a VM: `<config_dir>/<name>.json`
    pub fn config_path(&self, name: &str) -> PathBuf {
        config_file(&self.config_dir, name)
    }

    /// Path to the default disk image for a VM: `<disk_dir>/<name>.qcow2`
    pub fn disk_path(&self, name: &str) -> PathBuf {
        self.disk_dir.join(format!("{name}.qcow2"))
    }
}

pub(crate) fn config_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{CONFIG_EXT}"))
}
