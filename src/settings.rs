//! Process-wide settings, resolved once at startup and passed to every command.
//!
//! | Variable         | Default                | Meaning                      |
//! |------------------|------------------------|------------------------------|
//! | `QMGR_HOME`      | `~/.config/qmgr`       | storage root                 |
//! | `QMGR_QEMU`      | `qemu-system-x86_64`   | hypervisor binary            |
//! | `QMGR_QEMU_IMG`  | `qemu-img`             | disk image tool              |
//! | `VISUAL`/`EDITOR`| none                   | editor for `create`/`edit`   |

use crate::error::QmgrError;
use crate::paths::Dirs;

pub const DEFAULT_QEMU: &str = "qemu-system-x86_64";
pub const DEFAULT_QEMU_IMG: &str = "qemu-img";

#[derive(Debug, Clone)]
pub struct Settings {
    pub dirs: Dirs,
    pub qemu: String,
    pub qemu_img: String,
    pub editor: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, QmgrError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, QmgrError> {
        let set = |key: &str| var(key).filter(|v| !v.is_empty());

        let dirs = Dirs::resolve(set("QMGR_HOME").as_deref())?;
        let qemu = set("QMGR_QEMU").unwrap_or_else(|| DEFAULT_QEMU.to_string());
        let qemu_img = set("QMGR_QEMU_IMG").unwrap_or_else(|| DEFAULT_QEMU_IMG.to_string());
        let editor = set("VISUAL").or_else(|| set("EDITOR"));

        tracing::debug!(
            root = %dirs.root.display(),
            qemu = %qemu,
            qemu_img = %qemu_img,
            ?editor,
            "resolved settings"
        );

        Ok(Self {
            dirs,
            qemu,
            qemu_img,
            editor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_for_binaries() {
        let s = Settings::from_lookup(lookup(&[("QMGR_HOME", "/tmp/q")])).unwrap();
        assert_eq!(s.qemu, "qemu-system-x86_64");
        assert_eq!(s.qemu_img, "qemu-img");
        assert_eq!(s.editor, None);
        assert_eq!(s.dirs.root, PathBuf::from("/tmp/q"));
    }

    #[test]
    fn visual_preferred_over_editor() {
        let s = Settings::from_lookup(lookup(&[
            ("QMGR_HOME", "/tmp/q"),
            ("VISUAL", "code"),
            ("EDITOR", "vi"),
        ]))
        .unwrap();
        assert_eq!(s.editor.as_deref(), Some("code"));
    }

    #[test]
    fn empty_visual_falls_back_to_editor() {
        let s = Settings::from_lookup(lookup(&[
            ("QMGR_HOME", "/tmp/q"),
            ("VISUAL", ""),
            ("EDITOR", "vi"),
        ]))
        .unwrap();
        assert_eq!(s.editor.as_deref(), Some("vi"));
    }

    #[test]
    fn binary_overrides() {
        let s = Settings::from_lookup(lookup(&[
            ("QMGR_HOME", "/tmp/q"),
            ("QMGR_QEMU", "/opt/qemu/bin/qemu-system-x86_64"),
            ("QMGR_QEMU_IMG", "/opt/qemu/bin/qemu-img"),
        ]))
        .unwrap();
        assert_eq!(s.qemu, "/opt/qemu/bin/qemu-system-x86_64");
        assert_eq!(s.qemu_img, "/opt/qemu/bin/qemu-img");
    }
}
