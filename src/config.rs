use std::path::Path;

use facet::Facet;

/// How a drive is attached to the guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Facet)]
#[repr(u8)]
pub enum DriveKind {
    /// Raw image attached as USB mass storage.
    #[facet(rename = "img")]
    Img,
    /// Copy-on-write image on the virtio bus.
    #[facet(rename = "qcow2")]
    Qcow2,
    /// Optical media attached as the CD-ROM.
    #[facet(rename = "iso")]
    Iso,
}

#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Drive {
    #[facet(default)]
    pub path: String,
    #[facet(rename = "type")]
    pub kind: DriveKind,
}

impl Drive {
    pub fn new(kind: DriveKind, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Drives without a path are placeholders and are not attached.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// TCP forward from `host` to `guest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Facet)]
pub struct Port {
    pub guest: u16,
    pub host: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
#[facet(default)]
pub struct VmConfig {
    pub name: String,
    /// Passed to `-m` verbatim, e.g. `"2G"`.
    pub memory: String,
    /// Order is significant: the position becomes the USB device index.
    pub drives: Vec<Drive>,
    pub ports: Vec<Port>,
    /// `0` means all host cores, resolved at launch.
    pub cores: u32,
    pub fullscreen: bool,
}

impl VmConfig {
    /// Record written by `create`, meant to be refined by hand in an editor.
    ///
    /// The empty `img` and `iso` drives are slots for removable media and a
    /// boot image; they are skipped at launch until given a path.
    pub fn template(name: &str, disk: Option<&Path>) -> Self {
        let disk = disk.map(|p| p.display().to_string()).unwrap_or_default();
        Self {
            name: name.to_string(),
            memory: "2G".into(),
            drives: vec![
                Drive::new(DriveKind::Img, ""),
                Drive::new(DriveKind::Qcow2, disk),
                Drive::new(DriveKind::Iso, ""),
            ],
            ports: vec![Port {
                guest: 22,
                host: 2222,
            }],
            cores: 0,
            fullscreen: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn template_has_three_slots_and_ssh_forward() {
        let disk = PathBuf::from("/home/u/.config/qmgr/disks/vm1.qcow2");
        let config = VmConfig::template("vm1", Some(&disk));

        assert_eq!(config.name, "vm1");
        assert_eq!(config.memory, "2G");
        assert_eq!(
            config.drives,
            vec![
                Drive::new(DriveKind::Img, ""),
                Drive::new(DriveKind::Qcow2, "/home/u/.config/qmgr/disks/vm1.qcow2"),
                Drive::new(DriveKind::Iso, ""),
            ]
        );
        assert_eq!(config.ports, vec![Port { guest: 22, host: 2222 }]);
        assert_eq!(config.cores, 0);
        assert!(!config.fullscreen);
    }

    #[test]
    fn template_without_disk_leaves_qcow2_empty() {
        let config = VmConfig::template("vm1", None);
        assert!(config.drives[1].is_empty());
        assert_eq!(config.drives[1].kind, DriveKind::Qcow2);
    }

    #[test]
    fn decode_full_record() {
        let json = r#"{
            "name": "dev",
            "memory": "4G",
            "drives": [
                {"path": "/isos/arch.iso", "type": "iso"},
                {"path": "/disks/dev.qcow2", "type": "qcow2"}
            ],
            "ports": [{"guest": 80, "host": 8080}],
            "cores": 4,
            "fullscreen": true
        }"#;
        let config: VmConfig = facet_json::from_str(json).unwrap();

        assert_eq!(config.name, "dev");
        assert_eq!(config.memory, "4G");
        assert_eq!(config.drives[0], Drive::new(DriveKind::Iso, "/isos/arch.iso"));
        assert_eq!(config.drives[1].kind, DriveKind::Qcow2);
        assert_eq!(config.ports, vec![Port { guest: 80, host: 8080 }]);
        assert_eq!(config.cores, 4);
        assert!(config.fullscreen);
    }

    #[test]
    fn decode_fills_missing_fields() {
        let config: VmConfig = facet_json::from_str(r#"{"name": "bare", "memory": "1G"}"#).unwrap();
        assert!(config.drives.is_empty());
        assert!(config.ports.is_empty());
        assert_eq!(config.cores, 0);
        assert!(!config.fullscreen);
    }

    #[test]
    fn decode_rejects_unknown_drive_type() {
        let json = r#"{"name": "x", "drives": [{"path": "/a", "type": "vmdk"}]}"#;
        let decoded: Result<VmConfig, _> = facet_json::from_str(json);
        assert!(decoded.is_err());
    }
}
