//! Translate a [`VmConfig`] into a `qemu-system-x86_64` command line.
//!
//! The machine is always a q35 with an xHCI controller, USB keyboard and
//! tablet, and one virtio NIC backed by user-mode networking (`net0`).
//! Drives are attached in stored order; a drive's position in the list is
//! its device index, so two raw images get `usb0`/`usb2` and never collide.

use crate::config::{DriveKind, Port, VmConfig};

/// Logical processors on this host, used when a config asks for all cores.
pub fn host_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}

/// `0` means "all host cores"; anything else is used as-is.
pub fn resolve_cores(cores: u32, host_cpus: u32) -> u32 {
    if cores == 0 { host_cpus } else { cores }
}

/// Comma-joined `hostfwd` list, e.g. `tcp::2222-:22,tcp::8080-:80`.
pub fn hostfwd(ports: &[Port]) -> String {
    ports
        .iter()
        .map(|p| format!("tcp::{}-:{}", p.host, p.guest))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the hypervisor arguments for `config`.
///
/// Pure: the only host-dependent input is `host_cpus`, which is substituted
/// for `cores = 0` in the output and never written back to the config.
pub fn build_args(config: &VmConfig, host_cpus: u32) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    let mut push = |items: &[&str]| args.extend(items.iter().map(|s| s.to_string()));

    push(&["-m", &config.memory]);
    push(&["-machine", "q35"]);
    push(&["-device", "qemu-xhci,id=xhci"]);
    push(&["-device", "usb-kbd"]);
    push(&["-device", "usb-tablet"]);
    push(&["-device", "virtio-net,netdev=net0"]);

    for (idx, drive) in config.drives.iter().enumerate() {
        if drive.is_empty() {
            continue;
        }
        let path = &drive.path;
        match drive.kind {
            DriveKind::Img => {
                push(&["-drive", &format!("if=none,id=usb{idx},format=raw,file={path}")]);
                push(&["-device", &format!("usb-storage,bus=xhci.0,drive=usb{idx}")]);
            }
            DriveKind::Qcow2 => {
                push(&["-drive", &format!("if=virtio,format=qcow2,file={path}")]);
            }
            DriveKind::Iso => {
                push(&["-cdrom", path]);
            }
        }
    }

    let cores = resolve_cores(config.cores, host_cpus);
    push(&["-enable-kvm", "-cpu", "host", "-smp", &cores.to_string()]);

    if config.fullscreen {
        push(&["-display", "gtk,full-screen=on"]);
    }

    if !config.ports.is_empty() {
        push(&[
            "-netdev",
            &format!("user,id=net0,hostfwd={}", hostfwd(&config.ports)),
        ]);
    }

    args
}
