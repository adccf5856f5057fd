//! Subcommand handlers. Each takes the resolved [`Settings`] and runs to
//! completion; nothing is shared between invocations.

use std::path::PathBuf;

use crate::config::VmConfig;
use crate::error::QmgrError;
use crate::settings::Settings;
use crate::store::ConfigStore;
use crate::{disk, process, qemu};

fn store(settings: &Settings) -> ConfigStore {
    ConfigStore::new(&settings.dirs.config_dir)
}

pub fn list(settings: &Settings) -> Result<Vec<String>, QmgrError> {
    store(settings).list()
}

/// Boot the named VM in the foreground.
pub async fn run(settings: &Settings, name: &str) -> Result<(), QmgrError> {
    let config = store(settings).load(name)?;
    let args = qemu::build_args(&config, qemu::host_cpus());

    tracing::info!(
        name,
        command = %format!("{} {}", settings.qemu, args.join(" ")),
        "launching VM"
    );
    process::run(&settings.qemu, &args).await
}

/// Provision a disk and write a template config for `name`.
///
/// A failed disk provisioning is reported on stderr and does not stop the
/// command: the template is still written, with an empty qcow2 path, so the
/// user can point it at an image by hand.
pub async fn create(settings: &Settings, name: &str, size: &str) -> Result<PathBuf, QmgrError> {
    let disk_path = settings.dirs.disk_path(name);
    let disk = match disk::create_disk(&settings.qemu_img, &disk_path, size).await {
        Ok(()) => Some(disk_path),
        Err(e) => {
            eprintln!("creating disk image: {e}");
            None
        }
    };

    let config = VmConfig::template(name, disk.as_deref());
    store(settings).save(name, &config)
}

/// Open the named config in the editor. The file is not required to exist.
pub async fn edit(settings: &Settings, name: &str) -> Result<(), QmgrError> {
    let path = store(settings).path(name);
    process::open_editor(settings.editor.as_deref(), &path).await
}
