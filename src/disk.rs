use std::path::Path;

use crate::error::QmgrError;
use crate::process;

/// Default size for disks created by `qmgr create`.
pub const DEFAULT_DISK_SIZE: &str = "64G";

/// Create an empty qcow2 image with `qemu-img create -f qcow2 <path> <size>`.
pub async fn create_disk(qemu_img: &str, path: &Path, size: &str) -> Result<(), QmgrError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| QmgrError::Io {
                context: format!("creating disk directory {}", parent.display()),
                source: e,
            })?;
    }

    let path_arg = path.display().to_string();
    process::run(qemu_img, ["create", "-f", "qcow2", path_arg.as_str(), size]).await?;

    tracing::info!(path = %path.display(), size, "created qcow2 image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_parent_directory_before_running_tool() {
        let dir = tempfile::tempdir().unwrap();
        let disk = dir.path().join("disks/vm1.qcow2");

        create_disk("true", &disk, "1G").await.unwrap();
        assert!(dir.path().join("disks").is_dir());
    }

    #[tokio::test]
    async fn tool_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let disk = dir.path().join("vm1.qcow2");

        let err = create_disk("false", &disk, "1G").await.unwrap_err();
        assert!(matches!(err, QmgrError::ExitStatus { .. }));
    }
}
