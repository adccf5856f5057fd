use std::path::Path;
use std::process::Stdio;

use crate::error::QmgrError;

/// Run `program` attached to our terminal and wait for it to exit.
///
/// Stdio is inherited, so Ctrl+C reaches the child directly. Only success or
/// failure is reported back; the exit code is folded into the error message.
pub async fn run<I, S>(program: &str, args: I) -> Result<(), QmgrError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let status = tokio::process::Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| QmgrError::Spawn {
            program: program.to_string(),
            source: e,
        })?;

    if !status.success() {
        return Err(QmgrError::ExitStatus {
            program: program.to_string(),
            status: status.to_string(),
        });
    }

    tracing::debug!(program, "process exited successfully");
    Ok(())
}

/// Open `path` in the user's editor.
pub async fn open_editor(editor: Option<&str>, path: &Path) -> Result<(), QmgrError> {
    let editor = editor.ok_or(QmgrError::NoEditor)?;
    tracing::info!(editor, path = %path.display(), "opening editor");
    run(editor, [path]).await
}
