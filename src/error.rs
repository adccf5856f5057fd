use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum QmgrError {
    #[error("no {command} name")]
    #[diagnostic(help("usage: qmgr {command} <name>"))]
    MissingArgument { command: String },

    #[error("opening config: {path} does not exist")]
    #[diagnostic(help("run `qmgr list` to see the available configs"))]
    ConfigNotFound { path: String },

    #[error("decoding config {path}: {message}")]
    ConfigParse { path: String, message: String },

    #[error("encoding config {name}: {message}")]
    ConfigEncode { name: String, message: String },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("getting home directory: no home directory for the current user")]
    #[diagnostic(help("set QMGR_HOME to choose a storage directory"))]
    NoHomeDir,

    #[error("executing {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("executing {program}: {status}")]
    ExitStatus { program: String, status: String },

    #[error("opening editor: neither VISUAL nor EDITOR is set")]
    NoEditor,
}
