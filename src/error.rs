use std::path::PathBuf;

/// Errors raised by the painter and its asset helpers.
///
/// `InvalidState` and `Precondition` are call-ordering mistakes on the
/// caller's side. They are returned as-is and never retried.
#[derive(thiserror::Error, Debug)]
pub enum PainterError {
    /// The operation is not allowed in the painter's current state.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// Something the operation depends on has not been set up.
    #[error("precondition failed: {0}")]
    Precondition(&'static str),

    /// A file backing an asset could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = PainterError> = std::result::Result<T, E>;
