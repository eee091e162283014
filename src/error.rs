use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::WindowHandle;

/// Failure taxonomy for the snapshot/restore engine.
///
/// Only `InvalidSnapshot` aborts a whole operation, and it is raised before
/// any window is touched. Everything else is either swallowed per window by
/// the layout applier or degrades a desktop feature to a logged no-op.
#[derive(Debug, Error)]
pub enum Error {
    /// The persisted snapshot file is unreadable or malformed.
    #[error("invalid snapshot {path:?}: {reason}")]
    InvalidSnapshot { path: PathBuf, reason: String },

    /// The virtual desktop service could not be queried. Callers treat this
    /// as "no desktop reassignment possible", not as a fatal condition.
    #[error("virtual desktop service unavailable: {0}")]
    DesktopUnavailable(String),

    /// A single move/resize/focus/redesktop call failed for one window.
    #[error("{op} failed for window handle {handle}: {detail}")]
    WindowOperation {
        op: &'static str,
        handle: WindowHandle,
        detail: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
