//! snapdesk captures the spatial layout of on-screen windows across virtual
//! desktops into portable snapshot files, and restores a snapshot later by
//! fuzzy-matching the recorded windows against whatever is running now.
//!
//! The engine is a library: enumeration, matching, and placement go through
//! the capability traits in [`sys`], with the Win32 and virtual-desktop
//! bindings compiled only on Windows.

pub mod core;
pub mod error;
pub mod models;
pub mod sys;

pub use crate::core::capture::{capture_snapshot, CaptureSummary};
pub use crate::core::persistence::{list_snapshots, load_snapshot};
pub use crate::core::report::{
    LogFacadeSink, LogLevel, LogSink, RestoreOutcome, RestoreReport, StdoutSink,
};
pub use crate::core::restore::restore_windows;
pub use crate::error::{Error, Result};
pub use crate::models::{
    CaptureFilter, CaptureOptions, DesktopInfo, LiveWindow, RestoreOptions, Snapshot, WindowEntry,
    WindowRect,
};
