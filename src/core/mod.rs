pub mod bounds;
pub mod capture;
pub mod desktops;
pub mod enumerate;
pub mod matching;
pub mod persistence;
pub mod report;
pub mod restore;

pub use capture::{capture_snapshot, CaptureSummary};
pub use desktops::DesktopDirectory;
pub use report::{LogFacadeSink, LogLevel, LogSink, RestoreOutcome, RestoreReport, StdoutSink};
pub use restore::restore_windows;
