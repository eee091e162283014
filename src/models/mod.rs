pub mod desktop;
pub mod options;
pub mod snapshot;
pub mod window;

pub use desktop::DesktopInfo;
pub use options::{CaptureFilter, CaptureOptions, RestoreOptions};
pub use snapshot::{Snapshot, WindowEntry, FORMAT_VERSION};
pub use window::{LiveWindow, RawWindow, WindowHandle, WindowRect};
