use serde::{Deserialize, Serialize};

/// Opaque OS window handle. Unique within one enumeration pass; not stable
/// across reboots.
pub type WindowHandle = isize;

/// Window bounding rectangle in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A top-level window exactly as the OS reports it, before any filtering.
#[derive(Debug, Clone)]
pub struct RawWindow {
    pub handle: WindowHandle,
    pub title: String,
    /// Executable file name of the owning process; empty when the process
    /// could not be queried.
    pub exe: String,
    pub rect: WindowRect,
    pub visible: bool,
    pub top_level: bool,
}

/// A visible, titled, top-level window with best-effort desktop assignment.
///
/// Enumerated fresh on every capture and restore; never persisted directly.
#[derive(Debug, Clone)]
pub struct LiveWindow {
    pub handle: WindowHandle,
    pub title: String,
    pub exe: String,
    pub rect: WindowRect,
    /// 1-based ordinal of the owning virtual desktop, if resolvable.
    pub desktop_number: Option<u32>,
    /// Stable desktop identifier, if resolvable.
    pub desktop_id: Option<String>,
    pub desktop_name: Option<String>,
    /// Front-to-back stacking rank (lower = more front-facing); -1 when the
    /// window was absent from the stacking pass.
    pub z_order: Option<i32>,
}
