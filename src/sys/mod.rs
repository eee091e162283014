//! Operating-system capability seam.
//!
//! The engine never calls platform APIs directly; it goes through these two
//! traits so the matching/restore logic stays testable off-Windows and the
//! Win32 bindings stay in one place.

use crate::error::Result;
use crate::models::{DesktopInfo, RawWindow, WindowHandle, WindowRect};

#[cfg(target_os = "windows")]
pub mod desktop_win32;
#[cfg(target_os = "windows")]
pub mod win32;

#[cfg(test)]
pub mod fake;

/// Window enumeration, placement, and monitor topology.
pub trait WindowSystem {
    /// Every top-level window in OS enumeration order, unfiltered.
    fn list_windows(&self) -> Result<Vec<RawWindow>>;

    /// Window handles front-to-back, from a stacking-order walk independent
    /// of [`WindowSystem::list_windows`].
    fn front_to_back(&self) -> Result<Vec<WindowHandle>>;

    /// Restore the window from a minimized/maximized state, move and resize
    /// it to `rect`, and bring it to the foreground.
    fn apply_placement(&self, handle: WindowHandle, rect: WindowRect) -> Result<()>;

    /// Bounding rectangles of all connected displays, in physical pixels.
    fn monitor_rects(&self) -> Result<Vec<WindowRect>>;
}

/// Virtual desktop enumeration and assignment.
pub trait DesktopSystem {
    /// All virtual desktops in enumeration order. Ordinals in the returned
    /// list are 1-based and only consistent within this one call.
    fn list_desktops(&self) -> Result<Vec<DesktopInfo>>;

    /// Stable id of the currently active desktop.
    fn current_desktop_id(&self) -> Result<String>;

    /// Whether `handle` currently lives on `desktop`.
    fn window_on_desktop(&self, handle: WindowHandle, desktop: &DesktopInfo) -> Result<bool>;

    fn move_window_to_desktop(&self, handle: WindowHandle, desktop: &DesktopInfo) -> Result<()>;

    /// Activate `desktop`, switching the user's view to it.
    fn switch_to_desktop(&self, desktop: &DesktopInfo) -> Result<()>;
}
