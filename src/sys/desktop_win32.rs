//! Virtual desktop implementation of [`DesktopSystem`], over the `winvd`
//! bindings (the shell's desktop interfaces are COM-only and undocumented;
//! they are not reimplemented here).

use windows::Win32::Foundation::HWND;

use crate::error::{Error, Result};
use crate::models::{DesktopInfo, WindowHandle};
use crate::sys::DesktopSystem;

pub struct VirtualDesktopSystem;

fn unavailable(e: winvd::Error) -> Error {
    Error::DesktopUnavailable(format!("{:?}", e))
}

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle)
}

fn desktop_at(number: u32) -> Result<winvd::Desktop> {
    let desktops = winvd::get_desktops().map_err(unavailable)?;
    desktops
        .get(number as usize - 1)
        .cloned()
        .ok_or_else(|| Error::DesktopUnavailable(format!("no desktop at ordinal {}", number)))
}

impl DesktopSystem for VirtualDesktopSystem {
    fn list_desktops(&self) -> Result<Vec<DesktopInfo>> {
        let desktops = winvd::get_desktops().map_err(unavailable)?;
        let mut out = Vec::with_capacity(desktops.len());
        for (i, desktop) in desktops.iter().enumerate() {
            let number = i as u32 + 1;
            let id = desktop.get_id().map_err(unavailable)?;
            let name = desktop
                .get_name()
                .ok()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| format!("Desktop #{}", number));
            out.push(DesktopInfo {
                id: format!("{:?}", id),
                number,
                name,
            });
        }
        Ok(out)
    }

    fn current_desktop_id(&self) -> Result<String> {
        let current = winvd::get_current_desktop().map_err(unavailable)?;
        let id = current.get_id().map_err(unavailable)?;
        Ok(format!("{:?}", id))
    }

    fn window_on_desktop(&self, handle: WindowHandle, desktop: &DesktopInfo) -> Result<bool> {
        let target = desktop_at(desktop.number)?;
        winvd::is_window_on_desktop(target, hwnd(handle)).map_err(unavailable)
    }

    fn move_window_to_desktop(&self, handle: WindowHandle, desktop: &DesktopInfo) -> Result<()> {
        let target = desktop_at(desktop.number)?;
        winvd::move_window_to_desktop(target, &hwnd(handle)).map_err(|e| Error::WindowOperation {
            op: "move_window_to_desktop",
            handle,
            detail: format!("{:?}", e),
        })
    }

    fn switch_to_desktop(&self, desktop: &DesktopInfo) -> Result<()> {
        let target = desktop_at(desktop.number)?;
        winvd::switch_desktop(target).map_err(unavailable)
    }
}
