//! Win32 implementation of [`WindowSystem`].

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

use windows_sys::Win32::Foundation::{CloseHandle, GetLastError, HANDLE, LPARAM, RECT};
use windows_sys::Win32::Graphics::Gdi::{EnumDisplayMonitors, HDC, HMONITOR};
use windows_sys::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameW, PROCESS_QUERY_LIMITED_INFORMATION,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetParent, GetTopWindow, GetWindow, GetWindowRect, GetWindowTextLengthW,
    GetWindowTextW, GetWindowThreadProcessId, IsWindowVisible, MoveWindow, SetForegroundWindow,
    ShowWindow, GW_HWNDNEXT, SW_RESTORE,
};

use crate::error::{Error, Result};
use crate::models::{RawWindow, WindowHandle, WindowRect};
use crate::sys::WindowSystem;

pub struct Win32System;

unsafe extern "system" fn collect_hwnd(hwnd: isize, lparam: LPARAM) -> i32 {
    let handles = &mut *(lparam as *mut Vec<WindowHandle>);
    handles.push(hwnd);
    1
}

unsafe extern "system" fn collect_monitor(
    _monitor: HMONITOR,
    _hdc: HDC,
    rect: *mut RECT,
    lparam: LPARAM,
) -> i32 {
    let rects = &mut *(lparam as *mut Vec<WindowRect>);
    let r = &*rect;
    rects.push(WindowRect::new(
        r.left,
        r.top,
        r.right - r.left,
        r.bottom - r.top,
    ));
    1
}

fn window_title(hwnd: WindowHandle) -> String {
    unsafe {
        let len = GetWindowTextLengthW(hwnd);
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u16; len as usize + 1];
        let copied = GetWindowTextW(hwnd, buf.as_mut_ptr(), buf.len() as i32);
        if copied <= 0 {
            return String::new();
        }
        buf.truncate(copied as usize);
        String::from_utf16_lossy(&buf)
    }
}

// Executable file name of the owning process, or empty when the process
// cannot be opened. Per-window failures never abort an enumeration.
fn process_image_name(hwnd: WindowHandle) -> String {
    unsafe {
        let mut pid: u32 = 0;
        GetWindowThreadProcessId(hwnd, &mut pid);
        if pid == 0 {
            return String::new();
        }

        let handle: HANDLE = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, pid);
        if handle == 0 {
            return String::new();
        }

        let mut buf = vec![0u16; 2048];
        let mut size: u32 = buf.len() as u32;
        let ok = QueryFullProcessImageNameW(handle, 0, buf.as_mut_ptr(), &mut size);
        let _ = CloseHandle(handle);
        if ok == 0 || size == 0 {
            return String::new();
        }

        buf.truncate(size as usize);
        let path = OsString::from_wide(&buf).to_string_lossy().to_string();
        std::path::Path::new(&path)
            .file_name()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
            .unwrap_or_default()
    }
}

impl WindowSystem for Win32System {
    fn list_windows(&self) -> Result<Vec<RawWindow>> {
        let mut handles: Vec<WindowHandle> = Vec::new();
        unsafe {
            EnumWindows(Some(collect_hwnd), &mut handles as *mut _ as LPARAM);
        }

        let mut windows = Vec::with_capacity(handles.len());
        for hwnd in handles {
            let (visible, top_level, rect) = unsafe {
                let visible = IsWindowVisible(hwnd) != 0;
                let top_level = GetParent(hwnd) == 0;
                let mut r = RECT {
                    left: 0,
                    top: 0,
                    right: 0,
                    bottom: 0,
                };
                GetWindowRect(hwnd, &mut r);
                (
                    visible,
                    top_level,
                    WindowRect::new(r.left, r.top, r.right - r.left, r.bottom - r.top),
                )
            };
            windows.push(RawWindow {
                handle: hwnd,
                title: window_title(hwnd),
                exe: process_image_name(hwnd),
                rect,
                visible,
                top_level,
            });
        }
        Ok(windows)
    }

    fn front_to_back(&self) -> Result<Vec<WindowHandle>> {
        let mut order = Vec::new();
        unsafe {
            let mut hwnd = GetTopWindow(0);
            while hwnd != 0 {
                order.push(hwnd);
                hwnd = GetWindow(hwnd, GW_HWNDNEXT);
            }
        }
        Ok(order)
    }

    fn apply_placement(&self, handle: WindowHandle, rect: WindowRect) -> Result<()> {
        unsafe {
            ShowWindow(handle, SW_RESTORE);
            if MoveWindow(handle, rect.x, rect.y, rect.width, rect.height, 1) == 0 {
                return Err(Error::WindowOperation {
                    op: "MoveWindow",
                    handle,
                    detail: format!("system error {}", GetLastError()),
                });
            }
            SetForegroundWindow(handle);
        }
        Ok(())
    }

    fn monitor_rects(&self) -> Result<Vec<WindowRect>> {
        let mut rects: Vec<WindowRect> = Vec::new();
        unsafe {
            EnumDisplayMonitors(
                0,
                std::ptr::null(),
                Some(collect_monitor),
                &mut rects as *mut _ as LPARAM,
            );
        }
        Ok(rects)
    }
}
