//! Scripted in-memory implementation of both capability traits, for tests.
//!
//! Records every placement, desktop move, and desktop switch, and can be
//! told to fail specific handles so fault-isolation paths are exercisable.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::models::{DesktopInfo, RawWindow, WindowHandle, WindowRect};
use crate::sys::{DesktopSystem, WindowSystem};

#[derive(Default)]
pub struct FakeSystem {
    windows: Vec<RawWindow>,
    desktops: Vec<DesktopInfo>,
    current_desktop: Option<String>,
    window_desktops: HashMap<WindowHandle, String>,
    stacking: Vec<WindowHandle>,
    monitors: Vec<WindowRect>,
    fail_placement: HashSet<WindowHandle>,
    fail_desktop_move: HashSet<WindowHandle>,
    fail_membership: HashSet<WindowHandle>,
    desktops_unavailable: bool,
    placements: Mutex<Vec<(WindowHandle, WindowRect)>>,
    desktop_moves: Mutex<Vec<(WindowHandle, String)>>,
    switches: Mutex<Vec<String>>,
}

impl FakeSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_window(&mut self, handle: WindowHandle, title: &str, exe: &str, rect: WindowRect) {
        self.windows.push(RawWindow {
            handle,
            title: title.into(),
            exe: exe.into(),
            rect,
            visible: true,
            top_level: true,
        });
    }

    pub fn add_hidden_window(&mut self, handle: WindowHandle, title: &str, exe: &str) {
        self.windows.push(RawWindow {
            handle,
            title: title.into(),
            exe: exe.into(),
            rect: WindowRect::default(),
            visible: false,
            top_level: true,
        });
    }

    pub fn add_child_window(&mut self, handle: WindowHandle, title: &str, exe: &str) {
        self.windows.push(RawWindow {
            handle,
            title: title.into(),
            exe: exe.into(),
            rect: WindowRect::default(),
            visible: true,
            top_level: false,
        });
    }

    pub fn add_desktop(&mut self, id: &str, name: &str) {
        let number = self.desktops.len() as u32 + 1;
        self.desktops.push(DesktopInfo {
            id: id.into(),
            number,
            name: name.into(),
        });
        if self.current_desktop.is_none() {
            self.current_desktop = Some(id.into());
        }
    }

    pub fn place_on_desktop(&mut self, handle: WindowHandle, desktop_id: &str) {
        self.window_desktops.insert(handle, desktop_id.into());
    }

    pub fn set_current(&mut self, desktop_id: &str) {
        self.current_desktop = Some(desktop_id.into());
    }

    pub fn add_monitor(&mut self, rect: WindowRect) {
        self.monitors.push(rect);
    }

    pub fn set_stacking(&mut self, front_to_back: Vec<WindowHandle>) {
        self.stacking = front_to_back;
    }

    pub fn fail_placement_for(&mut self, handle: WindowHandle) {
        self.fail_placement.insert(handle);
    }

    pub fn fail_desktop_move_for(&mut self, handle: WindowHandle) {
        self.fail_desktop_move.insert(handle);
    }

    pub fn fail_membership_for(&mut self, handle: WindowHandle) {
        self.fail_membership.insert(handle);
    }

    pub fn make_desktops_unavailable(&mut self) {
        self.desktops_unavailable = true;
    }

    pub fn placements(&self) -> Vec<(WindowHandle, WindowRect)> {
        self.placements.lock().clone()
    }

    pub fn desktop_moves(&self) -> Vec<(WindowHandle, String)> {
        self.desktop_moves.lock().clone()
    }

    pub fn switches(&self) -> Vec<String> {
        self.switches.lock().clone()
    }
}

impl WindowSystem for FakeSystem {
    fn list_windows(&self) -> Result<Vec<RawWindow>> {
        Ok(self.windows.clone())
    }

    fn front_to_back(&self) -> Result<Vec<WindowHandle>> {
        Ok(self.stacking.clone())
    }

    fn apply_placement(&self, handle: WindowHandle, rect: WindowRect) -> Result<()> {
        if self.fail_placement.contains(&handle) {
            return Err(Error::WindowOperation {
                op: "MoveWindow",
                handle,
                detail: "access denied".into(),
            });
        }
        self.placements.lock().push((handle, rect));
        Ok(())
    }

    fn monitor_rects(&self) -> Result<Vec<WindowRect>> {
        Ok(self.monitors.clone())
    }
}

impl DesktopSystem for FakeSystem {
    fn list_desktops(&self) -> Result<Vec<DesktopInfo>> {
        if self.desktops_unavailable {
            return Err(Error::DesktopUnavailable("fake outage".into()));
        }
        Ok(self.desktops.clone())
    }

    fn current_desktop_id(&self) -> Result<String> {
        self.current_desktop
            .clone()
            .ok_or_else(|| Error::DesktopUnavailable("no current desktop".into()))
    }

    fn window_on_desktop(&self, handle: WindowHandle, desktop: &DesktopInfo) -> Result<bool> {
        if self.fail_membership.contains(&handle) {
            return Err(Error::DesktopUnavailable("membership query failed".into()));
        }
        Ok(self.window_desktops.get(&handle) == Some(&desktop.id))
    }

    fn move_window_to_desktop(&self, handle: WindowHandle, desktop: &DesktopInfo) -> Result<()> {
        if self.fail_desktop_move.contains(&handle) {
            return Err(Error::WindowOperation {
                op: "move_window_to_desktop",
                handle,
                detail: "fake refusal".into(),
            });
        }
        self.desktop_moves.lock().push((handle, desktop.id.clone()));
        Ok(())
    }

    fn switch_to_desktop(&self, desktop: &DesktopInfo) -> Result<()> {
        self.switches.lock().push(desktop.id.clone());
        Ok(())
    }
}
