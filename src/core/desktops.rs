//! Per-operation lookup table over the live virtual desktop set.
//!
//! Desktop sets change between sessions, so a directory is rebuilt for every
//! capture and every restore and never cached across operations.

use std::collections::BTreeMap;

use crate::core::report::LogSink;
use crate::error::Result;
use crate::models::{DesktopInfo, WindowEntry};
use crate::sys::DesktopSystem;

#[derive(Debug, Default)]
pub struct DesktopDirectory {
    desktops: Vec<DesktopInfo>,
}

impl DesktopDirectory {
    /// Builds the directory from a fresh enumeration. Fails with
    /// `DesktopUnavailable` when the desktop service cannot be queried;
    /// callers degrade to [`DesktopDirectory::empty`] rather than aborting.
    pub fn load(sys: &dyn DesktopSystem) -> Result<Self> {
        Ok(Self {
            desktops: sys.list_desktops()?,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.desktops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.desktops.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DesktopInfo> {
        self.desktops.iter()
    }

    pub fn by_id(&self, id: &str) -> Option<&DesktopInfo> {
        self.desktops.iter().find(|d| d.id == id)
    }

    /// 1-based ordinal lookup.
    pub fn by_number(&self, number: u32) -> Option<&DesktopInfo> {
        if number == 0 {
            return None;
        }
        self.desktops.get(number as usize - 1)
    }

    /// Ordinal-as-string to display name, the shape persisted in a snapshot.
    pub fn name_map(&self) -> BTreeMap<String, String> {
        self.desktops
            .iter()
            .map(|d| (d.number.to_string(), d.name.clone()))
            .collect()
    }
}

/// Maps a snapshot entry's recorded desktop to a live one.
///
/// Stable id first; the ordinal is a deliberate degraded fallback because
/// ids from a previous session may no longer exist. Resolution failure is
/// logged and yields `None` so desktop reassignment stays best-effort.
pub fn resolve_desktop<'a>(
    entry: &WindowEntry,
    directory: &'a DesktopDirectory,
    sink: &dyn LogSink,
) -> Option<&'a DesktopInfo> {
    if let Some(id) = entry.desktop_id.as_deref() {
        if let Some(desktop) = directory.by_id(id) {
            return Some(desktop);
        }
    }
    if let Some(number) = entry.desktop_number {
        if let Some(desktop) = directory.by_number(number) {
            return Some(desktop);
        }
    }
    if entry.desktop_id.is_some() || entry.desktop_number.is_some() {
        sink.warn(
            "restore",
            &format!("could not resolve desktop for '{}'", entry.title),
        );
    }
    None
}
