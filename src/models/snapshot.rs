use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::window::{LiveWindow, WindowRect};

/// Format version written into every snapshot file.
pub const FORMAT_VERSION: &str = "1.0";

/// A single window's persisted state inside a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowEntry {
    pub title: String,
    pub exe: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_order: Option<i32>,
}

impl WindowEntry {
    pub fn from_live(window: &LiveWindow) -> Self {
        Self {
            title: window.title.clone(),
            exe: window.exe.clone(),
            x: window.rect.x,
            y: window.rect.y,
            width: window.rect.width,
            height: window.rect.height,
            desktop_id: window.desktop_id.clone(),
            desktop_number: window.desktop_number,
            z_order: window.z_order,
        }
    }

    pub fn rect(&self) -> WindowRect {
        WindowRect::new(self.x, self.y, self.width, self.height)
    }
}

/// The persisted unit of work: one point-in-time window layout.
///
/// Immutable once written; a re-capture supersedes it with a new file rather
/// than updating in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub format_version: String,
    pub collection_name: String,
    pub collection_id: String,
    pub captured_at: String,
    /// Ordinal index (as a string key) to display name, for every desktop
    /// that existed at capture time.
    #[serde(default)]
    pub desktops: BTreeMap<String, String>,
    #[serde(default)]
    pub windows: Vec<WindowEntry>,
}
