//! Capture pipeline: enumerate live windows, apply filters, tag stacking
//! order, and persist the result as a new snapshot file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::desktops::DesktopDirectory;
use crate::core::enumerate;
use crate::core::persistence;
use crate::core::report::LogSink;
use crate::error::Result;
use crate::models::{
    CaptureFilter, CaptureOptions, LiveWindow, Snapshot, WindowEntry, WindowHandle, FORMAT_VERSION,
};
use crate::sys::{DesktopSystem, WindowSystem};

/// Structured summary handed to the metadata callback right after a snapshot
/// is written. The callback cannot fail the capture; the file is already on
/// disk when it runs.
#[derive(Debug, Clone, Serialize)]
pub struct CaptureSummary {
    pub collection_name: String,
    pub collection_id: String,
    pub captured_at: String,
    pub desktop_count: usize,
    pub desktop_names: Vec<String>,
}

/// Captures the current window layout into a new snapshot file under
/// `root/<collection_name>/` and returns its path.
pub fn capture_snapshot(
    win: &dyn WindowSystem,
    desk: &dyn DesktopSystem,
    root: &Path,
    collection_name: &str,
    options: &CaptureOptions,
    sink: &dyn LogSink,
    on_captured: Option<&dyn Fn(&CaptureSummary)>,
) -> Result<PathBuf> {
    sink.info("capture", "starting window enumeration and desktop mapping");

    let directory = match DesktopDirectory::load(desk) {
        Ok(directory) => directory,
        Err(e) => {
            sink.warn(
                "capture",
                &format!("{}; capturing without desktop assignment", e),
            );
            DesktopDirectory::empty()
        }
    };

    let mut windows = enumerate::visible_windows(win, desk, &directory)?;

    if options.filter != CaptureFilter::All {
        windows.retain(|w| options.filter.keeps(&w.exe));
        sink.info(
            "capture",
            &format!("filter applied, {} windows retained", windows.len()),
        );
    }

    if options.tag_z_order {
        tag_z_order(win, &mut windows, sink);
    }

    let now = chrono::Local::now();
    let stamp = now.format("%d-%b-%Y_%H%M").to_string();
    let snapshot = Snapshot {
        format_version: FORMAT_VERSION.into(),
        collection_name: collection_name.into(),
        collection_id: uuid::Uuid::new_v4().to_string(),
        captured_at: now.format("%d-%b-%Y %H:%M").to_string(),
        desktops: directory.name_map(),
        windows: windows.iter().map(WindowEntry::from_live).collect(),
    };

    let path = persistence::snapshot_file_path(root, collection_name, &stamp);
    persistence::write_snapshot(&path, &snapshot)?;
    sink.info(
        "capture",
        &format!("captured snapshot to {}", path.display()),
    );

    if let Some(callback) = on_captured {
        callback(&CaptureSummary {
            collection_name: snapshot.collection_name.clone(),
            collection_id: snapshot.collection_id.clone(),
            captured_at: snapshot.captured_at.clone(),
            desktop_count: snapshot.desktops.len(),
            desktop_names: snapshot.desktops.values().cloned().collect(),
        });
    }

    Ok(path)
}

/// Joins the front-to-back stacking pass onto the enumerated windows by
/// handle and orders the list front-first. Windows absent from the stacking
/// pass keep rank -1.
fn tag_z_order(win: &dyn WindowSystem, windows: &mut Vec<LiveWindow>, sink: &dyn LogSink) {
    let order = match win.front_to_back() {
        Ok(order) => order,
        Err(e) => {
            sink.warn("capture", &format!("stacking order unavailable: {}", e));
            return;
        }
    };
    let ranks: HashMap<WindowHandle, i32> = order
        .iter()
        .enumerate()
        .map(|(i, handle)| (*handle, i as i32))
        .collect();
    for w in windows.iter_mut() {
        w.z_order = Some(ranks.get(&w.handle).copied().unwrap_or(-1));
    }
    windows.sort_by_key(|w| w.z_order.unwrap_or(-1));
}
