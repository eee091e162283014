//! Restore pipeline: load a snapshot, match it against the live window set,
//! and reposition every sufficiently matched window.
//!
//! One stuck or access-denied window must not abort the batch: every OS
//! failure past snapshot loading is caught, logged through the sink, and
//! recorded as that window's outcome.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::core::bounds::MonitorBounds;
use crate::core::desktops::{self, DesktopDirectory};
use crate::core::enumerate;
use crate::core::matching::{self, MatchResult};
use crate::core::persistence;
use crate::core::report::{LogSink, RestoreOutcome, RestoreReport};
use crate::error::Result;
use crate::models::RestoreOptions;
use crate::sys::{DesktopSystem, WindowSystem};

// System shell processes that must never be repositioned programmatically.
static IGNORED_PROCESSES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["voiceaccess.exe", "explorer.exe"].into());

fn is_ignored(exe: &str) -> bool {
    IGNORED_PROCESSES.contains(exe.to_ascii_lowercase().as_str())
}

/// Restores a captured layout by matching saved windows against current
/// ones, moving them back to their recorded rectangles, and reassigning
/// them to their original virtual desktops.
///
/// Fails only when the snapshot file itself is unreadable; every per-window
/// fault is isolated and reported in the returned [`RestoreReport`].
pub fn restore_windows(
    win: &dyn WindowSystem,
    desk: &dyn DesktopSystem,
    path: &Path,
    options: &RestoreOptions,
    sink: &dyn LogSink,
) -> Result<RestoreReport> {
    let snapshot = persistence::load_snapshot(path)?;

    let directory = match DesktopDirectory::load(desk) {
        Ok(directory) => directory,
        Err(e) => {
            sink.warn("restore", &format!("{}; desktop reassignment disabled", e));
            DesktopDirectory::empty()
        }
    };
    let live = enumerate::visible_windows(win, desk, &directory)?;
    let origin_desktop = desk.current_desktop_id().ok();

    sink.info(
        "restore",
        &format!("workspace: {}", snapshot.collection_name),
    );
    let desktop_names: Vec<&str> = snapshot.desktops.values().map(String::as_str).collect();
    sink.info(
        "restore",
        &format!(
            "desktops: {} ({})",
            snapshot.desktops.len(),
            desktop_names.join(" | ")
        ),
    );

    let matches = matching::match_windows(&snapshot, &live);
    let bounds = if options.validate_bounds {
        monitor_bounds(win, sink)
    } else {
        None
    };

    let mut report = apply_layout(win, desk, &matches, &directory, bounds, options, sink);

    if options.return_to_origin {
        report.returned_to_origin =
            return_to_origin(desk, origin_desktop.as_deref(), &directory, sink);
    }

    sink.info(
        "restore",
        &format!(
            "{} restored, {} unmatched, {} skipped, {} failed",
            report.restored(),
            report.unmatched(),
            report.skipped(),
            report.failed()
        ),
    );
    Ok(report)
}

fn monitor_bounds(win: &dyn WindowSystem, sink: &dyn LogSink) -> Option<MonitorBounds> {
    let rects = win.monitor_rects().unwrap_or_default();
    match MonitorBounds::from_rects(&rects) {
        Some(bounds) => {
            sink.info(
                "restore",
                &format!(
                    "monitor bounds: x={}..{}, y={}..{}",
                    bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max
                ),
            );
            Some(bounds)
        }
        None => {
            sink.warn(
                "restore",
                "no display bounds available, skipping bounds validation",
            );
            None
        }
    }
}

/// Applies positional and desktop changes for every match, in snapshot
/// order, collecting one outcome per entry.
pub(crate) fn apply_layout(
    win: &dyn WindowSystem,
    desk: &dyn DesktopSystem,
    matches: &[MatchResult<'_>],
    directory: &DesktopDirectory,
    bounds: Option<MonitorBounds>,
    options: &RestoreOptions,
    sink: &dyn LogSink,
) -> RestoreReport {
    let mut report = RestoreReport::default();

    for m in matches {
        let entry = m.entry;
        let Some(live) = m.live.filter(|_| m.score >= options.threshold) else {
            sink.info(
                "restore",
                &format!("no match: {} (best: {})", entry.title, m.score),
            );
            report.record(&entry.title, RestoreOutcome::NoMatch { best_score: m.score });
            continue;
        };

        if is_ignored(&entry.exe) {
            sink.info(
                "restore",
                &format!("skipping known system window: {}", entry.exe),
            );
            report.record(&entry.title, RestoreOutcome::Ignored);
            continue;
        }

        if let Some(bounds) = bounds {
            if !bounds.allows_top_left(entry.x, entry.y, options.margin_px) {
                sink.warn(
                    "restore",
                    &format!(
                        "out of bounds, skipping: '{}' @ ({}, {}) {}x{}",
                        entry.title, entry.x, entry.y, entry.width, entry.height
                    ),
                );
                report.record(&entry.title, RestoreOutcome::OutOfBounds);
                continue;
            }
        }

        let placement = win.apply_placement(live.handle, entry.rect());

        // Desktop reassignment is attempted whether or not the placement
        // call succeeded, and its failure is swallowed on its own.
        let desktop_moved = match desktops::resolve_desktop(entry, directory, sink) {
            Some(target) => match desk.move_window_to_desktop(live.handle, target) {
                Ok(()) => true,
                Err(e) => {
                    sink.warn(
                        "restore",
                        &format!("failed to move '{}' to desktop {}: {}", entry.title, target.number, e),
                    );
                    false
                }
            },
            None => false,
        };

        match placement {
            Ok(()) => {
                sink.info(
                    "restore",
                    &format!("{} -> {} (score: {})", entry.title, live.title, m.score),
                );
                report.record(
                    &entry.title,
                    RestoreOutcome::Restored {
                        score: m.score,
                        desktop_moved,
                    },
                );
            }
            Err(e) => {
                sink.error("restore", &format!("failed to place '{}': {}", entry.title, e));
                report.record(
                    &entry.title,
                    RestoreOutcome::PlacementFailed {
                        score: m.score,
                        desktop_moved,
                        detail: e.to_string(),
                    },
                );
            }
        }
    }

    report
}

fn return_to_origin(
    desk: &dyn DesktopSystem,
    origin: Option<&str>,
    directory: &DesktopDirectory,
    sink: &dyn LogSink,
) -> bool {
    let Some(origin_id) = origin else {
        sink.warn("restore", "origin desktop unknown, not returning");
        return false;
    };
    let Some(desktop) = directory.by_id(origin_id) else {
        sink.warn("restore", "origin desktop no longer exists, not returning");
        return false;
    };
    match desk.switch_to_desktop(desktop) {
        Ok(()) => {
            sink.info("restore", "returned to starting desktop");
            true
        }
        Err(e) => {
            sink.warn("restore", &format!("could not return to origin: {}", e));
            false
        }
    }
}
