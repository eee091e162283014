//! Fuzzy reconciliation of snapshot entries against live windows.
//!
//! The executable name is a hard identity gate; only titles are fuzzy. The
//! score is a partial-ratio (best partial substring alignment, 0-100), which
//! tolerates title drift like tab-count suffixes or recovery markers.

use crate::models::{LiveWindow, Snapshot, WindowEntry};

/// Best live candidate for one snapshot entry. Consumed immediately by the
/// layout applier; never persisted.
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub entry: &'a WindowEntry,
    pub live: Option<&'a LiveWindow>,
    pub score: u32,
}

/// Partial-ratio similarity between two window titles, 0-100 inclusive,
/// insensitive to which title is longer.
pub fn title_score(a: &str, b: &str) -> u32 {
    rapidfuzz::fuzz::partial_ratio(a.chars(), b.chars()).round() as u32
}

/// Produces one [`MatchResult`] per snapshot entry, in snapshot order.
///
/// A live window is a candidate only when its executable name equals the
/// entry's under case-insensitive comparison. The highest-scoring candidate
/// wins; on equal scores the candidate earliest in `live` is kept, so the
/// outcome is deterministic for a given enumeration order.
pub fn match_windows<'a>(snapshot: &'a Snapshot, live: &'a [LiveWindow]) -> Vec<MatchResult<'a>> {
    snapshot
        .windows
        .iter()
        .map(|entry| {
            let mut best: Option<&LiveWindow> = None;
            let mut best_score = 0u32;
            for candidate in live {
                if !entry.exe.eq_ignore_ascii_case(&candidate.exe) {
                    continue;
                }
                let score = title_score(&entry.title, &candidate.title);
                if score > best_score {
                    best_score = score;
                    best = Some(candidate);
                }
            }
            MatchResult {
                entry,
                live: best,
                score: best_score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WindowRect, FORMAT_VERSION};

    fn live(handle: isize, title: &str, exe: &str) -> LiveWindow {
        LiveWindow {
            handle,
            title: title.into(),
            exe: exe.into(),
            rect: WindowRect::new(0, 0, 100, 100),
            desktop_number: None,
            desktop_id: None,
            desktop_name: None,
            z_order: None,
        }
    }

    fn entry(title: &str, exe: &str) -> WindowEntry {
        WindowEntry {
            title: title.into(),
            exe: exe.into(),
            x: 0,
            y: 0,
            width: 100,
            height: 100,
            desktop_id: None,
            desktop_number: None,
            z_order: None,
        }
    }

    fn snapshot_of(windows: Vec<WindowEntry>) -> Snapshot {
        Snapshot {
            format_version: FORMAT_VERSION.into(),
            collection_name: "test".into(),
            collection_id: "id".into(),
            captured_at: "06-Aug-2026 12:00".into(),
            desktops: Default::default(),
            windows,
        }
    }

    #[test]
    fn identical_titles_score_one_hundred() {
        assert_eq!(title_score("Budget - Excel", "Budget - Excel"), 100);
    }

    #[test]
    fn superset_title_scores_high() {
        // The live title is a superset of the recorded one; partial ratio
        // ignores the extra suffix entirely.
        let score = title_score("Budget - Excel", "Budget - Excel [Recovered]");
        assert!(score >= 90, "expected >= 90, got {}", score);
    }

    #[test]
    fn executable_gate_is_strict() {
        let snap = snapshot_of(vec![entry("Inbox", "chrome.exe")]);
        let live = vec![live(1, "Inbox", "notepad.exe")];
        let results = match_windows(&snap, &live);
        assert_eq!(results.len(), 1);
        assert!(results[0].live.is_none());
        assert_eq!(results[0].score, 0);
    }

    #[test]
    fn executable_gate_ignores_case() {
        let snap = snapshot_of(vec![entry("Budget - Excel", "excel.exe")]);
        let live = vec![live(1, "Budget - Excel [Recovered]", "EXCEL.EXE")];
        let results = match_windows(&snap, &live);
        let matched = results[0].live.expect("should match");
        assert_eq!(matched.handle, 1);
        assert!(results[0].score >= 90);
    }

    #[test]
    fn best_of_n_keeps_highest_score() {
        let snap = snapshot_of(vec![entry("Project Plan - Notes", "notepad.exe")]);
        let live = vec![
            live(1, "Shopping List - Notes", "notepad.exe"),
            live(2, "Project Plan - Notes", "notepad.exe"),
            live(3, "Untitled - Notes", "notepad.exe"),
        ];
        let results = match_windows(&snap, &live);
        assert_eq!(results[0].live.expect("match").handle, 2);
        assert_eq!(results[0].score, 100);
    }

    #[test]
    fn ties_keep_first_candidate_in_live_order() {
        let snap = snapshot_of(vec![entry("Inbox", "chrome.exe")]);
        let live = vec![live(7, "Inbox", "chrome.exe"), live(8, "Inbox", "chrome.exe")];
        let results = match_windows(&snap, &live);
        assert_eq!(results[0].live.expect("match").handle, 7);
    }

    #[test]
    fn no_candidate_yields_no_match_with_zero_score() {
        let snap = snapshot_of(vec![entry("Inbox", "chrome.exe")]);
        let results = match_windows(&snap, &[]);
        assert!(results[0].live.is_none());
        assert_eq!(results[0].score, 0);
    }

    #[test]
    fn results_follow_snapshot_order() {
        let snap = snapshot_of(vec![
            entry("B", "b.exe"),
            entry("A", "a.exe"),
            entry("C", "c.exe"),
        ]);
        let live = vec![live(1, "A", "a.exe"), live(2, "B", "b.exe")];
        let results = match_windows(&snap, &live);
        assert_eq!(results[0].entry.title, "B");
        assert_eq!(results[1].entry.title, "A");
        assert_eq!(results[2].entry.title, "C");
        assert!(results[2].live.is_none());
    }
}
