use crate::core::desktops::DesktopDirectory;
use crate::error::Result;
use crate::models::LiveWindow;
use crate::sys::{DesktopSystem, WindowSystem};

/// Returns every currently visible, top-level, titled window, annotated with
/// its best-effort virtual desktop assignment.
///
/// A window that cannot be resolved to any desktop (system windows, tool
/// windows owned by the shell) is still included with its desktop fields
/// unknown. Pure read of OS state; nothing is mutated.
pub fn visible_windows(
    win: &dyn WindowSystem,
    desk: &dyn DesktopSystem,
    directory: &DesktopDirectory,
) -> Result<Vec<LiveWindow>> {
    let raw = win.list_windows()?;
    let mut windows = Vec::with_capacity(raw.len());

    for w in raw {
        if !w.visible || !w.top_level || w.title.is_empty() {
            continue;
        }

        let mut desktop_number = None;
        let mut desktop_id = None;
        let mut desktop_name = None;
        for desktop in directory.iter() {
            match desk.window_on_desktop(w.handle, desktop) {
                Ok(true) => {
                    desktop_number = Some(desktop.number);
                    desktop_id = Some(desktop.id.clone());
                    desktop_name = Some(desktop.name.clone());
                    break;
                }
                Ok(false) => continue,
                Err(e) => {
                    log::debug!(
                        "'{}' ({}) not assignable to a virtual desktop: {}",
                        w.title,
                        w.exe,
                        e
                    );
                    break;
                }
            }
        }

        windows.push(LiveWindow {
            handle: w.handle,
            title: w.title,
            exe: w.exe,
            rect: w.rect,
            desktop_number,
            desktop_id,
            desktop_name,
            z_order: None,
        });
    }

    log::debug!("enumerated {} visible windows", windows.len());
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WindowRect;
    use crate::sys::fake::FakeSystem;

    #[test]
    fn invisible_parented_and_untitled_windows_are_filtered() {
        let mut sys = FakeSystem::new();
        sys.add_desktop("{A}", "Main");
        sys.add_window(1, "Editor", "code.exe", WindowRect::new(0, 0, 800, 600));
        sys.add_hidden_window(2, "Hidden", "code.exe");
        sys.add_child_window(3, "Child pane", "code.exe");
        sys.add_window(4, "", "svchost.exe", WindowRect::new(0, 0, 10, 10));

        let dir = DesktopDirectory::load(&sys).expect("directory");
        let windows = visible_windows(&sys, &sys, &dir).expect("enumerate");
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].handle, 1);
    }

    #[test]
    fn first_matching_desktop_in_order_is_assigned() {
        let mut sys = FakeSystem::new();
        sys.add_desktop("{A}", "Main");
        sys.add_desktop("{B}", "Work");
        sys.add_window(1, "Editor", "code.exe", WindowRect::new(0, 0, 800, 600));
        sys.place_on_desktop(1, "{B}");

        let dir = DesktopDirectory::load(&sys).expect("directory");
        let windows = visible_windows(&sys, &sys, &dir).expect("enumerate");
        assert_eq!(windows[0].desktop_number, Some(2));
        assert_eq!(windows[0].desktop_id.as_deref(), Some("{B}"));
        assert_eq!(windows[0].desktop_name.as_deref(), Some("Work"));
    }

    #[test]
    fn unassignable_window_is_kept_with_unknown_desktop() {
        let mut sys = FakeSystem::new();
        sys.add_desktop("{A}", "Main");
        sys.add_window(1, "Task Manager", "taskmgr.exe", WindowRect::new(0, 0, 400, 300));
        sys.fail_membership_for(1);

        let dir = DesktopDirectory::load(&sys).expect("directory");
        let windows = visible_windows(&sys, &sys, &dir).expect("enumerate");
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].desktop_number, None);
        assert_eq!(windows[0].desktop_id, None);
        assert_eq!(windows[0].desktop_name, None);
    }

    #[test]
    fn empty_exe_from_failed_process_query_is_tolerated() {
        let mut sys = FakeSystem::new();
        sys.add_desktop("{A}", "Main");
        sys.add_window(1, "Mystery", "", WindowRect::new(5, 5, 100, 100));

        let dir = DesktopDirectory::load(&sys).expect("directory");
        let windows = visible_windows(&sys, &sys, &dir).expect("enumerate");
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].exe, "");
    }

    #[test]
    fn empty_directory_leaves_every_window_unassigned() {
        let mut sys = FakeSystem::new();
        sys.add_window(1, "Editor", "code.exe", WindowRect::new(0, 0, 800, 600));

        let windows =
            visible_windows(&sys, &sys, &DesktopDirectory::empty()).expect("enumerate");
        assert_eq!(windows[0].desktop_number, None);
    }
}
