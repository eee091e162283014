//! snapdesk CLI: capture, restore, and list window layout snapshots.

use std::path::PathBuf;
use std::process;

use anyhow::Result;

use snapdesk::{CaptureFilter, CaptureOptions, RestoreOptions};

enum Command {
    Capture {
        collection: String,
        options: CaptureOptions,
    },
    Restore {
        path: PathBuf,
        options: RestoreOptions,
    },
    List {
        collection: String,
    },
    Help,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let cmd = match parse_args(&arg_refs) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("snapdesk: {}", e);
            process::exit(2);
        }
    };

    if let Err(e) = run(cmd) {
        eprintln!("snapdesk error: {:#}", e);
        process::exit(1);
    }
}

fn snapshots_root() -> PathBuf {
    if let Ok(dir) = std::env::var("SNAPDESK_DIR") {
        return PathBuf::from(dir);
    }
    PathBuf::from("snapshots")
}

fn run(cmd: Command) -> Result<()> {
    match cmd {
        Command::Capture {
            collection,
            options,
        } => capture(&collection, &options),
        Command::Restore { path, options } => restore(&path, &options),
        Command::List { collection } => {
            for path in snapdesk::list_snapshots(&snapshots_root(), &collection)? {
                println!("{}", path.display());
            }
            Ok(())
        }
        Command::Help => {
            print_usage();
            Ok(())
        }
    }
}

#[cfg(target_os = "windows")]
fn capture(collection: &str, options: &CaptureOptions) -> Result<()> {
    use anyhow::Context;
    use snapdesk::sys::desktop_win32::VirtualDesktopSystem;
    use snapdesk::sys::win32::Win32System;
    use snapdesk::StdoutSink;

    let path = snapdesk::capture_snapshot(
        &Win32System,
        &VirtualDesktopSystem,
        &snapshots_root(),
        collection,
        options,
        &StdoutSink,
        None,
    )
    .with_context(|| format!("capturing collection '{}'", collection))?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn capture(_collection: &str, _options: &CaptureOptions) -> Result<()> {
    anyhow::bail!("window capture requires Windows")
}

#[cfg(target_os = "windows")]
fn restore(path: &std::path::Path, options: &RestoreOptions) -> Result<()> {
    use anyhow::Context;
    use snapdesk::sys::desktop_win32::VirtualDesktopSystem;
    use snapdesk::sys::win32::Win32System;
    use snapdesk::StdoutSink;

    snapdesk::restore_windows(&Win32System, &VirtualDesktopSystem, path, options, &StdoutSink)
        .with_context(|| format!("restoring {}", path.display()))?;
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn restore(_path: &std::path::Path, _options: &RestoreOptions) -> Result<()> {
    anyhow::bail!("window restore requires Windows")
}

fn parse_args(args: &[&str]) -> std::result::Result<Command, String> {
    if args.is_empty() {
        return Err("no command specified, run 'snapdesk help' for usage".into());
    }

    match args[0] {
        "capture" => {
            let collection = positional(args, 1, "snapdesk capture <collection>")?;
            let mut options = CaptureOptions::default();
            let mut i = 2;
            while i < args.len() {
                match args[i] {
                    "--only" => {
                        options.filter = CaptureFilter::OnlyExe(flag_value(args, i, "--only")?);
                        i += 2;
                    }
                    "--exclude" => {
                        options.filter =
                            CaptureFilter::ExcludeExe(flag_value(args, i, "--exclude")?);
                        i += 2;
                    }
                    "--no-z-order" => {
                        options.tag_z_order = false;
                        i += 1;
                    }
                    other => return Err(format!("unknown capture flag '{}'", other)),
                }
            }
            Ok(Command::Capture {
                collection,
                options,
            })
        }
        "restore" => {
            let path = PathBuf::from(positional(args, 1, "snapdesk restore <snapshot-file>")?);
            let mut options = RestoreOptions::default();
            let mut i = 2;
            while i < args.len() {
                match args[i] {
                    "--threshold" => {
                        let value = flag_value(args, i, "--threshold")?;
                        options.threshold = value
                            .parse()
                            .map_err(|_| format!("invalid threshold '{}'", value))?;
                        i += 2;
                    }
                    "--margin" => {
                        let value = flag_value(args, i, "--margin")?;
                        options.margin_px = value
                            .parse()
                            .map_err(|_| format!("invalid margin '{}'", value))?;
                        i += 2;
                    }
                    "--no-return" => {
                        options.return_to_origin = false;
                        i += 1;
                    }
                    "--no-bounds-check" => {
                        options.validate_bounds = false;
                        i += 1;
                    }
                    other => return Err(format!("unknown restore flag '{}'", other)),
                }
            }
            Ok(Command::Restore { path, options })
        }
        "list" => Ok(Command::List {
            collection: positional(args, 1, "snapdesk list <collection>")?,
        }),
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(format!(
            "unknown command '{}', run 'snapdesk help' for usage",
            other
        )),
    }
}

fn positional(args: &[&str], index: usize, usage: &str) -> std::result::Result<String, String> {
    match args.get(index) {
        Some(value) if !value.starts_with("--") => Ok((*value).to_string()),
        _ => Err(format!("usage: {}", usage)),
    }
}

fn flag_value(args: &[&str], index: usize, flag: &str) -> std::result::Result<String, String> {
    args.get(index + 1)
        .map(|s| s.to_string())
        .ok_or_else(|| format!("{} needs a value", flag))
}

fn print_usage() {
    println!(
        "snapdesk - capture and restore window layouts across virtual desktops

usage:
  snapdesk capture <collection> [--only <exe-fragment>] [--exclude <exe-fragment>] [--no-z-order]
  snapdesk restore <snapshot-file> [--threshold <0-100>] [--margin <px>] [--no-return] [--no-bounds-check]
  snapdesk list <collection>

snapshots are stored under ./snapshots (override with SNAPDESK_DIR)."
    );
}
