//! Operation logging and per-window restore outcomes.
//!
//! Core operations never write to a process-wide logger for user-visible
//! lines; they take an explicit [`LogSink`]. Ambient diagnostics still go
//! through the `log` facade.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Receives the human-readable line stream of a capture or restore.
pub trait LogSink {
    fn emit(&self, level: LogLevel, scope: &str, message: &str);

    fn info(&self, scope: &str, message: &str) {
        self.emit(LogLevel::Info, scope, message);
    }

    fn warn(&self, scope: &str, message: &str) {
        self.emit(LogLevel::Warn, scope, message);
    }

    fn error(&self, scope: &str, message: &str) {
        self.emit(LogLevel::Error, scope, message);
    }
}

/// Prints every line to stdout/stderr; used by the CLI.
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn emit(&self, level: LogLevel, scope: &str, message: &str) {
        match level {
            LogLevel::Info => println!("[{}] {}", scope, message),
            LogLevel::Warn => eprintln!("[{}] warning: {}", scope, message),
            LogLevel::Error => eprintln!("[{}] error: {}", scope, message),
        }
    }
}

/// Forwards every line to the `log` facade.
pub struct LogFacadeSink;

impl LogSink for LogFacadeSink {
    fn emit(&self, level: LogLevel, scope: &str, message: &str) {
        match level {
            LogLevel::Info => log::info!(target: "snapdesk", "[{}] {}", scope, message),
            LogLevel::Warn => log::warn!(target: "snapdesk", "[{}] {}", scope, message),
            LogLevel::Error => log::error!(target: "snapdesk", "[{}] {}", scope, message),
        }
    }
}

/// What happened to one snapshot entry during a restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Moved and resized; `desktop_moved` tells whether the desktop
    /// reassignment also went through.
    Restored { score: u32, desktop_moved: bool },
    /// Matched above threshold but the placement call failed. The desktop
    /// reassignment is attempted and recorded independently.
    PlacementFailed {
        score: u32,
        desktop_moved: bool,
        detail: String,
    },
    /// No live window scored at or above the threshold.
    NoMatch { best_score: u32 },
    /// Executable is on the fixed ignore list.
    Ignored,
    /// Recorded geometry falls outside the current display topology.
    OutOfBounds,
}

/// One outcome per snapshot entry, in snapshot order, plus batch-level state.
#[derive(Debug, Default)]
pub struct RestoreReport {
    pub outcomes: Vec<(String, RestoreOutcome)>,
    pub returned_to_origin: bool,
}

impl RestoreReport {
    pub fn record(&mut self, title: &str, outcome: RestoreOutcome) {
        self.outcomes.push((title.to_string(), outcome));
    }

    pub fn restored(&self) -> usize {
        self.count(|o| matches!(o, RestoreOutcome::Restored { .. }))
    }

    pub fn unmatched(&self) -> usize {
        self.count(|o| matches!(o, RestoreOutcome::NoMatch { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RestoreOutcome::Ignored | RestoreOutcome::OutOfBounds))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RestoreOutcome::PlacementFailed { .. }))
    }

    fn count(&self, pred: impl Fn(&RestoreOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Collects lines in memory so tests can assert on the log stream.
#[cfg(test)]
pub struct MemorySink {
    lines: parking_lot::Mutex<Vec<(LogLevel, String, String)>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn new() -> Self {
        Self {
            lines: parking_lot::Mutex::new(Vec::new()),
        }
    }

    pub fn lines(&self) -> Vec<(LogLevel, String, String)> {
        self.lines.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines.lock().iter().map(|(_, _, m)| m.clone()).collect()
    }
}

#[cfg(test)]
impl LogSink for MemorySink {
    fn emit(&self, level: LogLevel, scope: &str, message: &str) {
        self.lines
            .lock()
            .push((level, scope.to_string(), message.to_string()));
    }
}
