//! Session state: the entry log owned by one server instance.

use chrono::{DateTime, Local};

use think_tool::{Clock, EntryLabel, EntryLog, SystemClock};

/// Owns the session's [`EntryLog`] for the lifetime of the server.
///
/// Shared between tools as `Arc<Mutex<SessionManager>>`; the mutex
/// serializes every append, clear, list and stats call.
#[derive(Debug)]
pub struct SessionManager {
    log: EntryLog,
    started_at: DateTime<Local>,
    tool_calls: u64,
}

impl SessionManager {
    /// Start a session with an empty log stamped by the system clock.
    pub fn new(label: EntryLabel) -> Self {
        Self::with_clock(label, SystemClock)
    }

    /// Start a session with a custom clock for entry timestamps.
    pub fn with_clock(label: EntryLabel, clock: impl Clock + 'static) -> Self {
        tracing::debug!("Session started with an empty {} log", label.noun());
        Self {
            log: EntryLog::with_clock(label, clock),
            started_at: Local::now(),
            tool_calls: 0,
        }
    }

    /// The session's log.
    pub fn log(&self) -> &EntryLog {
        &self.log
    }

    /// Mutable access to the session's log.
    pub fn log_mut(&mut self) -> &mut EntryLog {
        &mut self.log
    }

    /// The label the log presents itself with.
    pub fn label(&self) -> &EntryLabel {
        self.log.label()
    }

    /// Count one tool invocation.
    pub fn record_tool_call(&mut self, name: &str) {
        self.tool_calls += 1;
        tracing::debug!("Tool call #{}: {name}", self.tool_calls);
    }

    /// Number of tool invocations so far.
    pub fn tool_calls(&self) -> u64 {
        self.tool_calls
    }

    /// One-line description for shutdown logging.
    pub fn summary(&self) -> String {
        let secs = (Local::now() - self.started_at).num_seconds().max(0);
        format!(
            "{} {} recorded, {} tool calls over {secs}s",
            self.log.len(),
            self.label().plural(),
            self.tool_calls
        )
    }
}
