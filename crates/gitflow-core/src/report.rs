//! Severity-aware status reporting
//!
//! Components never print directly. They hand categorised status lines to a
//! [`Reporter`]; the CLI renders them with colour, tests collect them with
//! [`MemoryReporter`].

use std::cell::RefCell;
use std::fmt;

/// Category of an operator-facing status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A step completed
    Success,
    /// Something needs attention but the run continues
    Warning,
    /// The run is about to stop
    Error,
    /// A noteworthy state the operator did not ask about
    Notice,
    /// Headers, banners and progress
    Info,
}

impl Severity {
    /// Short tag shown in front of the message.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "OK",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Notice => "Notice",
            Severity::Info => "Info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sink for categorised status lines.
pub trait Reporter {
    fn report(&self, severity: Severity, message: &str);

    fn success(&self, message: &str) {
        self.report(Severity::Success, message);
    }

    fn warning(&self, message: &str) {
        self.report(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Severity::Error, message);
    }

    fn notice(&self, message: &str) {
        self.report(Severity::Notice, message);
    }

    fn info(&self, message: &str) {
        self.report(Severity::Info, message);
    }
}

/// Reporter that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: RefCell<Vec<(Severity, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reported lines, in order.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.borrow().clone()
    }

    /// Messages reported with `severity`, in order.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any line with `severity` contains `needle`.
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|(s, m)| *s == severity && m.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, severity: Severity, message: &str) {
        self.entries
            .borrow_mut()
            .push((severity, message.to_string()));
    }
}
