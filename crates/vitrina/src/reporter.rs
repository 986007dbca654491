//! Scenario reporting: a structured log sink plus per-scenario results.
//!
//! The reporter is purely observational: it records PASS/INFO/FAIL
//! entries for human-readable reports and mirrors them onto `tracing`,
//! but never affects scenario control flow.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::result::VitrinaResult;

/// Severity of a report log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// A check that succeeded
    Pass,
    /// Contextual information (observed values, expectations)
    Info,
    /// A check that failed
    Fail,
}

/// One human-readable report line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Entry severity
    pub severity: Severity,
    /// Message text
    pub message: String,
    /// When the entry was recorded (RFC 3339)
    pub timestamp: String,
}

/// Outcome of a single scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioStatus {
    /// Scenario passed
    Passed,
    /// Scenario failed
    Failed,
    /// Scenario was skipped
    Skipped,
}

impl ScenarioStatus {
    /// Check if status is passing
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Recorded result of one scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario name
    pub name: String,
    /// Outcome
    pub status: ScenarioStatus,
    /// Duration of the run
    pub duration: Duration,
    /// Error message if failed
    pub error: Option<String>,
}

impl ScenarioResult {
    /// Create a passing result
    #[must_use]
    pub fn passed(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Passed,
            duration,
            error: None,
        }
    }

    /// Create a failing result
    #[must_use]
    pub fn failed(name: impl Into<String>, duration: Duration, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Failed,
            duration,
            error: Some(error.into()),
        }
    }

    /// Create a skipped result
    #[must_use]
    pub fn skipped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Skipped,
            duration: Duration::ZERO,
            error: None,
        }
    }
}

/// Collects log entries and scenario results for a run
#[derive(Debug, Default)]
pub struct Reporter {
    entries: Vec<LogEntry>,
    results: Vec<ScenarioResult>,
}

impl Reporter {
    /// Create an empty reporter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a log entry and mirror it onto `tracing`
    pub fn log(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Pass => tracing::info!(target: "vitrina::report", status = "PASS", "{message}"),
            Severity::Info => tracing::info!(target: "vitrina::report", status = "INFO", "{message}"),
            Severity::Fail => tracing::error!(target: "vitrina::report", status = "FAIL", "{message}"),
        }
        self.entries.push(LogEntry {
            severity,
            message,
            timestamp: now_rfc3339(),
        });
    }

    /// Shorthand for a PASS entry
    pub fn pass(&mut self, message: impl Into<String>) {
        self.log(Severity::Pass, message);
    }

    /// Shorthand for an INFO entry
    pub fn info(&mut self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    /// Shorthand for a FAIL entry
    pub fn fail(&mut self, message: impl Into<String>) {
        self.log(Severity::Fail, message);
    }

    /// Record a scenario result
    pub fn record(&mut self, result: ScenarioResult) {
        self.results.push(result);
    }

    /// All log entries so far
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// All scenario results so far
    #[must_use]
    pub fn results(&self) -> &[ScenarioResult] {
        &self.results
    }

    /// Count of passed scenarios
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status.is_passed())
            .count()
    }

    /// Count of failed scenarios
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == ScenarioStatus::Failed)
            .count()
    }

    /// Whether every recorded scenario passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.status != ScenarioStatus::Failed)
    }

    /// Export entries and results as a JSON document
    pub fn to_json(&self) -> VitrinaResult<String> {
        #[derive(Serialize)]
        struct Report<'a> {
            entries: &'a [LogEntry],
            results: &'a [ScenarioResult],
        }
        Ok(serde_json::to_string_pretty(&Report {
            entries: &self.entries,
            results: &self.results,
        })?)
    }

    /// Write the JSON report to a file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn write_json(&self, path: &std::path::Path) -> VitrinaResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(target_arch = "wasm32")]
fn now_rfc3339() -> String {
    String::new()
}
