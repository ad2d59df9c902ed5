//! Batch progress reporting.
//!
//! Emits per-document progress during `sift analyze` on **stderr**, keeping
//! stdout parseable for scripts. Human and JSON-lines formats are available;
//! the default picks human output only when stderr is a TTY.

use std::io::Write;

/// A single progress event for an analyze run.
#[derive(Clone, Debug)]
pub enum AnalyzeEvent {
    /// Document discovery is running under `root`; totals are not known yet.
    Discovering { root: String },
    /// A document finished: `n` of `total` done.
    Analyzed {
        document: String,
        n: u64,
        total: u64,
    },
    /// A document was skipped with a reason (extraction or sink failure).
    Skipped { document: String, reason: String },
}

/// Reports analyze progress. Implementations write to stderr and must be
/// shareable across the parallel per-document workers.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: AnalyzeEvent);
}

/// Human-friendly lines: "analyze  3 / 12  report.pdf".
pub struct StderrProgress;

impl ProgressReporter for StderrProgress {
    fn report(&self, event: AnalyzeEvent) {
        let line = match &event {
            AnalyzeEvent::Discovering { root } => {
                format!("analyze  discovering {} ...\n", root)
            }
            AnalyzeEvent::Analyzed { document, n, total } => {
                format!("analyze  {} / {}  {}\n", n, total, document)
            }
            AnalyzeEvent::Skipped { document, reason } => {
                format!("analyze  skipped {}: {}\n", document, reason)
            }
        };
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
        let _ = stderr.flush();
    }
}

/// Machine-readable: one JSON object per line.
pub struct JsonProgress;

impl ProgressReporter for JsonProgress {
    fn report(&self, event: AnalyzeEvent) {
        let obj = match &event {
            AnalyzeEvent::Discovering { root } => serde_json::json!({
                "event": "progress",
                "phase": "discovering",
                "root": root
            }),
            AnalyzeEvent::Analyzed { document, n, total } => serde_json::json!({
                "event": "progress",
                "phase": "analyzed",
                "document": document,
                "n": n,
                "total": total
            }),
            AnalyzeEvent::Skipped { document, reason } => serde_json::json!({
                "event": "progress",
                "phase": "skipped",
                "document": document,
                "reason": reason
            }),
        };
        if let Ok(line) = serde_json::to_string(&obj) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "{}", line);
            let _ = stderr.flush();
        }
    }
}

/// No-op reporter when progress is disabled.
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _event: AnalyzeEvent) {}
}

/// Progress mode selected on the CLI: off, human, or JSON.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProgressMode {
    Off,
    Human,
    Json,
}

impl ProgressMode {
    /// Default: human progress when stderr is a TTY, otherwise off.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stderr) {
            ProgressMode::Human
        } else {
            ProgressMode::Off
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "off" => Some(ProgressMode::Off),
            "human" => Some(ProgressMode::Human),
            "json" => Some(ProgressMode::Json),
            _ => None,
        }
    }

    pub fn reporter(&self) -> Box<dyn ProgressReporter> {
        match self {
            ProgressMode::Off => Box::new(NoProgress),
            ProgressMode::Human => Box::new(StderrProgress),
            ProgressMode::Json => Box::new(JsonProgress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_known_values() {
        assert_eq!(ProgressMode::parse("off"), Some(ProgressMode::Off));
        assert_eq!(ProgressMode::parse("human"), Some(ProgressMode::Human));
        assert_eq!(ProgressMode::parse("json"), Some(ProgressMode::Json));
        assert_eq!(ProgressMode::parse("loud"), None);
    }
}
