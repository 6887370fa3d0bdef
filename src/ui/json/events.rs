//! Shared JSON event types for consistent CLI output.
//!
//! Every command writes `start`, then its data events, then `complete`.
//! Fatal errors replace `complete` with `fatal`.

use serde::Serialize;

use shapesync::config::ConfigWarning;
use shapesync::domain::value_objects::{Discrepancy, Severity};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// One finding of a checked pair.
#[derive(Debug, Clone, Serialize)]
pub struct DiscrepancyEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub pair: &'a str,
    pub severity: Severity,
    #[serde(flatten)]
    pub discrepancy: &'a Discrepancy,
}

impl<'a> DiscrepancyEvent<'a> {
    pub fn new(command: &'a str, pair: &'a str, discrepancy: &'a Discrepancy) -> Self {
        Self {
            event: "discrepancy",
            command,
            pair,
            severity: discrepancy.severity(),
            discrepancy,
        }
    }
}

/// Per-pair totals, emitted after the pair's discrepancies.
#[derive(Debug, Clone, Serialize)]
pub struct PairEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub pair: &'a str,
    pub success: bool,
    pub types_checked: usize,
    pub discrepancies: usize,
}

impl<'a> PairEvent<'a> {
    pub fn new(command: &'a str, pair: &'a str) -> Self {
        Self {
            event: "pair",
            command,
            pair,
            success: true,
            types_checked: 0,
            discrepancies: 0,
        }
    }

    pub fn with_counts(mut self, types_checked: usize, discrepancies: usize) -> Self {
        self.types_checked = types_checked;
        self.discrepancies = discrepancies;
        self.success = discrepancies == 0;
        self
    }
}

/// Unknown config key or similar non-fatal problem.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            message: message.into(),
            file: None,
            line: None,
        }
    }

    pub fn from_config(command: &'a str, warning: &ConfigWarning) -> Self {
        let mut message = format!("unknown config key '{}'", warning.key);
        if let Some(suggestion) = &warning.suggestion {
            message.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }
        Self {
            file: Some(warning.file.display().to_string()),
            line: warning.line,
            ..Self::new(command, message)
        }
    }
}

/// Wrapper for data events that includes command context.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "data",
            command,
            data,
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types_checked: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discrepancies: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(command: &'a str, success: bool) -> Self {
        Self {
            event: "complete",
            command,
            success,
            types_checked: None,
            discrepancies: None,
            duration_ms: None,
        }
    }

    pub fn with_counts(mut self, types_checked: usize, discrepancies: usize) -> Self {
        self.types_checked = Some(types_checked);
        self.discrepancies = Some(discrepancies);
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when a command aborts. Exit status is 2.
#[derive(Debug, Clone, Serialize)]
pub struct FatalEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'static str,
    pub message: String,
}

impl<'a> FatalEvent<'a> {
    pub fn new(command: &'a str, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            event: "fatal",
            command,
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn start_event_serializes_correctly() {
        let event = StartEvent::new("check");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "start");
        assert_eq!(json["command"], "check");
        assert!(json["version"].is_string());
    }

    #[test]
    fn discrepancy_event_flattens_finding() {
        let d = Discrepancy::missing_field("Event", "EventModel", "description", "description");
        let event = DiscrepancyEvent::new("check", "events", &d);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "discrepancy");
        assert_eq!(json["pair"], "events");
        assert_eq!(json["kind"], "missing-field");
        assert_eq!(json["type_name"], "Event");
        assert_eq!(json["field_name"], "description");
        assert_eq!(json["severity"], "hard");
        assert!(json.get("order").is_none());
    }

    #[test]
    fn order_mismatch_event_carries_orders() {
        let d = Discrepancy::order_mismatch(
            "Event",
            "EventModel",
            "title",
            &["title", "date"],
            &["date", "title"],
        );
        let json = serde_json::to_value(DiscrepancyEvent::new("check", "cli", &d)).unwrap();

        assert_eq!(json["order"]["expected"][0], "title");
        assert_eq!(json["order"]["actual"][0], "date");
    }

    #[test]
    fn pair_event_success_follows_counts() {
        let event = PairEvent::new("check", "events").with_counts(3, 2);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["types_checked"], 3);
        assert_eq!(json["discrepancies"], 2);
    }

    #[test]
    fn complete_event_omits_unset_counts() {
        let json = serde_json::to_value(CompleteEvent::new("parse", true)).unwrap();

        assert_eq!(json["event"], "complete");
        assert_eq!(json["success"], true);
        assert!(json.get("discrepancies").is_none());
        assert!(json.get("duration_ms").is_none());
    }

    #[test]
    fn complete_event_with_duration_serializes_correctly() {
        let event = CompleteEvent::new("check", false)
            .with_counts(4, 1)
            .with_duration(12);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["duration_ms"], 12);
        assert_eq!(json["discrepancies"], 1);
    }

    #[test]
    fn warning_event_from_config_warning() {
        let warning = ConfigWarning {
            key: "check.backend_orphan".to_string(),
            file: PathBuf::from(".shapesync.toml"),
            line: Some(2),
            suggestion: Some("backend_orphans".to_string()),
        };
        let json = serde_json::to_value(WarningEvent::from_config("check", &warning)).unwrap();

        assert_eq!(json["event"], "warning");
        assert_eq!(json["line"], 2);
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("did you mean 'backend_orphans'"));
    }

    #[test]
    fn plain_warning_omits_location() {
        let json = serde_json::to_value(WarningEvent::new("check", "careful")).unwrap();

        assert_eq!(json["event"], "warning");
        assert_eq!(json["message"], "careful");
        assert!(json.get("file").is_none());
        assert!(json.get("line").is_none());
    }

    #[test]
    fn fatal_event_serializes_correctly() {
        let json =
            serde_json::to_value(FatalEvent::new("check", "CYCLIC_INHERITANCE", "cycle")).unwrap();

        assert_eq!(json["event"], "fatal");
        assert_eq!(json["code"], "CYCLIC_INHERITANCE");
        assert_eq!(json["message"], "cycle");
    }
}
