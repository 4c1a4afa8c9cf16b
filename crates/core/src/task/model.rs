//! Task model definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Task priority level
///
/// Variant order is the sort rank: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    /// The keyword used in the storage format
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a storage-format keyword
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new task with the given text
    ///
    /// No validation happens here; the store validates before insertion.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            due_date: None,
            priority: Priority::default(),
            completed: false,
        }
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the completed flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Parse one storage record
    ///
    /// Missing `due_date`, `priority` and `completed` fall back to their
    /// defaults; a record without `text` is malformed.
    pub fn from_record(record: Value) -> Result<Self> {
        serde_json::from_value(record).map_err(|e| Error::MalformedRecord(e.to_string()))
    }
}

/// Check that a due date has the `YYYY-MM-DD` shape.
///
/// Shape only: exactly three dash-separated numeric segments of widths
/// 4, 2 and 2. Calendar validity is not checked, so `2024-99-99` passes.
pub fn is_valid_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let segments: Vec<&str> = value.split('-').collect();
    if segments.len() != 3 {
        return false;
    }
    if segments[0].len() != 4 || segments[1].len() != 2 || segments[2].len() != 2 {
        return false;
    }
    segments.iter().all(|s| s.parse::<u32>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_task() {
        let task = Task::new("Test task");
        assert_eq!(task.text, "Test task");
        assert!(task.due_date.is_none());
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
    }

    #[test]
    fn test_task_builders() {
        let task = Task::new("Test task")
            .with_due_date("2024-06-01")
            .with_priority(Priority::High)
            .with_completed(true);

        assert_eq!(task.due_date, Some("2024-06-01".to_string()));
        assert_eq!(task.priority, Priority::High);
        assert!(task.completed);
    }

    #[test]
    fn test_serialize_shape() {
        let task = Task::new("Test task");
        let value = serde_json::to_value(&task).unwrap();

        // Absent due date is written as an explicit null
        assert_eq!(value["due_date"], Value::Null);
        assert_eq!(value["priority"], json!("medium"));
        assert_eq!(value["completed"], json!(false));
    }

    #[test]
    fn test_record_round_trip() {
        let task = Task::new("Süt al")
            .with_due_date("2024-12-31")
            .with_priority(Priority::Low)
            .with_completed(true);

        let value = serde_json::to_value(&task).unwrap();
        let parsed = Task::from_record(value).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn test_from_record_defaults_missing_fields() {
        let task = Task::from_record(json!({ "text": "bare" })).unwrap();
        assert_eq!(task.text, "bare");
        assert!(task.due_date.is_none());
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
    }

    #[test]
    fn test_from_record_missing_text() {
        let result = Task::from_record(json!({ "priority": "high" }));
        match result {
            Err(Error::MalformedRecord(_)) => {}
            other => panic!("Expected MalformedRecord, got: {:?}", other),
        }
    }

    #[test]
    fn test_from_record_wrong_type() {
        let result = Task::from_record(json!({ "text": 42 }));
        assert!(matches!(result, Err(Error::MalformedRecord(_))));
    }

    #[test]
    fn test_priority_keywords() {
        assert_eq!(Priority::parse("high"), Some(Priority::High));
        assert_eq!(Priority::parse("HIGH"), None);
        assert_eq!(Priority::Low.as_str(), "low");
    }

    #[test]
    fn test_priority_rank() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }

    #[test]
    fn test_valid_date_shapes() {
        assert!(is_valid_date("2024-01-05"));
        // Shape check only, not a calendar check
        assert!(is_valid_date("2024-99-99"));
    }

    #[test]
    fn test_invalid_date_shapes() {
        // Wrong segment widths
        assert!(!is_valid_date("2024-1-5"));
        assert!(!is_valid_date("24-01-0005"));
        // Wrong length or separator count
        assert!(!is_valid_date("2024-01-5"));
        assert!(!is_valid_date("2024/01/05"));
        assert!(!is_valid_date("2024-01-05-"));
        // Non-numeric segments
        assert!(!is_valid_date("20a4-01-05"));
        assert!(!is_valid_date("2024-01-0x"));
        assert!(!is_valid_date(""));
    }
}
