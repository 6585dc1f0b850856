use serde_json::Value;

use crate::constants::{ROOT_PATH_LABEL, VALIDATION_ERROR_FALLBACK};

/// A normalized description of one validation problem, local or remote.
///
/// `path` and `message` are always present; fields missing from the source
/// payload are defaulted during normalization. `line` is 1-based;
/// `is_global` is true exactly when the issue has no anchorable line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationIssue {
    /// JSON pointer into the data document, or a root/buffer label
    pub path: String,
    /// Human-readable description of the problem
    pub message: String,
    /// 1-based line in the data document, when the remote service anchored the issue
    pub line: Option<u32>,
    /// True iff the issue cannot be anchored to a source position
    pub is_global: bool,
}

impl ValidationIssue {
    /// Creates an issue with no source position
    pub fn global(path: &str, message: &str) -> Self {
        ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            line: None,
            is_global: true,
        }
    }

    /// Creates an issue anchored to a 1-based line
    pub fn anchored(path: &str, message: &str, line: u32) -> Self {
        ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            line: Some(line),
            is_global: false,
        }
    }

    /// Normalizes one raw remote issue record into a canonical issue.
    ///
    /// The raw record is loosely shaped: any field may be absent or carry the
    /// wrong type. This conversion is total; bad fields degrade to fallbacks
    /// rather than failing.
    ///
    /// # Arguments
    /// * `record` - One element of the remote `errors` payload
    ///
    /// # Returns
    /// * `ValidationIssue` - The normalized issue, with the zero-based remote
    ///   line converted to 1-based
    pub fn from_raw(record: &Value) -> Self {
        let path = match record.get("path").and_then(Value::as_str) {
            Some(p) if !p.is_empty() && p != "/" => p.to_string(),
            _ => ROOT_PATH_LABEL.to_string(),
        };

        let message = record
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(VALIDATION_ERROR_FALLBACK)
            .to_string();

        let line = record
            .get("line")
            .and_then(Value::as_u64)
            .and_then(|zero_based| zero_based.checked_add(1))
            .and_then(|one_based| u32::try_from(one_based).ok());

        ValidationIssue {
            path,
            message,
            is_global: line.is_none(),
            line,
        }
    }
}
