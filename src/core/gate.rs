use crate::constants::INVALID_JSON_FALLBACK;
use crate::core::{BufferKind, TextBuffer, ValidationIssue};

/// Pre-flight syntactic check run before any remote call.
///
/// Both buffers are checked independently so the user sees every local
/// problem at once; there is no short-circuit between the two. Pure function
/// of the buffer contents.
///
/// # Arguments
/// * `schema` - The schema buffer
/// * `data` - The data buffer
///
/// # Returns
/// * `Vec<ValidationIssue>` - Empty iff both buffers are non-empty and
///   independently parseable as JSON
pub fn check_buffers(schema: &TextBuffer, data: &TextBuffer) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_one(BufferKind::Schema, schema, &mut issues);
    check_one(BufferKind::Data, data, &mut issues);
    issues
}

fn check_one(kind: BufferKind, buffer: &TextBuffer, issues: &mut Vec<ValidationIssue>) {
    if buffer.is_blank() {
        issues.push(ValidationIssue::global(
            kind.label(),
            &format!("The {} document is empty", kind.label()),
        ));
        return;
    }

    if let Err(parse_error) = serde_json::from_str::<serde_json::Value>(&buffer.content) {
        let diagnostic = parse_error.to_string();
        let message = if diagnostic.is_empty() {
            INVALID_JSON_FALLBACK.to_string()
        } else {
            diagnostic
        };
        issues.push(ValidationIssue::global(kind.label(), &message));
    }
}
