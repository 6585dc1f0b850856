use crate::core::ValidationIssue;

/// Marker severity on the presentation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

/// A positional marker on the data buffer's presentation surface.
///
/// Derived, never persisted: regenerated from the current issue list after
/// every completed attempt and destroyed the instant the buffer changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// 1-based line the marker is anchored to
    pub line: u32,
    /// Always 1; markers span the whole line
    pub column_start: u32,
    /// Last column of the anchored line in the current buffer content
    pub column_end: u32,
    pub message: String,
    pub severity: Severity,
}

/// Narrow interface to whatever widget renders the data surface.
///
/// The orchestrator only ever replaces the full marker set or clears it;
/// incremental repositioning is deliberately not part of the contract.
pub trait MarkerSurface: std::fmt::Debug {
    /// Replaces all markers for the surface
    fn apply(&mut self, annotations: &[Annotation]);
    /// Removes every marker from the surface
    fn clear(&mut self);
}

/// Surface that records markers in memory, for headless fronts and tests
#[derive(Debug, Default)]
pub struct InMemorySurface {
    pub annotations: Vec<Annotation>,
}

impl MarkerSurface for InMemorySurface {
    fn apply(&mut self, annotations: &[Annotation]) {
        self.annotations = annotations.to_vec();
    }

    fn clear(&mut self) {
        self.annotations.clear();
    }
}

/// Projects issues onto annotations against the current data buffer content.
///
/// One annotation per issue whose line resolves inside the buffer; global
/// issues and lines past the end of the buffer stay in the textual list but
/// produce no marker.
///
/// # Arguments
/// * `issues` - The latest normalized issue list
/// * `data` - Current content of the data buffer
///
/// # Returns
/// * `Vec<Annotation>` - Markers anchored column 1 through end-of-line
pub fn project(issues: &[ValidationIssue], data: &str) -> Vec<Annotation> {
    let lines: Vec<&str> = data.lines().collect();

    issues
        .iter()
        .filter_map(|issue| {
            let line = issue.line?;
            let text = lines.get((line as usize).checked_sub(1)?)?;
            let column_end = (text.chars().count() as u32).max(1);
            Some(Annotation {
                line,
                column_start: 1,
                column_end,
                message: issue.message.clone(),
                severity: Severity::Error,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_issue_spans_the_whole_line() {
        let data = "{\n  \"age\": 12,\n  \"name\": 0\n}";
        let issues = vec![ValidationIssue::anchored("/age", "must be >= 18", 2)];
        let annotations = project(&issues, data);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].line, 2);
        assert_eq!(annotations[0].column_start, 1);
        assert_eq!(annotations[0].column_end, "  \"age\": 12,".chars().count() as u32);
        assert_eq!(annotations[0].message, "must be >= 18");
        assert_eq!(annotations[0].severity, Severity::Error);
    }

    #[test]
    fn global_issues_produce_no_marker() {
        let issues = vec![ValidationIssue::global("/name", "should be string")];
        assert!(project(&issues, "{}").is_empty());
    }

    #[test]
    fn lines_past_the_buffer_end_produce_no_marker() {
        let issues = vec![ValidationIssue::anchored("/x", "bad", 40)];
        assert!(project(&issues, "{}\n").is_empty());
    }

    #[test]
    fn empty_lines_still_get_a_one_column_marker() {
        let issues = vec![ValidationIssue::anchored("/x", "bad", 2)];
        let annotations = project(&issues, "{\n\n}");
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].column_end, 1);
    }

    #[test]
    fn apply_replaces_rather_than_accumulates() {
        let mut surface = InMemorySurface::default();
        let first = project(
            &[ValidationIssue::anchored("/a", "one", 1)],
            "{\"a\": 1}",
        );
        let second = project(
            &[ValidationIssue::anchored("/b", "two", 1)],
            "{\"b\": 2}",
        );

        surface.apply(&first);
        surface.apply(&second);
        assert_eq!(surface.annotations.len(), 1);
        assert_eq!(surface.annotations[0].message, "two");

        surface.clear();
        assert!(surface.annotations.is_empty());
    }
}
