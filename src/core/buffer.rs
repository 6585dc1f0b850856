/// Identifies which of the two input surfaces a buffer backs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// The JSON Schema input
    Schema,
    /// The JSON data input
    Data,
}

impl BufferKind {
    /// Returns the label used when reporting issues against this buffer
    pub fn label(&self) -> &'static str {
        match self {
            BufferKind::Schema => "schema",
            BufferKind::Data => "data",
        }
    }
}

/// Raw text content backing one input surface.
///
/// Carries no validity invariant of its own: it may hold malformed text at
/// any time. Mutated only by user edits or wholesale programmatic loads.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    /// Current buffer content
    pub content: String,
}

impl TextBuffer {
    /// Creates a buffer holding the given text
    pub fn new(content: &str) -> Self {
        TextBuffer {
            content: content.to_string(),
        }
    }

    /// Replaces the buffer content wholesale
    pub fn replace(&mut self, content: String) {
        self.content = content;
    }

    /// True when the trimmed content has zero length
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_counts_as_blank() {
        assert!(TextBuffer::new("").is_blank());
        assert!(TextBuffer::new("  \n\t").is_blank());
        assert!(!TextBuffer::new("{}").is_blank());
    }

    #[test]
    fn replace_is_wholesale() {
        let mut buffer = TextBuffer::new("{\"a\": 1}");
        buffer.replace("[]".to_string());
        assert_eq!(buffer.content, "[]");
    }
}
