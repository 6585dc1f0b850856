use crate::core::{BufferKind, DroppedFile};

/// Represents the commands a user interaction can dispatch into the session
#[derive(Debug, Clone)]
pub enum Command {
    /// The schema buffer was replaced with new text
    SchemaEdited(String),

    /// The data buffer was replaced with new text
    DataEdited(String),

    /// A file was dropped onto one of the buffers
    FileDropped(BufferKind, DroppedFile),

    /// The user triggered a validation run
    Validate,
}
