use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::Error;

/// A file dropped onto one of the input surfaces
#[derive(Debug, Clone)]
pub struct DroppedFile {
    /// File name as reported by the drop source
    pub name: String,
    /// Media type, when the drop source provides one
    pub media_type: Option<String>,
    /// File contents read as text
    pub contents: String,
}

/// Decides whether a dropped file may replace a buffer wholesale.
///
/// Only files with media type "application/json" or a ".json" name suffix are
/// accepted; anything else is ignored silently.
///
/// # Arguments
/// * `file` - The dropped file
///
/// # Returns
/// * `Some(&str)` - The replacement text when the file is accepted
/// * `None` - When the file type is not recognized
pub fn accept_drop(file: &DroppedFile) -> Option<&str> {
    let is_json_media = file
        .media_type
        .as_deref()
        .is_some_and(|media| media == "application/json");
    let is_json_name = file.name.to_lowercase().ends_with(".json");

    if is_json_media || is_json_name {
        Some(&file.contents)
    } else {
        debug!("Ignoring dropped file '{}': not JSON", file.name);
        None
    }
}

/// Reads a document from disk for loading into a buffer
///
/// # Arguments
/// * `path` - Path to the document
///
/// # Returns
/// * `Result<String, Error>` - File contents, or an I/O error
pub fn read_document(path: &Path) -> Result<String, Error> {
    Ok(fs::read_to_string(path)?)
}
