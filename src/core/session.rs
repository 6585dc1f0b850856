use tracing::{debug, info};

use crate::core::{
    annotate, gate, BufferKind, MarkerSurface, RemoteOutcome, RequestState, TextBuffer,
    ValidationReport, ValidationRequestCoordinator,
};
use crate::errors::Error;
use crate::event::Command;
use crate::remote::{RemoteValidator, ValidateRequest};

/// Owns the two buffers, the request coordinator, the marker surface and the
/// remote client, and drives them through dispatched commands.
///
/// One validation attempt runs the local gate first; only a clean gate
/// reaches the remote collaborator. The raw buffer text goes on the wire for
/// both documents so remote positions refer to exactly what the user typed.
pub struct ValidationSession {
    schema: TextBuffer,
    data: TextBuffer,
    coordinator: ValidationRequestCoordinator,
    surface: Box<dyn MarkerSurface>,
    client: Box<dyn RemoteValidator>,
}

impl ValidationSession {
    /// Creates a session with empty buffers
    ///
    /// # Arguments
    /// * `client` - Remote validation collaborator
    /// * `surface` - Marker surface backing the data buffer's presentation
    pub fn new(client: Box<dyn RemoteValidator>, surface: Box<dyn MarkerSurface>) -> Self {
        ValidationSession {
            schema: TextBuffer::default(),
            data: TextBuffer::default(),
            coordinator: ValidationRequestCoordinator::new(),
            surface,
            client,
        }
    }

    pub fn schema_text(&self) -> &str {
        &self.schema.content
    }

    pub fn data_text(&self) -> &str {
        &self.data.content
    }

    pub fn state(&self) -> RequestState {
        self.coordinator.state()
    }

    /// Handles one user-facing command.
    ///
    /// Edits to the data buffer clear all markers immediately, before any
    /// further validation: line numbers may no longer correspond to the
    /// edited content. `Validate` is ignored while an attempt is in flight.
    ///
    /// # Arguments
    /// * `command` - The command to handle
    ///
    /// # Returns
    /// * `Ok(Some(ValidationReport))` - When the command completed a
    ///   validation attempt
    /// * `Ok(None)` - For buffer commands and ignored triggers
    pub async fn dispatch(&mut self, command: Command) -> Result<Option<ValidationReport>, Error> {
        match command {
            Command::SchemaEdited(text) => {
                self.schema.replace(text);
                Ok(None)
            }
            Command::DataEdited(text) => {
                self.data.replace(text);
                self.surface.clear();
                Ok(None)
            }
            Command::FileDropped(kind, file) => {
                if let Some(contents) = crate::core::accept_drop(&file) {
                    let contents = contents.to_string();
                    match kind {
                        BufferKind::Schema => self.schema.replace(contents),
                        BufferKind::Data => {
                            self.data.replace(contents);
                            self.surface.clear();
                        }
                    }
                    info!("Loaded dropped file '{}' into the {} buffer", file.name, kind.label());
                }
                Ok(None)
            }
            Command::Validate => {
                if self.coordinator.state() == RequestState::Validating {
                    debug!("Validate ignored: an attempt is already in flight");
                    return Ok(None);
                }
                self.validate().await.map(Some)
            }
        }
    }

    /// Runs one full validation attempt: gate, remote call, interpretation
    /// and annotation projection.
    async fn validate(&mut self) -> Result<ValidationReport, Error> {
        let gate_issues = gate::check_buffers(&self.schema, &self.data);
        if !gate_issues.is_empty() {
            info!("Local gate rejected input with {} issue(s)", gate_issues.len());
            self.surface.clear();
            return Ok(ValidationReport::Input(gate_issues));
        }

        let ticket = self.coordinator.begin();
        let request = ValidateRequest::from_raw_text(&self.schema.content, &self.data.content);

        let outcome = match self.client.validate(&request).await {
            Ok(response) => RemoteOutcome::Response(response),
            Err(Error::Protocol { status, body }) => RemoteOutcome::Protocol { status, body },
            Err(other) => RemoteOutcome::Transport(other.to_string()),
        };

        let report = self
            .coordinator
            .complete(ticket, outcome)
            .ok_or_else(|| Error::Transport("Validation attempt superseded".to_string()))?;

        self.surface.clear();
        if let ValidationReport::Checked { issues, .. } = &report {
            let annotations = annotate::project(issues, &self.data.content);
            self.surface.apply(&annotations);
        }

        Ok(report)
    }
}

impl std::fmt::Debug for ValidationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationSession")
            .field("state", &self.coordinator.state())
            .finish()
    }
}
