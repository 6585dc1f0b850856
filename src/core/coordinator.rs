use tracing::{debug, warn};

use crate::constants::{
    MAX_BODY_EXCERPT_CHARS, NETWORK_ERROR_FALLBACK, ROOT_PATH_LABEL, UNKNOWN_VALIDATION_ERROR,
};
use crate::core::{RequestState, ValidationIssue};
use crate::remote::ValidateResponse;

/// Raw outcome of one remote validation call, before interpretation
#[derive(Debug, Clone)]
pub enum RemoteOutcome {
    /// A well-formed response was obtained
    Response(ValidateResponse),
    /// A response arrived with a non-success status code
    Protocol { status: u16, body: String },
    /// No response was obtained
    Transport(String),
}

/// Final, user-facing result of one validation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReport {
    /// The local gate rejected the buffers; nothing was sent
    Input(Vec<ValidationIssue>),
    /// The remote call failed; banner message, no per-issue reporting
    Unreachable(String),
    /// The remote service answered with a validation verdict
    Checked {
        valid: bool,
        issues: Vec<ValidationIssue>,
    },
}

/// Witness that a `begin` issued this attempt.
///
/// Completing with a ticket from a superseded attempt has no effect, which
/// gives last-writer-wins by issuance order.
#[derive(Debug)]
pub struct Ticket {
    generation: u64,
}

/// Owns the request lifecycle state machine for the validation session.
///
/// Transitions: `Idle --begin--> Validating`, then `--complete--> Succeeded`
/// on an interpretable response or `Failed` on a transport/protocol failure.
/// Both terminal states re-enter `Validating` through the next `begin`.
/// State, issue list and reachable flag are updated in one step per attempt.
#[derive(Debug)]
pub struct ValidationRequestCoordinator {
    state: RequestState,
    generation: u64,
    issues: Vec<ValidationIssue>,
    remote_reachable: bool,
}

impl Default for ValidationRequestCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRequestCoordinator {
    pub fn new() -> Self {
        ValidationRequestCoordinator {
            state: RequestState::Idle,
            generation: 0,
            issues: Vec::new(),
            remote_reachable: false,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Issue list from the most recently completed attempt
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// True when the last completed attempt obtained a response from the
    /// remote service. Distinct from "valid": an unreachable service must
    /// never be rendered as a passing validation.
    pub fn remote_reachable(&self) -> bool {
        self.remote_reachable
    }

    /// Starts a validation attempt and hands out its ticket.
    ///
    /// Calling `begin` while `Validating` supersedes the in-flight attempt:
    /// its ticket goes stale and its eventual completion is discarded.
    pub fn begin(&mut self) -> Ticket {
        if self.state == RequestState::Validating {
            warn!(
                "Superseding in-flight validation attempt {}",
                self.generation
            );
        }
        self.generation += 1;
        self.state = RequestState::Validating;
        Ticket {
            generation: self.generation,
        }
    }

    /// Applies a remote outcome for the given ticket.
    ///
    /// # Arguments
    /// * `ticket` - Ticket returned by the `begin` that issued the request
    /// * `outcome` - Raw result of the remote call
    ///
    /// # Returns
    /// * `Some(ValidationReport)` when the ticket is current and the outcome
    ///   was applied
    /// * `None` when the ticket was superseded and the outcome discarded
    pub fn complete(&mut self, ticket: Ticket, outcome: RemoteOutcome) -> Option<ValidationReport> {
        if ticket.generation != self.generation {
            debug!(
                "Discarding outcome for superseded attempt {} (current {})",
                ticket.generation, self.generation
            );
            return None;
        }

        let report = match outcome {
            RemoteOutcome::Transport(cause) => {
                self.state = RequestState::Failed;
                self.remote_reachable = false;
                self.issues = Vec::new();
                let banner = if cause.is_empty() {
                    NETWORK_ERROR_FALLBACK.to_string()
                } else {
                    cause
                };
                ValidationReport::Unreachable(banner)
            }
            RemoteOutcome::Protocol { status, body } => {
                self.state = RequestState::Failed;
                self.remote_reachable = true;
                self.issues = Vec::new();
                ValidationReport::Unreachable(format!(
                    "Validation service returned HTTP {}: {}",
                    status,
                    excerpt(&body)
                ))
            }
            RemoteOutcome::Response(response) => {
                self.state = RequestState::Succeeded;
                self.remote_reachable = true;
                self.issues = interpret_response(&response);
                ValidationReport::Checked {
                    valid: response.valid,
                    issues: self.issues.clone(),
                }
            }
        };

        Some(report)
    }
}

/// Interprets the `errors` payload of a well-formed response.
///
/// A `valid: true` verdict forces an empty list regardless of any payload.
/// An invalid verdict without a proper error list degrades to one synthetic
/// non-anchored issue rather than being dropped silently.
fn interpret_response(response: &ValidateResponse) -> Vec<ValidationIssue> {
    if response.valid {
        return Vec::new();
    }

    match &response.errors {
        Some(serde_json::Value::Array(records)) => {
            records.iter().map(ValidationIssue::from_raw).collect()
        }
        _ => vec![ValidationIssue::global(
            ROOT_PATH_LABEL,
            UNKNOWN_VALIDATION_ERROR,
        )],
    }
}

fn excerpt(body: &str) -> String {
    if body.chars().count() <= MAX_BODY_EXCERPT_CHARS {
        body.to_string()
    } else {
        body.chars().take(MAX_BODY_EXCERPT_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(valid: bool, errors: Option<serde_json::Value>) -> ValidateResponse {
        ValidateResponse { valid, errors }
    }

    #[test]
    fn begin_enters_validating() {
        let mut coordinator = ValidationRequestCoordinator::new();
        assert_eq!(coordinator.state(), RequestState::Idle);
        let _ticket = coordinator.begin();
        assert_eq!(coordinator.state(), RequestState::Validating);
    }

    #[test]
    fn valid_response_succeeds_with_no_issues() {
        let mut coordinator = ValidationRequestCoordinator::new();
        let ticket = coordinator.begin();
        let report = coordinator
            .complete(ticket, RemoteOutcome::Response(response(true, None)))
            .unwrap();
        assert_eq!(coordinator.state(), RequestState::Succeeded);
        assert!(coordinator.remote_reachable());
        assert_eq!(
            report,
            ValidationReport::Checked {
                valid: true,
                issues: vec![]
            }
        );
    }

    #[test]
    fn valid_true_forces_empty_issues_despite_errors_payload() {
        let mut coordinator = ValidationRequestCoordinator::new();
        let ticket = coordinator.begin();
        let errors = json!([{"path": "/x", "message": "ignored"}]);
        let report = coordinator
            .complete(ticket, RemoteOutcome::Response(response(true, Some(errors))))
            .unwrap();
        assert_eq!(
            report,
            ValidationReport::Checked {
                valid: true,
                issues: vec![]
            }
        );
    }

    #[test]
    fn invalid_response_normalizes_each_record() {
        let mut coordinator = ValidationRequestCoordinator::new();
        let ticket = coordinator.begin();
        let errors = json!([{"path": "/age", "message": "must be >= 18", "line": 3}]);
        let report = coordinator
            .complete(
                ticket,
                RemoteOutcome::Response(response(false, Some(errors))),
            )
            .unwrap();
        match report {
            ValidationReport::Checked { valid, issues } => {
                assert!(!valid);
                assert_eq!(
                    issues,
                    vec![ValidationIssue::anchored("/age", "must be >= 18", 4)]
                );
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn invalid_without_a_proper_error_list_yields_one_synthetic_issue() {
        for errors in [None, Some(json!("not a list")), Some(json!({"a": 1}))] {
            let mut coordinator = ValidationRequestCoordinator::new();
            let ticket = coordinator.begin();
            let report = coordinator
                .complete(ticket, RemoteOutcome::Response(response(false, errors)))
                .unwrap();
            match report {
                ValidationReport::Checked { issues, .. } => {
                    assert_eq!(issues.len(), 1);
                    assert!(issues[0].is_global);
                    assert_eq!(issues[0].message, UNKNOWN_VALIDATION_ERROR);
                }
                other => panic!("unexpected report: {:?}", other),
            }
        }
    }

    #[test]
    fn protocol_failure_keeps_status_and_body_in_the_banner() {
        let mut coordinator = ValidationRequestCoordinator::new();
        let ticket = coordinator.begin();
        let report = coordinator
            .complete(
                ticket,
                RemoteOutcome::Protocol {
                    status: 500,
                    body: "server error".to_string(),
                },
            )
            .unwrap();
        assert_eq!(coordinator.state(), RequestState::Failed);
        assert!(coordinator.issues().is_empty());
        match report {
            ValidationReport::Unreachable(banner) => {
                assert!(banner.contains("500"));
                assert!(banner.contains("server error"));
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn transport_failure_falls_back_to_the_fixed_message() {
        let mut coordinator = ValidationRequestCoordinator::new();
        let ticket = coordinator.begin();
        let report = coordinator
            .complete(ticket, RemoteOutcome::Transport(String::new()))
            .unwrap();
        assert_eq!(coordinator.state(), RequestState::Failed);
        assert!(!coordinator.remote_reachable());
        assert_eq!(
            report,
            ValidationReport::Unreachable(NETWORK_ERROR_FALLBACK.to_string())
        );
    }

    #[test]
    fn superseded_ticket_is_discarded() {
        let mut coordinator = ValidationRequestCoordinator::new();
        let first = coordinator.begin();
        let second = coordinator.begin();

        let stale = coordinator.complete(first, RemoteOutcome::Response(response(true, None)));
        assert!(stale.is_none());
        assert_eq!(coordinator.state(), RequestState::Validating);

        let errors = json!([{"path": "/a", "message": "bad"}]);
        let current = coordinator.complete(
            second,
            RemoteOutcome::Response(response(false, Some(errors))),
        );
        assert!(current.is_some());
        assert_eq!(coordinator.state(), RequestState::Succeeded);
        assert_eq!(coordinator.issues().len(), 1);
    }

    #[test]
    fn terminal_states_reenter_validating_on_begin() {
        let mut coordinator = ValidationRequestCoordinator::new();
        let ticket = coordinator.begin();
        coordinator.complete(ticket, RemoteOutcome::Transport("down".to_string()));
        assert_eq!(coordinator.state(), RequestState::Failed);

        let _next = coordinator.begin();
        assert_eq!(coordinator.state(), RequestState::Validating);
    }
}
