/// Fallback message when a buffer fails to parse and the parser gives no diagnostic
pub const INVALID_JSON_FALLBACK: &str = "Invalid JSON";

/// Fallback message for a transport failure with no underlying cause message
pub const NETWORK_ERROR_FALLBACK: &str = "Network error";

/// Fallback message for a remote issue record that carries no message
pub const VALIDATION_ERROR_FALLBACK: &str = "Validation error";

/// Message for an invalid response whose `errors` payload is absent or not a list
pub const UNKNOWN_VALIDATION_ERROR: &str = "Unknown validation error";

/// Label used in place of an empty or root-sentinel issue path
pub const ROOT_PATH_LABEL: &str = "(document root)";

/// Default remote validation endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/validate";

/// Default bound on the remote call, resolved as a transport failure when exceeded
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest response body excerpt included in a protocol failure banner
pub const MAX_BODY_EXCERPT_CHARS: usize = 200;
