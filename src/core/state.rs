use std::str::FromStr;

/// Represents the lifecycle of the single in-flight validation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// No validation attempt is in progress
    Idle,
    /// A remote request has been issued and no outcome has arrived yet
    Validating,
    /// The last attempt produced an interpretable response
    Succeeded,
    /// The last attempt ended in a transport or protocol failure
    Failed,
}

#[allow(clippy::to_string_trait_impl)]
impl ToString for RequestState {
    /// Converts the RequestState enum to its string representation
    fn to_string(&self) -> String {
        match self {
            RequestState::Idle => "Idle".to_string(),
            RequestState::Validating => "Validating".to_string(),
            RequestState::Succeeded => "Succeeded".to_string(),
            RequestState::Failed => "Failed".to_string(),
        }
    }
}

impl FromStr for RequestState {
    type Err = ();

    /// Attempts to create a RequestState from a string representation
    ///
    /// # Arguments
    /// * `s` - String slice containing the state name
    ///
    /// # Returns
    /// * `Ok(RequestState)` if the string matches a valid state
    /// * `Err(())` if the string does not match any valid state
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Idle" => Ok(RequestState::Idle),
            "Validating" => Ok(RequestState::Validating),
            "Succeeded" => Ok(RequestState::Succeeded),
            "Failed" => Ok(RequestState::Failed),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for state in [
            RequestState::Idle,
            RequestState::Validating,
            RequestState::Succeeded,
            RequestState::Failed,
        ] {
            assert_eq!(state.to_string().parse::<RequestState>(), Ok(state));
        }
        assert!("Running".parse::<RequestState>().is_err());
    }
}
