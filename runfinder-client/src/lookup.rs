//! Lookup outcome

use crate::error::ClientError;

/// Outcome of a single resolution step
///
/// Keeps apart the three ways a lookup can end. `found()` collapses it to the
/// plain optional value when the caller does not care why nothing came back.
#[derive(Debug)]
pub enum Lookup<T> {
    /// The service answered and the value was there
    Found(T),
    /// The service answered but nothing matched
    NotFound,
    /// The lookup was rejected or the request did not succeed
    Failed(ClientError),
}

impl<T> Lookup<T> {
    /// Collapse into the found value, dropping the failure reason
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound | Lookup::Failed(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound)
    }

    /// The failure reason, if the lookup failed
    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Lookup::Failed(error) => Some(error),
            Lookup::Found(_) | Lookup::NotFound => None,
        }
    }

    /// Transform the found value, keeping the other outcomes
    pub fn map<U, F>(self, f: F) -> Lookup<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
            Lookup::Failed(error) => Lookup::Failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_collapses_to_some() {
        let lookup = Lookup::Found("1".to_string());
        assert!(lookup.is_found());
        assert_eq!(lookup.found(), Some("1".to_string()));
    }

    #[test]
    fn test_not_found_and_failed_collapse_to_none() {
        assert_eq!(Lookup::<String>::NotFound.found(), None);

        let failed: Lookup<String> = Lookup::Failed(ClientError::api_error(500, "boom"));
        assert!(failed.error().is_some_and(ClientError::is_server_error));
        assert_eq!(failed.found(), None);
    }

    #[test]
    fn test_map_keeps_outcome_kind() {
        let mapped = Lookup::Found(2).map(|n| n * 10);
        assert!(matches!(mapped, Lookup::Found(20)));

        let missing: Lookup<i32> = Lookup::NotFound;
        assert!(missing.map(|n| n + 1).is_not_found());
    }
}
