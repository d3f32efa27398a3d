//! Shared application state for request handlers.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tera::Tera;

use crate::auth::PasswordVerifier;
use crate::config::AppConfig;

/// The two-valued service flag.
///
/// There is deliberately no "set to value" operation anywhere in the crate;
/// the only mutation is [`Status::toggled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    /// The complement of this status.
    pub fn toggled(self) -> Self {
        match self {
            Status::Active => Status::Inactive,
            Status::Inactive => Status::Active,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration, Tera template engine, the password
/// verifier, and the mutable service flag. The flag is owned here and injected
/// into handlers through axum's `State` extractor rather than living in a
/// process-wide global.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub verifier: Arc<PasswordVerifier>,
    status: Arc<Mutex<Status>>,
}

impl AppState {
    /// Creates a new application state. The flag starts out `inactive`.
    pub fn new(config: AppConfig, tera: Tera, verifier: PasswordVerifier) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            verifier: Arc::new(verifier),
            status: Arc::new(Mutex::new(Status::Inactive)),
        }
    }

    /// Current value of the service flag.
    pub fn status(&self) -> Status {
        *self.status.lock().expect("status lock poisoned")
    }

    /// Flip the flag to its complement and return the new value.
    pub fn toggle_status(&self) -> Status {
        let mut status = self.status.lock().expect("status lock poisoned");
        *status = status.toggled();
        *status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        let verifier = PasswordVerifier::new(bcrypt::hash("pw", 4).unwrap()).unwrap();
        AppState::new(AppConfig::default(), Tera::default(), verifier)
    }

    #[test]
    fn status_starts_inactive() {
        assert_eq!(test_state().status(), Status::Inactive);
    }

    #[test]
    fn toggle_returns_complement() {
        let state = test_state();
        assert_eq!(state.toggle_status(), Status::Active);
        assert_eq!(state.toggle_status(), Status::Inactive);
    }

    #[test]
    fn toggle_parity_matches_count() {
        let state = test_state();
        for n in 1..=7 {
            let status = state.toggle_status();
            let expected = if n % 2 == 0 {
                Status::Inactive
            } else {
                Status::Active
            };
            assert_eq!(status, expected);
            assert_eq!(state.status(), expected);
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Status::Inactive).unwrap(),
            "\"inactive\""
        );
        assert_eq!(serde_json::to_string(&Status::Active).unwrap(), "\"active\"");
    }
}
