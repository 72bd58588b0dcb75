//! Explicit auth/session context.
//!
//! The session is built once at startup (from the environment or stored
//! config) and passed into whatever needs it. Nothing in the crate reads
//! auth state ambiently.

use crate::config::JotConfig;

pub const TOKEN_ENV_VAR: &str = "JOT_TOKEN";

/// Bearer-token session. Token issuance and validation are entirely the
/// backend's business; the client only carries the token around.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// No credentials. The home screen renders the lander for this.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Environment variable wins over the stored config token.
    pub fn from_config(config: &JotConfig) -> Self {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                return Self::with_token(token);
            }
        }
        match &config.token {
            Some(token) if !token.is_empty() => Self::with_token(token.clone()),
            _ => Self::anonymous(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_is_not_authenticated() {
        assert!(!Session::anonymous().is_authenticated());
    }

    #[test]
    fn token_session_is_authenticated() {
        let session = Session::with_token("abc");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));
    }

    #[test]
    fn empty_config_token_stays_anonymous() {
        let config = JotConfig {
            token: Some(String::new()),
            ..JotConfig::default()
        };
        assert!(!Session::from_config(&config).is_authenticated());
    }
}
