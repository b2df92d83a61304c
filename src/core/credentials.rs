use crate::config::toml_config::CredentialsConfig;
use crate::domain::model::LoginOutcome;
use std::fmt;

/// Classroom demo pair. Not a security control; replace it via config.
pub const DEMO_USERNAME: &str = "Omkaar";
pub const DEMO_PASSWORD: &str = "1234";

/// Exact, case-sensitive comparison against one expected pair.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialCheck {
    username: String,
    password: String,
}

impl CredentialCheck {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Uses the configured pair, falling back to the demo pair with a warning.
    pub fn from_config(config: Option<&CredentialsConfig>) -> Self {
        match config {
            Some(credentials) => Self::new(&credentials.username, &credentials.password),
            None => {
                tracing::warn!(
                    "⚠️ No [credentials] configured, using the built-in demo login. Do not use it outside the classroom."
                );
                Self::default()
            }
        }
    }

    pub fn is_demo(&self) -> bool {
        self.username == DEMO_USERNAME && self.password == DEMO_PASSWORD
    }

    pub fn check(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }

    pub fn login(&self, username: &str, password: &str) -> LoginOutcome {
        if self.check(username, password) {
            tracing::info!("✅ Login accepted for '{}'", username);
            LoginOutcome::Granted
        } else {
            tracing::info!("❌ Login rejected for '{}'", username);
            LoginOutcome::Denied
        }
    }
}

impl Default for CredentialCheck {
    fn default() -> Self {
        Self::new(DEMO_USERNAME, DEMO_PASSWORD)
    }
}

impl fmt::Debug for CredentialCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialCheck")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
