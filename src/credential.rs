//! AWS style credentials.

use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;

/// Credential that holds the access key and secret key.
#[derive(Default, Clone)]
pub struct Credential {
    access_key: String,
    secret_key: String,
    security_token: Option<String>,
}

impl Credential {
    /// Create a new credential from an access key and secret key.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Credential {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            security_token: None,
        }
    }

    /// Attach a security token for temporary credentials issued by STS.
    pub fn with_security_token(mut self, token: impl Into<String>) -> Self {
        self.security_token = Some(token.into());
        self
    }

    /// Access key of this credential.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Secret key of this credential.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Security token of this credential, if any.
    pub fn security_token(&self) -> Option<&str> {
        self.security_token.as_deref()
    }

    /// Whether this credential is usable for signing.
    pub fn is_valid(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &redact(&self.access_key))
            .field("secret_key", &redact(&self.secret_key))
            .field(
                "security_token",
                &redact(self.security_token.as_deref().unwrap_or_default()),
            )
            .finish()
    }
}

fn redact(v: &str) -> &str {
    if v.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_leaks_secrets() {
        let cred = Credential::new("access_key_id", "secret_access_key")
            .with_security_token("session_token");
        let output = format!("{cred:?}");
        assert!(!output.contains("access_key_id"));
        assert!(!output.contains("secret_access_key"));
        assert!(!output.contains("session_token"));
    }

    #[test]
    fn test_is_valid() {
        assert!(!Credential::default().is_valid());
        assert!(!Credential::new("ak", "").is_valid());
        assert!(Credential::new("ak", "sk").is_valid());
    }
}
