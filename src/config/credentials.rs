//! Credential handling.
//!
//! The API key is a long-lived shared secret; it must never leak into
//! logs or debug output.

use crate::config::types::ApiSettings;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building requests.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value. Use sparingly.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl ApiSettings {
    /// The API key wrapped so it cannot be logged by accident, or `None`
    /// when no key is configured yet.
    pub fn credential(&self) -> Option<SecureString> {
        let key = self.api_key.trim();
        if key.is_empty() {
            None
        } else {
            Some(SecureString::new(key.to_string()))
        }
    }
}
