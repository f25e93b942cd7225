//! Market data API credentials.
//!
//! Credentials come from the process environment. Before they are read,
//! [`populate_env`] lets a local `.env` file and the system keychain fill
//! in any variable that is still unset. Loading never fails: a missing
//! value becomes an empty string and the provider rejects the request when
//! it is made.

use std::path::Path;

use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Keychain service name used for all stored credentials.
const SERVICE: &str = "trendview";

/// Known API credential keys managed by this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialKey {
    ApiKey,
    ApiSecret,
}

impl CredentialKey {
    /// Returns the keychain entry identifier.
    pub fn keyring_id(self) -> &'static str {
        match self {
            Self::ApiKey => "api_key",
            Self::ApiSecret => "api_secret",
        }
    }

    /// Returns the environment variable name for this credential.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::ApiKey => "API_KEY",
            Self::ApiSecret => "API_SECRET",
        }
    }

    /// Returns a human-readable label for TUI display.
    pub fn label(self) -> &'static str {
        match self {
            Self::ApiKey => "API Key",
            Self::ApiSecret => "API Secret",
        }
    }

    /// All credential keys in display order.
    pub const ALL: [CredentialKey; 2] = [Self::ApiKey, Self::ApiSecret];
}

/// The key/secret pair passed through to the market data provider.
///
/// Values are opaque and unvalidated. `Debug` never prints them.
#[derive(Clone, Default)]
pub struct Credentials {
    api_key: Zeroizing<String>,
    api_secret: Zeroizing<String>,
}

impl Credentials {
    /// Builds credentials from explicit values.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: Zeroizing::new(api_key.into()),
            api_secret: Zeroizing::new(api_secret.into()),
        }
    }

    /// Reads `API_KEY` and `API_SECRET` from the environment.
    ///
    /// Absent or non-unicode values are treated as empty.
    pub fn from_env() -> Self {
        let read = |key: CredentialKey| {
            let value = std::env::var(key.env_var()).unwrap_or_default();
            debug!(
                key = key.env_var(),
                present = !value.is_empty(),
                "read credential"
            );
            value
        };
        Self::new(read(CredentialKey::ApiKey), read(CredentialKey::ApiSecret))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Returns `true` when both values are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }

    /// Returns the keys whose value is empty, in display order.
    pub fn missing(&self) -> Vec<CredentialKey> {
        CredentialKey::ALL
            .into_iter()
            .filter(|key| match key {
                CredentialKey::ApiKey => self.api_key.is_empty(),
                CredentialKey::ApiSecret => self.api_secret.is_empty(),
            })
            .collect()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &redacted(&self.api_key))
            .field("api_secret", &redacted(&self.api_secret))
            .finish()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "<unset>" } else { "<redacted>" }
}

/// Loads a credential from the keychain, returning `None` if not set.
pub fn load(key: CredentialKey) -> Option<Zeroizing<String>> {
    let entry = keyring::Entry::new(SERVICE, key.keyring_id()).ok()?;
    match entry.get_password() {
        Ok(password) => Some(Zeroizing::new(password)),
        Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            warn!(key = key.keyring_id(), error = %e, "failed to read keychain entry");
            None
        }
    }
}

/// Saves a credential to the keychain.
pub fn save(key: CredentialKey, value: &str) -> crate::Result<()> {
    let entry = keyring::Entry::new(SERVICE, key.keyring_id())
        .map_err(|e| crate::TrendviewError::Config(format!("keyring entry error: {e}")))?;
    entry
        .set_password(value)
        .map_err(|e| crate::TrendviewError::Config(format!("failed to save to keychain: {e}")))
}

/// Loads variables from the `.env` file at `path` without overriding
/// anything already set in the environment.
///
/// Returns `true` if the file was found and read.
pub fn load_dotenv_from(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded .env file");
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read .env file");
            false
        }
    }
}

/// Fills credential environment variables from a `.env` file in the
/// working directory and then from the keychain. Variables already set to a
/// non-empty value are left untouched.
///
/// Call this at startup before [`crate::config::fetch_config`].
pub fn populate_env() {
    load_dotenv_from(Path::new(".env"));

    for key in CredentialKey::ALL {
        if needs_value(key.env_var())
            && let Some(value) = load(key)
        {
            debug!(key = key.env_var(), "loaded credential from keychain");
            // SAFETY: single-threaded at this point (before tokio runtime starts tasks)
            unsafe {
                std::env::set_var(key.env_var(), value.as_str());
            }
        }
    }
}

/// `true` when `var` is unset or empty, matching how configuration reads it.
fn needs_value(var: &str) -> bool {
    crate::config::non_empty_var(var).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_values() {
        let creds = Credentials::new("PKTEST123", "very-secret");
        let printed = format!("{creds:?}");
        assert!(!printed.contains("PKTEST123"));
        assert!(!printed.contains("very-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn missing_lists_empty_values() {
        let creds = Credentials::new("key", "");
        assert!(!creds.is_complete());
        assert_eq!(creds.missing(), vec![CredentialKey::ApiSecret]);

        let empty = Credentials::default();
        assert_eq!(empty.missing(), CredentialKey::ALL.to_vec());
        assert_eq!(format!("{empty:?}").matches("<unset>").count(), 2);
    }

    #[test]
    fn complete_credentials_report_nothing_missing() {
        let creds = Credentials::new("key", "secret");
        assert!(creds.is_complete());
        assert!(creds.missing().is_empty());
        assert_eq!(creds.api_key(), "key");
        assert_eq!(creds.api_secret(), "secret");
    }

    #[test]
    fn empty_variable_still_needs_a_value() {
        const VAR: &str = "TRENDVIEW_CREDENTIALS_TEST_VALUE";
        // SAFETY: no other test reads or writes this variable.
        unsafe {
            std::env::remove_var(VAR);
        }
        assert!(needs_value(VAR));

        unsafe {
            std::env::set_var(VAR, "");
        }
        assert!(needs_value(VAR));

        unsafe {
            std::env::set_var(VAR, "PKTEST123");
        }
        assert!(!needs_value(VAR));

        unsafe {
            std::env::remove_var(VAR);
        }
    }

    #[test]
    fn dotenv_from_missing_path_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!load_dotenv_from(&dir.path().join(".env")));
    }
}
