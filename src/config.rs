use std::fmt;

/// Whether an admin key was supplied at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    Configured,
    Missing,
}

impl CredentialStatus {
    pub fn is_missing(self) -> bool {
        self == CredentialStatus::Missing
    }
}

/// Connection settings injected into the dashboard controller.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminConfig {
    base_url: String,
    admin_key: Option<String>,
}

impl AdminConfig {
    /// A blank key is stored as no key at all.
    pub fn new(base_url: impl Into<String>, admin_key: Option<String>) -> Self {
        let admin_key = admin_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let config = Self {
            base_url: base_url.into(),
            admin_key,
        };
        if config.credential_status().is_missing() {
            tracing::warn!("Admin key is not configured, requests will be sent without one");
        }
        config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credential_status(&self) -> CredentialStatus {
        match self.admin_key {
            Some(_) => CredentialStatus::Configured,
            None => CredentialStatus::Missing,
        }
    }

    /// Value for the admin key header; empty when unconfigured.
    pub fn header_value(&self) -> &str {
        self.admin_key.as_deref().unwrap_or_default()
    }
}

// Keeps the key out of logs
impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential_status())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_missing() {
        let config = AdminConfig::new("https://api.example", Some("   ".to_string()));
        assert_eq!(config.credential_status(), CredentialStatus::Missing);
        assert_eq!(config.header_value(), "");

        let config = AdminConfig::new("https://api.example", None);
        assert!(config.credential_status().is_missing());
    }

    #[test]
    fn test_configured_key() {
        let config = AdminConfig::new("https://api.example", Some(" s3cret ".to_string()));
        assert_eq!(config.credential_status(), CredentialStatus::Configured);
        assert_eq!(config.header_value(), "s3cret");
        assert_eq!(config.base_url(), "https://api.example");
    }

    #[test]
    fn test_debug_output_hides_key() {
        let config = AdminConfig::new("https://api.example", Some("s3cret".to_string()));
        let printed = format!("{:?}", config);
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("Configured"));
    }
}
