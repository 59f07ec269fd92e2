//! Form endpoint configuration parsed from environment variables.
//!
//! Every value has a literal fallback so a missing variable never blocks the
//! site from rendering; submissions against the placeholder ids simply fail
//! remotely and surface the generic failure message.

use crate::form::Category;

pub const DEFAULT_FORM_BASE_URL: &str = "https://formspree.io";
pub const DEFAULT_CONTACT_FORM_ID: &str = "YOUR_FORMSPREE_ID";
pub const DEFAULT_PITCH_FORM_ID: &str = "YOUR_FORMSPREE_PITCH_ID";

pub const ENV_FORM_BASE_URL: &str = "FORMSPREE_BASE_URL";
pub const ENV_CONTACT_FORM_ID: &str = "FORMSPREE_CONTACT_ID";
pub const ENV_PITCH_FORM_ID: &str = "FORMSPREE_PITCH_ID";

/// Errors produced while validating configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A configured value is present but unusable.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Provider origin, without a trailing slash.
    pub base_url: String,
    /// Endpoint id for general contact messages and talent applications.
    pub contact_form_id: String,
    /// Endpoint id for venture pitches.
    pub pitch_form_id: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FORM_BASE_URL.to_owned(),
            contact_form_id: DEFAULT_CONTACT_FORM_ID.to_owned(),
            pitch_form_id: DEFAULT_PITCH_FORM_ID.to_owned(),
        }
    }
}

impl FormConfig {
    /// Build typed form config from environment variables.
    ///
    /// Optional:
    /// - `FORMSPREE_BASE_URL`: default `https://formspree.io`
    /// - `FORMSPREE_CONTACT_ID`: default `YOUR_FORMSPREE_ID`
    /// - `FORMSPREE_PITCH_ID`: default `YOUR_FORMSPREE_PITCH_ID`
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an `http(s)` origin or an
    /// endpoint id contains characters that cannot appear in a path segment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var)
    }

    /// [`FormConfig::from_env`], falling back to the defaults with a warning.
    #[must_use]
    pub fn from_env_or_default() -> Self {
        Self::from_lookup_or_default(env_var)
    }

    /// Same as [`FormConfig::from_env`] but reading from an arbitrary source.
    ///
    /// # Errors
    ///
    /// See [`FormConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let base_url = read(ENV_FORM_BASE_URL, DEFAULT_FORM_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                var: ENV_FORM_BASE_URL,
                reason: format!("expected an http(s) URL, got '{base_url}'"),
            });
        }

        let contact_form_id = read(ENV_CONTACT_FORM_ID, DEFAULT_CONTACT_FORM_ID);
        check_form_id(ENV_CONTACT_FORM_ID, &contact_form_id)?;
        let pitch_form_id = read(ENV_PITCH_FORM_ID, DEFAULT_PITCH_FORM_ID);
        check_form_id(ENV_PITCH_FORM_ID, &pitch_form_id)?;

        Ok(Self { base_url, contact_form_id, pitch_form_id })
    }

    /// [`FormConfig::from_lookup`], logging a warning and using the defaults
    /// when the configured values are invalid.
    #[must_use]
    pub fn from_lookup_or_default(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "form config invalid, falling back to defaults");
            Self::default()
        })
    }

    /// Endpoint id a contact-page submission of `category` is posted to.
    #[must_use]
    pub fn endpoint_for(&self, category: Category) -> &str {
        match category {
            Category::Pitch => &self.pitch_form_id,
            Category::Contact => &self.contact_form_id,
        }
    }

    /// Endpoint id for talent applications, which share the contact inbox.
    #[must_use]
    pub fn talent_endpoint(&self) -> &str {
        &self.contact_form_id
    }
}

fn check_form_id(var: &'static str, id: &str) -> Result<(), ConfigError> {
    if id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        Ok(())
    } else {
        Err(ConfigError::Invalid { var, reason: format!("'{id}' is not a valid form id") })
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
