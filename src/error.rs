// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(ConfigError),
}

/// Configuration defects detected while resolving a site configuration.
///
/// These are deployment errors, not runtime conditions: composition must
/// refuse to render a page built from an unresolvable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured theme identifier is not in the theme registry.
    UnknownTheme(String),

    /// A module selection names a variant that is not registered for its role.
    UnknownVariant { role: &'static str, id: String },

    /// A required section role has no module selection.
    MissingSection(&'static str),

    /// The configuration file could not be parsed.
    Invalid(String),
}

impl ConfigError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ConfigError::UnknownTheme(_) => "error-config-unknown-theme",
            ConfigError::UnknownVariant { .. } => "error-config-unknown-variant",
            ConfigError::MissingSection(_) => "error-config-missing-section",
            ConfigError::Invalid(_) => "error-config-invalid",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownTheme(id) => write!(f, "Unknown theme: {}", id),
            ConfigError::UnknownVariant { role, id } => {
                write!(f, "Unknown {} variant: {}", role, id)
            }
            ConfigError::MissingSection(role) => {
                write!(f, "No variant selected for required section: {}", role)
            }
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(ConfigError::Invalid(err.to_string()))
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(ConfigError::Invalid(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn unknown_variant_mentions_role_and_id() {
        let err = Error::from(ConfigError::UnknownVariant {
            role: "menu",
            id: "split".into(),
        });
        assert_eq!(format!("{}", err), "Config Error: Unknown menu variant: split");
    }

    #[test]
    fn config_error_i18n_keys() {
        assert_eq!(
            ConfigError::UnknownTheme("x".into()).i18n_key(),
            "error-config-unknown-theme"
        );
        assert_eq!(
            ConfigError::MissingSection("hero").i18n_key(),
            "error-config-missing-section"
        );
    }
}
