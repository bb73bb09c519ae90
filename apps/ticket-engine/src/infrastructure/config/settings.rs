//! SDK Configuration Settings
//!
//! Configuration types for the ticket engine, loaded from environment
//! variables by the host application at startup.

/// Brokerage API environment (sandbox vs production).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SdkEnvironment {
    /// Sandbox environment (simulated brokers).
    #[default]
    Sandbox,
    /// Production environment (real brokerage links).
    Production,
}

impl SdkEnvironment {
    /// Parse environment from string.
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "PRODUCTION" => Self::Production,
            _ => Self::Sandbox,
        }
    }

    /// Check if this is the production environment.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Get the environment name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

/// SDK API key issued to the host application.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key.
    #[must_use]
    pub const fn new(key: String) -> Self {
        Self(key)
    }

    /// Get the key value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

/// Injectable theme palette.
///
/// Presentation styling is host-owned; these values are passed through to
/// the rendering layer and never read by the core. Kept here so theming is
/// explicit configuration rather than ambient global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
    /// Accent color for interactive elements, as a hex string.
    pub accent_color: String,
    /// Color for warning rows, as a hex string.
    pub warning_color: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            accent_color: "#007AFF".to_string(),
            warning_color: "#D97706".to_string(),
        }
    }
}

/// Complete SDK configuration.
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// Brokerage API environment.
    pub environment: SdkEnvironment,
    /// API key issued to the host.
    pub api_key: ApiKey,
    /// Default display currency when an account reports none.
    pub default_currency_code: String,
    /// Theme palette handed to the presentation layer.
    pub theme: ThemeSettings,
}

impl SdkConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BROKERLINK_API_KEY` is missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("BROKERLINK_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("BROKERLINK_API_KEY".to_string()))?;

        if api_key.is_empty() {
            return Err(ConfigError::EmptyValue("BROKERLINK_API_KEY".to_string()));
        }

        let environment = std::env::var("BROKERLINK_ENV")
            .map(|s| SdkEnvironment::from_str_case_insensitive(&s))
            .unwrap_or_default();

        let default_currency_code =
            parse_env_string("BROKERLINK_DEFAULT_CURRENCY", "USD");

        let theme = ThemeSettings {
            accent_color: parse_env_string(
                "BROKERLINK_ACCENT_COLOR",
                &ThemeSettings::default().accent_color,
            ),
            warning_color: parse_env_string(
                "BROKERLINK_WARNING_COLOR",
                &ThemeSettings::default().warning_color,
            ),
        };

        Ok(Self {
            environment,
            api_key: ApiKey::new(api_key),
            default_currency_code,
            theme,
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
}

fn parse_env_string(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parsing() {
        assert_eq!(
            SdkEnvironment::from_str_case_insensitive("production"),
            SdkEnvironment::Production
        );
        assert_eq!(
            SdkEnvironment::from_str_case_insensitive("PRODUCTION"),
            SdkEnvironment::Production
        );
        assert_eq!(
            SdkEnvironment::from_str_case_insensitive("sandbox"),
            SdkEnvironment::Sandbox
        );
        assert_eq!(
            SdkEnvironment::from_str_case_insensitive("unknown"),
            SdkEnvironment::Sandbox
        );
    }

    #[test]
    fn environment_is_production() {
        assert!(SdkEnvironment::Production.is_production());
        assert!(!SdkEnvironment::Sandbox.is_production());
    }

    #[test]
    fn environment_as_str() {
        assert_eq!(SdkEnvironment::Sandbox.as_str(), "sandbox");
        assert_eq!(SdkEnvironment::Production.as_str(), "production");
    }

    #[test]
    fn api_key_redacted_debug() {
        let key = ApiKey::new("key-123".to_string());
        let debug = format!("{key:?}");
        assert!(!debug.contains("key-123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn theme_settings_defaults() {
        let theme = ThemeSettings::default();
        assert_eq!(theme.accent_color, "#007AFF");
        assert_eq!(theme.warning_color, "#D97706");
    }
}
