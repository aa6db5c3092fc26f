pub const DEFAULT_SITE_URL: &str = "https://landry-tido.com";
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_MODE").unwrap_or_default())
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// How contact messages leave the server.
#[derive(Clone, PartialEq, Eq)]
pub enum MailConfig {
    /// Hosted delivery through the EmailJS REST endpoint.
    EmailJs {
        endpoint: String,
        service_id: String,
        template_id: String,
        public_key: String,
        private_key: Option<String>,
    },
    /// Self-hosted relay.
    Smtp {
        host: String,
        port: u16,
        username: String,
        password: String,
        from_email: String,
        from_name: String,
        to_email: String,
    },
    /// Print to stdout; local mode only.
    Console,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MailConfig::EmailJs {
                endpoint,
                service_id,
                template_id,
                ..
            } => f
                .debug_struct("EmailJs")
                .field("endpoint", endpoint)
                .field("service_id", service_id)
                .field("template_id", template_id)
                .finish_non_exhaustive(),
            MailConfig::Smtp { host, port, .. } => f
                .debug_struct("Smtp")
                .field("host", host)
                .field("port", port)
                .finish_non_exhaustive(),
            MailConfig::Console => f.write_str("Console"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub mail: MailConfig,
    pub site_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not a valid port: {value}")]
    InvalidPort { name: &'static str, value: String },
    #[error("no mail transport configured; set EMAILJS_* or SMTP_* (or APP_MODE=local)")]
    NoMailTransport,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let mode = AppMode::parse(&get("APP_MODE").unwrap_or_default());
        let site_url = get("SITE_URL")
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mail = if get("EMAILJS_SERVICE_ID").is_some() {
            MailConfig::EmailJs {
                endpoint: get("EMAILJS_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string()),
                service_id: require("EMAILJS_SERVICE_ID")?,
                template_id: require("EMAILJS_TEMPLATE_ID")?,
                public_key: require("EMAILJS_PUBLIC_KEY")?,
                private_key: get("EMAILJS_PRIVATE_KEY"),
            }
        } else if get("SMTP_HOST").is_some() {
            let raw_port = require("SMTP_PORT")?;
            let port = raw_port.parse().map_err(|_| ConfigError::InvalidPort {
                name: "SMTP_PORT",
                value: raw_port.clone(),
            })?;
            let from_email = require("SMTP_FROM_EMAIL")?;
            MailConfig::Smtp {
                host: require("SMTP_HOST")?,
                port,
                username: require("SMTP_USERNAME")?,
                password: require("SMTP_PASSWORD")?,
                from_name: get("SMTP_FROM_NAME").unwrap_or_else(|| "Portfolio".to_string()),
                to_email: get("CONTACT_TO_EMAIL").unwrap_or_else(|| from_email.clone()),
                from_email,
            }
        } else if mode == AppMode::Local {
            MailConfig::Console
        } else {
            return Err(ConfigError::NoMailTransport);
        };

        Ok(Self {
            mode,
            mail,
            site_url,
        })
    }
}

/// Load `.env` if present (server only).
#[cfg(feature = "server")]
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to read .env: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_app_mode_defaults_to_production() {
        assert_eq!(AppMode::parse(""), AppMode::Production);
    }

    #[test]
    fn test_app_mode_local() {
        assert_eq!(AppMode::parse("local"), AppMode::Local);
    }

    #[test]
    fn test_app_mode_case_insensitive() {
        assert_eq!(AppMode::parse("LOCAL"), AppMode::Local);
    }

    #[test]
    fn test_app_mode_invalid_defaults_to_production() {
        assert_eq!(AppMode::parse("invalid"), AppMode::Production);
    }

    #[test]
    fn local_mode_without_transport_uses_console() {
        let config = AppConfig::from_vars(vars(&[("APP_MODE", "local")])).unwrap();
        assert_eq!(config.mail, MailConfig::Console);
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
    }

    #[test]
    fn production_without_transport_is_an_error() {
        let err = AppConfig::from_vars(vars(&[])).unwrap_err();
        assert_eq!(err, ConfigError::NoMailTransport);
    }

    #[test]
    fn emailjs_takes_precedence_and_requires_all_keys() {
        let err = AppConfig::from_vars(vars(&[
            ("EMAILJS_SERVICE_ID", "service_x"),
            ("EMAILJS_TEMPLATE_ID", "template_y"),
            ("SMTP_HOST", "smtp.local"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("EMAILJS_PUBLIC_KEY"));

        let config = AppConfig::from_vars(vars(&[
            ("EMAILJS_SERVICE_ID", "service_x"),
            ("EMAILJS_TEMPLATE_ID", "template_y"),
            ("EMAILJS_PUBLIC_KEY", "pk"),
            ("SITE_URL", "https://example.org/"),
        ]))
        .unwrap();
        assert_eq!(config.site_url, "https://example.org");
        match config.mail {
            MailConfig::EmailJs {
                endpoint,
                private_key,
                ..
            } => {
                assert_eq!(endpoint, DEFAULT_EMAILJS_ENDPOINT);
                assert_eq!(private_key, None);
            }
            other => panic!("unexpected transport {other:?}"),
        }
    }

    #[test]
    fn smtp_port_must_parse() {
        let err = AppConfig::from_vars(vars(&[
            ("SMTP_HOST", "smtp.local"),
            ("SMTP_PORT", "twenty-five"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { name: "SMTP_PORT", .. }));
    }

    #[test]
    fn smtp_recipient_defaults_to_sender() {
        let config = AppConfig::from_vars(vars(&[
            ("SMTP_HOST", "smtp.local"),
            ("SMTP_PORT", "587"),
            ("SMTP_USERNAME", "u"),
            ("SMTP_PASSWORD", "p"),
            ("SMTP_FROM_EMAIL", "me@example.org"),
        ]))
        .unwrap();
        match config.mail {
            MailConfig::Smtp { port, to_email, from_name, .. } => {
                assert_eq!(port, 587);
                assert_eq!(to_email, "me@example.org");
                assert_eq!(from_name, "Portfolio");
            }
            other => panic!("unexpected transport {other:?}"),
        }
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            AppConfig::from_vars(vars(&[("APP_MODE", "local"), ("EMAILJS_SERVICE_ID", "  ")]))
                .unwrap();
        assert_eq!(config.mail, MailConfig::Console);
    }
}
