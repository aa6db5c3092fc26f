use crate::config::{AppConfig, AppMode, MailConfig, DEFAULT_SITE_URL};
use crate::email::{mailer_from_config, ContactMailer};
use std::sync::{Arc, OnceLock};

/// Global application state shared by the server functions
pub struct AppState {
    pub mailer: Arc<dyn ContactMailer>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create AppState from configuration, picking the mail transport.
    pub fn from_config(config: AppConfig) -> Self {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }
        match &config.mail {
            MailConfig::EmailJs { .. } => tracing::info!("   Mail: EmailJS"),
            MailConfig::Smtp { host, .. } => tracing::info!("   Mail: SMTP ({})", host),
            MailConfig::Console => tracing::info!("   Mail: Console (not sending)"),
        }
        tracing::info!("   Site URL: {}", config.site_url);

        let mailer = mailer_from_config(&config.mail);
        Self { mailer, config }
    }

    /// Set the global AppState instance
    ///
    /// This should be called once at server startup.
    /// Panics if called more than once.
    pub fn set_global(state: Arc<Self>) {
        STATE
            .set(state)
            .expect("AppState::set_global called more than once");
    }

    /// Base URL for canonical links and the sitemap. Falls back to the
    /// default domain before startup has installed a state.
    pub fn site_url() -> String {
        Self::try_global()
            .map(|state| state.config.site_url.clone())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
    }

    /// Get the global AppState instance, if startup has installed one.
    pub fn try_global() -> Option<Arc<Self>> {
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return Some(test_state);
        }
        STATE.get().cloned()
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}
