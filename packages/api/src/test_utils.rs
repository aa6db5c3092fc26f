use crate::config::{AppConfig, AppMode, MailConfig, DEFAULT_SITE_URL};
use crate::email::ContactMailer;
use crate::state::{AppState, TEST_STATE};
use crate::types::ContactMessage;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mailer double: records every delivered message and answers with a
/// scripted outcome.
pub struct RecordingMailer {
    outcome: Mutex<std::result::Result<String, String>>,
    sent: Mutex<Vec<ContactMessage>>,
}

impl RecordingMailer {
    pub fn accepting() -> Self {
        Self::answering(Ok("OK".to_string()))
    }

    pub fn failing(reason: &str) -> Self {
        Self::answering(Err(reason.to_string()))
    }

    pub fn answering(outcome: std::result::Result<String, String>) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ContactMailer for RecordingMailer {
    async fn deliver(&self, message: &ContactMessage) -> Result<String> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.clone());
        self.outcome
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .map_err(|reason| anyhow!(reason))
    }
}

pub struct TestContext {
    pub mailer: Arc<RecordingMailer>,
    pub state: Arc<AppState>,
}

impl TestContext {
    pub fn new(mailer: RecordingMailer) -> Self {
        Self::with_site_url(mailer, DEFAULT_SITE_URL)
    }

    pub fn with_site_url(mailer: RecordingMailer, site_url: &str) -> Self {
        let mailer = Arc::new(mailer);
        let state = Arc::new(AppState {
            mailer: mailer.clone(),
            config: AppConfig {
                mode: AppMode::Local,
                mail: MailConfig::Console,
                site_url: site_url.to_string(),
            },
        });
        Self { mailer, state }
    }

    /// Install this context's state for the current thread.
    pub fn set_global(&self) {
        TEST_STATE.with(|s| *s.borrow_mut() = Some(self.state.clone()));
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        TEST_STATE.with(|s| s.borrow_mut().take());
    }
}
