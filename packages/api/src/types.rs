use serde::{Deserialize, Serialize};

/// Status token the mail provider answers with when a message was accepted.
pub const SUCCESS_TOKEN: &str = "OK";

/// The contact form draft, sent as-is to the delivery endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name, email and message are required")]
    MissingRequired,
    #[error("email address is malformed")]
    InvalidEmail,
}

impl ContactMessage {
    /// Required fields first, then the email shape. Subject is optional.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.name, &self.email, &self.message];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ValidationError::MissingRequired);
        }
        if !is_email_shaped(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
/// with text on both sides of it.
pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// What the delivery endpoint reports back to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub status: String,
}

/// Deployment settings the client needs to render absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfig {
    pub site_url: String,
}

impl SendReceipt {
    pub fn is_accepted(&self) -> bool {
        self.status == SUCCESS_TOKEN
    }
}
