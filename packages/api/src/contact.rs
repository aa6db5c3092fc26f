use crate::types::{ContactMessage, SendReceipt};
use dioxus::prelude::*;

#[cfg(feature = "server")]
mod server {
    use super::*;
    use crate::email::{email_label, ContactMailer};
    use anyhow::{Context, Result};
    use tracing::{debug, info, warn};

    /// Validate, then hand the message to the mailer. One attempt, no retry.
    pub async fn deliver_contact(
        mailer: &dyn ContactMailer,
        message: &ContactMessage,
    ) -> Result<SendReceipt> {
        message.validate().context("contact message rejected")?;
        debug!(
            "contact.deliver_contact: from={} name_len={} message_len={}",
            email_label(&message.email),
            message.name.len(),
            message.message.len()
        );

        let status = match mailer.deliver(message).await {
            Ok(status) => status,
            Err(e) => {
                warn!("contact.deliver_contact: delivery failed: {e:#}");
                return Err(e);
            }
        };
        let receipt = SendReceipt { status };
        if receipt.is_accepted() {
            info!("contact.deliver_contact: accepted");
        } else {
            warn!("contact.deliver_contact: unexpected status {:?}", receipt.status);
        }
        Ok(receipt)
    }
}

#[cfg(feature = "server")]
pub use server::deliver_contact;

/// Deliver a contact form submission through the configured transport.
#[dioxus::prelude::post("/api/contact")]
pub async fn send_contact_message(message: ContactMessage) -> Result<SendReceipt, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = message;
        Err(ServerFnError::new("send_contact_message is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::state::AppState::try_global()
            .ok_or_else(|| ServerFnError::new("server state is not initialised"))?;
        server::deliver_contact(state.mailer.as_ref(), &message)
            .await
            .map_err(|e| ServerFnError::new(format!("{e:#}")))
    }
}
