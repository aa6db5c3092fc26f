use crate::config::MailConfig;
use crate::types::{ContactMessage, SUCCESS_TOKEN};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("invalid")
}

/// Log-safe description of an address.
pub(crate) fn email_label(email: &str) -> String {
    format!("{} (len={})", email_domain(email), email.len())
}

/// Delivers a contact message and returns the provider's status token.
#[async_trait]
pub trait ContactMailer: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<String>;
}

pub fn mailer_from_config(config: &MailConfig) -> Arc<dyn ContactMailer> {
    match config {
        MailConfig::EmailJs {
            endpoint,
            service_id,
            template_id,
            public_key,
            private_key,
        } => {
            info!("Using EmailJS mail transport: service={}", service_id);
            Arc::new(EmailJsMailer {
                client: reqwest::Client::new(),
                endpoint: endpoint.clone(),
                service_id: service_id.clone(),
                template_id: template_id.clone(),
                public_key: public_key.clone(),
                private_key: private_key.clone(),
            })
        }
        MailConfig::Smtp {
            host,
            port,
            username,
            password,
            from_email,
            from_name,
            to_email,
        } => {
            info!("Using SMTP mail transport: host={}:{}", host, port);
            Arc::new(SmtpMailer {
                host: host.clone(),
                port: *port,
                username: username.clone(),
                password: password.clone(),
                from: format!("{} <{}>", from_name, from_email),
                to: to_email.clone(),
            })
        }
        MailConfig::Console => {
            info!("Using Console mail transport (local mode)");
            Arc::new(ConsoleMailer)
        }
    }
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

/// Hosted delivery through the EmailJS REST API. The response body is the
/// status token (`OK` on success).
pub struct EmailJsMailer {
    client: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    private_key: Option<String>,
}

impl EmailJsMailer {
    fn request<'a>(&'a self, message: &'a ContactMessage) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            access_token: self.private_key.as_deref(),
            template_params: TemplateParams {
                name: &message.name,
                email: &message.email,
                subject: &message.subject,
                message: &message.message,
            },
        }
    }
}

#[async_trait]
impl ContactMailer for EmailJsMailer {
    async fn deliver(&self, message: &ContactMessage) -> Result<String> {
        debug!(
            "email.emailjs.deliver: from={} subject_len={} message_len={}",
            email_label(&message.email),
            message.subject.len(),
            message.message.len()
        );
        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.request(message))
            .send()
            .await
            .context("emailjs request failed")?;

        let status = response.status();
        let body = response.text().await.context("emailjs response unreadable")?;
        if !status.is_success() {
            return Err(anyhow!("emailjs rejected message: {} {}", status, body.trim()));
        }
        Ok(body.trim().to_string())
    }
}

/// Self-hosted SMTP relay.
pub struct SmtpMailer {
    host: String,
    port: u16,
    username: String,
    password: String,
    from: String,
    to: String,
}

impl SmtpMailer {
    fn build(&self, message: &ContactMessage) -> Result<Message> {
        let reply_to: Mailbox = format!("{} <{}>", message.name.trim(), message.email.trim())
            .parse()
            .context("invalid reply-to address")?;
        let subject = if message.subject.trim().is_empty() {
            format!("Portfolio contact: {}", message.name.trim())
        } else {
            message.subject.trim().to_string()
        };
        let body = format!(
            "From: {} <{}>\n\n{}",
            message.name.trim(),
            message.email.trim(),
            message.message
        );

        Ok(Message::builder()
            .from(self.from.parse()?)
            .reply_to(reply_to)
            .to(self.to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?)
    }
}

#[async_trait]
impl ContactMailer for SmtpMailer {
    async fn deliver(&self, message: &ContactMessage) -> Result<String> {
        debug!(
            "email.smtp.deliver: from={} to={}",
            email_label(&message.email),
            email_label(&self.to)
        );
        let email = self.build(message)?;
        let creds = Credentials::new(self.username.clone(), self.password.clone());
        let mailer = SmtpTransport::relay(&self.host)?
            .port(self.port)
            .credentials(creds)
            .build();

        // Wrap blocking SMTP operation in spawn_blocking
        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| anyhow!("Task join error: {}", e))??;

        Ok(SUCCESS_TOKEN.to_string())
    }
}

/// Local development transport: nothing leaves the machine.
pub struct ConsoleMailer;

#[async_trait]
impl ContactMailer for ConsoleMailer {
    async fn deliver(&self, message: &ContactMessage) -> Result<String> {
        println!("\n📧 CONTACT MESSAGE (Local Mode - Not Sent)");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("From: {} <{}>", message.name, message.email);
        println!("Subject: {}", message.subject);
        println!("────────────────────────────────");
        println!("{}", message.message);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        Ok(SUCCESS_TOKEN.to_string())
    }
}
