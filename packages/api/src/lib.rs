//! This crate contains the shared wire types and the fullstack server functions.
use dioxus::prelude::*;

pub mod config;
pub mod sitemap;
pub mod types;

#[cfg(feature = "server")]
pub mod email;

#[cfg(feature = "server")]
pub mod state;

pub mod contact;


#[cfg(feature = "server")]
pub mod test_utils;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

/// Public deployment settings, read from the server configuration.
#[get("/api/public-config")]
pub async fn public_config() -> Result<PublicConfig, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Ok(PublicConfig {
            site_url: config::DEFAULT_SITE_URL.to_string(),
        })
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!("public_config");
        Ok(PublicConfig {
            site_url: state::AppState::site_url(),
        })
    }
}

pub use contact::send_contact_message;
pub use types::{ContactMessage, PublicConfig, SendReceipt, ValidationError, SUCCESS_TOKEN};
