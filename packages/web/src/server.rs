//! Server-only routes mounted next to the Dioxus app.

use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use api::sitemap::{render_sitemap, CACHE_CONTROL, CONTENT_TYPE};
use api::state::AppState;

pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub fn init_server_state() {
    use std::sync::Arc;

    api::config::load_dotenv();

    let config = match api::config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    api::state::AppState::set_global(Arc::new(AppState::from_config(config)));
    eprintln!("✓ Server initialization complete");
}

async fn sitemap_xml() -> impl IntoResponse {
    let base = AppState::site_url();
    let lastmod = chrono::Utc::now().format("%Y-%m-%d").to_string();

    (
        [
            (header::CONTENT_TYPE, CONTENT_TYPE),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        render_sitemap(&base, &lastmod),
    )
}

/// Add the sitemap route and request tracing to the app router.
pub fn extend(router: Router) -> Router {
    router
        .route("/sitemap.xml", get(sitemap_xml))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
