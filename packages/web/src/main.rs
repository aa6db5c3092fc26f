use dioxus::prelude::*;
use std::env;

use views::{Home, HomeEn};

mod views;

#[cfg(feature = "server")]
mod server;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/en")]
    HomeEn {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    server::init_tracing();

    #[cfg(feature = "server")]
    server::init_server_state();

    log_runtime_config();

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move { Ok(server::extend(dioxus::server::router(App))) });
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let mode = env::var("APP_MODE").unwrap_or_else(|_| "production".to_string());

    eprintln!("startup: IP={ip} PORT={port} APP_MODE={mode}");

    let emailjs = ["EMAILJS_SERVICE_ID", "EMAILJS_TEMPLATE_ID", "EMAILJS_PUBLIC_KEY"];
    let smtp = ["SMTP_HOST", "SMTP_PORT", "SMTP_USERNAME", "SMTP_PASSWORD", "SMTP_FROM_EMAIL"];
    // Either transport is enough.
    if missing_envs(&emailjs).len() == emailjs.len() {
        log_missing_envs("smtp", &smtp);
    } else {
        log_missing_envs("emailjs", &emailjs);
    }
}

fn missing_envs<'a>(keys: &[&'a str]) -> Vec<&'a str> {
    keys.iter()
        .copied()
        .filter(|key| env::var(key).map(|v| v.trim().is_empty()).unwrap_or(true))
        .collect()
}

fn log_missing_envs(group: &str, keys: &[&str]) {
    let missing = missing_envs(keys);
    if missing.is_empty() {
        return;
    }

    eprintln!(
        "startup: WARNING missing {group} envs: {}",
        missing.join(", ")
    );
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
