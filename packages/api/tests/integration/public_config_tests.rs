use api::config::DEFAULT_SITE_URL;
use api::state::AppState;
use api::test_utils::{RecordingMailer, TestContext};

#[tokio::test]
async fn test_public_config_defaults_before_startup() {
    let cfg = api::public_config().await.expect("public config");
    assert_eq!(cfg.site_url, DEFAULT_SITE_URL);
}

#[tokio::test]
async fn test_public_config_follows_server_config() {
    let ctx = TestContext::with_site_url(RecordingMailer::accepting(), "https://staging.example.org");
    ctx.set_global();

    let cfg = api::public_config().await.expect("public config");

    assert_eq!(cfg.site_url, "https://staging.example.org");
    assert_eq!(AppState::site_url(), cfg.site_url, "sitemap and pages share one base");
}
