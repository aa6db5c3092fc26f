use api::contact::deliver_contact;
use api::state::AppState;
use api::test_utils::{RecordingMailer, TestContext};
use api::ContactMessage;

fn message(email: &str) -> ContactMessage {
    ContactMessage {
        name: "Ada".to_string(),
        email: email.to_string(),
        subject: "Collaboration".to_string(),
        message: "Hello there".to_string(),
    }
}

#[tokio::test]
async fn test_valid_message_is_delivered_once() {
    let ctx = TestContext::new(RecordingMailer::accepting());

    let receipt = deliver_contact(ctx.mailer.as_ref(), &message("ada@example.org"))
        .await
        .expect("delivery should succeed");

    assert!(receipt.is_accepted());
    let sent = ctx.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Collaboration");
}

#[tokio::test]
async fn test_invalid_message_never_reaches_the_mailer() {
    let ctx = TestContext::new(RecordingMailer::accepting());

    let err = deliver_contact(ctx.mailer.as_ref(), &message("not-an-email"))
        .await
        .expect_err("invalid email must be rejected");

    assert!(format!("{err:#}").contains("malformed"));
    assert!(ctx.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_transport_failure_is_propagated() {
    let ctx = TestContext::new(RecordingMailer::failing("connection reset"));

    let err = deliver_contact(ctx.mailer.as_ref(), &message("ada@example.org"))
        .await
        .expect_err("transport failure must surface");

    assert!(err.to_string().contains("connection reset"));
    assert_eq!(ctx.mailer.sent().len(), 1, "single attempt, no retry");
}

#[tokio::test]
async fn test_unexpected_token_is_returned_not_accepted() {
    let ctx = TestContext::new(RecordingMailer::answering(Ok("Queued".to_string())));

    let receipt = deliver_contact(ctx.mailer.as_ref(), &message("ada@example.org"))
        .await
        .expect("provider answered");

    assert!(!receipt.is_accepted());
}

#[tokio::test]
async fn test_context_installs_thread_state() {
    assert!(AppState::try_global().is_none());
    {
        let ctx = TestContext::new(RecordingMailer::accepting());
        ctx.set_global();
        let state = AppState::try_global().expect("state installed");
        assert_eq!(state.config.site_url, ctx.state.config.site_url);
    }
    assert!(AppState::try_global().is_none());
}

#[tokio::test]
async fn test_send_without_state_reports_uninitialised_server() {
    assert!(AppState::try_global().is_none());

    let err = api::send_contact_message(message("ada@example.org"))
        .await
        .expect_err("no state installed");

    assert!(err.to_string().contains("not initialised"), "{err}");
}

#[tokio::test]
async fn test_send_uses_installed_mailer() {
    let ctx = TestContext::new(RecordingMailer::accepting());
    ctx.set_global();

    let receipt = api::send_contact_message(message("ada@example.org"))
        .await
        .expect("delivery should succeed");

    assert!(receipt.is_accepted());
    assert_eq!(ctx.mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_send_maps_transport_failure_to_server_error() {
    let ctx = TestContext::new(RecordingMailer::failing("connection reset"));
    ctx.set_global();

    let err = api::send_contact_message(message("ada@example.org"))
        .await
        .expect_err("transport failure must cross the boundary");

    assert!(err.to_string().contains("connection reset"), "{err}");
    assert_eq!(ctx.mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_send_rejects_invalid_message_before_the_mailer() {
    let ctx = TestContext::new(RecordingMailer::accepting());
    ctx.set_global();

    let err = api::send_contact_message(message("not-an-email"))
        .await
        .expect_err("invalid email must be rejected");

    assert!(err.to_string().contains("malformed"), "{err}");
    assert!(ctx.mailer.sent().is_empty());
}
