use e2e::browser::{Browser, Page};
use e2e::test_server::{client_bundle_available, TestServer};
use std::time::Duration;

#[tokio::test]
async fn test_contact_form_renders_fields() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");

    for selector in [
        "input[name='name']",
        "input[name='email']",
        "input[name='subject']",
        "textarea[name='message']",
        "form.contact_form button[type='submit']",
    ] {
        assert!(page.find_element(selector).is_ok(), "{selector} should exist");
    }
}

#[tokio::test]
async fn test_sections_and_projects_render() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&server.at("/en")).expect("Failed to navigate");

    for section in ["about", "skills", "projects", "experience", "education", "contact"] {
        assert!(
            page.find_element(&format!("section#{section}")).is_ok(),
            "section {section} should exist"
        );
    }
    assert_eq!(page.count(".project_card").expect("cards"), 4);

    let copyright = page.find_element(".copyright").expect("footer");
    assert!(copyright.contains("All rights reserved"), "{copyright}");
}

fn skip_without_client() -> bool {
    if client_bundle_available() {
        return false;
    }
    eprintln!("skipping: set E2E_WEB_BIN to a `dx build --fullstack` server binary");
    true
}

fn fill_contact_form(page: &Page, email: &str) {
    page.type_text("input[name='name']", "Ada").expect("name");
    page.type_text("input[name='email']", email).expect("email");
    page.type_text("input[name='subject']", "Collaboration").expect("subject");
    page.type_text("textarea[name='message']", "Hello there").expect("message");
}

#[tokio::test]
async fn test_invalid_email_shows_inline_error() {
    if skip_without_client() {
        return;
    }
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&server.at("/en")).expect("Failed to navigate");
    page.wait_for_app().expect("client should hydrate");

    fill_contact_form(&page, "not-an-email");
    page.click("form.contact_form button[type='submit']")
        .expect("Failed to submit");

    let banner = page.find_element(".form_status.error").expect("error banner");
    assert_eq!(banner.trim(), "Please enter a valid email address.");
    assert_eq!(page.value("input[name='name']").expect("name value"), "Ada");
    assert!(!page.exists(".form_status.success"));
}

#[tokio::test]
async fn test_valid_message_clears_the_form() {
    if skip_without_client() {
        return;
    }
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&server.at("/en")).expect("Failed to navigate");
    page.wait_for_app().expect("client should hydrate");

    fill_contact_form(&page, "ada@example.org");
    page.click("form.contact_form button[type='submit']")
        .expect("Failed to submit");

    let banner = page.find_element(".form_status.success").expect("success banner");
    assert_eq!(banner.trim(), "Your message has been sent successfully!");
    for field in [
        "input[name='name']",
        "input[name='email']",
        "input[name='subject']",
        "textarea[name='message']",
    ] {
        assert_eq!(page.value(field).expect("field value"), "", "{field} should be cleared");
    }
    assert!(!page.exists("form.contact_form button[disabled]"), "submit re-enabled");

    // Delivery banners clear themselves.
    page.wait_until_gone(".form_status", Duration::from_secs(8))
        .expect("status should expire");
}

#[tokio::test]
async fn test_nav_link_closes_mobile_menu() {
    if skip_without_client() {
        return;
    }
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch_mobile().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");
    page.wait_for_app().expect("client should hydrate");

    assert!(!page.exists(".nav_mobile"));
    page.click(".menu_toggle").expect("Failed to open menu");
    assert!(page.find_element(".nav_mobile").is_ok(), "menu should open");

    page.click(".nav_mobile .nav_link").expect("Failed to pick a section");
    page.wait_until_gone(".nav_mobile", Duration::from_secs(2))
        .expect("menu should close after navigating");
}
