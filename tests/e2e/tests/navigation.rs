use e2e::test_server::TestServer;

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Landry Tido"), "Should render the owner name");
    assert!(body.contains("Projets"), "French is the default locale");
}

#[tokio::test]
async fn test_english_route_renders_english() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(server.at("/en"))
        .await
        .expect("Failed to fetch /en")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("Projects"), "English labels on /en");

    let ld = json_ld(&body).expect("page carries a JSON-LD block");
    assert_eq!(ld["inLanguage"], "en-US");
    assert_eq!(ld["@type"], "WebPage");
    // SITE_URL drives both the page metadata and the sitemap.
    assert_eq!(ld["url"], server.at("/en"));
    assert!(body.contains(&format!("href=\"{}/en\"", server.url())));
}

#[tokio::test]
async fn test_phone_is_only_linked_through_whatsapp() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("+32*********"), "masked number is shown");
    assert!(!body.contains("tel:"), "no dial link next to the masked number");
    assert!(body.contains("wa.me/32465362609"));
}

fn json_ld(html: &str) -> Option<serde_json::Value> {
    let marker = "application/ld+json";
    let start = html.find(marker)?;
    let open = start + html[start..].find('>')? + 1;
    let close = open + html[open..].find("</script>")?;
    serde_json::from_str(&html[open..close]).ok()
}

#[tokio::test]
async fn test_sitemap_is_served_as_xml() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.at("/sitemap.xml"))
        .await
        .expect("Failed to fetch sitemap");

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/xml"), "{content_type}");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.starts_with("<?xml"));
    assert!(body.contains(&format!("<loc>{}/en</loc>", server.url())));
    assert!(body.trim_end().ends_with("</urlset>"));
}
