mod common;

use link_target_controller::domain::entities::Role;
use serde_json::json;

#[tokio::test]
async fn test_listing_links_to_permalinks_by_default() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    app.store_url(item.id, "https://example.com/landing").await;

    let response = app.server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(&format!(r#"<a href="/posts/{}">Hello</a>"#, item.id)));
    assert!(!html.contains("https://example.com/landing"));
}

#[tokio::test]
async fn test_listing_substitutes_links_of_enabled_types() {
    let app = common::create_test_app();
    app.register_type("book", "Books", true).await;
    let post = app.create_item("post", "With link").await;
    let plain = app.create_item("post", "Without link").await;
    let book = app.create_item("book", "Dune").await;
    let page = app.create_item("page", "About").await;
    app.store_url(post.id, "https://example.com/?a=1&b=2").await;
    app.store_url(book.id, "https://books.example/dune").await;
    app.store_url(page.id, "https://example.com/about").await;
    app.store_selection(json!(["post", "book"])).await;

    let html = app.server.get("/").await.text();

    assert!(html.contains(r#"<a href="https://example.com/?a=1&amp;b=2" class="redirect">With link</a>"#));
    assert!(html.contains(r#"<a href="https://books.example/dune" class="redirect">Dune</a>"#));
    assert!(html.contains(&format!(r#"<a href="/posts/{}">Without link</a>"#, plain.id)));
    assert!(html.contains(&format!(r#"<a href="/posts/{}">About</a>"#, page.id)));
}

#[tokio::test]
async fn test_listing_ignores_legacy_sentinel() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    app.store_url(item.id, "https://example.com/landing").await;
    app.store_selection(json!(1)).await;

    let html = app.server.get("/").await.text();

    assert!(html.contains(&format!(r#"<a href="/posts/{}">Hello</a>"#, item.id)));
}

#[tokio::test]
async fn test_listing_lists_newest_first() {
    let app = common::create_test_app();
    app.create_item("post", "First").await;
    app.create_item("post", "Second").await;

    let html = app.server.get("/").await.text();

    let second = html.find(">Second<").unwrap();
    let first = html.find(">First<").unwrap();
    assert!(second < first);
}

#[tokio::test]
async fn test_empty_listing() {
    let app = common::create_test_app();

    let response = app.server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("Nothing published yet."));
}

#[tokio::test]
async fn test_permalink_redirects_for_enabled_type() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    app.store_url(item.id, "https://example.com/?a=1&b=2").await;
    app.store_selection(json!(["post"])).await;

    let response = app.server.get(&format!("/posts/{}", item.id)).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/?a=1&b=2");
}

#[tokio::test]
async fn test_permalink_renders_when_type_disabled() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    app.store_url(item.id, "https://example.com/landing").await;
    app.store_selection(json!(["book"])).await;

    let response = app.server.get(&format!("/posts/{}", item.id)).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<h1>Hello</h1>"));
    assert!(html.contains("Body of Hello"));
}

#[tokio::test]
async fn test_permalink_renders_without_link() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    app.store_url(item.id, "").await;
    app.store_selection(json!(["post"])).await;

    app.server
        .get(&format!("/posts/{}", item.id))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_unknown_permalink_is_not_found() {
    let app = common::create_test_app();

    app.server.get("/posts/404").await.assert_status_not_found();
}

#[tokio::test]
async fn test_script_link_saved_by_author_is_never_emitted() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    let author = app.login_as("author", Role::Author).await;
    let nonce = app.nonce("vk-ltc-link", &author);

    let save = app
        .server
        .post(&format!("/admin/posts/{}", item.id))
        .add_header("Cookie", author.cookie.as_str())
        .form(&vec![
            ("vk-ltc-link-nonce", nonce.as_str()),
            ("vk-ltc-link-field", "javascript:alert(document.cookie)"),
        ])
        .await;
    assert_eq!(save.status_code(), 303);
    assert_eq!(
        app.stored_url(item.id).await.as_deref(),
        Some("javascript:alert(document.cookie)")
    );

    app.store_selection(json!(["post"])).await;

    let html = app.server.get("/").await.text();
    assert!(!html.contains("javascript:"));
    assert!(html.contains(&format!(r#"<a href="/posts/{}">Hello</a>"#, item.id)));

    let permalink = app.server.get(&format!("/posts/{}", item.id)).await;
    permalink.assert_status_ok();
    assert!(permalink.text().contains("<h1>Hello</h1>"));
}

#[tokio::test]
async fn test_listing_keeps_mailto_and_ftp_targets() {
    let app = common::create_test_app();
    let mail = app.create_item("post", "Write us").await;
    let files = app.create_item("post", "Downloads").await;
    app.store_url(mail.id, "mailto:news@example.com").await;
    app.store_url(files.id, "ftp://files.example.com/").await;
    app.store_selection(json!(["post"])).await;

    let html = app.server.get("/").await.text();

    assert!(html.contains(r#"<a href="mailto:news@example.com" class="redirect">Write us</a>"#));
    assert!(html.contains(r#"<a href="ftp://files.example.com/" class="redirect">Downloads</a>"#));
}
