mod common;

use link_target_controller::domain::entities::Role;

const ACTION: &str = "vk-ltc-link";
const FIELD: &str = "vk-ltc-link-field";
const NONCE_FIELD: &str = "vk-ltc-link-nonce";

#[tokio::test]
async fn test_edit_screen_shows_link_box_for_posts() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    app.store_url(item.id, "https://example.com/?a=1&b=2").await;
    let editor = app.login_as("editor", Role::Editor).await;

    let response = app
        .server
        .get(&format!("/admin/posts/{}/edit", item.id))
        .add_header("Cookie", editor.cookie.as_str())
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"id="vk-ltc-meta-box""#));
    assert!(html.contains(r#"name="vk-ltc-link-field""#));
    assert!(html.contains(r#"value="https://example.com/?a=1&amp;b=2""#));
    assert!(html.contains(r#"name="vk-ltc-link-nonce""#));
    assert!(html.contains("URL to redirect to"));
    assert!(html.contains("URL must have the http:// before. Make sure the URL is correct."));
}

#[tokio::test]
async fn test_edit_screen_without_saved_link_shows_empty_field() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    let author = app.login_as("author", Role::Author).await;

    let html = app
        .server
        .get(&format!("/admin/posts/{}/edit", item.id))
        .add_header("Cookie", author.cookie.as_str())
        .await
        .text();

    assert!(html.contains(r#"id="vk-ltc-link-field" value="""#));
}

#[tokio::test]
async fn test_no_link_box_for_other_content_types() {
    let app = common::create_test_app();
    app.register_type("book", "Books", true).await;
    let book = app.create_item("book", "Dune").await;
    let page = app.create_item("page", "About").await;
    let admin = app.login_as("admin", Role::Administrator).await;

    for id in [book.id, page.id] {
        let response = app
            .server
            .get(&format!("/admin/posts/{id}/edit"))
            .add_header("Cookie", admin.cookie.as_str())
            .await;

        response.assert_status_ok();
        assert!(!response.text().contains("vk-ltc-meta-box"));
    }
}

#[tokio::test]
async fn test_no_link_box_without_capability() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    let subscriber = app.login_as("reader", Role::Subscriber).await;

    let response = app
        .server
        .get(&format!("/admin/posts/{}/edit", item.id))
        .add_header("Cookie", subscriber.cookie.as_str())
        .await;

    response.assert_status_ok();
    assert!(!response.text().contains("vk-ltc-meta-box"));
}

#[tokio::test]
async fn test_save_stores_valid_url() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    let editor = app.login_as("editor", Role::Editor).await;
    let nonce = app.nonce(ACTION, &editor);

    let response = app
        .server
        .post(&format!("/admin/posts/{}", item.id))
        .add_header("Cookie", editor.cookie.as_str())
        .form(&vec![
            (NONCE_FIELD, nonce.as_str()),
            (FIELD, "  https://example.com/?a=1&b=2  "),
        ])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.header("location"),
        format!("/admin/posts/{}/edit?message=1", item.id).as_str()
    );
    assert_eq!(
        app.stored_url(item.id).await.as_deref(),
        Some("https://example.com/?a=1&b=2")
    );

    let html = app
        .server
        .get(&format!("/admin/posts/{}/edit?message=1", item.id))
        .add_header("Cookie", editor.cookie.as_str())
        .await
        .text();
    assert!(html.contains("Post updated."));
    assert!(html.contains(r#"value="https://example.com/?a=1&amp;b=2""#));
}

#[tokio::test]
async fn test_save_is_idempotent() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    let editor = app.login_as("editor", Role::Editor).await;
    let nonce = app.nonce(ACTION, &editor);

    for _ in 0..2 {
        let response = app
            .server
            .post(&format!("/admin/posts/{}", item.id))
            .add_header("Cookie", editor.cookie.as_str())
            .form(&vec![
                (NONCE_FIELD, nonce.as_str()),
                (FIELD, "https://example.com/landing"),
            ])
            .await;
        assert_eq!(response.status_code(), 303);
    }

    assert_eq!(
        app.stored_url(item.id).await.as_deref(),
        Some("https://example.com/landing")
    );
}

#[tokio::test]
async fn test_empty_value_clears_link() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    app.store_url(item.id, "https://example.com/old").await;
    let editor = app.login_as("editor", Role::Editor).await;
    let nonce = app.nonce(ACTION, &editor);

    let response = app
        .server
        .post(&format!("/admin/posts/{}", item.id))
        .add_header("Cookie", editor.cookie.as_str())
        .form(&vec![(NONCE_FIELD, nonce.as_str()), (FIELD, "")])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(app.stored_url(item.id).await.as_deref(), Some(""));
}

#[tokio::test]
async fn test_invalid_url_keeps_previous_value() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    app.store_url(item.id, "https://example.com/old").await;
    let editor = app.login_as("editor", Role::Editor).await;
    let nonce = app.nonce(ACTION, &editor);

    for candidate in ["example.com", "http://", "http:///path", "not a url"] {
        let response = app
            .server
            .post(&format!("/admin/posts/{}", item.id))
            .add_header("Cookie", editor.cookie.as_str())
            .form(&vec![(NONCE_FIELD, nonce.as_str()), (FIELD, candidate)])
            .await;
        assert_eq!(response.status_code(), 303);
    }

    assert_eq!(
        app.stored_url(item.id).await.as_deref(),
        Some("https://example.com/old")
    );
}

#[tokio::test]
async fn test_invalid_nonce_stores_nothing() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    let editor = app.login_as("editor", Role::Editor).await;

    let response = app
        .server
        .post(&format!("/admin/posts/{}", item.id))
        .add_header("Cookie", editor.cookie.as_str())
        .form(&vec![
            (NONCE_FIELD, "0000000000"),
            (FIELD, "https://example.com/landing"),
        ])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(app.stored_url(item.id).await, None);
}

#[tokio::test]
async fn test_missing_field_leaves_link_unchanged() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    app.store_url(item.id, "https://example.com/old").await;
    let editor = app.login_as("editor", Role::Editor).await;
    let nonce = app.nonce(ACTION, &editor);

    let response = app
        .server
        .post(&format!("/admin/posts/{}", item.id))
        .add_header("Cookie", editor.cookie.as_str())
        .form(&vec![(NONCE_FIELD, nonce.as_str())])
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(
        app.stored_url(item.id).await.as_deref(),
        Some("https://example.com/old")
    );
}

#[tokio::test]
async fn test_save_without_capability_is_forbidden() {
    let app = common::create_test_app();
    let item = app.create_item("post", "Hello").await;
    let subscriber = app.login_as("reader", Role::Subscriber).await;
    let nonce = app.nonce(ACTION, &subscriber);

    let response = app
        .server
        .post(&format!("/admin/posts/{}", item.id))
        .add_header("Cookie", subscriber.cookie.as_str())
        .form(&vec![
            (NONCE_FIELD, nonce.as_str()),
            (FIELD, "https://example.com/landing"),
        ])
        .await;

    response.assert_status_forbidden();
    assert!(
        response
            .text()
            .contains("You do not have sufficient permissions to access this page.")
    );
    assert_eq!(app.stored_url(item.id).await, None);
}

#[tokio::test]
async fn test_unknown_item_is_not_found() {
    let app = common::create_test_app();
    let editor = app.login_as("editor", Role::Editor).await;

    app.server
        .get("/admin/posts/999/edit")
        .add_header("Cookie", editor.cookie.as_str())
        .await
        .assert_status_not_found();

    app.server
        .post("/admin/posts/999")
        .add_header("Cookie", editor.cookie.as_str())
        .form(&vec![(FIELD, "https://example.com")])
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_save_without_capability_on_unknown_item_is_forbidden() {
    let app = common::create_test_app();
    let subscriber = app.login_as("reader", Role::Subscriber).await;

    let response = app
        .server
        .post("/admin/posts/999")
        .add_header("Cookie", subscriber.cookie.as_str())
        .form(&vec![(FIELD, "https://example.com")])
        .await;

    response.assert_status_forbidden();
    assert!(
        response
            .text()
            .contains("You do not have sufficient permissions to access this page.")
    );
}
