#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum_test::TestServer;
use link_target_controller::domain::entities::{
    ContentItem, ContentType, NewContentItem, NewContentType, Role,
};
use link_target_controller::domain::repositories::{LinkMetaRepository, OptionRepository};
use link_target_controller::infrastructure::Repositories;
use link_target_controller::routes::router;
use link_target_controller::state::{AppState, ServiceSettings};
use std::net::SocketAddr;
use tower::Layer;

pub const TEST_SECRET: &str = "test-signing-secret";

/// Inserts a fixed peer address so the per-IP rate limiter can key requests.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// A running test server over a fresh in-memory store.
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub repos: Repositories,
}

/// A logged-in caller: the raw cookie value and the caller id nonces bind to.
pub struct Session {
    pub caller_id: i64,
    pub cookie: String,
}

pub fn create_test_app() -> TestApp {
    let repos = Repositories::in_memory();
    let state = AppState::new(
        repos.clone(),
        ServiceSettings {
            signing_secret: TEST_SECRET.to_string(),
            ..ServiceSettings::default()
        },
    );

    let app = router(state.clone()).layer(MockConnectInfoLayer);
    let server = TestServer::new(app).unwrap();

    TestApp {
        server,
        state,
        repos,
    }
}

impl TestApp {
    pub async fn login_as(&self, name: &str, role: Role) -> Session {
        let raw = format!("token-{name}");
        let token = self
            .state
            .auth_service
            .register_token(name, role, &raw)
            .await
            .unwrap();

        Session {
            caller_id: token.id,
            cookie: format!("auth_token={raw}"),
        }
    }

    pub async fn register_type(&self, slug: &str, label: &str, public: bool) -> ContentType {
        self.state
            .content_service
            .register_type(NewContentType {
                slug: slug.to_string(),
                label: label.to_string(),
                public,
                builtin: false,
            })
            .await
            .unwrap()
    }

    pub async fn create_item(&self, content_type: &str, title: &str) -> ContentItem {
        self.state
            .content_service
            .create_item(NewContentItem {
                content_type: content_type.to_string(),
                title: title.to_string(),
                body: format!("Body of {title}"),
            })
            .await
            .unwrap()
    }

    pub async fn stored_url(&self, content_id: i64) -> Option<String> {
        self.repos.link_meta.get_url(content_id).await.unwrap()
    }

    pub async fn stored_selection(&self) -> Option<serde_json::Value> {
        self.repos
            .options
            .get_option("custom-post-types")
            .await
            .unwrap()
    }

    pub async fn store_selection(&self, value: serde_json::Value) {
        self.repos
            .options
            .update_option("custom-post-types", value)
            .await
            .unwrap();
    }

    pub async fn store_url(&self, content_id: i64, url: &str) {
        self.repos.link_meta.put_url(content_id, url).await.unwrap();
    }

    pub fn nonce(&self, action: &str, session: &Session) -> String {
        self.state.nonce_service.create(action, session.caller_id)
    }
}
