// tests/support/helpers.rs
use super::mocks::{
    CapturingNotifier, MemoryStore, QueuedSlugGenerator, StrictPasswordHasher, TestTokenManager,
    TickingClock,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use recipe_core::application::{
    commands::users::{
        AccountSettings, ActivateAccountCommand, LoginUserCommand, RegisterUserCommand,
    },
    dto::AuthenticatedUser,
    ports::util::SlugGenerator,
    services::{ApplicationDependencies, ApplicationServices, ApplicationSettings},
};
use recipe_core::infrastructure::security::{
    activation::HmacActivationTokens, session_store::InMemorySessionRevocationStore,
};
use recipe_core::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_PASSWORD: &str = "s3cret-pass";
pub const ACTIVATION_SECRET: &str = "test-activation-secret-0123456789abcdef";
pub const PUBLIC_BASE_URL: &str = "http://recipes.test";

/// Application services wired to in-memory adapters, plus handles to
/// inspect those adapters.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<MemoryStore>,
    pub notifier: Arc<CapturingNotifier>,
}

pub struct TestAppBuilder {
    slugger: Arc<dyn SlugGenerator>,
    slug_max_attempts: u32,
    activation_redirect_url: Option<String>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            slugger: Arc::new(QueuedSlugGenerator::default()),
            slug_max_attempts: 16,
            activation_redirect_url: None,
        }
    }
}

impl TestAppBuilder {
    pub fn with_suffixes(mut self, suffixes: &[&str]) -> Self {
        self.slugger = Arc::new(QueuedSlugGenerator::new(suffixes));
        self
    }

    pub fn with_slugger(mut self, slugger: Arc<dyn SlugGenerator>) -> Self {
        self.slugger = slugger;
        self
    }

    pub fn with_slug_max_attempts(mut self, attempts: u32) -> Self {
        self.slug_max_attempts = attempts;
        self
    }

    pub fn with_activation_redirect(mut self, url: &str) -> Self {
        self.activation_redirect_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> TestApp {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(CapturingNotifier::default());

        let deps = ApplicationDependencies {
            user_repo: store.clone(),
            category_repo: store.clone(),
            recipe_write_repo: store.clone(),
            recipe_read_repo: store.clone(),
            review_repo: store.clone(),
            favourite_repo: store.clone(),
            slug_lookup: store.clone(),
            password_hasher: Arc::new(StrictPasswordHasher),
            token_manager: Arc::new(TestTokenManager::default()),
            activation_tokens: Arc::new(HmacActivationTokens::new(ACTIVATION_SECRET)),
            notifier: notifier.clone(),
            session_revocation_store: Arc::new(InMemorySessionRevocationStore::new()),
            clock: Arc::new(TickingClock::default()),
            slugger: self.slugger,
        };
        let settings = ApplicationSettings {
            account: AccountSettings {
                public_base_url: PUBLIC_BASE_URL.into(),
                activation_redirect_url: self.activation_redirect_url,
            },
            slug_max_attempts: self.slug_max_attempts,
        };

        TestApp {
            services: Arc::new(ApplicationServices::new(deps, settings)),
            store,
            notifier,
        }
    }
}

impl TestApp {
    pub fn new() -> Self {
        TestAppBuilder::default().build()
    }

    pub fn builder() -> TestAppBuilder {
        TestAppBuilder::default()
    }

    pub fn router(&self) -> axum::Router {
        build_router_with_rate_limiter(HttpState::new(Arc::clone(&self.services)), false)
    }

    /// Registers an account without activating it.
    pub async fn register(&self, username: &str) {
        self.services
            .user_commands
            .register(RegisterUserCommand {
                username: username.into(),
                first_name: "Test".into(),
                last_name: "Cook".into(),
                email: format!("{username}@example.com"),
                password: TEST_PASSWORD.into(),
                confirm_password: TEST_PASSWORD.into(),
            })
            .await
            .expect("register");
    }

    pub async fn activate(&self, username: &str) {
        let (uid, token) = self
            .notifier
            .activation_parts(username)
            .expect("activation link sent");
        self.services
            .user_commands
            .activate(ActivateAccountCommand { uid, token })
            .await
            .expect("activate");
    }

    /// Registers, activates and logs in; returns the bearer token.
    pub async fn sign_up(&self, username: &str) -> String {
        self.register(username).await;
        self.activate(username).await;
        self.services
            .user_commands
            .login(LoginUserCommand {
                username: username.into(),
                password: TEST_PASSWORD.into(),
            })
            .await
            .expect("login")
            .token
    }

    pub async fn actor(&self, token: &str) -> AuthenticatedUser {
        self.services.authenticate(token).await.expect("authenticate")
    }
}

pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response")
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an error body with the expected status and reason.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = json_body(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message"
    );
}
