//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use comanda_api::state::AppState;
use comanda_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, LockConfig, LoggingConfig, ServerConfig,
};
use comanda_service::account::Registration;

/// Dwell used by lock tests, in seconds. Short enough to keep the suite
/// fast, long enough to measure.
pub const TEST_DWELL_SECONDS: u64 = 2;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generates a name unique across tests and runs.
pub fn unique(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{}_{n}", std::process::id())
}

/// A captured HTTP response.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test application context.
pub struct TestApp {
    /// The axum router for making test requests.
    pub router: Router,
    /// Full application state for direct repository access.
    pub state: AppState,
    /// Database pool for direct queries.
    pub pool: PgPool,
}

impl TestApp {
    /// Builds a test application against the database named by
    /// `COMANDA_TEST_DATABASE_URL`, or `None` when the variable is unset.
    pub async fn try_new() -> Option<Self> {
        let url = std::env::var("COMANDA_TEST_DATABASE_URL").ok()?;

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 10,
                idle_timeout_seconds: 300,
            },
            auth: AuthConfig {
                jwt_secret: "integration-test-secret".to_string(),
                token_ttl_minutes: 60,
                seed_default_admin: false,
            },
            lock: LockConfig {
                dwell_seconds: TEST_DWELL_SECONDS,
            },
            logging: LoggingConfig::default(),
        };

        let pool = comanda_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        comanda_database::migration::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let state = build_state(config, pool.clone());
        let router = comanda_api::router::build_router(state.clone());

        Some(Self {
            router,
            state,
            pool,
        })
    }

    /// Issues a request against the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Registers an account directly through the account service.
    pub async fn create_test_user(&self, username: &str, password: &str, roles: &[&str]) {
        self.state
            .account_service
            .register(Registration {
                username: username.to_string(),
                email: format!("{username}@test.local"),
                password: password.to_string(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                roles: Some(roles.iter().map(|r| r.to_string()).collect()),
            })
            .await
            .expect("Failed to create test user");
    }

    /// Logs in and returns the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed");
        response.body["token"]
            .as_str()
            .expect("login response carries a token")
            .to_string()
    }
}

/// Wires repositories, services, and state the way `main` does.
fn build_state(config: AppConfig, pool: PgPool) -> AppState {
    use comanda_database::repositories;

    let user_repo = Arc::new(repositories::user::UserRepository::new(pool.clone()));
    let client_repo = Arc::new(repositories::client::ClientRepository::new(pool.clone()));
    let staff_repo = Arc::new(repositories::staff::KitchenStaffRepository::new(
        pool.clone(),
    ));
    let courier_repo = Arc::new(repositories::courier::CourierRepository::new(pool.clone()));
    let category_repo = Arc::new(repositories::category::CategoryRepository::new(
        pool.clone(),
    ));
    let product_repo = Arc::new(repositories::product::ProductRepository::new(pool.clone()));
    let order_repo = Arc::new(repositories::order::OrderRepository::new(pool.clone()));
    let order_item_repo = Arc::new(repositories::order_item::OrderItemRepository::new(
        pool.clone(),
    ));
    let history_repo = Arc::new(repositories::history::StatusHistoryRepository::new(
        pool.clone(),
    ));
    let rating_repo = Arc::new(repositories::rating::RatingRepository::new(pool.clone()));
    let assignment_repo = Arc::new(repositories::assignment::AssignmentRepository::new(
        pool.clone(),
    ));

    let token_codec = Arc::new(comanda_auth::jwt::TokenCodec::new(&config.auth));
    let password_hasher = Arc::new(comanda_auth::password::PasswordHasher::new());
    let principal_loader = Arc::new(comanda_auth::principal::PrincipalLoader::new(Arc::clone(
        &user_repo,
    )));

    let account_service = Arc::new(comanda_service::account::AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&token_codec),
    ));
    let catalog = Arc::new(comanda_service::catalog::CatalogService::new(
        Arc::clone(&product_repo),
        Arc::clone(&category_repo),
    ));

    AppState {
        config: Arc::new(config),
        pool,
        token_codec,
        password_hasher,
        principal_loader,
        account_service,
        catalog,
        user_repo,
        client_repo,
        staff_repo,
        courier_repo,
        category_repo,
        product_repo,
        order_repo,
        order_item_repo,
        history_repo,
        rating_repo,
        assignment_repo,
    }
}

/// Skips the current test when no test database is configured.
#[macro_export]
macro_rules! require_test_db {
    () => {
        match $crate::helpers::TestApp::try_new().await {
            Some(app) => app,
            None => {
                eprintln!("skipping: COMANDA_TEST_DATABASE_URL not set");
                return;
            }
        }
    };
}
