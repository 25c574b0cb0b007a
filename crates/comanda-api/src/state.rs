//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use comanda_auth::jwt::TokenCodec;
use comanda_auth::password::PasswordHasher;
use comanda_auth::principal::PrincipalLoader;
use comanda_core::config::AppConfig;
use comanda_service::account::AccountService;
use comanda_service::catalog::CatalogService;

use comanda_database::repositories::assignment::AssignmentRepository;
use comanda_database::repositories::category::CategoryRepository;
use comanda_database::repositories::client::ClientRepository;
use comanda_database::repositories::courier::CourierRepository;
use comanda_database::repositories::history::StatusHistoryRepository;
use comanda_database::repositories::order::OrderRepository;
use comanda_database::repositories::order_item::OrderItemRepository;
use comanda_database::repositories::product::ProductRepository;
use comanda_database::repositories::rating::RatingRepository;
use comanda_database::repositories::staff::KitchenStaffRepository;
use comanda_database::repositories::user::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration & infrastructure ───────────────────────
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token codec.
    pub token_codec: Arc<TokenCodec>,
    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
    /// Principal loader (token subject → authenticated principal).
    pub principal_loader: Arc<PrincipalLoader>,

    // ── Services ─────────────────────────────────────────────
    /// Account flows (login, registration).
    pub account_service: Arc<AccountService>,
    /// Cached menu catalog.
    pub catalog: Arc<CatalogService>,

    // ── Repositories ─────────────────────────────────────────
    /// Credential store.
    pub user_repo: Arc<UserRepository>,
    /// Clients.
    pub client_repo: Arc<ClientRepository>,
    /// Kitchen staff.
    pub staff_repo: Arc<KitchenStaffRepository>,
    /// Couriers.
    pub courier_repo: Arc<CourierRepository>,
    /// Menu categories.
    pub category_repo: Arc<CategoryRepository>,
    /// Menu products.
    pub product_repo: Arc<ProductRepository>,
    /// Orders.
    pub order_repo: Arc<OrderRepository>,
    /// Order line items.
    pub order_item_repo: Arc<OrderItemRepository>,
    /// Order status history.
    pub history_repo: Arc<StatusHistoryRepository>,
    /// Ratings.
    pub rating_repo: Arc<RatingRepository>,
    /// Delivery assignments.
    pub assignment_repo: Arc<AssignmentRepository>,
}

impl AppState {
    /// The configured lock-probe dwell.
    pub fn lock_dwell(&self) -> Duration {
        self.config.lock.dwell()
    }
}
