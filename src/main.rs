//! Comanda server — restaurant-ordering backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use comanda_core::config::AppConfig;
use comanda_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("COMANDA_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Comanda v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────
    let pool = comanda_database::connection::create_pool(&config.database).await?;
    comanda_database::migration::run_migrations(&pool).await?;

    // ── Repositories ─────────────────────────────────────────
    let user_repo = Arc::new(comanda_database::repositories::user::UserRepository::new(
        pool.clone(),
    ));
    let client_repo = Arc::new(
        comanda_database::repositories::client::ClientRepository::new(pool.clone()),
    );
    let staff_repo = Arc::new(
        comanda_database::repositories::staff::KitchenStaffRepository::new(pool.clone()),
    );
    let courier_repo = Arc::new(
        comanda_database::repositories::courier::CourierRepository::new(pool.clone()),
    );
    let category_repo = Arc::new(
        comanda_database::repositories::category::CategoryRepository::new(pool.clone()),
    );
    let product_repo = Arc::new(
        comanda_database::repositories::product::ProductRepository::new(pool.clone()),
    );
    let order_repo = Arc::new(comanda_database::repositories::order::OrderRepository::new(
        pool.clone(),
    ));
    let order_item_repo = Arc::new(
        comanda_database::repositories::order_item::OrderItemRepository::new(pool.clone()),
    );
    let history_repo = Arc::new(
        comanda_database::repositories::history::StatusHistoryRepository::new(pool.clone()),
    );
    let rating_repo = Arc::new(
        comanda_database::repositories::rating::RatingRepository::new(pool.clone()),
    );
    let assignment_repo = Arc::new(
        comanda_database::repositories::assignment::AssignmentRepository::new(pool.clone()),
    );

    // ── Auth system ──────────────────────────────────────────
    let token_codec = Arc::new(comanda_auth::jwt::TokenCodec::new(&config.auth));
    let password_hasher = Arc::new(comanda_auth::password::PasswordHasher::new());
    let principal_loader = Arc::new(comanda_auth::principal::PrincipalLoader::new(Arc::clone(
        &user_repo,
    )));

    // ── Services ─────────────────────────────────────────────
    let account_service = Arc::new(comanda_service::account::AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&token_codec),
    ));
    let catalog = Arc::new(comanda_service::catalog::CatalogService::new(
        Arc::clone(&product_repo),
        Arc::clone(&category_repo),
    ));

    if config.auth.seed_default_admin {
        account_service.ensure_default_admin().await?;
    }

    // ── HTTP server ──────────────────────────────────────────
    let state = comanda_api::state::AppState {
        config: Arc::new(config.clone()),
        pool: pool.clone(),
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
    };

    let app = comanda_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Comanda server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    pool.close().await;
    tracing::info!("Comanda server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
