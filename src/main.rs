//! ShopAdmin Server — multi-tenant e-commerce administration console
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use shopadmin_core::config::AppConfig;
use shopadmin_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("SHOPADMIN_ENV").unwrap_or_else(|_| "default".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ShopAdmin v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = shopadmin_database::DatabasePool::connect(&config.database).await?;
    shopadmin_database::migration::run_migrations(db.pool()).await?;
    let db_pool = db.into_pool();

    // ── Step 2: Image storage ────────────────────────────────────
    tracing::info!("Initializing image storage...");
    let image_store = Arc::new(shopadmin_storage::ImageStore::from_config(&config.storage).await?);

    // ── Step 3: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(shopadmin_database::repositories::UserRepository::new(
        db_pool.clone(),
    ));
    let tenant_repo = Arc::new(shopadmin_database::repositories::TenantRepository::new(
        db_pool.clone(),
    ));
    let category_repo = Arc::new(shopadmin_database::repositories::CategoryRepository::new(
        db_pool.clone(),
    ));
    let product_repo = Arc::new(shopadmin_database::repositories::ProductRepository::new(
        db_pool.clone(),
    ));
    let plan_repo = Arc::new(shopadmin_database::repositories::PlanRepository::new(
        db_pool.clone(),
    ));
    let subscription_repo = Arc::new(
        shopadmin_database::repositories::SubscriptionRepository::new(db_pool.clone()),
    );
    let faq_repo = Arc::new(shopadmin_database::repositories::FaqRepository::new(
        db_pool.clone(),
    ));
    let home_setting_repo = Arc::new(
        shopadmin_database::repositories::HomeSettingRepository::new(db_pool.clone()),
    );

    // ── Step 4: Auth primitives ──────────────────────────────────
    let password_hasher = Arc::new(shopadmin_auth::PasswordHasher::new());
    let password_validator = Arc::new(shopadmin_auth::PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(shopadmin_auth::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(shopadmin_auth::JwtDecoder::new(&config.auth));

    // ── Step 5: Services ─────────────────────────────────────────
    let auth_service = Arc::new(shopadmin_service::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
    ));
    let user_service = Arc::new(shopadmin_service::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&subscription_repo),
        Arc::clone(&plan_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let tenant_service = Arc::new(shopadmin_service::TenantService::new(Arc::clone(
        &tenant_repo,
    )));
    let category_service = Arc::new(shopadmin_service::CategoryService::new(Arc::clone(
        &category_repo,
    )));
    let product_service = Arc::new(shopadmin_service::ProductService::new(
        Arc::clone(&product_repo),
        Arc::clone(&category_repo),
        Arc::clone(&subscription_repo),
        Arc::clone(&plan_repo),
    ));
    let plan_service = Arc::new(shopadmin_service::PlanService::new(Arc::clone(&plan_repo)));
    let subscription_service = Arc::new(shopadmin_service::SubscriptionService::new(
        Arc::clone(&subscription_repo),
        Arc::clone(&plan_repo),
        Arc::clone(&tenant_repo),
    ));
    let faq_service = Arc::new(shopadmin_service::FaqService::new(Arc::clone(&faq_repo)));
    let home_setting_service = Arc::new(shopadmin_service::HomeSettingService::new(Arc::clone(
        &home_setting_repo,
    )));
    let upload_service = Arc::new(shopadmin_service::UploadService::new(Arc::clone(
        &image_store,
    )));

    // ── Step 6: HTTP server ──────────────────────────────────────
    let app_state = shopadmin_api::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        jwt_decoder: Arc::clone(&jwt_decoder),
        auth_service,
        user_service,
        tenant_service,
        category_service,
        product_service,
        plan_service,
        subscription_service,
        faq_service,
        home_setting_service,
        upload_service,
    };

    let app = shopadmin_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("ShopAdmin server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("ShopAdmin server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
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
}
