//! Shared test helpers for integration tests.

use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use shopadmin_core::config::AppConfig;
use shopadmin_entity::tenant::{CreateTenant, Tenant};
use shopadmin_entity::user::{CreateUser, User, UserRole};
use shopadmin_storage::{ImageStore, LocalImageStorage};

/// A response captured from the router.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
    // Holds the upload directory for the lifetime of the test.
    _upload_dir: tempfile::TempDir,
}

impl TestApp {
    /// Create a new test application, or `None` when `TEST_DATABASE_URL`
    /// is not set.
    pub async fn new() -> Option<Self> {
        let url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("TEST_DATABASE_URL not set, skipping integration test");
                return None;
            }
        };

        let mut config = AppConfig::load("default").expect("Failed to load test config");
        config.database.url = url;
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let db = shopadmin_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        shopadmin_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");
        let db_pool = db.into_pool();

        Self::clean_database(&db_pool).await;

        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");
        let provider = Arc::new(
            LocalImageStorage::new(upload_dir.path().to_str().expect("Non-UTF8 temp path"))
                .await
                .expect("Failed to init storage"),
        );
        let image_store = Arc::new(ImageStore::with_provider(
            provider,
            "/static",
            "uploads",
            config.storage.max_image_bytes,
        ));

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

        let password_hasher = Arc::new(shopadmin_auth::PasswordHasher::new());
        let password_validator = Arc::new(shopadmin_auth::PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(shopadmin_auth::JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(shopadmin_auth::JwtDecoder::new(&config.auth));

        let state = shopadmin_api::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            jwt_decoder: Arc::clone(&jwt_decoder),
            auth_service: Arc::new(shopadmin_service::AuthService::new(
                Arc::clone(&user_repo),
                Arc::clone(&password_hasher),
                Arc::clone(&jwt_encoder),
                Arc::clone(&jwt_decoder),
            )),
            user_service: Arc::new(shopadmin_service::UserService::new(
                Arc::clone(&user_repo),
                Arc::clone(&subscription_repo),
                Arc::clone(&plan_repo),
                Arc::clone(&password_hasher),
                Arc::clone(&password_validator),
            )),
            tenant_service: Arc::new(shopadmin_service::TenantService::new(Arc::clone(
                &tenant_repo,
            ))),
            category_service: Arc::new(shopadmin_service::CategoryService::new(Arc::clone(
                &category_repo,
            ))),
            product_service: Arc::new(shopadmin_service::ProductService::new(
                Arc::clone(&product_repo),
                Arc::clone(&category_repo),
                Arc::clone(&subscription_repo),
                Arc::clone(&plan_repo),
            )),
            plan_service: Arc::new(shopadmin_service::PlanService::new(Arc::clone(&plan_repo))),
            subscription_service: Arc::new(shopadmin_service::SubscriptionService::new(
                Arc::clone(&subscription_repo),
                Arc::clone(&plan_repo),
                Arc::clone(&tenant_repo),
            )),
            faq_service: Arc::new(shopadmin_service::FaqService::new(Arc::clone(&faq_repo))),
            home_setting_service: Arc::new(shopadmin_service::HomeSettingService::new(
                Arc::clone(&home_setting_repo),
            )),
            upload_service: Arc::new(shopadmin_service::UploadService::new(Arc::clone(
                &image_store,
            ))),
        };

        let router = shopadmin_api::build_router(state);

        Some(Self {
            router,
            db_pool,
            config,
            _upload_dir: upload_dir,
        })
    }

    /// Truncate every table so each test starts from an empty database.
    async fn clean_database(pool: &PgPool) {
        sqlx::query(
            "TRUNCATE home_settings, faqs, products, categories, tenant_subscriptions, \
             subscription_plans, users, tenants CASCADE",
        )
        .execute(pool)
        .await
        .expect("Failed to clean database");
    }

    /// Send a request through the router and capture the JSON response.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

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

    /// Insert a user directly through the repository layer.
    pub async fn create_test_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
        tenant_id: Option<Uuid>,
    ) -> User {
        let hasher = shopadmin_auth::PasswordHasher::new();
        let repo = shopadmin_database::repositories::UserRepository::new(self.db_pool.clone());
        repo.create(&CreateUser {
            username: username.to_string(),
            email: Some(format!("{username}@example.com")),
            password_hash: hasher
                .hash_password(password)
                .expect("Failed to hash password"),
            display_name: None,
            role: UserRole::from_str(role).expect("Invalid role"),
            tenant_id,
            created_by: None,
            user_ip: None,
        })
        .await
        .expect("Failed to create test user")
    }

    /// Insert a tenant directly through the repository layer.
    pub async fn create_test_tenant(&self, name: &str) -> Tenant {
        let repo = shopadmin_database::repositories::TenantRepository::new(self.db_pool.clone());
        repo.create(&CreateTenant {
            name: name.to_string(),
            display_name: format!("{name} shop"),
            contact_email: None,
            logo_url: None,
            created_by: None,
            user_ip: None,
        })
        .await
        .expect("Failed to create test tenant")
    }

    /// Log in and return the access token.
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
        response.body["data"]["access_token"]
            .as_str()
            .expect("No access token in login response")
            .to_string()
    }
}
