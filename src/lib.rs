pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::database::{
    InMemoryJobRepository, InMemoryUserRepository, JobRepository, PgJobRepository,
    PgUserRepository, UserRepository,
};
use crate::services::{job_service::JobService, user_service::UserService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub job_service: JobService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(
        config: Config,
        jobs: Arc<dyn JobRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        let job_service = JobService::new(jobs);
        let user_service = UserService::new(users, &config.jwt_secret, config.token_ttl_hours);

        Self {
            config: Arc::new(config),
            job_service,
            user_service,
        }
    }

    pub fn postgres(config: Config, pool: PgPool) -> Self {
        Self::new(
            config,
            Arc::new(PgJobRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
        )
    }

    pub fn in_memory(config: Config) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryJobRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        )
    }
}

/// Builds the full HTTP surface. Job routes sit behind the bearer-token gate
/// when `require_auth` is set; signup, login, health and docs never do.
pub fn build_router(state: AppState) -> Router {
    let mut job_api = Router::new()
        .route(
            "/api/jobs",
            get(routes::jobs::list_jobs).post(routes::jobs::create_job),
        )
        .route(
            "/api/jobs/:id",
            get(routes::jobs::get_job)
                .put(routes::jobs::update_job)
                .delete(routes::jobs::delete_job),
        );
    if state.config.require_auth {
        job_api = job_api.layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_bearer_auth,
        ));
    }

    let user_api = Router::new()
        .route("/api/users/signup", axum::routing::post(routes::users::signup))
        .route("/api/users/login", axum::routing::post(routes::users::login));

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api-docs/openapi.json", get(routes::docs::openapi_json))
        .merge(job_api)
        .merge(user_api)
        .with_state(state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http())
}
