use axum::response::{IntoResponse, Json};
use utoipa::OpenApi;

use super::{health, jobs, users};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        jobs::list_jobs,
        jobs::create_job,
        jobs::get_job,
        jobs::update_job,
        jobs::delete_job,
        users::signup,
        users::login,
    ),
    tags((name = "jobs", description = "Job listing API"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
