// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{blog, departments, faculty, programs, services},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/departments",
            get(departments::list_departments).post(departments::create_department),
        )
        .route(
            "/api/v1/departments/slug/{slug}",
            get(departments::get_department_by_slug),
        )
        .route(
            "/api/v1/departments/{id}",
            get(departments::get_department)
                .patch(departments::update_department)
                .delete(departments::delete_department),
        )
        .route(
            "/api/v1/services",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/api/v1/services/slug/{slug}",
            get(services::get_service_by_slug),
        )
        .route(
            "/api/v1/services/{id}",
            get(services::get_service)
                .patch(services::update_service)
                .delete(services::delete_service),
        )
        .route(
            "/api/v1/programs",
            get(programs::list_programs).post(programs::create_program),
        )
        .route(
            "/api/v1/programs/slug/{slug}",
            get(programs::get_program_by_slug),
        )
        .route(
            "/api/v1/programs/{id}",
            get(programs::get_program)
                .patch(programs::update_program)
                .delete(programs::delete_program),
        )
        .route(
            "/api/v1/blog",
            get(blog::list_posts).post(blog::create_post),
        )
        .route("/api/v1/blog/slug/{slug}", get(blog::get_post_by_slug))
        .route(
            "/api/v1/blog/{id}",
            get(blog::get_post)
                .patch(blog::update_post)
                .delete(blog::delete_post),
        )
        .route(
            "/api/v1/blog/{id}/publish",
            axum::routing::post(blog::set_publish_state),
        )
        .route(
            "/api/v1/faculty",
            get(faculty::list_faculty).post(faculty::create_faculty_member),
        )
        .route(
            "/api/v1/faculty/slug/{slug}",
            get(faculty::get_faculty_member_by_slug),
        )
        .route(
            "/api/v1/faculty/{id}",
            get(faculty::get_faculty_member)
                .patch(faculty::update_faculty_member)
                .delete(faculty::delete_faculty_member),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
