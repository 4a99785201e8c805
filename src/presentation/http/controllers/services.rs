// src/presentation/http/controllers/services.rs
use crate::application::dto::ClinicServiceDto;
use crate::domain::service::{ClinicServiceDraft, ClinicServiceFilter, ClinicServicePatch};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct ServiceListParams {
    #[serde(default)]
    pub include_inactive: bool,
    pub department_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateServiceRequest {
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub department_id: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub department_id: Option<i64>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

fn default_active() -> bool {
    true
}

#[utoipa::path(
    get,
    path = "/api/v1/services",
    params(
        ("include_inactive" = bool, Query, description = "Include deactivated services."),
        ("department_id" = Option<i64>, Query, description = "Only services of this department.")
    ),
    responses((status = 200, description = "All services.", body = [ClinicServiceDto])),
    tag = "Services"
)]
pub async fn list_services(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ServiceListParams>,
) -> HttpResult<Json<Vec<ClinicServiceDto>>> {
    let filter = ClinicServiceFilter {
        include_inactive: params.include_inactive,
        department_id: params.department_id,
    };
    let services = state
        .services
        .clinic_services
        .list(filter)
        .await
        .into_http()?;
    Ok(Json(services.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/services/{id}",
    responses(
        (status = 200, description = "Service by id.", body = ClinicServiceDto),
        (status = 404, description = "No service with this id.")
    ),
    tag = "Services"
)]
pub async fn get_service(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ClinicServiceDto>> {
    state
        .services
        .clinic_services
        .get(id)
        .await
        .into_http()
        .map(|s| Json(s.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/services/slug/{slug}",
    responses(
        (status = 200, description = "Service by slug.", body = ClinicServiceDto),
        (status = 404, description = "No service with this slug.")
    ),
    tag = "Services"
)]
pub async fn get_service_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ClinicServiceDto>> {
    state
        .services
        .clinic_services
        .get_by_slug(&slug)
        .await
        .into_http()
        .map(|s| Json(s.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/services",
    request_body = CreateServiceRequest,
    responses(
        (status = 200, description = "Service created.", body = ClinicServiceDto),
        (status = 400, description = "Name is empty or produces no slug."),
        (status = 409, description = "Another service already uses this name.")
    ),
    tag = "Services"
)]
pub async fn create_service(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateServiceRequest>,
) -> HttpResult<Json<ClinicServiceDto>> {
    let draft = ClinicServiceDraft {
        short_description: payload.short_description,
        description: payload.description,
        icon: payload.icon,
        image: payload.image,
        department_id: payload.department_id,
        is_active: payload.is_active,
        display_order: payload.display_order,
    };
    state
        .services
        .clinic_services
        .create(payload.name, draft)
        .await
        .into_http()
        .map(|s| Json(s.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/services/{id}",
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Service updated.", body = ClinicServiceDto),
        (status = 404, description = "No service with this id."),
        (status = 409, description = "Another service already uses this name.")
    ),
    tag = "Services"
)]
pub async fn update_service(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateServiceRequest>,
) -> HttpResult<Json<ClinicServiceDto>> {
    let patch = ClinicServicePatch {
        name: payload.name,
        short_description: payload.short_description,
        description: payload.description,
        icon: payload.icon,
        image: payload.image,
        department_id: payload.department_id,
        is_active: payload.is_active,
        display_order: payload.display_order,
    };
    state
        .services
        .clinic_services
        .update(id, patch)
        .await
        .into_http()
        .map(|s| Json(s.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/services/{id}",
    responses(
        (status = 200, description = "Service deleted; its slug is free for reuse."),
        (status = 404, description = "No service with this id.")
    ),
    tag = "Services"
)]
pub async fn delete_service(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .clinic_services
        .delete(id)
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}
