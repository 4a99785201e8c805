// src/presentation/http/controllers/departments.rs
use crate::application::dto::DepartmentDto;
use crate::domain::department::{DepartmentDraft, DepartmentFilter, DepartmentPatch};
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
pub struct DepartmentListParams {
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

fn default_active() -> bool {
    true
}

#[utoipa::path(
    get,
    path = "/api/v1/departments",
    params(("include_inactive" = bool, Query, description = "Include deactivated departments.")),
    responses((status = 200, description = "All departments.", body = [DepartmentDto])),
    tag = "Departments"
)]
pub async fn list_departments(
    Extension(state): Extension<HttpState>,
    Query(params): Query<DepartmentListParams>,
) -> HttpResult<Json<Vec<DepartmentDto>>> {
    let filter = DepartmentFilter {
        include_inactive: params.include_inactive,
    };
    let departments = state.services.departments.list(filter).await.into_http()?;
    Ok(Json(departments.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/departments/{id}",
    responses(
        (status = 200, description = "Department by id.", body = DepartmentDto),
        (status = 404, description = "No department with this id.")
    ),
    tag = "Departments"
)]
pub async fn get_department(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<DepartmentDto>> {
    state
        .services
        .departments
        .get(id)
        .await
        .into_http()
        .map(|d| Json(d.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/departments/slug/{slug}",
    responses(
        (status = 200, description = "Department by slug.", body = DepartmentDto),
        (status = 404, description = "No department with this slug.")
    ),
    tag = "Departments"
)]
pub async fn get_department_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<DepartmentDto>> {
    state
        .services
        .departments
        .get_by_slug(&slug)
        .await
        .into_http()
        .map(|d| Json(d.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/departments",
    request_body = CreateDepartmentRequest,
    responses(
        (status = 200, description = "Department created.", body = DepartmentDto),
        (status = 400, description = "Name is empty or produces no slug."),
        (status = 409, description = "Another department already uses this name.")
    ),
    tag = "Departments"
)]
pub async fn create_department(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateDepartmentRequest>,
) -> HttpResult<Json<DepartmentDto>> {
    let draft = DepartmentDraft {
        description: payload.description,
        icon: payload.icon,
        image: payload.image,
        is_active: payload.is_active,
        display_order: payload.display_order,
    };
    state
        .services
        .departments
        .create(payload.name, draft)
        .await
        .into_http()
        .map(|d| Json(d.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/departments/{id}",
    request_body = UpdateDepartmentRequest,
    responses(
        (status = 200, description = "Department updated.", body = DepartmentDto),
        (status = 404, description = "No department with this id."),
        (status = 409, description = "Another department already uses this name.")
    ),
    tag = "Departments"
)]
pub async fn update_department(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> HttpResult<Json<DepartmentDto>> {
    let patch = DepartmentPatch {
        name: payload.name,
        description: payload.description,
        icon: payload.icon,
        image: payload.image,
        is_active: payload.is_active,
        display_order: payload.display_order,
    };
    state
        .services
        .departments
        .update(id, patch)
        .await
        .into_http()
        .map(|d| Json(d.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/departments/{id}",
    responses(
        (status = 200, description = "Department deleted; its slug is free for reuse."),
        (status = 404, description = "No department with this id.")
    ),
    tag = "Departments"
)]
pub async fn delete_department(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state.services.departments.delete(id).await.into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}
