use crate::domain::service::ClinicService;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClinicServiceDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub department_id: Option<i64>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClinicService> for ClinicServiceDto {
    fn from(service: ClinicService) -> Self {
        Self {
            id: service.id.into(),
            name: service.name.into(),
            slug: service.slug.into(),
            short_description: service.short_description,
            description: service.description,
            icon: service.icon,
            image: service.image,
            department_id: service.department_id,
            is_active: service.is_active,
            display_order: service.display_order,
            created_at: service.created_at,
            updated_at: service.updated_at,
        }
    }
}
