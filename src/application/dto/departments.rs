use crate::domain::department::Department;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartmentDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Department> for DepartmentDto {
    fn from(department: Department) -> Self {
        Self {
            id: department.id.into(),
            name: department.name.into(),
            slug: department.slug.into(),
            description: department.description,
            icon: department.icon,
            image: department.image,
            is_active: department.is_active,
            display_order: department.display_order,
            created_at: department.created_at,
            updated_at: department.updated_at,
        }
    }
}
