use crate::domain::faculty::FacultyMember;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FacultyMemberDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub designation: String,
    pub qualification: String,
    pub department_id: Option<i64>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FacultyMember> for FacultyMemberDto {
    fn from(member: FacultyMember) -> Self {
        Self {
            id: member.id.into(),
            name: member.name.into(),
            slug: member.slug.into(),
            designation: member.designation,
            qualification: member.qualification,
            department_id: member.department_id,
            email: member.email,
            specialization: member.specialization,
            bio: member.bio,
            is_active: member.is_active,
            display_order: member.display_order,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}
