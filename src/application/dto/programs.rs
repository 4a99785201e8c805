use crate::domain::program::AcademicProgram;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AcademicProgramDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub program_type: String,
    pub duration: String,
    pub description: String,
    pub eligibility: String,
    pub curriculum: Option<String>,
    pub fees: Option<String>,
    pub seats: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AcademicProgram> for AcademicProgramDto {
    fn from(program: AcademicProgram) -> Self {
        Self {
            id: program.id.into(),
            name: program.name.into(),
            slug: program.slug.into(),
            program_type: program.program_type.as_str().to_owned(),
            duration: program.duration,
            description: program.description,
            eligibility: program.eligibility,
            curriculum: program.curriculum,
            fees: program.fees,
            seats: program.seats,
            is_active: program.is_active,
            created_at: program.created_at,
            updated_at: program.updated_at,
        }
    }
}
