// src/infrastructure/repositories/postgres_programs.rs
use super::map_sqlx;
use crate::domain::content::{
    ContentName, ContentReadStore, ContentUpdate, ContentWriteStore, NewContent, RecordId,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::program::{
    AcademicProgram, AcademicProgramFilter, AcademicPrograms, ProgramType,
};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, name, slug, program_type, duration, description, eligibility, \
     curriculum, fees, seats, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresProgramStore {
    pool: PgPool,
}

impl PostgresProgramStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProgramRow {
    id: i64,
    name: String,
    slug: String,
    program_type: String,
    duration: String,
    description: String,
    eligibility: String,
    curriculum: Option<String>,
    fees: Option<String>,
    seats: Option<i32>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProgramRow> for AcademicProgram {
    type Error = DomainError;

    fn try_from(row: ProgramRow) -> Result<Self, Self::Error> {
        Ok(AcademicProgram {
            id: RecordId::new(row.id)?,
            name: ContentName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            program_type: ProgramType::parse(&row.program_type)?,
            duration: row.duration,
            description: row.description,
            eligibility: row.eligibility,
            curriculum: row.curriculum,
            fees: row.fees,
            seats: row.seats,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContentWriteStore<AcademicPrograms> for PostgresProgramStore {
    async fn insert(&self, new: NewContent<AcademicPrograms>) -> DomainResult<AcademicProgram> {
        let NewContent {
            name,
            slug,
            draft,
            created_at,
            updated_at,
        } = new;

        let row = sqlx::query_as::<_, ProgramRow>(
            "INSERT INTO academic_programs (name, slug, program_type, duration, description, eligibility, curriculum, fees, seats, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING id, name, slug, program_type, duration, description, eligibility, curriculum, fees, seats, is_active, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(draft.program_type.as_str())
        .bind(draft.duration)
        .bind(draft.description)
        .bind(draft.eligibility)
        .bind(draft.curriculum)
        .bind(draft.fees)
        .bind(draft.seats)
        .bind(draft.is_active)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        AcademicProgram::try_from(row)
    }

    async fn update(
        &self,
        update: ContentUpdate<AcademicPrograms>,
    ) -> DomainResult<AcademicProgram> {
        let ContentUpdate {
            id,
            rename,
            patch,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE academic_programs SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(rename) = rename {
            builder.push(", name = ");
            builder.push_bind(String::from(rename.name));
            builder.push(", slug = ");
            builder.push_bind(String::from(rename.slug));
        }
        if let Some(program_type) = patch.program_type {
            builder.push(", program_type = ");
            builder.push_bind(program_type.as_str());
        }
        if let Some(duration) = patch.duration {
            builder.push(", duration = ");
            builder.push_bind(duration);
        }
        if let Some(description) = patch.description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(eligibility) = patch.eligibility {
            builder.push(", eligibility = ");
            builder.push_bind(eligibility);
        }
        if let Some(curriculum) = patch.curriculum {
            builder.push(", curriculum = ");
            builder.push_bind(curriculum);
        }
        if let Some(fees) = patch.fees {
            builder.push(", fees = ");
            builder.push_bind(fees);
        }
        if let Some(seats) = patch.seats {
            builder.push(", seats = ");
            builder.push_bind(seats);
        }
        if let Some(is_active) = patch.is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(COLUMNS);

        let row = builder
            .build_query_as::<ProgramRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("program not found".into()))?;

        AcademicProgram::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM academic_programs WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("program not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentReadStore<AcademicPrograms> for PostgresProgramStore {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<AcademicProgram>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM academic_programs WHERE id = ");
        builder.push_bind(i64::from(id));

        let row = builder
            .build_query_as::<ProgramRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(AcademicProgram::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<AcademicProgram>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM academic_programs WHERE slug = ");
        builder.push_bind(slug.as_str().to_owned());

        let row = builder
            .build_query_as::<ProgramRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(AcademicProgram::try_from).transpose()
    }

    async fn list(&self, filter: AcademicProgramFilter) -> DomainResult<Vec<AcademicProgram>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM academic_programs");

        let mut has_where = false;
        if !filter.include_inactive {
            builder.push(" WHERE is_active = TRUE");
            has_where = true;
        }
        if let Some(program_type) = filter.program_type {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("program_type = ");
            builder.push_bind(program_type.as_str());
        }
        builder.push(" ORDER BY name");

        let rows = builder
            .build_query_as::<ProgramRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(AcademicProgram::try_from).collect()
    }
}
