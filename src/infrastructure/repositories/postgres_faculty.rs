// src/infrastructure/repositories/postgres_faculty.rs
use super::map_sqlx;
use crate::domain::content::{
    ContentName, ContentReadStore, ContentUpdate, ContentWriteStore, NewContent, RecordId,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::faculty::{FacultyFilter, FacultyMember, FacultyMembers};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, name, slug, designation, qualification, department_id, email, \
     specialization, bio, is_active, display_order, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresFacultyStore {
    pool: PgPool,
}

impl PostgresFacultyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FacultyRow {
    id: i64,
    name: String,
    slug: String,
    designation: String,
    qualification: String,
    department_id: Option<i64>,
    email: Option<String>,
    specialization: Option<String>,
    bio: Option<String>,
    is_active: bool,
    display_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<FacultyRow> for FacultyMember {
    type Error = DomainError;

    fn try_from(row: FacultyRow) -> Result<Self, Self::Error> {
        Ok(FacultyMember {
            id: RecordId::new(row.id)?,
            name: ContentName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            designation: row.designation,
            qualification: row.qualification,
            department_id: row.department_id,
            email: row.email,
            specialization: row.specialization,
            bio: row.bio,
            is_active: row.is_active,
            display_order: row.display_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContentWriteStore<FacultyMembers> for PostgresFacultyStore {
    async fn insert(&self, new: NewContent<FacultyMembers>) -> DomainResult<FacultyMember> {
        let NewContent {
            name,
            slug,
            draft,
            created_at,
            updated_at,
        } = new;

        let row = sqlx::query_as::<_, FacultyRow>(
            "INSERT INTO faculty (name, slug, designation, qualification, department_id, email, specialization, bio, is_active, display_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING id, name, slug, designation, qualification, department_id, email, specialization, bio, is_active, display_order, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(draft.designation)
        .bind(draft.qualification)
        .bind(draft.department_id)
        .bind(draft.email)
        .bind(draft.specialization)
        .bind(draft.bio)
        .bind(draft.is_active)
        .bind(draft.display_order)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        FacultyMember::try_from(row)
    }

    async fn update(&self, update: ContentUpdate<FacultyMembers>) -> DomainResult<FacultyMember> {
        let ContentUpdate {
            id,
            rename,
            patch,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE faculty SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(rename) = rename {
            builder.push(", name = ");
            builder.push_bind(String::from(rename.name));
            builder.push(", slug = ");
            builder.push_bind(String::from(rename.slug));
        }
        if let Some(designation) = patch.designation {
            builder.push(", designation = ");
            builder.push_bind(designation);
        }
        if let Some(qualification) = patch.qualification {
            builder.push(", qualification = ");
            builder.push_bind(qualification);
        }
        if let Some(department_id) = patch.department_id {
            builder.push(", department_id = ");
            builder.push_bind(department_id);
        }
        if let Some(email) = patch.email {
            builder.push(", email = ");
            builder.push_bind(email);
        }
        if let Some(specialization) = patch.specialization {
            builder.push(", specialization = ");
            builder.push_bind(specialization);
        }
        if let Some(bio) = patch.bio {
            builder.push(", bio = ");
            builder.push_bind(bio);
        }
        if let Some(is_active) = patch.is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }
        if let Some(display_order) = patch.display_order {
            builder.push(", display_order = ");
            builder.push_bind(display_order);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(COLUMNS);

        let row = builder
            .build_query_as::<FacultyRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("faculty member not found".into()))?;

        FacultyMember::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM faculty WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("faculty member not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentReadStore<FacultyMembers> for PostgresFacultyStore {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<FacultyMember>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM faculty WHERE id = ");
        builder.push_bind(i64::from(id));

        let row = builder
            .build_query_as::<FacultyRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(FacultyMember::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<FacultyMember>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM faculty WHERE slug = ");
        builder.push_bind(slug.as_str().to_owned());

        let row = builder
            .build_query_as::<FacultyRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(FacultyMember::try_from).transpose()
    }

    async fn list(&self, filter: FacultyFilter) -> DomainResult<Vec<FacultyMember>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM faculty");

        let mut has_where = false;
        if !filter.include_inactive {
            builder.push(" WHERE is_active = TRUE");
            has_where = true;
        }
        if let Some(department_id) = filter.department_id {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("department_id = ");
            builder.push_bind(department_id);
        }
        builder.push(" ORDER BY display_order, name");

        let rows = builder
            .build_query_as::<FacultyRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(FacultyMember::try_from).collect()
    }
}
