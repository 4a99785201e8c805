// src/infrastructure/repositories/postgres_departments.rs
use super::map_sqlx;
use crate::domain::content::{
    ContentName, ContentReadStore, ContentUpdate, ContentWriteStore, NewContent, RecordId,
};
use crate::domain::department::{Department, DepartmentFilter, Departments};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str =
    "id, name, slug, description, icon, image, is_active, display_order, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresDepartmentStore {
    pool: PgPool,
}

impl PostgresDepartmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DepartmentRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    icon: Option<String>,
    image: Option<String>,
    is_active: bool,
    display_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DepartmentRow> for Department {
    type Error = DomainError;

    fn try_from(row: DepartmentRow) -> Result<Self, Self::Error> {
        Ok(Department {
            id: RecordId::new(row.id)?,
            name: ContentName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            icon: row.icon,
            image: row.image,
            is_active: row.is_active,
            display_order: row.display_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContentWriteStore<Departments> for PostgresDepartmentStore {
    async fn insert(&self, new: NewContent<Departments>) -> DomainResult<Department> {
        let NewContent {
            name,
            slug,
            draft,
            created_at,
            updated_at,
        } = new;

        let row = sqlx::query_as::<_, DepartmentRow>(
            "INSERT INTO departments (name, slug, description, icon, image, is_active, display_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, name, slug, description, icon, image, is_active, display_order, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(draft.description)
        .bind(draft.icon)
        .bind(draft.image)
        .bind(draft.is_active)
        .bind(draft.display_order)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Department::try_from(row)
    }

    async fn update(&self, update: ContentUpdate<Departments>) -> DomainResult<Department> {
        let ContentUpdate {
            id,
            rename,
            patch,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE departments SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(rename) = rename {
            builder.push(", name = ");
            builder.push_bind(String::from(rename.name));
            builder.push(", slug = ");
            builder.push_bind(String::from(rename.slug));
        }
        if let Some(description) = patch.description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(icon) = patch.icon {
            builder.push(", icon = ");
            builder.push_bind(icon);
        }
        if let Some(image) = patch.image {
            builder.push(", image = ");
            builder.push_bind(image);
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
            .build_query_as::<DepartmentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("department not found".into()))?;

        Department::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("department not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentReadStore<Departments> for PostgresDepartmentStore {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Department>> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, name, slug, description, icon, image, is_active, display_order, created_at, updated_at
             FROM departments WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Department::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Department>> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, name, slug, description, icon, image, is_active, display_order, created_at, updated_at
             FROM departments WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Department::try_from).transpose()
    }

    async fn list(&self, filter: DepartmentFilter) -> DomainResult<Vec<Department>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM departments");
        if !filter.include_inactive {
            builder.push(" WHERE is_active = TRUE");
        }
        builder.push(" ORDER BY display_order, name");

        let rows = builder
            .build_query_as::<DepartmentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Department::try_from).collect()
    }
}
