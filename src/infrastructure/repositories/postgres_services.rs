// src/infrastructure/repositories/postgres_services.rs
use super::map_sqlx;
use crate::domain::content::{
    ContentName, ContentReadStore, ContentUpdate, ContentWriteStore, NewContent, RecordId,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::service::{
    ClinicService, ClinicServiceFilter, ClinicServices,
};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, name, slug, short_description, description, icon, image, \
     department_id, is_active, display_order, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresClinicServiceStore {
    pool: PgPool,
}

impl PostgresClinicServiceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ClinicServiceRow {
    id: i64,
    name: String,
    slug: String,
    short_description: String,
    description: String,
    icon: Option<String>,
    image: Option<String>,
    department_id: Option<i64>,
    is_active: bool,
    display_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ClinicServiceRow> for ClinicService {
    type Error = DomainError;

    fn try_from(row: ClinicServiceRow) -> Result<Self, Self::Error> {
        Ok(ClinicService {
            id: RecordId::new(row.id)?,
            name: ContentName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            short_description: row.short_description,
            description: row.description,
            icon: row.icon,
            image: row.image,
            department_id: row.department_id,
            is_active: row.is_active,
            display_order: row.display_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContentWriteStore<ClinicServices> for PostgresClinicServiceStore {
    async fn insert(&self, new: NewContent<ClinicServices>) -> DomainResult<ClinicService> {
        let NewContent {
            name,
            slug,
            draft,
            created_at,
            updated_at,
        } = new;

        let row = sqlx::query_as::<_, ClinicServiceRow>(
            "INSERT INTO services (name, slug, short_description, description, icon, image, department_id, is_active, display_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING id, name, slug, short_description, description, icon, image, department_id, is_active, display_order, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(draft.short_description)
        .bind(draft.description)
        .bind(draft.icon)
        .bind(draft.image)
        .bind(draft.department_id)
        .bind(draft.is_active)
        .bind(draft.display_order)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ClinicService::try_from(row)
    }

    async fn update(&self, update: ContentUpdate<ClinicServices>) -> DomainResult<ClinicService> {
        let ContentUpdate {
            id,
            rename,
            patch,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE services SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(rename) = rename {
            builder.push(", name = ");
            builder.push_bind(String::from(rename.name));
            builder.push(", slug = ");
            builder.push_bind(String::from(rename.slug));
        }
        if let Some(short_description) = patch.short_description {
            builder.push(", short_description = ");
            builder.push_bind(short_description);
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
        if let Some(department_id) = patch.department_id {
            builder.push(", department_id = ");
            builder.push_bind(department_id);
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
            .build_query_as::<ClinicServiceRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("service not found".into()))?;

        ClinicService::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("service not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentReadStore<ClinicServices> for PostgresClinicServiceStore {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<ClinicService>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM services WHERE id = ");
        builder.push_bind(i64::from(id));

        let row = builder
            .build_query_as::<ClinicServiceRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ClinicService::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ClinicService>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM services WHERE slug = ");
        builder.push_bind(slug.as_str().to_owned());

        let row = builder
            .build_query_as::<ClinicServiceRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ClinicService::try_from).transpose()
    }

    async fn list(&self, filter: ClinicServiceFilter) -> DomainResult<Vec<ClinicService>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM services");

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
            .build_query_as::<ClinicServiceRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ClinicService::try_from).collect()
    }
}
