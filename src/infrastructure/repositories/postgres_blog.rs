// src/infrastructure/repositories/postgres_blog.rs
use super::map_sqlx;
use crate::domain::blog::{self, BlogPost, BlogPostFilter, BlogPosts};
use crate::domain::content::{
    ContentName, ContentReadStore, ContentUpdate, ContentWriteStore, NewContent, RecordId,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, title, slug, excerpt, content, author, category, tags, \
     is_published, published_at, reading_time, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresBlogStore {
    pool: PgPool,
}

impl PostgresBlogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogPostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    author: String,
    category: String,
    tags: Vec<String>,
    is_published: bool,
    published_at: Option<DateTime<Utc>>,
    reading_time: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BlogPostRow> for BlogPost {
    type Error = DomainError;

    fn try_from(row: BlogPostRow) -> Result<Self, Self::Error> {
        Ok(BlogPost {
            id: RecordId::new(row.id)?,
            title: ContentName::new(row.title)?,
            slug: Slug::new(row.slug)?,
            excerpt: row.excerpt,
            content: row.content,
            author: row.author,
            category: row.category,
            tags: row.tags,
            is_published: row.is_published,
            published_at: row.published_at,
            reading_time: row.reading_time,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContentWriteStore<BlogPosts> for PostgresBlogStore {
    async fn insert(&self, new: NewContent<BlogPosts>) -> DomainResult<BlogPost> {
        let NewContent {
            name,
            slug,
            draft,
            created_at,
            updated_at,
        } = new;

        let reading_time = blog::reading_time_minutes(&draft.content);
        let published_at = draft.publish.then_some(created_at);

        let row = sqlx::query_as::<_, BlogPostRow>(
            "INSERT INTO blog_posts (title, slug, excerpt, content, author, category, tags, is_published, published_at, reading_time, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING id, title, slug, excerpt, content, author, category, tags, is_published, published_at, reading_time, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(draft.excerpt)
        .bind(&draft.content)
        .bind(draft.author)
        .bind(draft.category)
        .bind(draft.tags)
        .bind(draft.publish)
        .bind(published_at)
        .bind(reading_time)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        BlogPost::try_from(row)
    }

    async fn update(&self, update: ContentUpdate<BlogPosts>) -> DomainResult<BlogPost> {
        let ContentUpdate {
            id,
            rename,
            patch,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE blog_posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(rename) = rename {
            builder.push(", title = ");
            builder.push_bind(String::from(rename.name));
            builder.push(", slug = ");
            builder.push_bind(String::from(rename.slug));
        }
        if let Some(excerpt) = patch.excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(content) = patch.content {
            let reading_time = blog::reading_time_minutes(&content);
            builder.push(", content = ");
            builder.push_bind(content);
            builder.push(", reading_time = ");
            builder.push_bind(reading_time);
        }
        if let Some(author) = patch.author {
            builder.push(", author = ");
            builder.push_bind(author);
        }
        if let Some(category) = patch.category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(tags) = patch.tags {
            builder.push(", tags = ");
            builder.push_bind(tags);
        }
        if let Some(publish) = patch.publish {
            builder.push(", is_published = ");
            builder.push_bind(publish);
            builder.push(", published_at = ");
            builder.push_bind(publish.then_some(updated_at));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(COLUMNS);

        let row = builder
            .build_query_as::<BlogPostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("blog post not found".into()))?;

        BlogPost::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("blog post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentReadStore<BlogPosts> for PostgresBlogStore {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<BlogPost>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM blog_posts WHERE id = ");
        builder.push_bind(i64::from(id));

        let row = builder
            .build_query_as::<BlogPostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM blog_posts WHERE slug = ");
        builder.push_bind(slug.as_str().to_owned());

        let row = builder
            .build_query_as::<BlogPostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn list(&self, filter: BlogPostFilter) -> DomainResult<Vec<BlogPost>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM blog_posts");

        let mut has_where = false;
        if !filter.include_drafts {
            builder.push(" WHERE is_published = TRUE");
            has_where = true;
        }
        if let Some(category) = filter.category {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("category = ");
            builder.push_bind(category);
        }
        builder.push(" ORDER BY published_at DESC NULLS LAST, id DESC");

        let rows = builder
            .build_query_as::<BlogPostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(BlogPost::try_from).collect()
    }
}
