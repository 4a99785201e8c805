// src/domain/blog.rs
use crate::domain::content::{ContentKind, ContentName, ContentPatch, RecordId, SluggedRecord};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time for a post body, in whole minutes. Recomputed
/// whenever the content changes; never reported as zero.
pub fn reading_time_minutes(content: &str) -> i32 {
    let words = content.split_whitespace().count();
    i32::try_from(words.div_ceil(WORDS_PER_MINUTE).max(1)).unwrap_or(i32::MAX)
}

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub id: RecordId,
    pub title: ContentName,
    pub slug: Slug,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub reading_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SluggedRecord for BlogPost {
    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        self.title.as_str()
    }

    fn slug(&self) -> &Slug {
        &self.slug
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlogPostDraft {
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub publish: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub publish: Option<bool>,
}

impl ContentPatch for BlogPostPatch {
    fn new_name(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlogPostFilter {
    pub include_drafts: bool,
    pub category: Option<String>,
}

pub struct BlogPosts;

impl ContentKind for BlogPosts {
    type Record = BlogPost;
    type Draft = BlogPostDraft;
    type Patch = BlogPostPatch;
    type Filter = BlogPostFilter;

    const LABEL: &'static str = "blog post";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_time_rounds_up() {
        let content = "word ".repeat(201);
        assert_eq!(reading_time_minutes(&content), 2);
    }

    #[test]
    fn reading_time_exact_page() {
        let content = "word ".repeat(400);
        assert_eq!(reading_time_minutes(&content), 2);
    }

    #[test]
    fn reading_time_never_zero() {
        assert_eq!(reading_time_minutes(""), 1);
        assert_eq!(reading_time_minutes("short"), 1);
    }
}
