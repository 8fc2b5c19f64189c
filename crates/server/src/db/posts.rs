//! Blog post repository for database operations.
//!
//! Posts are keyed by their slug. Both the development and production
//! configurations store posts here; there is no in-memory fallback.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::post::BlogPost;

/// Internal row type for blog post queries.
#[derive(Debug, sqlx::FromRow)]
struct BlogPostRow {
    slug: String,
    title: String,
    excerpt: String,
    content_html: String,
    author: String,
    author_role: Option<String>,
    published_on: NaiveDate,
    read_time_minutes: i32,
    image_url: Option<String>,
    featured: bool,
    published: bool,
    tags: JsonValue,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BlogPostRow> for BlogPost {
    type Error = RepositoryError;

    fn try_from(row: BlogPostRow) -> Result<Self, Self::Error> {
        let tags: Vec<String> = serde_json::from_value(row.tags)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid tags: {e}")))?;
        let read_time_minutes = u32::try_from(row.read_time_minutes)
            .map_err(|_| RepositoryError::DataCorruption("negative read time".to_owned()))?;

        Ok(Self {
            slug: row.slug,
            title: row.title,
            excerpt: row.excerpt,
            content_html: row.content_html,
            author: row.author,
            author_role: row.author_role,
            published_on: row.published_on,
            read_time_minutes,
            image_url: row.image_url,
            featured: row.featured,
            published: row.published,
            tags,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Field values for creating or overwriting a post.
#[derive(Debug, Clone)]
pub struct BlogPostRecord {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content_html: String,
    pub author: String,
    pub author_role: Option<String>,
    pub published_on: NaiveDate,
    pub read_time_minutes: u32,
    pub image_url: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub tags: Vec<String>,
}

impl BlogPostRecord {
    fn tags_json(&self) -> Result<JsonValue, RepositoryError> {
        serde_json::to_value(&self.tags)
            .map_err(|e| RepositoryError::DataCorruption(format!("unencodable tags: {e}")))
    }
}

const POST_COLUMNS: &str = "slug, title, excerpt, content_html, author, author_role, \
                            published_on, read_time_minutes, image_url, featured, published, \
                            tags, created_at, updated_at";

/// Repository for blog post database operations.
pub struct BlogPostRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BlogPostRepository<'a> {
    /// Create a new blog post repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every post, newest publication date first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<BlogPost>, RepositoryError> {
        let rows = sqlx::query_as::<_, BlogPostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts ORDER BY published_on DESC, slug"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(BlogPost::try_from).collect()
    }

    /// List published posts only, for the public blog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_published(&self) -> Result<Vec<BlogPost>, RepositoryError> {
        let rows = sqlx::query_as::<_, BlogPostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts
             WHERE published
             ORDER BY published_on DESC, slug"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(BlogPost::try_from).collect()
    }

    /// Get a post by slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, slug: &str) -> Result<Option<BlogPost>, RepositoryError> {
        let row = sqlx::query_as::<_, BlogPostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        row.map(BlogPost::try_from).transpose()
    }

    /// Insert a new post.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug is already taken; the
    /// existing post is untouched.
    pub async fn create(&self, record: &BlogPostRecord) -> Result<BlogPost, RepositoryError> {
        let row = sqlx::query_as::<_, BlogPostRow>(&format!(
            "INSERT INTO blog_posts
                 (slug, title, excerpt, content_html, author, author_role, published_on,
                  read_time_minutes, image_url, featured, published, tags)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(&record.slug)
        .bind(&record.title)
        .bind(&record.excerpt)
        .bind(&record.content_html)
        .bind(&record.author)
        .bind(record.author_role.as_deref())
        .bind(record.published_on)
        .bind(i32::try_from(record.read_time_minutes).unwrap_or(i32::MAX))
        .bind(record.image_url.as_deref())
        .bind(record.featured)
        .bind(record.published)
        .bind(record.tags_json()?)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "slug already exists"))?;

        BlogPost::try_from(row)
    }

    /// Overwrite a post, possibly renaming its slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no post has the old slug, or
    /// `RepositoryError::Conflict` if the new slug is already taken.
    pub async fn update(
        &self,
        slug: &str,
        record: &BlogPostRecord,
    ) -> Result<BlogPost, RepositoryError> {
        let row = sqlx::query_as::<_, BlogPostRow>(&format!(
            "UPDATE blog_posts
             SET slug = $2, title = $3, excerpt = $4, content_html = $5, author = $6,
                 author_role = $7, published_on = $8, read_time_minutes = $9, image_url = $10,
                 featured = $11, published = $12, tags = $13, updated_at = NOW()
             WHERE slug = $1
             RETURNING {POST_COLUMNS}"
        ))
        .bind(slug)
        .bind(&record.slug)
        .bind(&record.title)
        .bind(&record.excerpt)
        .bind(&record.content_html)
        .bind(&record.author)
        .bind(record.author_role.as_deref())
        .bind(record.published_on)
        .bind(i32::try_from(record.read_time_minutes).unwrap_or(i32::MAX))
        .bind(record.image_url.as_deref())
        .bind(record.featured)
        .bind(record.published)
        .bind(record.tags_json()?)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "slug already exists"))?
        .ok_or(RepositoryError::NotFound)?;

        BlogPost::try_from(row)
    }

    /// Delete a post by slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the post doesn't exist.
    pub async fn delete(&self, slug: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
