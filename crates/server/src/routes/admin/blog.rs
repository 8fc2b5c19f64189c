//! Admin blog post management.
//!
//! Posts live in the database and render at request time; creating,
//! renaming, or deleting a post is a plain row operation with no filesystem
//! side effects.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::instrument;

use crate::db::posts::{BlogPostRecord, BlogPostRepository};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::post::{estimate_read_time, is_valid_slug, slugify};
use crate::state::AppState;

/// Create/overwrite payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    /// Derived from the title when omitted.
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub content_html: String,
    pub author: String,
    pub author_role: Option<String>,
    /// Defaults to today.
    pub published_on: Option<NaiveDate>,
    /// Estimated from the content when omitted.
    pub read_time_minutes: Option<u32>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PostPayload {
    /// Validate and fill defaults, producing a storable record.
    fn into_record(self) -> Result<BlogPostRecord> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".to_owned()));
        }
        if self.content_html.trim().is_empty() {
            return Err(AppError::Validation("content is required".to_owned()));
        }
        if self.author.trim().is_empty() {
            return Err(AppError::Validation("author is required".to_owned()));
        }

        let slug = match self.slug {
            Some(slug) => {
                if !is_valid_slug(&slug) {
                    return Err(AppError::Validation(format!(
                        "slug {slug:?} is not URL-safe (lowercase letters, digits, hyphens)"
                    )));
                }
                slug
            }
            None => {
                let derived = slugify(&self.title);
                if derived.is_empty() {
                    return Err(AppError::Validation(
                        "could not derive a slug from the title; provide one".to_owned(),
                    ));
                }
                derived
            }
        };

        let read_time_minutes = self
            .read_time_minutes
            .unwrap_or_else(|| estimate_read_time(&self.content_html));

        Ok(BlogPostRecord {
            slug,
            title: self.title.trim().to_owned(),
            excerpt: self.excerpt.trim().to_owned(),
            content_html: self.content_html,
            author: self.author.trim().to_owned(),
            author_role: self.author_role,
            published_on: self
                .published_on
                .unwrap_or_else(|| Utc::now().date_naive()),
            read_time_minutes,
            image_url: self.image_url,
            featured: self.featured,
            published: self.published,
            tags: self.tags,
        })
    }
}

/// Partial-update payload: only present fields change.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content_html: Option<String>,
    pub author: Option<String>,
    pub author_role: Option<String>,
    pub published_on: Option<NaiveDate>,
    pub read_time_minutes: Option<u32>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// List every post, drafts included.
///
/// GET /api/admin/blog
#[instrument(skip(state))]
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let posts = BlogPostRepository::new(state.pool()).list_all().await?;
    Ok(Json(posts))
}

/// Create a post. A duplicate slug is a 409 and leaves the existing post
/// untouched.
///
/// POST /api/admin/blog
#[instrument(skip(state, payload))]
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<PostPayload>,
) -> Result<impl IntoResponse> {
    let record = payload.into_record()?;
    let post = BlogPostRepository::new(state.pool()).create(&record).await?;
    tracing::info!(slug = %post.slug, "blog post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// Get one post by slug.
///
/// GET /api/admin/blog/{slug}
#[instrument(skip(state))]
pub async fn show(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let post = BlogPostRepository::new(state.pool())
        .get(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {slug:?}")))?;
    Ok(Json(post))
}

/// Overwrite a post. Supplying a different slug renames it; the new slug
/// must be free.
///
/// PUT /api/admin/blog/{slug}
#[instrument(skip(state, payload))]
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<PostPayload>,
) -> Result<impl IntoResponse> {
    let record = payload.into_record()?;
    let post = BlogPostRepository::new(state.pool())
        .update(&slug, &record)
        .await?;
    tracing::info!(old_slug = %slug, slug = %post.slug, "blog post updated");
    Ok(Json(post))
}

/// Partially update a post (slug stays fixed; use PUT to rename).
///
/// PATCH /api/admin/blog/{slug}
#[instrument(skip(state, patch))]
pub async fn patch(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(patch): Json<PostPatch>,
) -> Result<impl IntoResponse> {
    let repo = BlogPostRepository::new(state.pool());
    let existing = repo
        .get(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {slug:?}")))?;

    let content_html = patch.content_html.unwrap_or(existing.content_html);
    let read_time_minutes = patch
        .read_time_minutes
        .unwrap_or_else(|| estimate_read_time(&content_html));

    let record = BlogPostRecord {
        slug: existing.slug,
        title: patch.title.unwrap_or(existing.title),
        excerpt: patch.excerpt.unwrap_or(existing.excerpt),
        content_html,
        author: patch.author.unwrap_or(existing.author),
        author_role: patch.author_role.or(existing.author_role),
        published_on: patch.published_on.unwrap_or(existing.published_on),
        read_time_minutes,
        image_url: patch.image_url.or(existing.image_url),
        featured: patch.featured.unwrap_or(existing.featured),
        published: patch.published.unwrap_or(existing.published),
        tags: patch.tags.unwrap_or(existing.tags),
    };

    let post = repo.update(&slug, &record).await?;
    tracing::info!(slug = %post.slug, "blog post patched");
    Ok(Json(post))
}

/// Delete a post.
///
/// DELETE /api/admin/blog/{slug}
#[instrument(skip(state))]
pub async fn destroy(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    BlogPostRepository::new(state.pool()).delete(&slug).await?;
    tracing::info!(%slug, "blog post deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn payload() -> PostPayload {
        PostPayload {
            slug: None,
            title: "Sticker Care Guide".to_owned(),
            excerpt: "Make them last.".to_owned(),
            content_html: "<p>Wash cold.</p>".to_owned(),
            author: "Mia Torres".to_owned(),
            author_role: None,
            published_on: None,
            read_time_minutes: None,
            image_url: None,
            featured: false,
            published: true,
            tags: vec!["care".to_owned()],
        }
    }

    #[test]
    fn slug_is_derived_from_the_title_when_omitted() {
        let record = payload().into_record().unwrap();
        assert_eq!(record.slug, "sticker-care-guide");
    }

    #[test]
    fn explicit_slugs_must_be_url_safe() {
        let mut p = payload();
        p.slug = Some("Not A Slug".to_owned());
        assert!(matches!(p.into_record(), Err(AppError::Validation(_))));
    }

    #[test]
    fn read_time_is_estimated_when_omitted() {
        let record = payload().into_record().unwrap();
        assert_eq!(record.read_time_minutes, 1);
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut p = payload();
        p.title = String::new();
        assert!(matches!(p.into_record(), Err(AppError::Validation(_))));
    }
}
