//! Public blog pages, rendered at request time from stored posts.
//!
//! The rendered page is the only artifact; nothing is written to disk when
//! posts change.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tracing::instrument;

use crate::filters;
use crate::models::post::BlogPost;
use crate::state::AppState;

/// Post view for templates.
#[derive(Clone)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub author_role: Option<String>,
    /// Preformatted publication date, e.g. "August 5, 2026".
    pub published_label: String,
    pub read_time_minutes: u32,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub content_html: String,
}

impl From<&BlogPost> for PostView {
    fn from(post: &BlogPost) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            author_role: post.author_role.clone(),
            published_label: post.published_on.format("%B %-d, %Y").to_string(),
            read_time_minutes: post.read_time_minutes,
            image_url: post.image_url.clone(),
            tags: post.tags.clone(),
            content_html: post.content_html.clone(),
        }
    }
}

/// Blog index page template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/index.html")]
pub struct BlogIndexTemplate {
    pub posts: Vec<PostView>,
    /// Base URL for canonical links.
    pub base_url: String,
}

/// Blog post detail template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/show.html")]
pub struct BlogShowTemplate {
    pub post: PostView,
    /// Base URL for canonical links.
    pub base_url: String,
}

/// The public blog router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/blog", get(index))
        .route("/blog/{slug}", get(show))
}

/// Display the blog index page with all published posts.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<BlogIndexTemplate, StatusCode> {
    let posts = crate::db::posts::BlogPostRepository::new(state.pool())
        .list_published()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to load posts");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(BlogIndexTemplate {
        posts: posts.iter().map(PostView::from).collect(),
        base_url: state.config().base_url.clone(),
    })
}

/// Display a single blog post by slug.
///
/// # Errors
///
/// Returns 404 if the post doesn't exist or is unpublished.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<BlogShowTemplate, StatusCode> {
    let post = crate::db::posts::BlogPostRepository::new(state.pool())
        .get(&slug)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to load post");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .filter(|p| p.published)
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(BlogShowTemplate {
        post: PostView::from(&post),
        base_url: state.config().base_url.clone(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn post() -> BlogPost {
        BlogPost {
            slug: "care-guide".into(),
            title: "Sticker Care Guide".into(),
            excerpt: "Make your stickers last.".into(),
            content_html: "<p>Wash cold, air dry.</p>".into(),
            author: "Mia Torres".into(),
            author_role: Some("Founder".into()),
            published_on: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            read_time_minutes: 4,
            image_url: Some("/uploads/care.jpg".into()),
            featured: false,
            published: true,
            tags: vec!["care".into(), "vinyl".into()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn rendered_page_embeds_the_post_fields() {
        let html = BlogShowTemplate {
            post: PostView::from(&post()),
            base_url: "http://localhost:3000".into(),
        }
        .render()
        .unwrap();

        assert!(html.contains("Sticker Care Guide"));
        assert!(html.contains("Mia Torres"));
        assert!(html.contains("March 14, 2026"));
        assert!(html.contains("<p>Wash cold, air dry.</p>"), "content is embedded unescaped");
        assert!(html.contains("care"));
        // The fixed call-to-action block.
        assert!(html.contains("Ready to create your own custom stickers?"));
    }

    #[test]
    fn index_lists_posts_with_links() {
        let html = BlogIndexTemplate {
            posts: vec![PostView::from(&post())],
            base_url: "http://localhost:3000".into(),
        }
        .render()
        .unwrap();

        assert!(html.contains("/blog/care-guide"));
        assert!(html.contains("Make your stickers last."));
    }

    #[test]
    fn title_markup_is_escaped() {
        let mut evil = post();
        evil.title = "<script>alert(1)</script>".into();
        let html = BlogShowTemplate {
            post: PostView::from(&evil),
            base_url: String::new(),
        }
        .render()
        .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
    }
}
