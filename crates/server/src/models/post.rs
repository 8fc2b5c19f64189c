//! Blog post domain type.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Average adult reading speed used for the read-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// A blog post. The slug is the identity: unique, URL-safe, and the path
/// segment of the rendered page (`/blog/{slug}`).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Operator-trusted HTML, rendered unescaped on the public page.
    pub content_html: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_role: Option<String>,
    pub published_on: NaiveDate,
    pub read_time_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Derive a URL-safe slug from a title: lowercase alphanumerics with single
/// hyphens between words.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Whether a client-supplied slug is acceptable as a URL path segment.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Estimate reading time from the post content, ignoring markup.
#[must_use]
pub fn estimate_read_time(content_html: &str) -> u32 {
    let mut words = 0usize;
    let mut in_tag = false;
    let mut in_word = false;
    for c in content_html.chars() {
        match c {
            '<' => {
                in_tag = true;
                in_word = false;
            }
            '>' => in_tag = false,
            c if !in_tag => {
                if c.is_whitespace() {
                    in_word = false;
                } else if !in_word {
                    in_word = true;
                    words += 1;
                }
            }
            _ => {}
        }
    }
    u32::try_from(words.div_ceil(WORDS_PER_MINUTE).max(1)).unwrap_or(1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation_and_case() {
        assert_eq!(slugify("Die-Cut 101: A Beginner's Guide"), "die-cut-101-a-beginner-s-guide");
        assert_eq!(slugify("  Hello,   World!  "), "hello-world");
    }

    #[test]
    fn slugified_titles_are_valid_slugs() {
        for title in ["Simple", "With Spaces", "Números & Symbols!!"] {
            assert!(is_valid_slug(&slugify(title)), "{title}");
        }
    }

    #[test]
    fn invalid_slugs_are_rejected() {
        for slug in ["", "Has-Caps", "trailing-", "-leading", "sp ace", "under_score"] {
            assert!(!is_valid_slug(slug), "{slug:?} should be invalid");
        }
    }

    #[test]
    fn read_time_ignores_markup_and_rounds_up() {
        assert_eq!(estimate_read_time("<p>short post</p>"), 1);

        let four_hundred_words = "<article>".to_string() + &"word ".repeat(400) + "</article>";
        assert_eq!(estimate_read_time(&four_hundred_words), 2);
    }

    #[test]
    fn read_time_is_at_least_one_minute() {
        assert_eq!(estimate_read_time(""), 1);
    }
}
