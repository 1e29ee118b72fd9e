use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Article;

/// Escapes `&`, `<` and `>` so markup in free text renders as text.
/// Quotes are left alone since the output never lands inside an attribute.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Outbound representation of an [`Article`]. Every response that carries
/// an article goes through this type, so stored text is never echoed raw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizedArticle {
    pub id: i32,
    pub style: String,
    pub title: String,
    pub content: String,
    pub date_published: DateTime<Utc>,
}

impl From<Article> for SanitizedArticle {
    fn from(article: Article) -> Self {
        SanitizedArticle {
            id: article.id,
            style: article.style,
            title: escape_markup(&article.title).into_owned(),
            content: escape_markup(&article.content).into_owned(),
            date_published: article.date_published.and_utc(),
        }
    }
}
