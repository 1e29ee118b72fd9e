use crate::validation::{ValidationError, require, truthy};
use diesel::prelude::*;

/// A stored article, exactly as persisted. Free-text fields are raw; see
/// [`crate::sanitize::SanitizedArticle`] for the outbound representation.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::articles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub style: String,
    pub date_published: chrono::NaiveDateTime,
}

/// Fields a client supplies on create. `id` and `date_published` are
/// assigned by the store.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::articles)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub style: String,
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, AsChangeset)]
#[diesel(table_name = crate::schema::articles)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub style: Option<String>,
}

impl NewArticle {
    /// Checks `title`, `content` and `style` in that order and reports the
    /// first one that is missing.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        style: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(NewArticle {
            title: require("title", title)?,
            content: require("content", content)?,
            style: require("style", style)?,
        })
    }
}

impl ArticleChanges {
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        style: Option<String>,
    ) -> Result<Self, ValidationError> {
        let changes = ArticleChanges {
            title: truthy(title),
            content: truthy(content),
            style: truthy(style),
        };

        if changes.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }

        Ok(changes)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.style.is_none()
    }
}
