use async_trait::async_trait;
use axum::{
    Router,
    extract::{Json, OriginalUri, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json as ResponseJson},
    routing::get,
};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::errors::ApiError;
use crate::extract::{Existing, ResourceLookup};
use crate::models::{Article, ArticleChanges, NewArticle};
use crate::sanitize::SanitizedArticle;
use crate::{AppState, repositories::ArticleRepository};

/// Body of both create and update requests. Anything else a client sends,
/// `id` and `date_published` included, is ignored. A request without a JSON
/// content type is read as an empty body.
#[derive(Debug, Default, Deserialize)]
struct ArticleFields {
    title: Option<String>,
    content: Option<String>,
    style: Option<String>,
}

#[async_trait]
impl<S: AppState> ResourceLookup<S> for Article {
    type Id = i64;
    const NAME: &'static str = "Article";

    async fn lookup(state: &S, id: i64) -> Result<Option<Self>, ApiError> {
        // Ids the table can never hold are simply unknown
        match i32::try_from(id) {
            Ok(id) => state.article_repo().find_by_id(id).await,
            Err(_) => Ok(None),
        }
    }
}

/// Path of a newly created member of the collection at `collection_path`.
fn member_location(collection_path: &str, id: i32) -> String {
    let joined = format!("{collection_path}/{id}");

    let mut location = String::with_capacity(joined.len());
    for c in joined.chars() {
        if c == '/' && location.ends_with('/') {
            continue;
        }
        location.push(c);
    }
    location
}

#[instrument(skip_all)]
async fn list_articles<S: AppState>(
    State(state): State<S>,
) -> Result<ResponseJson<Vec<SanitizedArticle>>, ApiError> {
    debug!("Processing list articles request");

    let articles = state.article_repo().list_all().await?;
    let response: Vec<SanitizedArticle> =
        articles.into_iter().map(SanitizedArticle::from).collect();

    info!(count = response.len(), "Successfully retrieved articles");

    Ok(ResponseJson(response))
}

#[instrument(skip_all, fields(path = %uri.path()))]
async fn create_article<S: AppState>(
    State(state): State<S>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Option<Json<ArticleFields>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = payload?.map(|Json(fields)| fields).unwrap_or_default();
    debug!(
        has_title = payload.title.is_some(),
        has_content = payload.content.is_some(),
        has_style = payload.style.is_some(),
        "Processing create article request"
    );

    let new_article = NewArticle::new(payload.title, payload.content, payload.style)?;
    let article = state.article_repo().create(&new_article).await?;

    let location = member_location(uri.path(), article.id);
    info!(id = article.id, location = %location, "Successfully created article");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        ResponseJson(SanitizedArticle::from(article)),
    ))
}

#[instrument(skip_all, fields(id = article.id))]
async fn get_article(Existing(article): Existing<Article>) -> ResponseJson<SanitizedArticle> {
    debug!("Returning article");
    ResponseJson(SanitizedArticle::from(article))
}

#[instrument(skip_all, fields(id = article.id))]
async fn delete_article<S: AppState>(
    State(state): State<S>,
    Existing(article): Existing<Article>,
) -> Result<StatusCode, ApiError> {
    state.article_repo().delete_by_id(article.id).await?;

    info!("Successfully deleted article");

    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip_all, fields(id = article.id))]
async fn update_article<S: AppState>(
    State(state): State<S>,
    Existing(article): Existing<Article>,
    payload: Result<Option<Json<ArticleFields>>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let payload = payload?.map(|Json(fields)| fields).unwrap_or_default();

    let changes = ArticleChanges::new(payload.title, payload.content, payload.style)?;
    let affected = state.article_repo().update(article.id, &changes).await?;

    info!(
        affected,
        title = changes.title.is_some(),
        content = changes.content.is_some(),
        style = changes.style.is_some(),
        "Successfully updated article"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Routes relative to the collection path; mount with `nest`.
pub fn create_articles_router<S: AppState>() -> Router<S> {
    Router::new()
        .route("/", get(list_articles::<S>).post(create_article::<S>))
        .route(
            "/{id}",
            get(get_article)
                .delete(delete_article::<S>)
                .patch(update_article::<S>),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_location() {
        assert_eq!(member_location("/api/articles", 12), "/api/articles/12");
        assert_eq!(member_location("/articles/", 3), "/articles/3");
        assert_eq!(member_location("//api//articles", 1), "/api/articles/1");
    }
}
