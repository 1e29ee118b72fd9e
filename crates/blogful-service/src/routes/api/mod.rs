use crate::AppState;
use axum::Router;

pub mod articles;

pub fn create_api_router<S: AppState>() -> Router<S> {
    Router::new().nest("/articles", articles::create_articles_router())
}
