use axum::{Router, middleware::map_response};
use diesel::sqlite::SqliteConnection;
use std::sync::{Arc, Mutex};

pub mod config;
pub mod db;
pub mod errors;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod sanitize;
pub mod schema;
pub mod validation;

use config::Environment;
use repositories::{ArticleRepository, SqliteArticleRepository};

/// Everything a handler can reach. Generic so tests can swap repositories.
pub trait AppState: Clone + Send + Sync + 'static {
    type Articles: ArticleRepository;

    fn article_repo(&self) -> &Self::Articles;
}

#[derive(Clone)]
pub struct DefaultAppState {
    article_repo: SqliteArticleRepository,
}

impl DefaultAppState {
    pub fn new(db: Arc<Mutex<SqliteConnection>>) -> Self {
        Self {
            article_repo: SqliteArticleRepository::new(db),
        }
    }
}

impl AppState for DefaultAppState {
    type Articles = SqliteArticleRepository;

    fn article_repo(&self) -> &Self::Articles {
        &self.article_repo
    }
}

/// Builds the full application router. Outside production, server errors
/// carry their raw detail in the response body.
pub fn create_app<S: AppState>(state: S, environment: Environment) -> Router {
    let router = routes::create_router::<S>();

    let router = if environment.is_production() {
        router
    } else {
        router.layer(map_response(middleware::expose_error_detail))
    };

    router.with_state(state)
}
