use crate::errors::ApiError;
use crate::models::{Article, ArticleChanges, NewArticle};
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Clone + Send + Sync + 'static {
    /// All articles in primary-key order.
    async fn list_all(&self) -> Result<Vec<Article>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Article>, ApiError>;
    async fn create(&self, article: &NewArticle) -> Result<Article, ApiError>;
    /// Deleting an id that does not exist is not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), ApiError>;
    /// Returns the number of rows affected, 0 or 1.
    async fn update(&self, id: i32, changes: &ArticleChanges) -> Result<usize, ApiError>;
}
