mod articles;
mod traits;

pub use articles::SqliteArticleRepository;
pub use traits::ArticleRepository;
