use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::info;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[derive(Error, Debug)]
pub enum DatabaseSetupError {
    #[error("Failed to connect to database: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("Failed to run migrations: {0}")]
    Migration(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Opens the database and brings its schema up to date.
pub fn establish_connection(database_url: &str) -> Result<SqliteConnection, DatabaseSetupError> {
    let mut connection = SqliteConnection::establish(database_url)?;

    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(DatabaseSetupError::Migration)?;

    if !applied.is_empty() {
        info!(count = applied.len(), "Applied pending migrations");
    }

    Ok(connection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::articles;

    #[test]
    fn test_in_memory_database_has_articles_table() {
        let mut conn = establish_connection(":memory:").unwrap();

        let count: i64 = articles::table.count().get_result(&mut conn).unwrap();
        assert_eq!(count, 0);
    }
}
