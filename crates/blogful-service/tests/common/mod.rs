#![allow(dead_code)]

use blogful_service::db::establish_connection;
use diesel::sqlite::SqliteConnection;

pub fn establish_test_connection() -> SqliteConnection {
    establish_connection(":memory:").expect("Failed to create in-memory database")
}

pub mod server_utils {
    use super::*;
    use axum_test::TestServer;
    use blogful_service::{DefaultAppState, config::Environment, create_app};
    use std::sync::{Arc, Mutex};

    pub fn create_test_server() -> (TestServer, Arc<Mutex<SqliteConnection>>) {
        let connection = establish_test_connection();
        let db = Arc::new(Mutex::new(connection));

        let state = DefaultAppState::new(db.clone());
        let app = create_app(state, Environment::Development);

        let server = TestServer::new(app).unwrap();
        (server, db)
    }
}

pub mod test_utils {
    use super::*;
    use blogful_service::models::{Article, NewArticle};
    use blogful_service::schema::articles;
    use diesel::prelude::*;

    pub fn count_articles(conn: &mut SqliteConnection) -> i64 {
        articles::table
            .count()
            .get_result(conn)
            .expect("Failed to count articles")
    }

    pub fn get_article(conn: &mut SqliteConnection, id: i32) -> Option<Article> {
        articles::table
            .find(id)
            .select(Article::as_select())
            .first(conn)
            .optional()
            .expect("Failed to query article by id")
    }

    pub fn insert_article(
        conn: &mut SqliteConnection,
        title: &str,
        content: &str,
        style: &str,
    ) -> Article {
        let new_article = NewArticle {
            title: title.to_string(),
            content: content.to_string(),
            style: style.to_string(),
        };

        diesel::insert_into(articles::table)
            .values(&new_article)
            .returning(Article::as_returning())
            .get_result(conn)
            .expect("Failed to insert article")
    }

    pub fn seed_articles(conn: &mut SqliteConnection) -> Vec<Article> {
        vec![
            insert_article(conn, "First post!", "Lorem ipsum dolor sit amet.", "How-to"),
            insert_article(conn, "Second post!", "Consectetur adipisicing elit.", "News"),
            insert_article(conn, "Third post!", "Natus consequuntur deserunt.", "Listicle"),
            insert_article(conn, "Fourth post", "Commodi ipsam pariatur.", "Story"),
        ]
    }
}
