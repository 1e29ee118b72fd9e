use axum::http::StatusCode;
use blogful_service::sanitize::escape_markup;
use proptest::prelude::*;
use serde_json::{Value, json};

mod common;

// Free text with a good share of markup-significant characters
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 .,!?]{0,40}",
        "[a-zA-Z0-9 <>&\"'/=]{1,40}",
        "[a-z ]{0,10}".prop_map(|s| format!("{s}<script>alert('{s}')</script>")),
    ]
}

fn arb_style() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["How-to", "Listicle", "News", "Interview", "Story"])
        .prop_map(str::to_string)
}

prop_compose! {
    fn arb_article()(
        title in arb_text(),
        content in arb_text(),
        style in arb_style(),
    ) -> Value {
        json!({ "title": title, "content": content, "style": style })
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use crate::common::server_utils::create_test_server;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn created_article_is_fetchable_at_location(article in arb_article()) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let (server, _db) = create_test_server();

                let created = server.post("/api/articles").json(&article).await;
                prop_assert_eq!(created.status_code(), StatusCode::CREATED);

                let location = created.header("location");
                let fetched = server.get(location.to_str().unwrap()).await;
                prop_assert_eq!(fetched.status_code(), StatusCode::OK);

                let created_body: Value = created.json();
                let fetched_body: Value = fetched.json();
                prop_assert_eq!(created_body, fetched_body);
                Ok(())
            }).expect("Async proptest should not fail")
        }

        #[test]
        fn output_never_contains_raw_markup(article in arb_article()) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let (server, _db) = create_test_server();

                let created = server.post("/api/articles").json(&article).await;
                prop_assert_eq!(created.status_code(), StatusCode::CREATED);

                let list: Value = server.get("/api/articles").await.json();
                let listed = &list[0];

                for field in ["title", "content"] {
                    let raw = article[field].as_str().unwrap();
                    let output = listed[field].as_str().unwrap();

                    let expected = escape_markup(raw);
                    prop_assert_eq!(output, expected.as_ref());
                    prop_assert!(!output.contains('<'));
                    prop_assert!(!output.contains('>'));
                }
                prop_assert_eq!(&listed["style"], &article["style"]);
                Ok(())
            }).expect("Async proptest should not fail")
        }

        #[test]
        fn patch_overlays_only_truthy_fields(
            original in arb_article(),
            title in prop::option::of("[a-zA-Z ]{0,20}"),
            content in prop::option::of("[a-zA-Z ]{0,20}"),
            style in prop::option::of(arb_style()),
        ) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let (server, _db) = create_test_server();

                let created = server.post("/api/articles").json(&original).await;
                let location = created.header("location");
                let path = location.to_str().unwrap();
                let before: Value = server.get(path).await.json();

                let patch = json!({ "title": title, "content": content, "style": style });
                let response = server.patch(path).json(&patch).await;

                let usable = |v: &Option<String>| v.as_ref().is_some_and(|s| !s.is_empty());
                let after: Value = server.get(path).await.json();

                if usable(&title) || usable(&content) || usable(&style) {
                    prop_assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

                    for (field, value) in [("title", &title), ("content", &content), ("style", &style)] {
                        let expected = if usable(value) {
                            json!(escape_markup(value.as_deref().unwrap()))
                        } else {
                            before[field].clone()
                        };
                        prop_assert_eq!(&after[field], &expected);
                    }
                } else {
                    prop_assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
                    prop_assert_eq!(&after, &before);
                }

                prop_assert_eq!(&after["id"], &before["id"]);
                prop_assert_eq!(&after["date_published"], &before["date_published"]);
                Ok(())
            }).expect("Async proptest should not fail")
        }
    }
}
