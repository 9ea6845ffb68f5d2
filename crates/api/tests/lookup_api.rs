//! HTTP-level integration tests for the read-only `/directors` and
//! `/genres` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations", fixtures("catalog"))]
async fn test_list_directors(pool: SqlitePool) {
    for uri in ["/directors/", "/directors"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 3);
        assert_eq!(json[0], json!({"id": 1, "name": "Андрей Тарковский"}));
    }
}

#[sqlx::test(migrations = "../db/migrations", fixtures("catalog"))]
async fn test_get_director_by_id(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/directors/3").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": 3, "name": "Хаяо Миядзаки"})
    );
}

#[sqlx::test(migrations = "../db/migrations", fixtures("catalog"))]
async fn test_get_nonexistent_director_returns_404_with_lookup_error(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/directors/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!("No row was found when one was required")
    );
}

#[sqlx::test(migrations = "../db/migrations", fixtures("catalog"))]
async fn test_list_genres(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/genres/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            {"id": 1, "name": "Драма"},
            {"id": 2, "name": "Фантастика"},
            {"id": 3, "name": "Анимация"}
        ])
    );
}

#[sqlx::test(migrations = "../db/migrations", fixtures("catalog"))]
async fn test_get_genre_by_id(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/genres/2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Фантастика");

    let app = common::build_test_app(pool);
    let response = get(app, "/genres/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!("No row was found when one was required")
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_catalog_lists_are_empty(pool: SqlitePool) {
    for uri in ["/directors/", "/genres/"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }
}

#[sqlx::test(migrations = "../db/migrations", fixtures("catalog"))]
async fn test_directors_are_read_only(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/directors/", json!({"name": "Новый"})).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
