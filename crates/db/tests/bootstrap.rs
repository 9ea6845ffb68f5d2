use sqlx::SqlitePool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    kinoteka_db::health_check(&pool).await.unwrap();

    for table in ["directors", "genres", "movies"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Foreign keys must be enforced so dangling genre/director IDs are rejected.
#[sqlx::test(migrations = "./migrations")]
async fn test_foreign_keys_enforced(pool: SqlitePool) {
    let result = sqlx::query("INSERT INTO movies (title, genre_id, director_id) VALUES ('x', 99, 99)")
        .execute(&pool)
        .await;
    assert!(result.is_err(), "insert with unknown references must fail");
}

/// `create_pool` creates the database file on first use.
#[tokio::test]
async fn test_create_pool_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    let url = format!("sqlite://{}", path.display());

    let pool = kinoteka_db::create_pool(&url, 1).await.unwrap();
    kinoteka_db::run_migrations(&pool).await.unwrap();
    kinoteka_db::health_check(&pool).await.unwrap();

    assert!(path.exists());
}
