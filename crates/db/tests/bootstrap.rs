use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    labourlog_db::health_check(&pool).await.unwrap();

    for table in ["users", "employees", "projects", "entries"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Entry references are free-form text: no foreign keys to employees/projects.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_entries_have_no_foreign_keys(pool: PgPool) {
    let fk_count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM information_schema.table_constraints
         WHERE table_name = 'entries' AND constraint_type = 'FOREIGN KEY'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(fk_count.0, 0);
}
