use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    hyperion_db::health_check(&pool).await.unwrap();

    // The task status lookup table must exist with its seed data.
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM task_statuses")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 4, "task_statuses should have 4 seeded rows");

    // Both entity tables exist and start empty.
    for table in ["users", "tasks"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Seeded status names line up with the TaskStatus discriminants.
#[sqlx::test(migrations = "./migrations")]
async fn test_task_status_seed_order(pool: PgPool) {
    let rows: Vec<(i16, String)> = sqlx::query_as("SELECT id, name FROM task_statuses ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();

    let expected = [
        (1, "pending"),
        (2, "running"),
        (3, "completed"),
        (4, "failed"),
    ];
    for ((id, name), (expected_id, expected_name)) in rows.iter().zip(expected) {
        assert_eq!(*id, expected_id);
        assert_eq!(name, expected_name);
    }
}
