use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::errors::StorageError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS salary_records (
    seq              INTEGER PRIMARY KEY AUTOINCREMENT,
    record_key       TEXT NOT NULL UNIQUE,
    employee_id      TEXT NOT NULL,
    employee_name    TEXT NOT NULL,
    period           TEXT NOT NULL,
    total_salary     REAL NOT NULL,
    advance_amount   REAL NOT NULL,
    remaining_salary REAL NOT NULL,
    payment_status   TEXT NOT NULL,
    payment_date     TEXT NOT NULL,
    created_at       TEXT NOT NULL
)
"#;

pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

pub async fn init_db(database_url: &str) -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .expect("Failed to connect to database");

    ensure_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    pool
}
