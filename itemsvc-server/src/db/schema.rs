//! Idempotent schema bootstrap

use sqlx::PgPool;

const CREATE_ITEMS: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        created_at TIMESTAMPTZ DEFAULT now()
    )
"#;

/// Create the `items` table if it does not exist.
///
/// Safe to run on every startup; existing rows are never touched.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring items table exists");
    sqlx::query(CREATE_ITEMS).execute(pool).await?;
    Ok(())
}
