//! Destination table definition

use crate::error::Result;
use sqlx::PgPool;
use tracing::info;

/// Destination table
pub const TABLE_NAME: &str = "trending_videos";

/// Loaded columns, in staging-file order
pub const COLUMNS: [&str; 5] = ["title", "channel", "publish_time", "views", "likes"];

/// Idempotent DDL. No unique constraint, reloads append.
pub const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS trending_videos (
    title TEXT,
    channel TEXT,
    publish_time TIMESTAMP,
    views BIGINT,
    likes BIGINT
)
"#;

/// Ensure the destination table exists
pub async fn create_table(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_TABLE_SQL).execute(pool).await?;
    info!(table = TABLE_NAME, "Destination table ready");
    Ok(())
}

/// Column names and types of the destination table, in ordinal order
pub async fn table_columns(pool: &PgPool) -> Result<Vec<(String, String)>> {
    let columns = sqlx::query_as::<_, (String, String)>(
        r#"
        SELECT column_name::text, data_type::text
        FROM information_schema.columns
        WHERE table_schema = current_schema() AND table_name = $1
        ORDER BY ordinal_position
        "#,
    )
    .bind(TABLE_NAME)
    .fetch_all(pool)
    .await?;

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddl_declares_every_column() {
        for column in COLUMNS {
            assert!(CREATE_TABLE_SQL.contains(column), "missing column {}", column);
        }
        assert!(CREATE_TABLE_SQL.contains("IF NOT EXISTS"));
    }
}
