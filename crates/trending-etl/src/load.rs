//! Bulk load of the staging artifact

use crate::error::Result;
use crate::schema::{COLUMNS, TABLE_NAME};
use sqlx::postgres::PgPoolCopyExt;
use sqlx::PgPool;
use std::path::Path;
use tracing::info;

/// `COPY ... FROM STDIN` statement matching the staging file layout
pub fn copy_statement() -> String {
    format!(
        "COPY {} ({}) FROM STDIN WITH (FORMAT csv)",
        TABLE_NAME,
        COLUMNS.join(", ")
    )
}

/// Copy every row of the staging file into the destination table.
///
/// Returns the number of rows loaded. The copy is a single statement, so it
/// either loads the whole file or nothing.
pub async fn copy_staging_file(pool: &PgPool, path: &Path) -> Result<u64> {
    let data = tokio::fs::read(path).await?;
    let bytes = data.len();

    // Dropping `copy` before `finish` aborts the COPY on the server.
    let mut copy = pool.copy_in_raw(&copy_statement()).await?;
    if !data.is_empty() {
        copy.send(data).await?;
    }
    let rows = copy.finish().await?;

    info!(path = %path.display(), bytes, rows, table = TABLE_NAME, "Staging file loaded");
    Ok(rows)
}
