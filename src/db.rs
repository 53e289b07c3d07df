use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{errors::AppError, models::schema::TableDefinition};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the pool used by a single maintenance run.
///
/// The database file is created when missing, its directory is not. Any
/// failure here is reported as [`AppError::Connection`] and is not retried.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(AppError::Connection)?
        .create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
        .map_err(AppError::Connection)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SchemaReport {
    pub created: Vec<&'static str>,
    pub existing: Vec<&'static str>,
}

async fn table_exists(
    name: &str,
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
) -> sqlx::Result<bool> {
    let (count,): (i64,) =
        sqlx::query_as("select count(*) from sqlite_master where type = 'table' and name = ?")
            .bind(name)
            .fetch_one(tx.as_mut())
            .await?;
    Ok(count > 0)
}

/// Creates every table in `tables` that does not exist yet.
///
/// Existing tables are never altered. All creations share one transaction.
pub async fn create_all(
    pool: &SqlitePool,
    tables: &[TableDefinition],
) -> Result<SchemaReport, AppError> {
    let mut tx = pool.begin().await?;
    let mut report = SchemaReport::default();
    for table in tables {
        if table_exists(table.name, &mut tx).await? {
            tracing::debug!(table = table.name, "table already exists");
            report.existing.push(table.name);
            continue;
        }
        sqlx::query(table.ddl).execute(tx.as_mut()).await.map_err(|e| {
            tracing::error!(table = table.name, "create_all: {:?}", e);
            e
        })?;
        tracing::info!(table = table.name, "created table");
        report.created.push(table.name);
    }
    tx.commit().await?;
    Ok(report)
}
