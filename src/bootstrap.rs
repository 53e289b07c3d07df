//! The two one-shot maintenance runs behind the binaries.
//!
//! Each run opens its own pool and closes it before returning, on every path.

use crate::{
    auth::admin::{SeedOutcome, seed_administrator},
    config::Config,
    db::{self, SchemaReport},
    errors::AppError,
    models::schema::registered_tables,
};

pub async fn run_bootstrap_db(config: &Config) -> Result<SchemaReport, AppError> {
    let pool = db::connect(&config.database_url).await?;
    let result = db::create_all(&pool, &registered_tables()).await;
    pool.close().await;
    result
}

pub async fn run_create_admin(config: &Config) -> Result<(SchemaReport, SeedOutcome), AppError> {
    let pool = db::connect(&config.database_url).await?;
    let result = async {
        let report = db::create_all(&pool, &registered_tables()).await?;
        let outcome = seed_administrator(&pool, &config.admin).await?;
        Ok::<_, AppError>((report, outcome))
    }
    .await;
    pool.close().await;
    result
}
