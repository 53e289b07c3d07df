use sqlx::SqlitePool;

use crate::{
    auth::hasher::hash_password,
    config::AdminSeed,
    errors::AppError,
    models::account::NewAccount,
    repositories::account_repo::{
        count_accounts_by_email, get_account_by_email, insert_account, is_unique_violation,
    },
};

#[derive(Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Created(i64),
    AlreadyExists,
}

/// Makes sure an account with `seed.email` exists, creating it when absent.
///
/// An existing account is never modified, whatever its credential or role.
pub async fn seed_administrator(
    pool: &SqlitePool,
    seed: &AdminSeed,
) -> Result<SeedOutcome, AppError> {
    if let Some(existing) = get_account_by_email(pool, &seed.email).await? {
        tracing::info!(email = %seed.email, id = existing.id, "administrator already exists");
        return Ok(SeedOutcome::AlreadyExists);
    }

    let account = NewAccount {
        username: seed.username.clone(),
        email: seed.email.clone(),
        password_hash: hash_password(&seed.password)?,
        role: seed.role,
    };
    let outcome = persist_administrator(pool, &account).await?;

    if outcome != SeedOutcome::AlreadyExists && seed.uses_default_password() {
        tracing::warn!(
            email = %seed.email,
            "administrator created with the default password, change it before going live"
        );
    }
    Ok(outcome)
}

async fn persist_administrator(
    pool: &SqlitePool,
    account: &NewAccount,
) -> Result<SeedOutcome, AppError> {
    let mut tx = pool.begin().await?;
    match insert_account(account, &mut tx).await {
        Ok(id) => {
            tx.commit().await?;
            tracing::info!(email = %account.email, id, role = %account.role, "created administrator");
            Ok(SeedOutcome::Created(id))
        }
        Err(e) if is_unique_violation(&e) => {
            tx.rollback().await?;
            resolve_conflict(pool, account).await
        }
        Err(e) => {
            tracing::error!("persist_administrator: {:?}", e);
            Err(e.into())
        }
    }
}

// Another writer got there between our lookup and insert. Only a row with the
// same email counts as the administrator; anything else is a username clash.
async fn resolve_conflict(
    pool: &SqlitePool,
    account: &NewAccount,
) -> Result<SeedOutcome, AppError> {
    if count_accounts_by_email(pool, &account.email).await? > 0 {
        tracing::warn!(email = %account.email, "administrator was created concurrently");
        Ok(SeedOutcome::AlreadyExists)
    } else {
        Err(AppError::UsernameTaken(account.username.clone()))
    }
}
