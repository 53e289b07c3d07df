use chrono::Utc;
use sqlx::{Sqlite, Transaction, prelude::FromRow};

use crate::models::account::{NewAccount, Role};

#[derive(Debug, FromRow)]
pub struct DbAccount {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: i64,
}

pub async fn get_account_by_email(
    pool: &sqlx::SqlitePool,
    email: &str,
) -> sqlx::Result<Option<DbAccount>> {
    sqlx::query_as("select * from users where email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn count_accounts_by_email(pool: &sqlx::SqlitePool, email: &str) -> sqlx::Result<i64> {
    let (count,): (i64,) = sqlx::query_as("select count(*) from users where email = ?")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn insert_account(
    account: &NewAccount,
    tx: &mut Transaction<'_, Sqlite>,
) -> sqlx::Result<i64> {
    let now = Utc::now();
    let result = sqlx::query(
        "insert into users (username, email, password_hash, role, created_at) values (?, ?, ?, ?, ?)",
    )
    .bind(&account.username)
    .bind(&account.email)
    .bind(&account.password_hash)
    .bind(account.role)
    .bind(now.timestamp())
    .execute(tx.as_mut())
    .await?;
    Ok(result.last_insert_rowid())
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::create_all, models::schema::registered_tables};

    fn account(username: &str, email: &str) -> NewAccount {
        NewAccount {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA".to_string(),
            role: Role::default(),
        }
    }

    async fn insert(pool: &sqlx::SqlitePool, new_account: NewAccount) -> sqlx::Result<i64> {
        let mut tx = pool.begin().await?;
        let id = insert_account(&new_account, &mut tx).await?;
        tx.commit().await?;
        Ok(id)
    }

    #[sqlx::test]
    async fn test_insert_and_get_account(pool: sqlx::SqlitePool) {
        create_all(&pool, &registered_tables())
            .await
            .expect("failed to create schema");
        let id = insert(&pool, account("till-1", "till-1@example.com"))
            .await
            .expect("account inserted");
        let stored = get_account_by_email(&pool, "till-1@example.com")
            .await
            .expect("failed to get account")
            .expect("account exists");
        assert_eq!(stored.id, id);
        assert_eq!(stored.username, "till-1");
        assert_eq!(stored.role, Role::Cashier);
        assert!(stored.created_at > 0);
    }

    #[sqlx::test]
    async fn test_get_missing_account(pool: sqlx::SqlitePool) {
        create_all(&pool, &registered_tables()).await.unwrap();
        let missing = get_account_by_email(&pool, "nobody@example.com")
            .await
            .expect("lookup succeeds");
        assert!(missing.is_none());
    }

    #[sqlx::test]
    async fn test_email_is_unique(pool: sqlx::SqlitePool) {
        create_all(&pool, &registered_tables()).await.unwrap();
        insert(&pool, account("first", "shared@example.com"))
            .await
            .expect("first insert");
        let err = insert(&pool, account("second", "shared@example.com"))
            .await
            .expect_err("duplicate email must be rejected");
        assert!(is_unique_violation(&err));
        assert_eq!(
            count_accounts_by_email(&pool, "shared@example.com")
                .await
                .unwrap(),
            1
        );
    }

    #[sqlx::test]
    async fn test_rolled_back_insert_leaves_no_row(pool: sqlx::SqlitePool) {
        create_all(&pool, &registered_tables()).await.unwrap();
        let mut tx = pool.begin().await.unwrap();
        insert_account(&account("ghost", "ghost@example.com"), &mut tx)
            .await
            .unwrap();
        tx.rollback().await.unwrap();
        assert_eq!(
            count_accounts_by_email(&pool, "ghost@example.com")
                .await
                .unwrap(),
            0
        );
    }
}
