use std::{env, fmt};

use crate::{errors::AppError, models::account::Role};

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// The account `create_admin` provisions.
pub struct AdminSeed {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl AdminSeed {
    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_ADMIN_PASSWORD
    }
}

impl Default for AdminSeed {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            role: Role::Admin,
        }
    }
}

impl fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSeed")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

pub struct Config {
    pub database_url: String,
    pub admin: AdminSeed,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("admin", &self.admin)
            .finish()
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` when one exists.
    pub fn from_env() -> Result<Self, AppError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let database_url = value("DATABASE_URL").ok_or(AppError::MissingConfig("DATABASE_URL"))?;
        let defaults = AdminSeed::default();
        let admin = AdminSeed {
            username: value("ADMIN_USERNAME").unwrap_or(defaults.username),
            email: value("ADMIN_EMAIL").unwrap_or(defaults.email),
            password: value("ADMIN_PASSWORD").unwrap_or(defaults.password),
            role: Role::Admin,
        };
        Ok(Config {
            database_url,
            admin,
        })
    }
}
