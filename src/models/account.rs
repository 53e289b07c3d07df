use std::fmt::Display;

use crate::errors::AppError;

/// Privilege level of an account, lowest first.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Cashier,
    Admin,
}

impl TryFrom<&str> for Role {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "cashier" => Ok(Self::Cashier),
            "admin" => Ok(Self::Admin),
            _ => Err(AppError::InvalidRole(value.to_owned())),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Cashier => write!(f, "cashier"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Account to be inserted. The credential is already hashed at this point.
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}
