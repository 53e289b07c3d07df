use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required configuration value: `{0}`")]
    MissingConfig(&'static str),
    #[error("Failed to connect to the database: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("Role `{0}` is not valid, possible values are: cashier and admin")]
    InvalidRole(String),
    #[error("Username already exists: {0}")]
    UsernameTaken(String),
    #[error("Failed to hash credential: {0}")]
    Hashing(#[from] password_hash::Error),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn code(&self) -> String {
        match self {
            AppError::MissingConfig(_) => String::from("MissingConfig"),
            AppError::Connection(_) => String::from("ConnectionFailed"),
            AppError::InvalidRole(_) => String::from("InvalidRole"),
            AppError::UsernameTaken(_) => String::from("UsernameTaken"),
            AppError::Hashing(_) => String::from("HashingFailed"),
            AppError::Database(_) => String::from("DatabaseError"),
        }
    }
}
