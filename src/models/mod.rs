pub mod account;
pub mod schema;
