pub mod admin;
pub mod hasher;
