//! Data-access layer: one repository per table, each borrowing the shared pool.

pub mod bookmark_repository;
pub mod user_repository;
