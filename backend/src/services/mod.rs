//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business operations
//! and orchestrate interactions between the HTTP handlers and the repositories.

pub mod bookmark_service;
pub mod user_service;
