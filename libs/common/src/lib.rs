//! Common library for the finance tracking backend
//!
//! This crate provides shared infrastructure used by the API service:
//! PostgreSQL connection pooling, health checks, and error types.

pub mod database;
pub mod error;
