//! Shared types, errors, and configuration for Expensa.
//!
//! This crate provides common pieces used across the other crates:
//! - Pagination types for list endpoints
//! - Application-wide error types
//! - Configuration management
//! - Access token claims and verification

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;


pub use auth::Claims;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
