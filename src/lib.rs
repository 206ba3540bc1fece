//! Movie Users - user accounts with favorite movie lists.
//!
//! An axum service keeping every user record in an in-memory store
//! that is created at startup and dropped at exit.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The User entity and its rules
//! - **services**: Application use cases
//! - **infra**: Repository trait and the in-memory store
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 3000
//!
//! # Print the OpenAPI document
//! cargo run -- openapi
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, DuplicateIdPolicy};
pub use domain::User;
pub use errors::{AppError, AppResult};
pub use infra::UserStore;
