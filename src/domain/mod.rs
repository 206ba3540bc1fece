//! Domain layer - Core business entities and logic
//!
//! Holds the User entity and the rules that apply to a single record.
//! Nothing here knows about storage or HTTP.

pub mod user;

pub use user::User;
