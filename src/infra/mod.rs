//! Infrastructure layer - Storage concerns
//!
//! Holds the repository abstraction and the in-memory store that
//! owns every user record for the lifetime of the process.

pub mod repositories;

pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
