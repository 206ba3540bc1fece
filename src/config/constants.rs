//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Seed Data
// =============================================================================

/// Id of the record every fresh store starts with
pub const SEED_USER_ID: &str = "1";

/// Name of the seed record
pub const SEED_USER_NAME: &str = "Juan";

/// Plaintext password of the seed record
pub const SEED_USER_PASSWORD: &str = "123";

// =============================================================================
// Duplicate Id Policy
// =============================================================================

/// Let records with the same id coexist
pub const POLICY_ALLOW: &str = "allow";

/// Refuse to create a record whose id already exists
pub const POLICY_REJECT: &str = "reject";

// =============================================================================
// Messages
// =============================================================================

/// Error message returned when login finds no matching record
pub const LOGIN_NOT_FOUND_MESSAGE: &str = "User not found";

/// Welcome text served on the root path
pub const WELCOME_MESSAGE: &str = "Welcome to the movie users API";
