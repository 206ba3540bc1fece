//! User repository backed by an in-memory record list.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::{DuplicateIdPolicy, SEED_USER_ID, SEED_USER_NAME, SEED_USER_PASSWORD};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every method runs as one critical section, so a read-modify-write
/// such as marking a favorite cannot interleave with another mutation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append a user
    async fn insert(&self, user: User) -> AppResult<User>;

    /// All users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Number of stored records
    async fn count(&self) -> AppResult<usize>;

    /// First user with the given id
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// First user whose name and password both match
    async fn find_by_credentials(&self, name: &str, password: &str) -> AppResult<Option<User>>;

    /// Replace name and password, returning the updated record
    async fn update(&self, id: &str, name: String, password: String) -> AppResult<Option<User>>;

    /// Remove every record with the given id, returning how many were dropped
    async fn delete(&self, id: &str) -> AppResult<usize>;

    /// Append a movie to the user's favorites unless already present
    async fn add_favorite(&self, id: &str, movie_id: &str) -> AppResult<Option<User>>;

    /// Remove a movie from the user's favorites
    async fn remove_favorite(&self, id: &str, movie_id: &str) -> AppResult<Option<User>>;
}

/// In-memory implementation of UserRepository.
///
/// Records live in a `Vec` to keep insertion order; lookups are linear scans.
pub struct UserStore {
    users: RwLock<Vec<User>>,
    policy: DuplicateIdPolicy,
}

impl UserStore {
    /// Create an empty store
    pub fn new(policy: DuplicateIdPolicy) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            policy,
        }
    }

    /// Create a store holding the default seed record
    pub fn seeded(policy: DuplicateIdPolicy) -> Self {
        let seed = User::new(
            SEED_USER_ID.to_string(),
            SEED_USER_NAME.to_string(),
            SEED_USER_PASSWORD.to_string(),
        );

        Self {
            users: RwLock::new(vec![seed]),
            policy,
        }
    }

    /// Duplicate id policy applied on insert
    pub fn policy(&self) -> DuplicateIdPolicy {
        self.policy
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::seeded(DuplicateIdPolicy::default())
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        if self.policy == DuplicateIdPolicy::Reject && users.iter().any(|u| u.id == user.id) {
            return Err(AppError::conflict(format!("User with id \"{}\"", user.id)));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.users.read().await.len())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_credentials(&self, name: &str, password: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.matches_credentials(name, password))
            .cloned())
    }

    async fn update(&self, id: &str, name: String, password: String) -> AppResult<Option<User>> {
        let mut users = self.users.write().await;

        let Some(mut updated) = users.iter().find(|u| u.id == id).cloned() else {
            return Ok(None);
        };
        updated.apply_update(name, password);

        // Duplicates all collapse onto the merged copy of the first match
        for user in users.iter_mut().filter(|u| u.id == id) {
            *user = updated.clone();
        }

        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> AppResult<usize> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(before - users.len())
    }

    async fn add_favorite(&self, id: &str, movie_id: &str) -> AppResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.mark_favorite(movie_id);
            user.clone()
        }))
    }

    async fn remove_favorite(&self, id: &str, movie_id: &str) -> AppResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.unmark_favorite(movie_id);
            user.clone()
        }))
    }
}
