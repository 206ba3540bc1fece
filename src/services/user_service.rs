//! User service - Handles user-related business logic.
//!
//! Turns repository misses into `NotFound` errors and logs each
//! state change. The repository does the actual bookkeeping.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::LOGIN_NOT_FOUND_MESSAGE;
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user with the caller supplied id
    async fn create(&self, id: String, name: String, password: String) -> AppResult<User>;

    /// List every user in insertion order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Get user by id
    async fn find_one(&self, id: &str) -> AppResult<User>;

    /// Look up the user whose name and password both match
    async fn login(&self, name: &str, password: &str) -> AppResult<User>;

    /// Build the logout confirmation. No session state exists to clear.
    fn logout(&self, id: &str) -> String;

    /// Replace name and password of an existing user
    async fn update(&self, id: &str, name: String, password: String) -> AppResult<User>;

    /// Remove a user; unknown ids are ignored
    async fn remove(&self, id: &str) -> AppResult<()>;

    /// Add a movie to the user's favorites (idempotent)
    async fn mark_favorite(&self, id: &str, movie_id: &str) -> AppResult<User>;

    /// Remove a movie from the user's favorites (idempotent)
    async fn unmark_favorite(&self, id: &str, movie_id: &str) -> AppResult<User>;

    /// Favorite movie ids of a user
    async fn get_favorites(&self, id: &str) -> AppResult<Vec<String>>;

    /// Number of stored records
    async fn count(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn create(&self, id: String, name: String, password: String) -> AppResult<User> {
        let user = self
            .repo
            .insert(User::new(id, name, password))
            .await
            .inspect_err(|e| tracing::warn!("Create rejected: {}", e))?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn find_one(&self, id: &str) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))
    }

    async fn login(&self, name: &str, password: &str) -> AppResult<User> {
        // Same error for unknown name and wrong password
        let user = self
            .repo
            .find_by_credentials(name, password)
            .await?
            .ok_or_not_found(LOGIN_NOT_FOUND_MESSAGE)?;

        tracing::debug!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    fn logout(&self, id: &str) -> String {
        format!("User with ID {} has been logged out successfully.", id)
    }

    async fn update(&self, id: &str, name: String, password: String) -> AppResult<User> {
        let user = self
            .repo
            .update(id, name, password)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))?;

        tracing::info!(user_id = %id, "User updated");
        Ok(user)
    }

    async fn remove(&self, id: &str) -> AppResult<()> {
        let removed = self.repo.delete(id).await?;
        tracing::info!(user_id = %id, removed, "User removed");
        Ok(())
    }

    async fn mark_favorite(&self, id: &str, movie_id: &str) -> AppResult<User> {
        let user = self
            .repo
            .add_favorite(id, movie_id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))?;

        tracing::debug!(user_id = %id, movie_id, "Favorite marked");
        Ok(user)
    }

    async fn unmark_favorite(&self, id: &str, movie_id: &str) -> AppResult<User> {
        let user = self
            .repo
            .remove_favorite(id, movie_id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))?;

        tracing::debug!(user_id = %id, movie_id, "Favorite unmarked");
        Ok(user)
    }

    async fn get_favorites(&self, id: &str) -> AppResult<Vec<String>> {
        Ok(self.find_one(id).await?.favorites)
    }

    async fn count(&self) -> AppResult<usize> {
        self.repo.count().await
    }
}
