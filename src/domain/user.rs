//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
///
/// Timestamps travel as milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Caller supplied identifier
    #[schema(example = "2")]
    pub id: String,
    /// Display name, also used to log in
    #[schema(example = "Ana")]
    pub name: String,
    /// Plaintext password
    #[schema(example = "pw")]
    pub password: String,
    /// Creation time (epoch milliseconds)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub created_at: DateTime<Utc>,
    /// Time of the last update (epoch milliseconds)
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<i64>)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Favorite movie ids in the order they were marked
    #[serde(default)]
    #[schema(example = json!(["m1"]))]
    pub favorites: Vec<String>,
}

impl User {
    /// Create a new user stamped with the current time
    pub fn new(id: String, name: String, password: String) -> Self {
        Self {
            id,
            name,
            password,
            created_at: Utc::now(),
            updated_at: None,
            favorites: Vec::new(),
        }
    }

    /// Exact, case-sensitive comparison of both login fields
    pub fn matches_credentials(&self, name: &str, password: &str) -> bool {
        self.name == name && self.password == password
    }

    /// Replace name and password and refresh `updated_at`
    pub fn apply_update(&mut self, name: String, password: String) {
        self.name = name;
        self.password = password;
        self.updated_at = Some(Utc::now());
    }

    /// Check if the movie is in the favorites list
    pub fn has_favorite(&self, movie_id: &str) -> bool {
        self.favorites.iter().any(|fav| fav == movie_id)
    }

    /// Append the movie unless already present. Returns true if the list changed.
    pub fn mark_favorite(&mut self, movie_id: &str) -> bool {
        if self.has_favorite(movie_id) {
            return false;
        }
        self.favorites.push(movie_id.to_string());
        true
    }

    /// Drop every occurrence of the movie. Returns true if the list changed.
    pub fn unmark_favorite(&mut self, movie_id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|fav| fav != movie_id);
        self.favorites.len() != before
    }
}
