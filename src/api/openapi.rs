//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/api`.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::api::routes;
use crate::domain::User;
use crate::types::{HealthResponse, MessageResponse};

/// OpenAPI documentation for the movie users API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Users API",
        version = "0.1.0",
        description = "User accounts with login, logout and favorite movie lists",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        routes::health,
        user_handler::create,
        user_handler::login,
        user_handler::logout,
        user_handler::find_all,
        user_handler::find_one,
        user_handler::update,
        user_handler::remove,
        user_handler::get_favorites,
        user_handler::mark_favorite,
        user_handler::unmark_favorite,
    ),
    components(
        schemas(
            User,
            MessageResponse,
            HealthResponse,
            user_handler::CreateUserRequest,
            user_handler::LoginRequest,
            user_handler::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Users", description = "User accounts and login"),
        (name = "Favorites", description = "Per-user favorite movies"),
        (name = "Health", description = "Liveness and store size")
    )
)]
pub struct ApiDoc;

/// Render the document as pretty JSON.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ApiDoc::openapi())
}
