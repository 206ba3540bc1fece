//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::User;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Caller chosen user id
    #[validate(length(min = 1, message = "Id is required"))]
    #[schema(example = "2", min_length = 1)]
    pub id: String,
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ana", min_length = 1)]
    pub name: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "pw", min_length = 1)]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ana", min_length = 1)]
    pub name: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "pw", min_length = 1)]
    pub password: String,
}

/// User update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ana Maria", min_length = 1)]
    pub name: String,
    /// New password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret", min_length = 1)]
    pub password: String,
}

/// Static segment shared by the login route and a user whose id is "login"
const LOGIN_SEGMENT: &str = "login";

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(find_all).post(create))
        // `/login` wins over `/:id`, so the by-id methods are routed here too
        .route(
            "/login",
            post(login)
                .get(find_login_user)
                .patch(update_login_user)
                .delete(remove_login_user),
        )
        .route("/logout/:id", post(logout))
        .route("/:id", get(find_one).patch(update).delete(remove))
        .route("/:id/favorites", get(get_favorites))
        .route(
            "/:id/favorites/:movie_id",
            post(mark_favorite).delete(unmark_favorite),
        )
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Id already taken (reject policy only)")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state
        .user_service
        .create(payload.id, payload.name, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with name and password
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = User),
        (status = 400, description = "Validation error"),
        (status = 404, description = "No user with these credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .login(&payload.name, &payload.password)
        .await?;

    Ok(Json(user))
}

/// Log a user out
#[utoipa::path(
    post,
    path = "/users/logout/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Logout confirmation", body = MessageResponse)
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<MessageResponse> {
    Json(MessageResponse::new(state.user_service.logout(&id)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in creation order", body = Vec<User>)
    )
)]
pub async fn find_all(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.user_service.find_all().await?))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn find_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    Ok(Json(state.user_service.find_one(&id).await?))
}

/// Update a user's name and password
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .update(&id, payload.name, payload.password)
        .await?;

    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User removed, or was never there")
    )
)]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.user_service.remove(&id).await?;
    Ok(StatusCode::OK)
}

/// List a user's favorite movies
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = "Favorites",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorite movie ids", body = Vec<String>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.user_service.get_favorites(&id).await?))
}

/// Mark a movie as favorite
#[utoipa::path(
    post,
    path = "/users/{id}/favorites/{movie_id}",
    tag = "Favorites",
    params(
        ("id" = String, Path, description = "User ID"),
        ("movie_id" = String, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn mark_favorite(
    State(state): State<AppState>,
    Path((id, movie_id)): Path<(String, String)>,
) -> AppResult<Json<User>> {
    Ok(Json(state.user_service.mark_favorite(&id, &movie_id).await?))
}

/// Remove a movie from favorites
#[utoipa::path(
    delete,
    path = "/users/{id}/favorites/{movie_id}",
    tag = "Favorites",
    params(
        ("id" = String, Path, description = "User ID"),
        ("movie_id" = String, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn unmark_favorite(
    State(state): State<AppState>,
    Path((id, movie_id)): Path<(String, String)>,
) -> AppResult<Json<User>> {
    Ok(Json(state.user_service.unmark_favorite(&id, &movie_id).await?))
}

/// `GET /users/login`: find the user whose id is "login"
async fn find_login_user(state: State<AppState>) -> AppResult<Json<User>> {
    find_one(state, Path(LOGIN_SEGMENT.to_string())).await
}

/// `PATCH /users/login`: update the user whose id is "login"
async fn update_login_user(
    state: State<AppState>,
    payload: ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    update(state, Path(LOGIN_SEGMENT.to_string()), payload).await
}

/// `DELETE /users/login`: remove the user whose id is "login"
async fn remove_login_user(state: State<AppState>) -> AppResult<StatusCode> {
    remove(state, Path(LOGIN_SEGMENT.to_string())).await
}
