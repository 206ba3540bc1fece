//! Request bodies for the `/users` routes, deserialized and checked in one step.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// A `CreateUserRequest`, `LoginRequest` or `UpdateUserRequest` body whose
/// `validator` rules (non-empty id, name and password) already hold.
///
/// Every failure becomes `AppError::Validation` (400) before the handler
/// runs: a wrong content type, broken JSON, a missing field, or an empty one.
/// Empty fields report their own messages, e.g. `"Id is required"`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => body,
            Err(rejection) => return Err(AppError::validation(rejection_message(&rejection))),
        };

        if let Err(errors) = body.validate() {
            return Err(AppError::validation(field_messages(&errors)));
        }

        Ok(ValidatedJson(body))
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Expected a JSON body with content type application/json".to_string()
        }
        other => other.body_text(),
    }
}

/// Field messages joined with ", ", ordered by field name.
fn field_messages(errors: &ValidationErrors) -> String {
    let mut by_field: Vec<_> = errors.field_errors().into_iter().collect();
    by_field.sort_by(|a, b| a.0.cmp(&b.0));

    let mut messages = Vec::new();
    for (field, errs) in by_field {
        for err in errs {
            match &err.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("{} is invalid", field)),
            }
        }
    }
    messages.join(", ")
}
