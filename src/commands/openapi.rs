//! Openapi command - Dumps the OpenAPI document.

use crate::api::openapi::openapi_json;
use crate::cli::args::OpenapiArgs;
use crate::errors::{AppError, AppResult};

/// Execute the openapi command
pub async fn execute(args: OpenapiArgs) -> AppResult<()> {
    let json = openapi_json()
        .map_err(|e| AppError::internal(format!("Failed to render OpenAPI document: {}", e)))?;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .map_err(|e| AppError::internal(format!("Failed to write {}: {}", path.display(), e)))?;
            tracing::info!("OpenAPI document written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
