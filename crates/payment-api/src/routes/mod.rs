pub mod health;
pub mod metrics;

use axum::extract::OriginalUri;
use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Router fallback for paths with no route.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Method fallback for routes that exist under another method.
///
/// Runs inside nested routers, so the path comes from [`OriginalUri`].
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{method} not allowed on {}", uri.path()))
}
