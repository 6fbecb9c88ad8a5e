use std::sync::Arc;

use axum::extract::{MatchedPath, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use motorpool_core::models::Profile;

use crate::dto::ErrorResponse;
use crate::policy;
use crate::state::AppState;

/// Authenticated identity extracted from a verified token, inserted
/// into request extensions for downstream middleware and handlers.
#[derive(Debug, Clone)]
pub struct CurrentAdministrator {
    pub email: String,
    pub profile: Profile,
}

/// Middleware that validates `Authorization: Bearer <token>` on every
/// protected route and records the caller's identity.
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()) else {
        return unauthorized("Missing or invalid Authorization header. Expected: Bearer <token>");
    };

    let claims = match state.tokens.verify(token) {
        Ok(claims) => claims,
        Err(_) => return unauthorized("Invalid or expired bearer token"),
    };

    request.extensions_mut().insert(CurrentAdministrator {
        email: claims.sub,
        profile: claims.role,
    });

    next.run(request).await
}

/// Middleware that checks the caller's role against the policy table
/// for the matched route. Routes without a policy entry are denied.
pub async fn authorize(
    request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some(required) = request
        .extensions()
        .get::<MatchedPath>()
        .and_then(|matched| policy::required_roles(request.method(), matched.as_str()))
    else {
        return forbidden("No policy entry allows this route");
    };

    let Some(current) = request.extensions().get::<CurrentAdministrator>() else {
        return unauthorized("Authentication required");
    };

    if !required.contains(&current.profile) {
        return forbidden("Insufficient role for this route");
    }

    next.run(request).await
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn unauthorized(message: &str) -> Response {
    let body = ErrorResponse {
        error: "unauthorized".to_string(),
        message: message.to_string(),
    };
    (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
}

fn forbidden(message: &str) -> Response {
    let body = ErrorResponse {
        error: "forbidden".to_string(),
        message: message.to_string(),
    };
    (StatusCode::FORBIDDEN, axum::Json(body)).into_response()
}
