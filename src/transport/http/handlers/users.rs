use crate::domain::users::{avatar_url, ProfileUpdate, User};
use crate::transport::http::handlers::common::{directory_error, not_found, ok};
use crate::transport::http::types::{json_422, ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

/// Profile with the avatar resolved to a displayable URL.
fn profile_json(user: &User) -> serde_json::Value {
    let mut value = serde_json::json!(user);
    value["avatarUrl"] = serde_json::Value::String(avatar_url(user));
    value
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User profile", body = ApiResponse),
        (status = 404, description = "Unknown user", body = ApiResponse)
    )
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let service = state.service.lock().await;
    match service.users.get(&id) {
        Some(user) => ok(profile_json(user)),
        None => not_found("User", &id),
    }
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = ProfileUpdate,
    responses(
        (status = 200, description = "Updated profile", body = ApiResponse),
        (status = 404, description = "Unknown user", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<ProfileUpdate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(update) = match request {
        Ok(r) => r,
        Err(e) => return json_422(e, "{ firstName?, lastName?, username?, avatar? }").into_response(),
    };

    let mut service = state.service.lock().await;
    match service.users.update_profile(&id, update).await {
        Ok(user) => ok(profile_json(&user)),
        Err(e) => directory_error(e),
    }
}
