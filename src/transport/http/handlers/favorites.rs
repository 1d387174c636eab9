use crate::transport::http::handlers::common::{directory_error, ok};
use crate::transport::http::types::{json_422, AddFavoriteRequest, ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

#[utoipa::path(
    post,
    path = "/api/favorites",
    request_body = AddFavoriteRequest,
    responses(
        (status = 200, description = "Favorite stored; `added` is false if it already existed", body = ApiResponse),
        (status = 404, description = "Unknown restaurant", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    request: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(r) => r,
        Err(e) => return json_422(e, "{ userId, restaurantId }").into_response(),
    };

    let mut service = state.service.lock().await;
    if let Err(e) = service.restaurant(&request.restaurant_id) {
        return directory_error(e);
    }

    match service.favorites.add(&request.user_id, &request.restaurant_id).await {
        Ok(added) => {
            if added {
                info!(user = %request.user_id, restaurant = %request.restaurant_id, "Favorite added");
            }
            ok(serde_json::json!({ "added": added }))
        }
        Err(e) => directory_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/favorites/{user_id}/{restaurant_id}",
    params(
        ("user_id" = String, Path, description = "User id"),
        ("restaurant_id" = String, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "`removed` is false if the pair was not a favorite", body = ApiResponse)
    )
)]
pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    Path((user_id, restaurant_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let mut service = state.service.lock().await;
    match service.favorites.remove(&user_id, &restaurant_id).await {
        Ok(removed) => ok(serde_json::json!({ "removed": removed })),
        Err(e) => directory_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/favorites/{user_id}",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's favorite restaurants in catalogue order", body = ApiResponse)
    )
)]
pub async fn list_favorites_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    let service = state.service.lock().await;
    ok(service.favorites_for(&user_id))
}

#[utoipa::path(
    get,
    path = "/api/favorites/{user_id}/{restaurant_id}",
    params(
        ("user_id" = String, Path, description = "User id"),
        ("restaurant_id" = String, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "Whether the pair is a favorite", body = ApiResponse)
    )
)]
pub async fn is_favorite_handler(
    State(state): State<AppState>,
    Path((user_id, restaurant_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let service = state.service.lock().await;
    ok(serde_json::json!({
        "favorite": service.favorites.is_favorite(&user_id, &restaurant_id)
    }))
}
