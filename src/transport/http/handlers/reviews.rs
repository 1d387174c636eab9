use crate::domain::reviews::sort_newest_first;
use crate::transport::http::handlers::common::{directory_error, not_found, ok};
use crate::transport::http::types::{json_422, ApiResponse, AppState, CreateReviewRequest, UpdateReviewRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 200, description = "Review created", body = ApiResponse),
        (status = 400, description = "Rating outside 1..=5", body = ApiResponse),
        (status = 404, description = "Unknown restaurant", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn create_review_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(r) => r,
        Err(e) => return json_422(e, "{ restaurantId, userId, rating, comment }").into_response(),
    };

    let mut service = state.service.lock().await;
    if let Err(e) = service.restaurant(&request.restaurant_id) {
        return directory_error(e);
    }

    match service
        .reviews
        .create(&request.restaurant_id, &request.user_id, request.rating, &request.comment)
        .await
    {
        Ok(review) => {
            info!(review = %review.id, restaurant = %review.restaurant_id, rating = review.rating, "Review created");
            ok(review)
        }
        Err(e) => directory_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    params(("id" = String, Path, description = "Review id")),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Review updated", body = ApiResponse),
        (status = 400, description = "Rating outside 1..=5", body = ApiResponse),
        (status = 404, description = "Unknown review", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn update_review_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<UpdateReviewRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(r) => r,
        Err(e) => return json_422(e, "{ rating, comment }").into_response(),
    };

    let mut service = state.service.lock().await;
    match service.reviews.update(&id, request.rating, &request.comment).await {
        Ok(Some(review)) => ok(review),
        Ok(None) => not_found("Review", &id),
        Err(e) => directory_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    params(("id" = String, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted", body = ApiResponse),
        (status = 404, description = "Unknown review", body = ApiResponse)
    )
)]
pub async fn delete_review_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut service = state.service.lock().await;
    match service.reviews.delete(&id).await {
        Ok(true) => ok(serde_json::json!({ "deleted": id })),
        Ok(false) => not_found("Review", &id),
        Err(e) => directory_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/reviews",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Reviews written by the user, newest first", body = ApiResponse)
    )
)]
pub async fn user_reviews_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let service = state.service.lock().await;
    let mut reviews = service.reviews.list_by_user(&id);
    sort_newest_first(&mut reviews);
    ok(reviews)
}
