use crate::domain::admin::{MessageDetails, RequestDetails};
use crate::transport::http::handlers::common::{directory_error, not_found, ok};
use crate::transport::http::types::{json_422, ApiResponse, AppState, MessageStatusUpdate, RequestStatusUpdate};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

// --- Restaurant requests ---

#[utoipa::path(
    get,
    path = "/api/admin/requests",
    responses((status = 200, description = "All restaurant requests", body = ApiResponse))
)]
pub async fn list_requests_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service.lock().await;
    ok(service.inbox.requests())
}

#[utoipa::path(
    post,
    path = "/api/admin/requests",
    request_body = RequestDetails,
    responses(
        (status = 200, description = "Request submitted as pending", body = ApiResponse),
        (status = 400, description = "Blank restaurant name, location or submitter", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn create_request_handler(
    State(state): State<AppState>,
    request: Result<Json<RequestDetails>, JsonRejection>,
) -> impl IntoResponse {
    let Json(details) = match request {
        Ok(r) => r,
        Err(e) => return json_422(e, "RequestDetails").into_response(),
    };

    let mut service = state.service.lock().await;
    match service.inbox.create_request(details).await {
        Ok(created) => {
            info!(request = %created.id, name = %created.details.restaurant_name, "Restaurant request submitted");
            ok(created)
        }
        Err(e) => directory_error(e),
    }
}

#[utoipa::path(
    patch,
    path = "/api/admin/requests/{id}",
    params(("id" = String, Path, description = "Request id")),
    request_body = RequestStatusUpdate,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse),
        (status = 404, description = "Unknown request", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn update_request_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<RequestStatusUpdate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(update) = match request {
        Ok(r) => r,
        Err(e) => return json_422(e, "{ status: pending|approved|rejected }").into_response(),
    };

    let mut service = state.service.lock().await;
    match service.inbox.set_request_status(&id, update.status).await {
        Ok(Some(updated)) => ok(updated),
        Ok(None) => not_found("Request", &id),
        Err(e) => directory_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/requests/{id}",
    params(("id" = String, Path, description = "Request id")),
    responses(
        (status = 200, description = "Request deleted", body = ApiResponse),
        (status = 404, description = "Unknown request", body = ApiResponse)
    )
)]
pub async fn delete_request_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut service = state.service.lock().await;
    match service.inbox.delete_request(&id).await {
        Ok(true) => ok(serde_json::json!({ "deleted": id })),
        Ok(false) => not_found("Request", &id),
        Err(e) => directory_error(e),
    }
}

// --- Contact messages ---

#[utoipa::path(
    get,
    path = "/api/admin/messages",
    responses((status = 200, description = "All contact messages", body = ApiResponse))
)]
pub async fn list_messages_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service.lock().await;
    ok(service.inbox.messages())
}

#[utoipa::path(
    post,
    path = "/api/admin/messages",
    request_body = MessageDetails,
    responses(
        (status = 200, description = "Message stored as unread", body = ApiResponse),
        (status = 400, description = "Blank sender email or message", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn create_message_handler(
    State(state): State<AppState>,
    request: Result<Json<MessageDetails>, JsonRejection>,
) -> impl IntoResponse {
    let Json(details) = match request {
        Ok(r) => r,
        Err(e) => return json_422(e, "{ senderName, senderEmail, subject, message }").into_response(),
    };

    let mut service = state.service.lock().await;
    match service.inbox.create_message(details).await {
        Ok(created) => {
            info!(message = %created.id, "Contact message received");
            ok(created)
        }
        Err(e) => directory_error(e),
    }
}

#[utoipa::path(
    patch,
    path = "/api/admin/messages/{id}",
    params(("id" = String, Path, description = "Message id")),
    request_body = MessageStatusUpdate,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse),
        (status = 404, description = "Unknown message", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn update_message_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<MessageStatusUpdate>, JsonRejection>,
) -> impl IntoResponse {
    let Json(update) = match request {
        Ok(r) => r,
        Err(e) => return json_422(e, "{ status: unread|read }").into_response(),
    };

    let mut service = state.service.lock().await;
    match service.inbox.set_message_status(&id, update.status).await {
        Ok(Some(updated)) => ok(updated),
        Ok(None) => not_found("Message", &id),
        Err(e) => directory_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/messages/{id}",
    params(("id" = String, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message deleted", body = ApiResponse),
        (status = 404, description = "Unknown message", body = ApiResponse)
    )
)]
pub async fn delete_message_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut service = state.service.lock().await;
    match service.inbox.delete_message(&id).await {
        Ok(true) => ok(serde_json::json!({ "deleted": id })),
        Ok(false) => not_found("Message", &id),
        Err(e) => directory_error(e),
    }
}

// --- Dashboard ---

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses((status = 200, description = "Dashboard counters", body = ApiResponse))
)]
pub async fn dashboard_stats_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service.lock().await;
    ok(service.dashboard_stats())
}

#[utoipa::path(
    get,
    path = "/api/admin/reviews/flagged",
    responses((status = 200, description = "Reviews at or below the moderation threshold", body = ApiResponse))
)]
pub async fn flagged_reviews_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service.lock().await;
    ok(service.reviews.flagged_for_moderation())
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses((status = 200, description = "Non-admin users", body = ApiResponse))
)]
pub async fn list_members_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service.lock().await;
    ok(service.users.list_members())
}
