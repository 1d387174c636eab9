use crate::app::directory_service::DirectoryService;
use crate::domain::admin::{MessageStatus, RequestStatus};
use crate::domain::query::{FilterCriteria, Page};
use crate::domain::restaurant::Restaurant;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Mutex<DirectoryService>>,
}

impl AppState {
    pub fn new(service: DirectoryService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Query string of `GET /api/restaurants`. List values are comma separated.
#[derive(Deserialize, Debug, Default)]
pub struct RestaurantQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub budgets: Option<String>,
    pub sides: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPage {
    pub restaurants: Vec<Restaurant>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl From<Page<Restaurant>> for RestaurantPage {
    fn from(page: Page<Restaurant>) -> Self {
        Self {
            restaurants: page.items,
            page: page.page,
            page_size: page.page_size,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetail {
    pub restaurant: Restaurant,
    pub average_rating: f64,
    pub review_count: usize,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub user_id: String,
    pub restaurant_id: String,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub restaurant_id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateReviewRequest {
    pub rating: u8,
    pub comment: String,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RandomPickRequest {
    /// Narrows the candidate list; empty criteria draw from every restaurant.
    #[serde(default)]
    pub criteria: FilterCriteria,
    /// Theme shown with the previous pick, so the next one differs.
    #[serde(default)]
    pub previous_theme: Option<usize>,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RandomPickResponse {
    pub restaurant: Restaurant,
    pub theme: usize,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WheelSpinRequest {
    /// 2 to 12 restaurant ids, in wheel segment order.
    pub restaurant_ids: Vec<String>,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WheelSpinResponse {
    pub winner_index: usize,
    pub winner: Restaurant,
    pub candidates: Vec<Restaurant>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct RequestStatusUpdate {
    pub status: RequestStatus,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct MessageStatusUpdate {
    pub status: MessageStatus,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(format!("Invalid JSON body: {} (expected: {})", err, expected)),
        }),
    )
}
