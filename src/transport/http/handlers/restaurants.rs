use crate::domain::query::filter_options;
use crate::domain::reviews::sort_newest_first;
use crate::transport::http::handlers::common::{criteria_from_query, directory_error, failure, ok};
use crate::transport::http::types::{ApiResponse, AppState, RestaurantDetail, RestaurantPage, RestaurantQuery};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/restaurants",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive match on name, cuisine or location"),
        ("category" = Option<String>, Query, description = "Exact cuisine; \"All\" disables the filter"),
        ("budgets" = Option<String>, Query, description = "Comma-separated budget bands, e.g. 10-50,50-150"),
        ("sides" = Option<String>, Query, description = "Comma-separated campus sides"),
        ("page" = Option<usize>, Query, description = "1-based page, clamped to the last page"),
        ("page_size" = Option<usize>, Query, description = "Items per page (defaults to PAGE_SIZE)")
    ),
    responses(
        (status = 200, description = "One page of matching restaurants", body = ApiResponse),
        (status = 400, description = "Unknown budget band", body = ApiResponse)
    )
)]
pub async fn list_restaurants_handler(
    State(state): State<AppState>,
    Query(query): Query<RestaurantQuery>,
) -> impl IntoResponse {
    let criteria = match criteria_from_query(&query) {
        Ok(c) => c,
        Err(e) => return failure(StatusCode::BAD_REQUEST, e),
    };

    let service = state.service.lock().await;
    let page = service.search_page(&criteria, query.page.unwrap_or(1), query.page_size);
    ok(RestaurantPage::from(page))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/filter-options",
    responses(
        (status = 200, description = "Categories, budget bands and sides to filter on", body = ApiResponse)
    )
)]
pub async fn filter_options_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = state.service.lock().await;
    ok(filter_options(service.catalogue().all()))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    params(("id" = String, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its review summary", body = ApiResponse),
        (status = 404, description = "Unknown restaurant", body = ApiResponse)
    )
)]
pub async fn get_restaurant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let service = state.service.lock().await;
    let restaurant = match service.restaurant(&id) {
        Ok(r) => r.clone(),
        Err(e) => return directory_error(e),
    };

    ok(RestaurantDetail {
        average_rating: service.reviews.average_rating(&id),
        review_count: service.reviews.list_by_restaurant(&id).len(),
        restaurant,
    })
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}/reviews",
    params(("id" = String, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Reviews for the restaurant, newest first", body = ApiResponse),
        (status = 404, description = "Unknown restaurant", body = ApiResponse)
    )
)]
pub async fn restaurant_reviews_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let service = state.service.lock().await;
    if let Err(e) = service.restaurant(&id) {
        return directory_error(e);
    }

    let mut reviews = service.reviews.list_by_restaurant(&id);
    sort_newest_first(&mut reviews);
    ok(reviews)
}
