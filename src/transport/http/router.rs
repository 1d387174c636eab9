use crate::domain::admin::{
    ContactMessage, DashboardStats, MessageDetails, MessageStatus, RequestDetails, RequestStatus, RestaurantRequest,
};
use crate::domain::favorites::Favorite;
use crate::domain::query::{FilterCriteria, FilterOptions};
use crate::domain::restaurant::{BudgetRange, PaymentMode, Restaurant, RestaurantType, Side};
use crate::domain::reviews::Review;
use crate::domain::users::{ProfileUpdate, Role, User};
use crate::transport::http::handlers::{admin, favorites, health, randomizer, restaurants, reviews, users};
use crate::transport::http::types::{
    AddFavoriteRequest, ApiResponse, AppState, CreateReviewRequest, MessageStatusUpdate, RandomPickRequest,
    RandomPickResponse, RequestStatusUpdate, RestaurantDetail, RestaurantPage, UpdateReviewRequest, WheelSpinRequest,
    WheelSpinResponse,
};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        restaurants::list_restaurants_handler,
        restaurants::filter_options_handler,
        restaurants::get_restaurant_handler,
        restaurants::restaurant_reviews_handler,
        favorites::add_favorite_handler,
        favorites::remove_favorite_handler,
        favorites::list_favorites_handler,
        favorites::is_favorite_handler,
        reviews::create_review_handler,
        reviews::update_review_handler,
        reviews::delete_review_handler,
        reviews::user_reviews_handler,
        randomizer::random_pick_handler,
        randomizer::spin_wheel_handler,
        users::get_user_handler,
        users::update_user_handler,
        admin::list_requests_handler,
        admin::create_request_handler,
        admin::update_request_status_handler,
        admin::delete_request_handler,
        admin::list_messages_handler,
        admin::create_message_handler,
        admin::update_message_status_handler,
        admin::delete_message_handler,
        admin::dashboard_stats_handler,
        admin::flagged_reviews_handler,
        admin::list_members_handler
    ),
    components(schemas(
        ApiResponse,
        Restaurant,
        BudgetRange,
        Side,
        RestaurantType,
        PaymentMode,
        FilterCriteria,
        FilterOptions,
        RestaurantPage,
        RestaurantDetail,
        Favorite,
        AddFavoriteRequest,
        Review,
        CreateReviewRequest,
        UpdateReviewRequest,
        RandomPickRequest,
        RandomPickResponse,
        WheelSpinRequest,
        WheelSpinResponse,
        User,
        Role,
        ProfileUpdate,
        RestaurantRequest,
        RequestDetails,
        RequestStatus,
        RequestStatusUpdate,
        ContactMessage,
        MessageDetails,
        MessageStatus,
        MessageStatusUpdate,
        DashboardStats
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/restaurants", get(restaurants::list_restaurants_handler))
        .route("/api/restaurants/filter-options", get(restaurants::filter_options_handler))
        .route("/api/restaurants/:id", get(restaurants::get_restaurant_handler))
        .route("/api/restaurants/:id/reviews", get(restaurants::restaurant_reviews_handler))
        .route("/api/favorites", post(favorites::add_favorite_handler))
        .route("/api/favorites/:user_id", get(favorites::list_favorites_handler))
        .route(
            "/api/favorites/:user_id/:restaurant_id",
            get(favorites::is_favorite_handler).delete(favorites::remove_favorite_handler),
        )
        .route("/api/reviews", post(reviews::create_review_handler))
        .route(
            "/api/reviews/:id",
            axum::routing::put(reviews::update_review_handler).delete(reviews::delete_review_handler),
        )
        .route("/api/randomizer/pick", post(randomizer::random_pick_handler))
        .route("/api/randomizer/wheel", post(randomizer::spin_wheel_handler))
        .route(
            "/api/users/:id",
            get(users::get_user_handler).patch(users::update_user_handler),
        )
        .route("/api/users/:id/reviews", get(reviews::user_reviews_handler))
        .route(
            "/api/admin/requests",
            get(admin::list_requests_handler).post(admin::create_request_handler),
        )
        .route(
            "/api/admin/requests/:id",
            axum::routing::patch(admin::update_request_status_handler).delete(admin::delete_request_handler),
        )
        .route(
            "/api/admin/messages",
            get(admin::list_messages_handler).post(admin::create_message_handler),
        )
        .route(
            "/api/admin/messages/:id",
            axum::routing::patch(admin::update_message_status_handler).delete(admin::delete_message_handler),
        )
        .route("/api/admin/stats", get(admin::dashboard_stats_handler))
        .route("/api/admin/reviews/flagged", get(admin::flagged_reviews_handler))
        .route("/api/admin/users", get(admin::list_members_handler))
        .with_state(app_state)
}
