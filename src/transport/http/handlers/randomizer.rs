use crate::transport::http::handlers::common::{directory_error, ok};
use crate::transport::http::types::{
    json_422, ApiResponse, AppState, RandomPickRequest, RandomPickResponse, WheelSpinRequest, WheelSpinResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tracing::debug;

#[utoipa::path(
    post,
    path = "/api/randomizer/pick",
    request_body = RandomPickRequest,
    responses(
        (status = 200, description = "A random restaurant among the matches, plus a fresh theme", body = ApiResponse),
        (status = 400, description = "No restaurant matches the criteria", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn random_pick_handler(
    State(state): State<AppState>,
    request: Result<Json<RandomPickRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(r) => r,
        Err(e) => return json_422(e, "{ criteria?, previousTheme? }").into_response(),
    };

    let service = state.service.lock().await;
    let picked = {
        let mut rng = rand::thread_rng();
        service.pick_random(&request.criteria, request.previous_theme, &mut rng)
    };

    match picked {
        Ok(pick) => {
            debug!(restaurant = %pick.restaurant.id, theme = pick.theme, "Random pick");
            ok(RandomPickResponse {
                restaurant: pick.restaurant,
                theme: pick.theme,
            })
        }
        Err(e) => directory_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/randomizer/wheel",
    request_body = WheelSpinRequest,
    responses(
        (status = 200, description = "Winning segment of the wheel", body = ApiResponse),
        (status = 400, description = "Fewer than 2 or more than 12 known restaurants", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn spin_wheel_handler(
    State(state): State<AppState>,
    request: Result<Json<WheelSpinRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(r) => r,
        Err(e) => return json_422(e, "{ restaurantIds: [..] }").into_response(),
    };

    let service = state.service.lock().await;
    let spun = {
        let mut rng = rand::thread_rng();
        service.spin(&request.restaurant_ids, &mut rng)
    };

    match spun {
        Ok(spin) => {
            let winner = spin.winner().clone();
            debug!(winner = %winner.id, segments = spin.candidates.len(), "Wheel spun");
            ok(WheelSpinResponse {
                winner_index: spin.winner_index,
                winner,
                candidates: spin.candidates,
            })
        }
        Err(e) => directory_error(e),
    }
}
