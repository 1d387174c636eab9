use crate::domain::error::DirectoryError;
use crate::domain::query::FilterCriteria;
use crate::domain::restaurant::BudgetRange;
use crate::transport::http::types::{ApiResponse, RestaurantQuery};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

/// 200 with `data` set to the serialized value.
pub fn ok<T: Serialize>(data: T) -> Response {
    match serde_json::to_value(data) {
        Ok(value) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(value),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to serialize response: {}", e),
        ),
    }
}

pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }),
    )
        .into_response()
}

pub fn not_found(kind: &str, id: &str) -> Response {
    failure(StatusCode::NOT_FOUND, format!("{} '{}' not found", kind, id))
}

pub fn status_for(err: &DirectoryError) -> StatusCode {
    match err {
        DirectoryError::Validation(_)
        | DirectoryError::EmptyInput
        | DirectoryError::WheelFull { .. }
        | DirectoryError::WheelTooSmall { .. } => StatusCode::BAD_REQUEST,
        DirectoryError::NotFound { .. } => StatusCode::NOT_FOUND,
        DirectoryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn directory_error(err: DirectoryError) -> Response {
    let status = status_for(&err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(error = %err, "Directory operation failed");
    }
    failure(status, err.to_string())
}

fn split_list(raw: Option<&str>) -> Option<Vec<String>> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
}

/// Turns the flat query string into filter criteria. Unknown budget bands are rejected.
pub fn criteria_from_query(query: &RestaurantQuery) -> Result<FilterCriteria, String> {
    let budgets = match split_list(query.budgets.as_deref()) {
        Some(values) => Some(
            values
                .iter()
                .map(|v| v.parse::<BudgetRange>())
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => None,
    };

    Ok(FilterCriteria {
        search_query: query.search.clone(),
        category: query.category.clone(),
        budgets,
        sides: split_list(query.sides.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_lists_are_split_and_trimmed() {
        let query = RestaurantQuery {
            budgets: Some("10-50, 150-500".to_string()),
            sides: Some("Main Gate,,North Gate".to_string()),
            ..Default::default()
        };
        let criteria = criteria_from_query(&query).unwrap();
        assert_eq!(
            criteria.budgets,
            Some(vec![BudgetRange::Under50, BudgetRange::Under500])
        );
        assert_eq!(
            criteria.sides,
            Some(vec!["Main Gate".to_string(), "North Gate".to_string()])
        );
    }

    #[test]
    fn unknown_budget_band_is_rejected() {
        let query = RestaurantQuery {
            budgets: Some("cheap".to_string()),
            ..Default::default()
        };
        assert!(criteria_from_query(&query).is_err());
    }

    #[test]
    fn errors_map_to_statuses() {
        assert_eq!(status_for(&DirectoryError::EmptyInput), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&DirectoryError::NotFound {
                kind: "User",
                id: "x".to_string()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DirectoryError::Storage(anyhow::anyhow!("disk full"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
