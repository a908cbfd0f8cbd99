//! HTTP handlers for the puzzle endpoint.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::Response,
};

use crate::adapters::http::response::{internal_error, json_response};
use crate::adapters::http::AppState;
use crate::application::GetTodayPuzzleQuery;
use crate::domain::puzzle::PuzzleError;

use super::dto::{PuzzleNotFoundResponse, PuzzleResponse};

/// GET /api/puzzle/today - Today's puzzle with shuffled rounds
pub async fn get_today_puzzle(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let query = GetTodayPuzzleQuery {
        links: state.links.for_request(&headers, &uri),
    };

    match state.puzzle_handler.handle(query).await {
        Ok(view) => json_response(StatusCode::OK, &PuzzleResponse::from(view)),
        Err(e) => handle_puzzle_error(e),
    }
}

fn handle_puzzle_error(error: PuzzleError) -> Response {
    match error {
        PuzzleError::NotFound(date) => {
            tracing::warn!(%date, "No puzzle seeded");
            json_response(StatusCode::NOT_FOUND, &PuzzleNotFoundResponse::new(date))
        }
        PuzzleError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Failed to resolve puzzle");
            internal_error()
        }
    }
}
