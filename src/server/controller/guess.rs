use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        guess::{GuessDto, GuessHistoryDto, GuessResultDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        service::guess::GuessService,
        state::AppState,
    },
};

pub static GUESS_TAG: &str = "guess";

/// Guess a maze's secret.
///
/// Every guess is recorded. The secret is included in the response only when the
/// guess is correct.
#[utoipa::path(
    post,
    path = "/api/mazes/{id}/guesses",
    tag = GUESS_TAG,
    params(
        ("id" = i32, Path, description = "Maze ID")
    ),
    request_body = GuessDto,
    responses(
        (status = 201, description = "Guess recorded", body = GuessResultDto),
        (status = 400, description = "Empty guess", body = ErrorDto),
        (status = 404, description = "Maze not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_guess(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<GuessDto>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = GuessService::new(&state.db).guess(id, &payload.guess).await?;

    let dto = outcome
        .guess
        .into_dto(outcome.attempts, &outcome.maze.secret);

    Ok((StatusCode::CREATED, axum::Json(dto)))
}

/// List the guesses made against a maze, oldest first.
#[utoipa::path(
    get,
    path = "/api/mazes/{id}/guesses",
    tag = GUESS_TAG,
    params(
        ("id" = i32, Path, description = "Maze ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guesses", body = GuessHistoryDto),
        (status = 404, description = "Maze not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guesses(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let history = GuessService::new(&state.db).history(id).await?;

    let solved = history.solved();
    let secret = history.maze.secret;
    let guesses = history
        .guesses
        .into_iter()
        .enumerate()
        .map(|(idx, guess)| guess.into_dto(idx as u64 + 1, &secret))
        .collect();

    Ok((StatusCode::OK, axum::Json(GuessHistoryDto { guesses, solved })))
}
