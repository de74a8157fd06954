use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{guess, health, maze},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Maze API",
        description = "Generate mazes with hidden secret codes, explore their cells and guess the code"
    ),
    tags(
        (name = "maze", description = "Maze generation and inspection"),
        (name = "guess", description = "Guessing a maze's secret code"),
        (name = "health", description = "Service status")
    )
)]
pub struct ApiDoc;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(health::health))
        .routes(routes!(maze::create_maze, maze::get_paginated_mazes))
        .routes(routes!(maze::get_maze, maze::delete_maze))
        .routes(routes!(maze::get_cell))
        .routes(routes!(maze::render_maze))
        .routes(routes!(guess::create_guess, guess::get_guesses))
}
