use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        maze::{CellDto, CreateMazeDto, MazeDto, PaginatedMazesDto, RenderFormat},
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        model::maze::CreateMazeParam,
        service::maze::MazeService,
        state::AppState,
    },
};

/// Tag for grouping maze endpoints in OpenAPI documentation
pub static MAZE_TAG: &str = "maze";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

#[derive(Deserialize)]
pub struct RenderParams {
    #[serde(default)]
    pub format: RenderFormat,
}

/// Generate a new maze.
///
/// Generates a maze of the requested size with a secret code hidden in its cells and
/// stores it. Passing a seed reproduces the same maze every time.
///
/// # Returns
/// - `201 Created` - The stored maze, without its secret
/// - `400 Bad Request` - Dimensions too small or above the configured limits
#[utoipa::path(
    post,
    path = "/api/mazes",
    tag = MAZE_TAG,
    request_body = CreateMazeDto,
    responses(
        (status = 201, description = "Successfully generated maze", body = MazeDto),
        (status = 400, description = "Invalid maze dimensions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_maze(
    State(state): State<AppState>,
    Json(payload): Json<CreateMazeDto>,
) -> Result<impl IntoResponse, AppError> {
    let maze = MazeService::new(&state.db)
        .create(CreateMazeParam::from(payload), state.limits)
        .await?;

    Ok((StatusCode::CREATED, axum::Json(maze.into_dto())))
}

/// List stored mazes.
///
/// # Returns
/// - `200 OK` - The requested page of mazes, oldest first
#[utoipa::path(
    get,
    path = "/api/mazes",
    tag = MAZE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved mazes", body = PaginatedMazesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_paginated_mazes(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = MazeService::new(&state.db)
        .list(pagination.page, pagination.entries)
        .await?;

    Ok((StatusCode::OK, axum::Json(page.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/mazes/{id}",
    tag = MAZE_TAG,
    params(
        ("id" = i32, Path, description = "Maze ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved maze", body = MazeDto),
        (status = 404, description = "Maze not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maze(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let maze = MazeService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, axum::Json(maze.into_dto())))
}

/// Delete a maze and every guess made against it.
#[utoipa::path(
    delete,
    path = "/api/mazes/{id}",
    tag = MAZE_TAG,
    params(
        ("id" = i32, Path, description = "Maze ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted maze"),
        (status = 404, description = "Maze not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_maze(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    MazeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Inspect a single cell.
///
/// Returns the walls still standing around the cell and the secret letter hidden in
/// it, if any.
#[utoipa::path(
    get,
    path = "/api/mazes/{id}/cells/{x}/{y}",
    tag = MAZE_TAG,
    params(
        ("id" = i32, Path, description = "Maze ID"),
        ("x" = u32, Path, description = "Column, 0 is the western edge"),
        ("y" = u32, Path, description = "Row, 0 is the northern edge")
    ),
    responses(
        (status = 200, description = "Successfully retrieved cell", body = CellDto),
        (status = 400, description = "Coordinates outside the maze", body = ErrorDto),
        (status = 404, description = "Maze not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cell(
    State(state): State<AppState>,
    Path((id, x, y)): Path<(i32, u32, u32)>,
) -> Result<impl IntoResponse, AppError> {
    let cell = MazeService::new(&state.db).get_cell(id, x, y).await?;

    Ok((StatusCode::OK, axum::Json(CellDto::from(&cell))))
}

/// Draw a maze.
///
/// `format=ascii` (default) returns `text/plain`, `format=svg` returns
/// `image/svg+xml`.
#[utoipa::path(
    get,
    path = "/api/mazes/{id}/render",
    tag = MAZE_TAG,
    params(
        ("id" = i32, Path, description = "Maze ID"),
        ("format" = Option<RenderFormat>, Query, description = "Output format (default: ascii)")
    ),
    responses(
        (status = 200, description = "Drawing of the maze, SVG when format=svg", body = String, content_type = "text/plain"),
        (status = 404, description = "Maze not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn render_maze(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<RenderParams>,
) -> Result<impl IntoResponse, AppError> {
    let drawing = MazeService::new(&state.db).render(id, params.format).await?;

    let content_type = match params.format {
        RenderFormat::Ascii => "text/plain; charset=utf-8",
        RenderFormat::Svg => "image/svg+xml",
    };

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], drawing))
}
