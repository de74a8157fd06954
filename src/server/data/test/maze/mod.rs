use crate::{
    maze::Maze,
    server::{
        data::maze::MazeRepository, error::AppError, model::maze::CreateMazeRecordParam,
    },
};
use rand::{rngs::StdRng, SeedableRng};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, maze::MazeFactory},
};

mod create;
mod delete;
mod find_by_id;
mod get_all_paginated;

/// Generates a maze and wraps it into insert parameters.
fn record_param(width: u32, height: u32, seed: u64) -> CreateMazeRecordParam {
    let maze = Maze::generate(width, height, &mut StdRng::seed_from_u64(seed)).unwrap();
    CreateMazeRecordParam::from_maze(seed, &maze)
}
