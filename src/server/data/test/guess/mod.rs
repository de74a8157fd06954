use crate::server::{data::guess::GuessRepository, model::guess::CreateGuessParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, guess::GuessFactory},
};

mod count_by_maze_id;
mod create;
mod delete_by_maze_id;
mod get_by_maze_id;
