use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_maze_table::Maze;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MazeGuess::Table)
                    .if_not_exists()
                    .col(pk_auto(MazeGuess::Id))
                    .col(integer(MazeGuess::MazeId))
                    .col(string(MazeGuess::Guess))
                    .col(boolean(MazeGuess::Correct))
                    .col(
                        timestamp(MazeGuess::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maze_guess_maze_id")
                            .from(MazeGuess::Table, MazeGuess::MazeId)
                            .to(Maze::Table, Maze::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_maze_guess_maze_id")
                    .table(MazeGuess::Table)
                    .col(MazeGuess::MazeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MazeGuess::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MazeGuess {
    Table,
    Id,
    MazeId,
    Guess,
    Correct,
    CreatedAt,
}
