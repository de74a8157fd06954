use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Maze::Table)
                    .if_not_exists()
                    .col(pk_auto(Maze::Id))
                    .col(integer(Maze::Width))
                    .col(integer(Maze::Height))
                    .col(big_integer(Maze::Seed))
                    .col(string(Maze::Secret))
                    .col(text(Maze::Layout))
                    .col(string(Maze::SecretPositions))
                    .col(
                        timestamp(Maze::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Maze::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Maze {
    Table,
    Id,
    Width,
    Height,
    Seed,
    Secret,
    Layout,
    SecretPositions,
    CreatedAt,
}
