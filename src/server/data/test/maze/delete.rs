use super::*;

/// Tests deleting an existing maze.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_maze() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let maze = factory::create_maze(db).await?;
    let other = factory::create_maze(db).await?;

    let repo = MazeRepository::new(db);
    let deleted = repo.delete(maze.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Maze::find_by_id(maze.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Maze::find_by_id(other.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a maze that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_maze() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MazeRepository::new(db);
    let deleted = repo.delete(42).await?;

    assert!(!deleted);

    Ok(())
}
