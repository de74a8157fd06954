use super::*;

/// Tests finding an existing maze.
///
/// Expected: Ok(Some) with the factory-created maze
#[tokio::test]
async fn finds_existing_maze() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let maze = MazeFactory::new(db).secret("QWERTYUIOP").build().await?;

    let repo = MazeRepository::new(db);
    let found = repo.find_by_id(maze.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, maze.id);
    assert_eq!(found.secret, "QWERTYUIOP");
    assert_eq!(found.layout, maze.layout);

    Ok(())
}

/// Tests finding a maze that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_maze() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MazeRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that factory mazes decode into valid mazes.
///
/// Expected: Ok with the factory secret hidden in row-major order
#[tokio::test]
async fn factory_maze_decodes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let maze = factory::create_maze(db).await?;

    let repo = MazeRepository::new(db);
    let decoded = repo.find_by_id(maze.id).await?.unwrap().to_maze()?;

    assert_eq!(decoded.secret(), factory::maze::DEFAULT_SECRET);
    assert_eq!(decoded.passages(), 19);

    Ok(())
}
