use super::*;

/// Tests creating a new maze.
///
/// Verifies that the repository inserts the encoded maze with its seed and returns
/// the stored domain model with a generated ID.
///
/// Expected: Ok with maze created
#[tokio::test]
async fn creates_maze() -> Result<(), AppError> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let param = record_param(8, 6, 17);
    let repo = MazeRepository::new(db);
    let stored = repo.create(param.clone()).await?;

    assert!(stored.id > 0);
    assert_eq!(stored.width, 8);
    assert_eq!(stored.height, 6);
    assert_eq!(stored.seed, 17);
    assert_eq!(stored.secret, param.secret);
    assert_eq!(stored.layout, param.layout);
    assert_eq!(stored.secret_positions, param.secret_positions);

    // Verify maze exists in database
    let db_maze = entity::prelude::Maze::find_by_id(stored.id).one(db).await?;
    assert!(db_maze.is_some());
    assert_eq!(db_maze.unwrap().layout.len(), 48);

    Ok(())
}

/// Tests that seeds above `i64::MAX` survive the signed database column.
///
/// Expected: Ok with the original unsigned seed returned
#[tokio::test]
async fn preserves_seeds_above_signed_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seed = u64::MAX - 5;
    let repo = MazeRepository::new(db);
    let stored = repo.create(record_param(4, 4, seed)).await?;

    let found = repo.find_by_id(stored.id).await?.unwrap();
    assert_eq!(found.seed, seed);

    Ok(())
}

/// Tests that a stored maze decodes back to the generated one.
///
/// Expected: Ok with identical maze after decoding
#[tokio::test]
async fn stored_maze_decodes_to_generated_maze() -> Result<(), AppError> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let generated = Maze::generate(10, 10, &mut StdRng::seed_from_u64(3)).unwrap();
    let repo = MazeRepository::new(db);
    let stored = repo
        .create(CreateMazeRecordParam::from_maze(3, &generated))
        .await?;

    assert_eq!(stored.to_maze()?, generated);

    Ok(())
}

/// Tests creating multiple mazes.
///
/// Expected: Ok with distinct IDs for every maze
#[tokio::test]
async fn creates_multiple_mazes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MazeRepository::new(db);
    let first = repo.create(record_param(5, 5, 1)).await?;
    let second = repo.create(record_param(5, 5, 2)).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Maze::find().count(db).await?, 2);

    Ok(())
}
