use super::*;

/// Tests counting guesses per maze.
///
/// Expected: Ok with counts that ignore other mazes' guesses
#[tokio::test]
async fn counts_guesses_per_maze() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let maze = factory::create_maze(db).await?;
    let other = factory::create_maze(db).await?;

    for _ in 0..3 {
        factory::create_guess(db, maze.id).await?;
    }
    factory::create_guess(db, other.id).await?;

    let repo = GuessRepository::new(db);

    assert_eq!(repo.count_by_maze_id(maze.id).await?, 3);
    assert_eq!(repo.count_by_maze_id(other.id).await?, 1);
    assert_eq!(repo.count_by_maze_id(999).await?, 0);

    Ok(())
}
