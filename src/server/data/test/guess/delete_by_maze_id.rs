use super::*;

/// Tests deleting all guesses of a maze.
///
/// Expected: Ok with the maze's guesses removed and others untouched
#[tokio::test]
async fn deletes_only_the_mazes_guesses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let maze = factory::create_maze(db).await?;
    let other = factory::create_maze(db).await?;

    factory::create_guess(db, maze.id).await?;
    factory::create_guess(db, maze.id).await?;
    factory::create_guess(db, other.id).await?;

    let repo = GuessRepository::new(db);
    let deleted = repo.delete_by_maze_id(maze.id).await?;

    assert_eq!(deleted, 2);
    assert_eq!(entity::prelude::MazeGuess::find().count(db).await?, 1);

    Ok(())
}
