use super::*;

/// Tests listing guesses for a maze in the order they were made.
///
/// Expected: Ok with only the maze's guesses, oldest first
#[tokio::test]
async fn lists_guesses_for_maze_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let maze = factory::create_maze(db).await?;
    let other = factory::create_maze(db).await?;

    GuessFactory::new(db, maze.id).guess("FIRSTGUESS").build().await?;
    GuessFactory::new(db, other.id).guess("OTHERMAZES").build().await?;
    GuessFactory::new(db, maze.id)
        .guess("ABCDEFGHIJ")
        .correct(true)
        .build()
        .await?;

    let repo = GuessRepository::new(db);
    let guesses = repo.get_by_maze_id(maze.id).await?;

    assert_eq!(guesses.len(), 2);
    assert_eq!(guesses[0].guess, "FIRSTGUESS");
    assert!(!guesses[0].correct);
    assert_eq!(guesses[1].guess, "ABCDEFGHIJ");
    assert!(guesses[1].correct);

    Ok(())
}

/// Tests listing guesses for a maze without any.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_guesses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let maze = factory::create_maze(db).await?;

    let repo = GuessRepository::new(db);
    let guesses = repo.get_by_maze_id(maze.id).await?;

    assert!(guesses.is_empty());

    Ok(())
}
