use super::*;

/// Tests recording a guess.
///
/// Expected: Ok with the guess stored against the maze
#[tokio::test]
async fn records_guess() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let maze = factory::create_maze(db).await?;

    let repo = GuessRepository::new(db);
    let guess = repo
        .create(CreateGuessParam {
            maze_id: maze.id,
            guess: "ABCDEFGHIJ".to_string(),
            correct: true,
        })
        .await?;

    assert!(guess.id > 0);
    assert_eq!(guess.maze_id, maze.id);
    assert_eq!(guess.guess, "ABCDEFGHIJ");
    assert!(guess.correct);

    let db_guess = entity::prelude::MazeGuess::find_by_id(guess.id)
        .one(db)
        .await?;
    assert!(db_guess.is_some());

    Ok(())
}
