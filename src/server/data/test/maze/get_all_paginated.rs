use super::*;

/// Tests paginating mazes in insertion order.
///
/// Expected: Ok with pages of the requested size and the overall total
#[tokio::test]
async fn returns_pages_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::create_maze(db).await?.id);
    }

    let repo = MazeRepository::new(db);

    let (first, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(first.iter().map(|m| m.id).collect::<Vec<_>>(), ids[0..2]);

    let (last, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(last.iter().map(|m| m.id).collect::<Vec<_>>(), ids[4..5]);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with no mazes but the correct total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_maze(db).await?;

    let repo = MazeRepository::new(db);
    let (mazes, total) = repo.get_all_paginated(3, 10).await?;

    assert!(mazes.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

/// Tests paginating an empty table.
///
/// Expected: Ok with no mazes and zero total
#[tokio::test]
async fn handles_no_mazes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_maze_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MazeRepository::new(db);
    let (mazes, total) = repo.get_all_paginated(0, 10).await?;

    assert!(mazes.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
