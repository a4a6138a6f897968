use super::*;

/// Tests clearing a mixed inbox.
///
/// Only the read rows go away; unread rows survive the sweep.
///
/// Expected: Ok(2) with one unread notification left
#[tokio::test]
async fn removes_only_read_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    NotificationFactory::new(db, user.id).read(true).build().await?;
    NotificationFactory::new(db, user.id).read(true).build().await?;

    let repo = NotificationRepository::new(db);
    let deleted = repo.clear_read(user.id).await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.total_count(user.id).await?, 1);
    assert_eq!(repo.unread_count(user.id).await?, 1);

    Ok(())
}

/// Tests a sweep over an all-unread inbox.
///
/// Expected: Ok(0) with nothing removed
#[tokio::test]
async fn leaves_unread_inbox_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let deleted = repo.clear_read(user.id).await?;

    assert_eq!(deleted, 0);
    assert_eq!(repo.total_count(user.id).await?, 1);

    Ok(())
}

/// Tests that the sweep stays inside the caller's inbox.
///
/// Expected: Ok with the other user's read notification still present
#[tokio::test]
async fn does_not_touch_other_inboxes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    NotificationFactory::new(db, user.id).read(true).build().await?;
    NotificationFactory::new(db, other.id).read(true).build().await?;

    let repo = NotificationRepository::new(db);
    let deleted = repo.clear_read(user.id).await?;

    assert_eq!(deleted, 1);
    assert_eq!(repo.total_count(other.id).await?, 1);

    Ok(())
}
