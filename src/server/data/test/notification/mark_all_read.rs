use super::*;

/// Tests flipping a whole inbox to read.
///
/// Only the unread rows count toward the result; already-read rows are not
/// rewritten.
///
/// Expected: Ok(2) with no unread notifications left
#[tokio::test]
async fn marks_only_unread_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    NotificationFactory::new(db, user.id).read(true).build().await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_all_read(user.id).await?;

    assert_eq!(updated, 2);
    assert_eq!(repo.unread_count(user.id).await?, 0);

    Ok(())
}

/// Tests that a second sweep finds nothing to do.
///
/// Expected: Ok(0)
#[tokio::test]
async fn second_sweep_updates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    repo.mark_all_read(user.id).await?;
    let updated = repo.mark_all_read(user.id).await?;

    assert_eq!(updated, 0);

    Ok(())
}

/// Tests that the sweep stays inside the caller's inbox.
///
/// Expected: Ok with the other user's notification still unread
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
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    repo.mark_all_read(user.id).await?;

    assert_eq!(repo.unread_count(other.id).await?, 1);

    Ok(())
}
