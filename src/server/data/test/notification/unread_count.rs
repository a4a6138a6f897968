use super::*;

/// Tests counting unread notifications.
///
/// Expected: Ok(2) counting only the caller's unread rows
#[tokio::test]
async fn counts_only_unread_for_the_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    NotificationFactory::new(db, user.id).read(true).build().await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.unread_count(user.id).await?, 2);
    assert_eq!(repo.total_count(user.id).await?, 3);

    Ok(())
}

/// Tests an empty inbox.
///
/// Expected: Ok(0) for both counts
#[tokio::test]
async fn empty_inbox_counts_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.unread_count(user.id).await?, 0);
    assert_eq!(repo.total_count(user.id).await?, 0);

    Ok(())
}
