use super::*;

/// Tests pagination over a full inbox.
///
/// Expected: 20 of 25 on the first page, 5 on the second, 2 pages total
#[tokio::test]
async fn paginates_inbox() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..25 {
        factory::create_notification(db, user.id).await?;
    }

    let service = NotificationService::new(db);

    let first = service.list(first_page(user.id)).await?;
    assert_eq!(first.notifications.len(), 20);
    assert_eq!(first.pagination.page, 1);
    assert_eq!(first.pagination.total, 25);
    assert_eq!(first.pagination.pages, 2);
    assert_eq!(first.unread_count, 25);
    assert_eq!(first.total_count, 25);

    let second = service
        .list(ListNotificationsParams {
            page: 2,
            ..first_page(user.id)
        })
        .await?;
    assert_eq!(second.notifications.len(), 5);
    assert_eq!(second.pagination.page, 2);

    Ok(())
}

/// Tests the unread-only filter.
///
/// The pagination block counts the filtered set while `total_count` stays
/// the size of the whole inbox.
///
/// Expected: 2 unread items, filtered total 2, inbox total 3
#[tokio::test]
async fn filters_unread_only() -> Result<(), AppError> {
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

    let service = NotificationService::new(db);
    let listing = service
        .list(ListNotificationsParams {
            unread_only: true,
            ..first_page(user.id)
        })
        .await?;

    assert_eq!(listing.notifications.len(), 2);
    assert!(listing.notifications.iter().all(|item| !item.read));
    assert_eq!(listing.pagination.total, 2);
    assert_eq!(listing.unread_count, 2);
    assert_eq!(listing.total_count, 3);

    Ok(())
}

/// Tests that the listing never leaks another user's notifications.
///
/// Expected: only the caller's rows
#[tokio::test]
async fn scopes_to_caller() -> Result<(), AppError> {
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

    let service = NotificationService::new(db);
    let listing = service.list(first_page(user.id)).await?;

    assert_eq!(listing.notifications.len(), 1);
    assert_eq!(listing.total_count, 1);

    Ok(())
}

/// Tests out-of-range paging arguments.
///
/// Page and limit are clamped to 1 rather than rejected; the mobile client
/// has been seen sending zeroes.
///
/// Expected: first page with a single item
#[tokio::test]
async fn clamps_page_and_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;

    let service = NotificationService::new(db);
    let listing = service
        .list(ListNotificationsParams {
            user_id: user.id,
            page: 0,
            limit: 0,
            unread_only: false,
        })
        .await?;

    assert_eq!(listing.notifications.len(), 1);
    assert_eq!(listing.pagination.page, 1);
    assert_eq!(listing.pagination.limit, 1);
    assert_eq!(listing.pagination.pages, 2);

    Ok(())
}

/// Tests an empty inbox.
///
/// Expected: empty listing with zero counts and zero pages
#[tokio::test]
async fn empty_inbox() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = NotificationService::new(db);
    let listing = service.list(first_page(user.id)).await?;

    assert!(listing.notifications.is_empty());
    assert_eq!(listing.pagination.total, 0);
    assert_eq!(listing.pagination.pages, 0);
    assert_eq!(listing.unread_count, 0);

    let count = service.unread_count(user.id).await?;
    assert_eq!(count.unread_count, 0);

    Ok(())
}
