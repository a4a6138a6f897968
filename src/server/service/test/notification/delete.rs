use super::*;

/// Tests deleting one's own notification.
///
/// Expected: Ok(()) with the inbox empty afterwards
#[tokio::test]
async fn removes_own_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let service = NotificationService::new(db);
    service.delete(user.id, notification.id).await?;

    let list = service.list(first_page(user.id)).await?;
    assert!(list.notifications.is_empty());
    assert_eq!(list.total_count, 0);

    Ok(())
}

/// Tests deleting a notification that belongs to somebody else.
///
/// Foreign rows read as absent so the endpoint cannot be used to empty
/// other users' inboxes.
///
/// Expected: Err(NotFound) with the row still present
#[tokio::test]
async fn foreign_notification_reads_as_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let service = NotificationService::new(db);
    let result = service.delete(intruder.id, notification.id).await;

    match result.unwrap_err() {
        AppError::NotFound(message) => assert_eq!(message, "Notificación no encontrada"),
        e => panic!("Expected NotFound error, got: {:?}", e),
    }

    let list = service.list(first_page(owner.id)).await?;
    assert_eq!(list.total_count, 1);

    Ok(())
}

/// Tests an id that names no notification.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn reports_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = NotificationService::new(db);
    let result = service.delete(user.id, 999999).await;

    match result.unwrap_err() {
        AppError::NotFound(message) => assert_eq!(message, "Notificación no encontrada"),
        e => panic!("Expected NotFound error, got: {:?}", e),
    }

    Ok(())
}
