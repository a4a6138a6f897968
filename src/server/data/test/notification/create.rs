use super::*;

/// Tests inserting a notification.
///
/// Verifies the row lands unread with the given kind, texts, payload, and
/// priority.
///
/// Expected: Ok with read false and fields as given
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParams {
            user_id: user.id,
            kind: NotificationKind::Reservation,
            title: "Nueva Reserva".to_string(),
            message: "Tienes una nueva reserva para Terraza Jardín".to_string(),
            data: serde_json::json!({ "reservationId": 42 }),
            priority: NotificationPriority::High,
        })
        .await?;

    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.kind, NotificationKind::Reservation);
    assert_eq!(notification.title, "Nueva Reserva");
    assert_eq!(notification.priority, NotificationPriority::High);
    assert!(!notification.read);
    assert_eq!(notification.data["reservationId"], 42);

    Ok(())
}
