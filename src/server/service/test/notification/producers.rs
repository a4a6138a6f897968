use super::*;
use entity::verification_document::DocumentStatus;
use serde_json::json;
use test_utils::factory::helpers::create_reservation_with_dependencies;
use test_utils::factory::verification_document::VerificationDocumentFactory;

/// Tests the fan-out for a freshly created reservation.
///
/// Expected: one high-priority reservation notification for the terrace owner
#[tokio::test]
async fn notifies_owner_of_new_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_client, host, _terrace, reservation) = create_reservation_with_dependencies(db).await?;

    let service = NotificationService::new(db);
    service
        .notify_reservation_created(host.id, &reservation)
        .await?;

    let listing = service.list(first_page(host.id)).await?;
    assert_eq!(listing.notifications.len(), 1);

    let notification = &listing.notifications[0];
    assert_eq!(notification.kind, NotificationKind::Reservation.as_str());
    assert_eq!(notification.title, "Nueva Reserva");
    assert!(notification.message.contains(&reservation.terrace_name));
    assert_eq!(notification.priority, NotificationPriority::High.as_str());
    assert_eq!(notification.data["reservationId"], json!(reservation.id));

    Ok(())
}

/// Tests the confirmation and cancellation messages sent to the client.
///
/// Expected: "Reserva Confirmada" for a confirmation, "Reserva Cancelada"
/// with the host wording for a rejection
#[tokio::test]
async fn tells_client_about_decisions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, _host, _terrace, reservation) = create_reservation_with_dependencies(db).await?;

    let service = NotificationService::new(db);
    service.notify_reservation_decision(&reservation, true).await?;
    service.notify_reservation_decision(&reservation, false).await?;

    let listing = service.list(first_page(client.id)).await?;
    assert_eq!(listing.notifications.len(), 2);

    let titles: Vec<&str> = listing
        .notifications
        .iter()
        .map(|notification| notification.title.as_str())
        .collect();
    assert!(titles.contains(&"Reserva Confirmada"));
    assert!(titles.contains(&"Reserva Cancelada"));

    let cancelled = listing
        .notifications
        .iter()
        .find(|notification| notification.title == "Reserva Cancelada")
        .unwrap();
    assert!(cancelled.message.contains("cancelada por el anfitrión"));

    Ok(())
}

/// Tests the publication review notifications.
///
/// Approvals are routine (medium priority); rejections demand the owner's
/// attention (high).
///
/// Expected: terrace_approved/medium and terrace_rejected/high rows
#[tokio::test]
async fn tells_owner_about_review() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::PublicationRequest)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user_with_role(db, UserRole::Host).await?;
    let request = factory::create_publication_request(db, host.id).await?;

    let service = NotificationService::new(db);
    service.notify_publication_reviewed(&request, true).await?;
    service.notify_publication_reviewed(&request, false).await?;

    let listing = service.list(first_page(host.id)).await?;
    assert_eq!(listing.notifications.len(), 2);

    let approved = listing
        .notifications
        .iter()
        .find(|notification| notification.kind == NotificationKind::TerraceApproved.as_str())
        .unwrap();
    assert_eq!(approved.title, "Terraza Aprobada");
    assert_eq!(approved.priority, NotificationPriority::Medium.as_str());

    let rejected = listing
        .notifications
        .iter()
        .find(|notification| notification.kind == NotificationKind::TerraceRejected.as_str())
        .unwrap();
    assert_eq!(rejected.title, "Terraza Rechazada");
    assert_eq!(rejected.priority, NotificationPriority::High.as_str());

    Ok(())
}

/// Tests the document review notification.
///
/// The message names the verdict in the uploader's language and a rejection
/// is high priority.
///
/// Expected: "aprobado" at medium priority, "rechazado" at high
#[tokio::test]
async fn tells_uploader_about_document_verdict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let approved_document = VerificationDocumentFactory::new(db, user.id)
        .status(DocumentStatus::Approved)
        .build()
        .await?;
    let rejected_document = VerificationDocumentFactory::new(db, user.id)
        .status(DocumentStatus::Rejected)
        .build()
        .await?;

    let service = NotificationService::new(db);
    service.notify_document_reviewed(&approved_document).await?;
    service.notify_document_reviewed(&rejected_document).await?;

    let listing = service.list(first_page(user.id)).await?;
    assert_eq!(listing.notifications.len(), 2);

    let approved = listing
        .notifications
        .iter()
        .find(|notification| notification.message.contains("aprobado"))
        .unwrap();
    assert_eq!(approved.title, "Estado de Documentos");
    assert_eq!(approved.priority, NotificationPriority::Medium.as_str());

    let rejected = listing
        .notifications
        .iter()
        .find(|notification| notification.message.contains("rechazado"))
        .unwrap();
    assert_eq!(rejected.priority, NotificationPriority::High.as_str());

    Ok(())
}
