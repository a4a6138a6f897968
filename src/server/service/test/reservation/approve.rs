use super::*;

/// Tests a host confirming a pending reservation on their own terrace.
///
/// Expected: Ok(Model) in confirmed status with a notification for the client
#[tokio::test]
async fn confirms_pending_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let (host, _terrace, reservation) = create_reservation_for_client(db, &client).await?;

    let service = ReservationService::new(db);
    let confirmed = service.approve(host.id, reservation.id).await?;

    assert_eq!(confirmed.status, ReservationStatus::Confirmed);

    let repo = ReservationRepository::new(db);
    let stored = repo.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.status, ReservationStatus::Confirmed);

    let notifications = Notification::find().all(db).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].user_id, client.id);
    assert_eq!(notifications[0].title, "Reserva Confirmada");

    Ok(())
}

/// Tests a host acting on a reservation that sits on another host's terrace.
///
/// Expected: Err(Forbidden) with the record untouched
#[tokio::test]
async fn denies_foreign_terrace() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let (_host, _terrace, reservation) = create_reservation_for_client(db, &client).await?;
    let other_host = factory::create_user_with_role(db, UserRole::Host).await?;

    let service = ReservationService::new(db);
    let result = service.approve(other_host.id, reservation.id).await;

    match result.unwrap_err() {
        AppError::Forbidden(message) => {
            assert_eq!(message, "No tienes permiso para gestionar esta reserva")
        }
        e => panic!("Expected Forbidden error, got: {:?}", e),
    }

    let repo = ReservationRepository::new(db);
    let stored = repo.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.status, ReservationStatus::Pending);

    Ok(())
}

/// Tests approving a record whose venue never resolved.
///
/// Offline records with an unknown venue have no terrace row and therefore
/// no owner; no host can act on them.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn unresolved_venue_is_not_actionable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let host = factory::create_user_with_role(db, UserRole::Host).await?;
    let reservation = factory::create_reservation(db, client.id).await?;

    let service = ReservationService::new(db);
    let result = service.approve(host.id, reservation.id).await;

    match result.unwrap_err() {
        AppError::Forbidden(_) => {}
        e => panic!("Expected Forbidden error, got: {:?}", e),
    }

    Ok(())
}

/// Tests approving a reservation that is already confirmed.
///
/// Expected: Err(InvalidTransition)
#[tokio::test]
async fn refuses_already_confirmed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let (host, _terrace, reservation) = create_reservation_for_client(db, &client).await?;

    let service = ReservationService::new(db);
    service.approve(host.id, reservation.id).await?;
    let result = service.approve(host.id, reservation.id).await;

    match result.unwrap_err() {
        AppError::InvalidTransition(message) => {
            assert_eq!(message, "La reserva ya está confirmada")
        }
        e => panic!("Expected InvalidTransition error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that a client cancellation beats a late approval.
///
/// Once the client cancelled, the host's approve must fail against the
/// terminal state rather than resurrect the booking.
///
/// Expected: Err(InvalidTransition) with the status still cancelled
#[tokio::test]
async fn cancelled_reservation_cannot_be_confirmed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let (host, _terrace, reservation) = create_reservation_for_client(db, &client).await?;

    let service = ReservationService::new(db);
    service.cancel(client.id, reservation.id).await?;
    let result = service.approve(host.id, reservation.id).await;

    match result.unwrap_err() {
        AppError::InvalidTransition(message) => {
            assert_eq!(message, "No puedes confirmar una reserva cancelada")
        }
        e => panic!("Expected InvalidTransition error, got: {:?}", e),
    }

    let repo = ReservationRepository::new(db);
    let stored = repo.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.status, ReservationStatus::Cancelled);

    Ok(())
}
