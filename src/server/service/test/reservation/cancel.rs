use super::*;

/// Tests a client cancelling their own pending reservation.
///
/// Expected: Ok(Model) in cancelled status, persisted
#[tokio::test]
async fn cancels_pending_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let (_host, _terrace, reservation) = create_reservation_for_client(db, &client).await?;

    let service = ReservationService::new(db);
    let cancelled = service.cancel(client.id, reservation.id).await?;

    assert_eq!(cancelled.status, ReservationStatus::Cancelled);

    let repo = ReservationRepository::new(db);
    let stored = repo.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.status, ReservationStatus::Cancelled);

    Ok(())
}

/// Tests cancelling the same reservation twice.
///
/// The first cancel wins; the second must report the terminal state instead
/// of silently succeeding.
///
/// Expected: Err(InvalidTransition) on the second attempt
#[tokio::test]
async fn second_cancel_reports_already_cancelled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let (_host, _terrace, reservation) = create_reservation_for_client(db, &client).await?;

    let service = ReservationService::new(db);
    service.cancel(client.id, reservation.id).await?;
    let result = service.cancel(client.id, reservation.id).await;

    match result.unwrap_err() {
        AppError::InvalidTransition(message) => {
            assert_eq!(message, "La reserva ya está cancelada")
        }
        e => panic!("Expected InvalidTransition error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a client trying to cancel somebody else's reservation.
///
/// Expected: Err(Forbidden) with the record untouched
#[tokio::test]
async fn refuses_foreign_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let (_host, _terrace, reservation) = create_reservation_for_client(db, &owner).await?;

    let service = ReservationService::new(db);
    let result = service.cancel(intruder.id, reservation.id).await;

    match result.unwrap_err() {
        AppError::Forbidden(message) => {
            assert_eq!(message, "No tienes permiso para cancelar esta reserva")
        }
        e => panic!("Expected Forbidden error, got: {:?}", e),
    }

    let repo = ReservationRepository::new(db);
    let stored = repo.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.status, ReservationStatus::Pending);

    Ok(())
}

/// Tests cancelling a reservation the host already confirmed.
///
/// A confirmed booking can only be released host-side, so the client is
/// pointed there.
///
/// Expected: Err(InvalidTransition) with the contact-the-host message
#[tokio::test]
async fn refuses_confirmed_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let reservation = ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Confirmed)
        .build()
        .await?;

    let service = ReservationService::new(db);
    let result = service.cancel(client.id, reservation.id).await;

    match result.unwrap_err() {
        AppError::InvalidTransition(message) => {
            assert_eq!(message, "Reserva confirmada. Contacta al anfitrión para cancelar")
        }
        e => panic!("Expected InvalidTransition error, got: {:?}", e),
    }

    Ok(())
}

/// Tests cancelling a completed reservation.
///
/// Expected: Err(InvalidTransition)
#[tokio::test]
async fn refuses_completed_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let reservation = ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Completed)
        .build()
        .await?;

    let service = ReservationService::new(db);
    let result = service.cancel(client.id, reservation.id).await;

    match result.unwrap_err() {
        AppError::InvalidTransition(message) => {
            assert_eq!(message, "No puedes cancelar una reserva completada")
        }
        e => panic!("Expected InvalidTransition error, got: {:?}", e),
    }

    Ok(())
}

/// Tests an id that names no reservation.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn reports_unknown_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;

    let service = ReservationService::new(db);
    let result = service.cancel(client.id, 999999).await;

    match result.unwrap_err() {
        AppError::NotFound(message) => assert_eq!(message, "Reserva no encontrada"),
        e => panic!("Expected NotFound error, got: {:?}", e),
    }

    Ok(())
}
