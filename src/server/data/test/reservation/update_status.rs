use super::*;
use test_utils::factory::reservation::ReservationFactory;

/// Tests the pending→confirmed transition.
///
/// Expected: Ok(1) with the new status and a fresh update stamp persisted
#[tokio::test]
async fn confirms_pending_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let reservation = factory::create_reservation(db, client.id).await?;

    let repo = ReservationRepository::new(db);
    let rows = repo
        .update_status(
            reservation.id,
            &[ReservationStatus::Pending],
            ReservationStatus::Confirmed,
        )
        .await?;

    assert_eq!(rows, 1);
    let updated = repo.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(updated.status, ReservationStatus::Confirmed);
    assert!(updated.updated_at >= reservation.updated_at);

    Ok(())
}

/// Tests that the compare-and-set loses when the status moved on.
///
/// Expecting `pending` on a record that is already `confirmed` must match
/// zero rows and leave the record untouched.
///
/// Expected: Ok(0) with the status unchanged
#[tokio::test]
async fn loses_when_expected_status_does_not_match() -> Result<(), DbErr> {
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

    let repo = ReservationRepository::new(db);
    let rows = repo
        .update_status(
            reservation.id,
            &[ReservationStatus::Pending],
            ReservationStatus::Cancelled,
        )
        .await?;

    assert_eq!(rows, 0);
    let unchanged = repo.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(unchanged.status, ReservationStatus::Confirmed);

    Ok(())
}

/// Tests that terminal states never transition.
///
/// Expected: Ok(0) for every attempt out of cancelled and completed
#[tokio::test]
async fn terminal_states_stay_terminal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let cancelled = ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;
    let completed = ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Completed)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let expected_live = [ReservationStatus::Pending, ReservationStatus::Confirmed];

    let rows = repo
        .update_status(cancelled.id, &expected_live, ReservationStatus::Confirmed)
        .await?;
    assert_eq!(rows, 0);

    let rows = repo
        .update_status(completed.id, &expected_live, ReservationStatus::Cancelled)
        .await?;
    assert_eq!(rows, 0);

    Ok(())
}

/// Tests a transition with several admissible source statuses.
///
/// A host rejection is legal from both pending and confirmed; the update
/// must match whichever the record is in.
///
/// Expected: Ok(1) cancelling a confirmed reservation
#[tokio::test]
async fn accepts_any_expected_status() -> Result<(), DbErr> {
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

    let repo = ReservationRepository::new(db);
    let rows = repo
        .update_status(
            reservation.id,
            &[ReservationStatus::Pending, ReservationStatus::Confirmed],
            ReservationStatus::Cancelled,
        )
        .await?;

    assert_eq!(rows, 1);
    let updated = repo.get_by_id(reservation.id).await?.unwrap();
    assert_eq!(updated.status, ReservationStatus::Cancelled);

    Ok(())
}

/// Tests an id that names no reservation.
///
/// Expected: Ok(0)
#[tokio::test]
async fn matches_zero_rows_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let rows = repo
        .update_status(
            999999,
            &[ReservationStatus::Pending],
            ReservationStatus::Confirmed,
        )
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
