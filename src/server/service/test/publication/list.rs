use super::*;

/// Tests the admin queue with a status filter.
///
/// Expected: only requests in the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user_with_role(db, UserRole::Host).await?;
    let admin = factory::create_user_with_role(db, UserRole::Admin).await?;
    let pending = factory::create_publication_request(db, host.id).await?;
    let reviewed = factory::create_publication_request(db, host.id).await?;

    let service = PublicationService::new(db);
    service
        .approve(admin.id, reviewed.id, ReviewPublicationDto::default())
        .await?;

    let only_pending = service.list(Some("pending".to_string())).await?;
    assert_eq!(only_pending.len(), 1);
    assert_eq!(only_pending[0].id, pending.id);

    let only_approved = service.list(Some("approved".to_string())).await?;
    assert_eq!(only_approved.len(), 1);
    assert_eq!(only_approved[0].id, reviewed.id);

    let all = service.list(None).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests a filter value outside the enum.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_status_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PublicationService::new(db);
    let result = service.list(Some("archivado".to_string())).await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => {
            assert_eq!(message, "Estado inválido. Use: pending, approved, rejected")
        }
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that a host sees only their own requests.
///
/// Expected: each owner's listing holds exactly their request
#[tokio::test]
async fn lists_own_requests_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host_a = factory::create_user_with_role(db, UserRole::Host).await?;
    let host_b = factory::create_user_with_role(db, UserRole::Host).await?;
    let request_a = factory::create_publication_request(db, host_a.id).await?;
    factory::create_publication_request(db, host_b.id).await?;

    let service = PublicationService::new(db);
    let mine = service.list_mine(host_a.id).await?;

    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, request_a.id);

    Ok(())
}

/// Tests the admin detail fetch.
///
/// Expected: Ok(Model) for a known id, Err(NotFound) otherwise
#[tokio::test]
async fn fetches_request_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user_with_role(db, UserRole::Host).await?;
    let request = factory::create_publication_request(db, host.id).await?;

    let service = PublicationService::new(db);
    let found = service.get_by_id(request.id).await?;
    assert_eq!(found.id, request.id);

    let result = service.get_by_id(999999).await;
    match result.unwrap_err() {
        AppError::NotFound(message) => assert_eq!(message, "Solicitud no encontrada"),
        e => panic!("Expected NotFound error, got: {:?}", e),
    }

    Ok(())
}
