use super::*;

/// Tests publishing a catalog row from an approved request.
///
/// Verifies that every listing field is copied from the request and that the
/// row points back at both the request and the owner.
///
/// Expected: Ok with fields matching the request
#[tokio::test]
async fn copies_listing_fields_from_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user_with_role(db, UserRole::Host).await?;
    let request = factory::create_publication_request(db, host.id).await?;

    let repo = TerraceRepository::new(db);
    let terrace = repo.create_from_request(&request).await?;

    assert_eq!(terrace.request_id, request.id);
    assert_eq!(terrace.owner_id, host.id);
    assert_eq!(terrace.name, request.name);
    assert_eq!(terrace.description, request.description);
    assert_eq!(terrace.capacity, request.capacity);
    assert_eq!(terrace.location, request.location);
    assert_eq!(terrace.price, request.price);
    assert_eq!(terrace.contact_email, request.contact_email);

    Ok(())
}

/// Tests that a request can only be published once.
///
/// The request_id column is unique; a second catalog row for the same
/// request must be rejected.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_second_publication_of_same_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user_with_role(db, UserRole::Host).await?;
    let request = factory::create_publication_request(db, host.id).await?;

    let repo = TerraceRepository::new(db);
    repo.create_from_request(&request).await?;
    let second = repo.create_from_request(&request).await;

    assert!(second.is_err());

    Ok(())
}
