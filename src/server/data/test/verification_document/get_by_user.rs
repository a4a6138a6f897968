use super::*;

/// Tests that the listing is scoped to the uploader.
///
/// Expected: Ok with only the given user's documents
#[tokio::test]
async fn scopes_to_the_uploader() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let own = factory::create_verification_document(db, user.id).await?;
    factory::create_verification_document(db, other.id).await?;

    let repo = VerificationDocumentRepository::new(db);
    let documents = repo.get_by_user(user.id).await?;

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, own.id);

    Ok(())
}

/// Tests a user with no documents.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_user_without_documents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = VerificationDocumentRepository::new(db);
    let documents = repo.get_by_user(user.id).await?;

    assert!(documents.is_empty());

    Ok(())
}
