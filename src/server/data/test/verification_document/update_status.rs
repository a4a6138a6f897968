use super::*;

/// Tests recording an admin verdict.
///
/// Expected: Ok(Some) with status, notes, reviewer, and review time stamped
#[tokio::test]
async fn records_verdict_with_reviewer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let admin = factory::create_user_with_role(db, UserRole::Admin).await?;
    let document = factory::create_verification_document(db, user.id).await?;

    let repo = VerificationDocumentRepository::new(db);
    let reviewed = repo
        .update_status(
            document.id,
            ReviewDocumentParams {
                reviewer_id: admin.id,
                status: DocumentStatus::Approved,
                admin_notes: "Legible y vigente".to_string(),
            },
        )
        .await?;

    assert!(reviewed.is_some());
    let reviewed = reviewed.unwrap();
    assert_eq!(reviewed.status, DocumentStatus::Approved);
    assert_eq!(reviewed.admin_notes, Some("Legible y vigente".to_string()));
    assert_eq!(reviewed.reviewed_by, Some(admin.id));
    assert!(reviewed.reviewed_at.is_some());

    Ok(())
}

/// Tests that a verdict can be revised.
///
/// Document review is not status-guarded; an admin may move a rejected
/// document back to under_review.
///
/// Expected: Ok(Some) with the later verdict persisted
#[tokio::test]
async fn allows_revising_a_verdict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let admin = factory::create_user_with_role(db, UserRole::Admin).await?;
    let document = factory::create_verification_document(db, user.id).await?;

    let repo = VerificationDocumentRepository::new(db);
    repo.update_status(
        document.id,
        ReviewDocumentParams {
            reviewer_id: admin.id,
            status: DocumentStatus::Rejected,
            admin_notes: "Ilegible".to_string(),
        },
    )
    .await?;

    let revised = repo
        .update_status(
            document.id,
            ReviewDocumentParams {
                reviewer_id: admin.id,
                status: DocumentStatus::UnderReview,
                admin_notes: String::new(),
            },
        )
        .await?;

    assert_eq!(revised.unwrap().status, DocumentStatus::UnderReview);

    Ok(())
}

/// Tests an id that names no document.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user_with_role(db, UserRole::Admin).await?;

    let repo = VerificationDocumentRepository::new(db);
    let reviewed = repo
        .update_status(
            999999,
            ReviewDocumentParams {
                reviewer_id: admin.id,
                status: DocumentStatus::Approved,
                admin_notes: String::new(),
            },
        )
        .await?;

    assert!(reviewed.is_none());

    Ok(())
}
