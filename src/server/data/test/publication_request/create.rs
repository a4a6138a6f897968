use super::*;

/// Tests submitting a listing request.
///
/// Verifies the row lands in `pending` with no review fields set, whatever
/// the submitted content.
///
/// Expected: Ok with status pending and empty review fields
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::PublicationRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user_with_role(db, UserRole::Host).await?;

    let repo = PublicationRequestRepository::new(db);
    let request = repo
        .create(SubmitPublicationParams {
            owner_id: host.id,
            name: "Terraza Jardín".to_string(),
            description: "Amplia terraza con jardín".to_string(),
            capacity: 50,
            location: "Coyoacán".to_string(),
            price: 2500.0,
            contact_phone: "5553334444".to_string(),
            contact_email: "jardin@example.com".to_string(),
            amenities: serde_json::json!(["wifi", "parrilla"]),
            rules: Some("No fumar".to_string()),
        })
        .await?;

    assert_eq!(request.owner_id, host.id);
    assert_eq!(request.name, "Terraza Jardín");
    assert_eq!(request.capacity, 50);
    assert_eq!(request.status, PublicationStatus::Pending);
    assert!(request.admin_notes.is_none());
    assert!(request.reviewed_by.is_none());
    assert!(request.reviewed_at.is_none());

    Ok(())
}
