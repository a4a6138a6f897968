use super::*;

/// Tests registering a document with only a file name.
///
/// Expected: Ok(Model) in pending status under the general category, with a
/// generated description naming it
#[tokio::test]
async fn registers_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = VerificationService::new(db);
    let document = service
        .register(
            user.id,
            RegisterDocumentDto {
                file_name: Some("ine-frente.jpg".to_string()),
                category: None,
                description: None,
            },
        )
        .await?;

    assert_eq!(document.user_id, user.id);
    assert_eq!(document.file_name, "ine-frente.jpg");
    assert_eq!(document.category, DocumentCategory::General);
    assert_eq!(document.description, "Imagen de verificación - general");
    assert_eq!(document.status, DocumentStatus::Pending);

    Ok(())
}

/// Tests registering under an explicit category.
///
/// Expected: Ok(Model) with the given category and description kept
#[tokio::test]
async fn keeps_given_category_and_description() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = VerificationService::new(db);
    let document = service
        .register(
            user.id,
            RegisterDocumentDto {
                file_name: Some("permiso.pdf".to_string()),
                category: Some("permisos_terrazas".to_string()),
                description: Some("Permiso municipal 2026".to_string()),
            },
        )
        .await?;

    assert_eq!(document.category, DocumentCategory::TerracePermits);
    assert_eq!(document.description, "Permiso municipal 2026");

    Ok(())
}

/// Tests a registration without a file name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_missing_file_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = VerificationService::new(db);
    let result = service
        .register(
            user.id,
            RegisterDocumentDto {
                file_name: Some("   ".to_string()),
                category: None,
                description: None,
            },
        )
        .await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => {
            assert_eq!(message, "El nombre del archivo es requerido")
        }
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a category outside the enum.
///
/// Expected: Err(BadRequest) naming the accepted categories
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = VerificationService::new(db);
    let result = service
        .register(
            user.id,
            RegisterDocumentDto {
                file_name: Some("doc.jpg".to_string()),
                category: Some("pasaporte".to_string()),
                description: None,
            },
        )
        .await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => assert_eq!(
            message,
            "Categoría inválida. Use: identificacion, permisos_terrazas, comprobante_domicilio, general"
        ),
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}

/// Tests the per-user listing.
///
/// Expected: only the requested user's documents
#[tokio::test]
async fn lists_documents_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_verification_document(db, user.id).await?;
    factory::create_verification_document(db, user.id).await?;
    factory::create_verification_document(db, other.id).await?;

    let service = VerificationService::new(db);
    let documents = service.list_for_user(user.id).await?;

    assert_eq!(documents.len(), 2);
    assert!(documents.iter().all(|document| document.user_id == user.id));

    Ok(())
}
