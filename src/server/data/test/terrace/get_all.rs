use super::*;
use test_utils::factory::helpers::create_published_terrace;

/// Tests listing the catalog with owner rows attached.
///
/// Expected: Ok with every terrace and its owner present
#[tokio::test]
async fn returns_catalog_with_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user_with_role(db, UserRole::Host).await?;
    create_published_terrace(db, host.id).await?;
    create_published_terrace(db, host.id).await?;

    let repo = TerraceRepository::new(db);
    let catalog = repo.get_all().await?;

    assert_eq!(catalog.len(), 2);
    for (terrace, owner) in &catalog {
        assert_eq!(terrace.owner_id, host.id);
        assert_eq!(owner.as_ref().map(|o| o.id), Some(host.id));
    }

    Ok(())
}

/// Tests an empty catalog.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TerraceRepository::new(db);
    let catalog = repo.get_all().await?;

    assert!(catalog.is_empty());

    Ok(())
}
