use super::*;
use test_utils::factory::helpers::create_published_terrace;

/// Tests fetching one catalog entry with its owner.
///
/// Expected: Ok(Some) with terrace and owner
#[tokio::test]
async fn returns_terrace_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user_with_role(db, UserRole::Host).await?;
    let (_, terrace) = create_published_terrace(db, host.id).await?;

    let repo = TerraceRepository::new(db);
    let found = repo.get_by_id(terrace.id).await?;

    assert!(found.is_some());
    let (found_terrace, owner) = found.unwrap();
    assert_eq!(found_terrace.id, terrace.id);
    assert_eq!(owner.map(|o| o.id), Some(host.id));

    Ok(())
}

/// Tests an id that names no catalog entry.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TerraceRepository::new(db);
    let found = repo.get_by_id(999999).await?;

    assert!(found.is_none());

    Ok(())
}
