use super::*;
use test_utils::factory::user::UserFactory;

/// Tests the positive case: another account holds the email.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_email_held_by_another_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;
    let caller = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let taken = repo
        .email_taken_by_other("taken@example.com", caller.id)
        .await?;

    assert!(taken);

    Ok(())
}

/// Tests that a user's own email does not count as taken.
///
/// Profile updates resubmit the current email; that must not read as a
/// conflict.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_the_callers_own_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = UserFactory::new(db)
        .email("mine@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let taken = repo
        .email_taken_by_other("mine@example.com", caller.id)
        .await?;

    assert!(!taken);

    Ok(())
}

/// Tests an email nobody holds.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_unused_email_as_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let taken = repo
        .email_taken_by_other("free@example.com", caller.id)
        .await?;

    assert!(!taken);

    Ok(())
}
