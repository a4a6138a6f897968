use super::*;

/// Tests creating a new account.
///
/// Verifies that the user repository inserts a row carrying the given name,
/// email, hash, phone, and role.
///
/// Expected: Ok with all fields persisted as given
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            name: "Ana García".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "hashed-password".to_string(),
            phone: Some("5551112222".to_string()),
            role: UserRole::Host,
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.name, "Ana García");
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.password_hash, "hashed-password");
    assert_eq!(user.phone, Some("5551112222".to_string()));
    assert_eq!(user.role, UserRole::Host);

    Ok(())
}

/// Tests that a duplicate email is rejected by the database.
///
/// The email column is unique; a second insert with the same address must
/// fail rather than create a second account.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        name: "First".to_string(),
        email: "taken@example.com".to_string(),
        password_hash: "hash-one".to_string(),
        phone: None,
        role: UserRole::Client,
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            name: "Second".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash-two".to_string(),
            phone: None,
            role: UserRole::Client,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
