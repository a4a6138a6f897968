use super::*;

/// Tests host user successfully passes the host permission check.
///
/// Expected: Ok(User) with role host
#[tokio::test]
async fn grants_access_to_host_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let host = factory::create_user_with_role(db, UserRole::Host).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(host.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Host]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, host.id);
    assert_eq!(returned_user.role, UserRole::Host);

    Ok(())
}

/// Tests client user is denied the host permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_client_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Host]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, msg)) => {
            assert_eq!(user_id, user.id);
            assert!(msg.contains("host"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests admin user is denied the host permission.
///
/// Roles are matched strictly; the admin role does not stand in for host
/// when an endpoint is scoped to a host's own venues.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_user_with_role(db, UserRole::Admin).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(admin.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Host]).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, _)) => {
            assert_eq!(user_id, admin.id);
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
