use pawac::{
    error::{
        AuthenticationError,
        Error,
        PasswordError,
    },
    password::{
        Password,
        PasswordStatus,
    },
    platform::Builder,
};
use pawcore::ac::session::SessionFactory;

use test_paw::{
    ac::{
        create_sqlite_backend,
        create_sqlite_platform,
    },
    chrono::Utc,
};

async fn basic_lifecycle(purge: bool) -> anyhow::Result<()> {
    let platform = create_sqlite_platform(purge).await?;

    assert!(matches!(
        platform.authenticate_user("manager", "manager").await,
        Err(Error::Authentication(AuthenticationError::UnknownUser))
    ));

    let new_user = platform.create_user("manager").await?;
    let manager = platform.get_user(new_user.id()).await?
        .expect("manager wasn't created somehow");
    assert_eq!(manager.id(), new_user.id());
    assert_eq!(manager.name(), "manager");

    assert!(matches!(
        platform.verify_user_id_password(manager.id(), "New").await,
        Err(Error::Authentication(AuthenticationError::Password(e)))
            if e == PasswordError::NotVerifiable,
    ));
    assert!(matches!(
        platform.authenticate_user("manager", "New").await,
        Err(Error::Authentication(AuthenticationError::Password(e)))
            if e == PasswordError::NotVerifiable,
    ));

    let (_, password) = platform.login_status("manager").await?;
    assert_eq!(password, PasswordStatus::New);

    assert!(matches!(
        manager.reset_password("hunter2", "hunter").await,
        Err(Error::Password(e)) if e == PasswordError::Mismatched,
    ));
    manager.reset_password("hunter2", "hunter2").await?;
    assert!(matches!(
        manager.reset_password("hunter2", "hunter2").await,
        Err(Error::Password(e)) if e == PasswordError::Existing,
    ));

    assert!(platform.verify_user_id_password(manager.id(), "hunter2").await.is_ok());
    let (_, password) = platform.login_status("manager").await?;
    assert_eq!(password, PasswordStatus::Hash);

    assert!(platform.authenticate_user("manager", "hunter2").await.is_ok());
    assert!(matches!(
        platform.authenticate_user("manager", "hunter").await,
        Err(Error::Authentication(AuthenticationError::Password(e)))
            if e == PasswordError::Wrong,
    ));

    assert!(matches!(
        manager.update_password("hunter", "password", "password").await,
        Err(Error::Authentication(AuthenticationError::Password(e)))
            if e == PasswordError::Wrong,
    ));
    assert!(matches!(
        manager.update_password("hunter2", "not_password", "NOT_password").await,
        Err(Error::Password(e)) if e == PasswordError::Mismatched,
    ));
    manager.update_password("hunter2", "Password", "Password").await?;
    assert!(platform.authenticate_user("manager", "Password").await.is_ok());

    platform.force_user_id_password(manager.id(), Password::Reset).await?;
    assert!(platform.authenticate_user("manager", "Password").await.is_err());
    let (_, password) = platform.login_status("manager").await?;
    assert_eq!(password, PasswordStatus::Reset);
    assert!(matches!(
        platform.verify_user_id_password(manager.id(), "Reset").await,
        Err(Error::Authentication(AuthenticationError::Password(e)))
            if e == PasswordError::NotVerifiable,
    ));

    platform.force_user_id_password(manager.id(), Password::new("resetted")).await?;
    assert!(platform.verify_user_id_password(manager.id(), "resetted").await.is_ok());

    Ok(())
}

#[async_std::test]
async fn basic_lifecycle_password_autopurge() -> anyhow::Result<()> {
    basic_lifecycle(true).await
}

#[async_std::test]
async fn basic_lifecycle_no_autopurge() -> anyhow::Result<()> {
    basic_lifecycle(false).await
}

async fn error_handling(purge: bool) -> anyhow::Result<()> {
    let platform = create_sqlite_platform(purge).await?;
    let user = platform.create_user("volunteer_coordinator").await?;

    platform.force_user_id_password(user.id(), Password::Restricted).await?;
    assert!(matches!(
        platform.new_user_id_password(user.id(), "Restricted").await,
        Err(Error::Authentication(e)) if e == AuthenticationError::Restricted,
    ));
    assert!(matches!(
        platform.authenticate_user("volunteer_coordinator", "Restricted").await,
        Err(Error::Authentication(e)) if e == AuthenticationError::Restricted,
    ));
    platform.force_user_id_password(user.id(), Password::Misconfigured).await?;
    assert!(matches!(
        platform.new_user_id_password(user.id(), "Misconfigured").await,
        Err(Error::Misconfiguration),
    ));
    let (_, password) = platform.login_status("volunteer_coordinator").await?;
    assert_eq!(password, PasswordStatus::Misconfigured);

    Ok(())
}

#[async_std::test]
async fn error_handling_password_autopurge() -> anyhow::Result<()> {
    error_handling(true).await
}

#[async_std::test]
async fn error_handling_no_autopurge() -> anyhow::Result<()> {
    error_handling(false).await
}

#[async_std::test]
async fn login_logout() -> anyhow::Result<()> {
    let platform = Builder::new()
        .ac_platform(create_sqlite_backend().await?)
        .session_factory(
            SessionFactory::new()
                .ts_source(|| Utc::now().timestamp())
        )
        .build();

    let vet = platform.create_user("vet").await?;
    vet.reset_password("vet", "vet").await?;
    let other = platform.create_user("other").await?;
    other.reset_password("other", "other").await?;

    assert!(matches!(
        platform.authenticate_user_login("vet", "wrong", "localhost".into()).await,
        Err(Error::Authentication(AuthenticationError::Password(e)))
            if e == PasswordError::Wrong,
    ));

    let session1 = platform.authenticate_user_login("vet", "vet", "localhost".into()).await?;
    let session2 = platform.authenticate_user_login("vet", "vet", "10.0.0.2".into()).await?;
    let session3 = platform.authenticate_user_login("vet", "vet", "10.0.0.3".into()).await?;
    let other_session = platform.authenticate_user_login("other", "other", "localhost".into()).await?;
    assert_eq!(session1.session().created_ts, 1234567890);
    assert_eq!(session1.user().name(), "vet");
    assert_eq!(platform.get_user_sessions(vet.id()).await?.len(), 3);

    let token = session1.session().token;
    let loaded = platform.load_session(token).await?;
    assert_eq!(loaded.session(), session1.session());
    assert_eq!(loaded.user().id(), vet.id());

    session1.logout().await?;
    assert!(matches!(
        platform.load_session(token).await,
        Err(Error::Authentication(AuthenticationError::UnknownSession)),
    ));
    assert_eq!(platform.get_user_sessions(vet.id()).await?.len(), 2);

    session2.logout_others().await?;
    let sessions = platform.get_user_sessions(vet.id()).await?;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].token, session2.session().token);
    assert!(platform.load_session(session3.session().token).await.is_err());

    platform.logout_user(vet.id()).await?;
    assert!(platform.get_user_sessions(vet.id()).await?.is_empty());
    // sessions of other users are unaffected
    assert!(platform.load_session(other_session.session().token).await.is_ok());

    Ok(())
}
