//! In-memory integration tests for the credential store.

use super::helpers::{PASSWORD, app};
use rstest::rstest;
use taskboard::auth::services::CredentialError;
use taskboard::bootstrap::Application;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_sign_up_with_same_username_is_rejected(app: Application) -> eyre::Result<()> {
    app.credentials.sign_up("alice", PASSWORD).await?;

    let second = app.credentials.sign_up("alice", "Other0ne").await;

    eyre::ensure!(
        matches!(second, Err(CredentialError::DuplicateUsername(_))),
        "expected duplicate username, got {second:?}"
    );
    eyre::ensure!(
        app.credentials
            .validate_password("alice", PASSWORD)
            .await?
            .is_some(),
        "first account's password no longer verifies"
    );
    eyre::ensure!(
        app.credentials
            .validate_password("alice", "Other0ne")
            .await?
            .is_none(),
        "second password must not have replaced the first"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wrong_password_and_unknown_user_both_yield_none(app: Application) -> eyre::Result<()> {
    app.credentials.sign_up("alice", PASSWORD).await?;

    let wrong_password = app.credentials.validate_password("alice", "Wrong0ne").await?;
    let unknown_user = app.credentials.validate_password("nobody", PASSWORD).await?;

    eyre::ensure!(wrong_password.is_none(), "wrong password authenticated");
    eyre::ensure!(unknown_user.is_none(), "unknown user authenticated");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn usernames_are_case_sensitive(app: Application) -> eyre::Result<()> {
    app.credentials.sign_up("alice", PASSWORD).await?;
    app.credentials.sign_up("Alice", PASSWORD).await?;

    let lower = app.credentials.validate_password("alice", PASSWORD).await?;
    let upper = app.credentials.validate_password("Alice", PASSWORD).await?;

    let (Some(lower_user), Some(upper_user)) = (lower, upper) else {
        eyre::bail!("both accounts should resolve");
    };
    eyre::ensure!(lower_user.id() != upper_user.id(), "accounts must be distinct");
    Ok(())
}
