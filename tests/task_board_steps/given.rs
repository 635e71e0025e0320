//! Given steps for task board BDD scenarios.

use super::world::{PASSWORD, TaskBoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::services::CreateTaskRequest;

#[given(r#"a signed-up user "{username}""#)]
fn signed_up_user(world: &mut TaskBoardWorld, username: String) -> Result<(), eyre::Report> {
    run_async(world.app.credentials.sign_up(&username, PASSWORD))
        .wrap_err_with(|| format!("sign up {username}"))?;
    let authenticated = run_async(world.app.credentials.validate_password(&username, PASSWORD))
        .wrap_err("validate scenario credentials")?
        .ok_or_else(|| eyre::eyre!("{username} did not authenticate"))?;
    world.users.insert(username, authenticated);
    Ok(())
}

#[given(r#""{username}" has a task "{title}""#)]
fn user_has_task(
    world: &mut TaskBoardWorld,
    username: String,
    title: String,
) -> Result<(), eyre::Report> {
    let owner = world.user(&username)?.clone();
    let created = run_async(
        world
            .app
            .board
            .create_task(&owner, CreateTaskRequest::new(title.as_str(), "")),
    )
    .wrap_err("create scenario task")?;
    world.tasks.insert(title, created);
    Ok(())
}

#[given(r#""{username}" has a "{status}" task "{title}""#)]
fn user_has_task_with_status(
    world: &mut TaskBoardWorld,
    username: String,
    status: String,
    title: String,
) -> Result<(), eyre::Report> {
    let owner = world.user(&username)?.clone();
    let created = run_async(
        world
            .app
            .board
            .create_task(&owner, CreateTaskRequest::new(title.as_str(), "")),
    )
    .wrap_err("create scenario task")?;
    let updated = run_async(
        world
            .app
            .board
            .update_task_status(&owner, created.id(), &status),
    )
    .wrap_err("set scenario task status")?;
    world.tasks.insert(title, updated);
    Ok(())
}
