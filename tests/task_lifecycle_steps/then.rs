//! Then steps for task lifecycle BDD scenarios.

use super::world::TaskWorld;
use rstest_bdd_macros::then;
use todo_tasks::task::{domain::TaskDomainError, services::TaskLifecycleError};

#[then("the task can be fetched by its key")]
fn task_fetched_by_key(world: &TaskWorld) -> Result<(), eyre::Report> {
    let created = world.current_task()?;
    let fetched = world
        .service
        .find_optional(created.key())
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;

    if fetched.as_ref() != Some(created) {
        return Err(eyre::eyre!("fetched task does not match created task"));
    }
    Ok(())
}

fn stored_finished_state(world: &TaskWorld) -> Result<bool, eyre::Report> {
    let key = world.current_task()?.key();
    let stored = world
        .service
        .find(key)
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    Ok(stored.is_finished())
}

#[then("the stored task is finished")]
fn stored_task_is_finished(world: &TaskWorld) -> Result<(), eyre::Report> {
    if !stored_finished_state(world)? {
        return Err(eyre::eyre!("expected the stored task to be finished"));
    }
    Ok(())
}

#[then("the stored task is not finished")]
fn stored_task_is_not_finished(world: &TaskWorld) -> Result<(), eyre::Report> {
    if stored_finished_state(world)? {
        return Err(eyre::eyre!("expected the stored task to be unfinished"));
    }
    Ok(())
}

#[then("task creation fails with a whitespace name error")]
fn creation_fails_with_whitespace_error(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::WhitespaceTaskName))
    ) {
        return Err(eyre::eyre!("expected whitespace name error, got {result:?}"));
    }
    Ok(())
}

#[then("fetching the task returns nothing")]
fn fetching_returns_nothing(world: &TaskWorld) -> Result<(), eyre::Report> {
    let key = world.current_task()?.key();
    let fetched = world
        .service
        .find_optional(key)
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    if fetched.is_some() {
        return Err(eyre::eyre!("expected deleted task to be absent"));
    }
    Ok(())
}
