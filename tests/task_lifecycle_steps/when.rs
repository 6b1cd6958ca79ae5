//! When steps for task lifecycle BDD scenarios.

use super::world::TaskWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use todo_tasks::task::services::CreateTaskRequest;

fn record_creation(world: &mut TaskWorld, name: String) {
    let result = world.service.create(CreateTaskRequest::new(name));
    if let Ok(task) = &result {
        world.current_task = Some(task.clone());
    }
    world.last_create_result = Some(result);
}

#[when(r#"a task named "{name}" is created"#)]
fn task_named_is_created(world: &mut TaskWorld, name: String) {
    record_creation(world, name);
}

#[when("a task named with a lone space is created")]
fn task_with_lone_space_is_created(world: &mut TaskWorld) {
    record_creation(world, " ".to_owned());
}

#[when("the task is finished")]
fn task_is_finished(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let key = world.current_task()?.key().clone();
    let finished = world.service.finish(&key).wrap_err("finish task")?;
    world.current_task = Some(finished);
    Ok(())
}

#[when("the task finish is canceled")]
fn task_finish_is_canceled(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let key = world.current_task()?.key().clone();
    let reopened = world.service.cancel_finish(&key).wrap_err("cancel finish")?;
    world.current_task = Some(reopened);
    Ok(())
}

#[when("the task is deleted")]
fn task_is_deleted(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let key = world.current_task()?.key().clone();
    world.service.delete(&key).wrap_err("delete task")?;
    Ok(())
}
