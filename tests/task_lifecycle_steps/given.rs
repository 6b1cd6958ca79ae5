//! Given steps for task lifecycle BDD scenarios.

use super::world::TaskWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todo_tasks::task::services::CreateTaskRequest;

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let stored = world.store.len().wrap_err("count stored entities")?;
    if stored != 0 {
        return Err(eyre::eyre!("expected an empty store, found {stored} entities"));
    }
    Ok(())
}

#[given(r#"a stored task named "{name}""#)]
fn stored_task_named(world: &mut TaskWorld, name: String) -> Result<(), eyre::Report> {
    let created = world
        .service
        .create(CreateTaskRequest::new(name))
        .wrap_err("create task for scenario")?;
    world.current_task = Some(created);
    Ok(())
}
