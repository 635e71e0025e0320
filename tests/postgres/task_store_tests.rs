//! Owner scoping, ordering and filtering against real SQL.

use super::helpers::{PgContext, pg_context};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::auth::domain::UserId;
use taskboard::task::{
    domain::{PersistedTaskData, SearchTerm, Task, TaskFilter, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};

fn new_task(title: &str, description: &str, owner: UserId) -> Task {
    let parsed = TaskTitle::new(title).expect("valid title");
    Task::new(parsed, description, owner, &DefaultClock)
}

fn store(context: &PgContext, task: &Task) {
    context
        .rt
        .block_on(context.tasks.store(task))
        .expect("task insert");
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title().as_str()).collect()
}

fn listed(context: &PgContext, owner: UserId, filter: &TaskFilter) -> Vec<Task> {
    context
        .rt
        .block_on(context.tasks.list_owned(owner, filter))
        .expect("task listing")
}

fn search(term: &str) -> TaskFilter {
    TaskFilter::all().with_search(SearchTerm::new(term).expect("valid term"))
}

#[rstest]
fn stored_task_is_visible_to_its_owner_only(pg_context: PgContext) {
    let context = pg_context;
    let alice = context.stored_user("alice");
    let bob = context.stored_user("bobby");
    let task = new_task("  Buy milk  ", "2 litres", alice.id());
    store(&context, &task);

    let owned = context
        .rt
        .block_on(context.tasks.find_owned(task.id(), alice.id()))
        .expect("lookup")
        .expect("owner should see the task");
    let foreign = context
        .rt
        .block_on(context.tasks.find_owned(task.id(), bob.id()))
        .expect("lookup");

    assert_eq!(owned.id(), task.id());
    assert_eq!(owned.owner(), alice.id());
    assert_eq!(owned.title().as_str(), "  Buy milk  ");
    assert_eq!(owned.description(), "2 litres");
    assert_eq!(owned.status(), TaskStatus::Open);
    assert!(foreign.is_none());
}

#[rstest]
fn update_and_delete_by_another_owner_touch_nothing(pg_context: PgContext) {
    let context = pg_context;
    let alice = context.stored_user("alice");
    let bob = context.stored_user("bobby");
    let task = new_task("Walk dog", "", alice.id());
    store(&context, &task);
    let hijacked = Task::from_persisted(PersistedTaskData {
        id: task.id(),
        owner: bob.id(),
        title: task.title().clone(),
        description: String::new(),
        status: TaskStatus::Done,
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    });

    let updated = context.rt.block_on(context.tasks.update_owned(&hijacked));
    let deleted = context
        .rt
        .block_on(context.tasks.delete_owned(task.id(), bob.id()));
    let kept = context
        .rt
        .block_on(context.tasks.find_owned(task.id(), alice.id()))
        .expect("lookup")
        .expect("task should survive");

    assert!(matches!(updated, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));
    assert!(matches!(deleted, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));
    assert_eq!(kept.status(), TaskStatus::Open);
}

#[rstest]
fn missing_rows_map_to_not_found(pg_context: PgContext) {
    let context = pg_context;
    let alice = context.stored_user("alice");
    let ghost = new_task("Never stored", "", alice.id());
    let missing = TaskId::new();

    let updated = context.rt.block_on(context.tasks.update_owned(&ghost));
    let deleted = context
        .rt
        .block_on(context.tasks.delete_owned(missing, alice.id()));

    assert!(matches!(updated, Err(TaskRepositoryError::NotFound(id)) if id == ghost.id()));
    assert!(matches!(deleted, Err(TaskRepositoryError::NotFound(id)) if id == missing));
}

#[rstest]
fn status_update_persists_and_delete_removes(pg_context: PgContext) {
    let context = pg_context;
    let alice = context.stored_user("alice");
    let mut task = new_task("Walk dog", "", alice.id());
    store(&context, &task);

    task.set_status(TaskStatus::InProgress, &DefaultClock);
    context
        .rt
        .block_on(context.tasks.update_owned(&task))
        .expect("status update");
    let reread = context
        .rt
        .block_on(context.tasks.find_owned(task.id(), alice.id()))
        .expect("lookup")
        .expect("task should exist");
    context
        .rt
        .block_on(context.tasks.delete_owned(task.id(), alice.id()))
        .expect("delete");
    let second = context
        .rt
        .block_on(context.tasks.delete_owned(task.id(), alice.id()));

    assert_eq!(reread.status(), TaskStatus::InProgress);
    assert!(matches!(second, Err(TaskRepositoryError::NotFound(_))));
}

#[rstest]
fn listing_follows_insertion_order(pg_context: PgContext) {
    let context = pg_context;
    let alice = context.stored_user("alice");
    let bob = context.stored_user("bobby");
    for title in ["zeta", "alpha", "mu"] {
        store(&context, &new_task(title, "", alice.id()));
    }
    store(&context, &new_task("bob's", "", bob.id()));

    let tasks = listed(&context, alice.id(), &TaskFilter::all());

    assert_eq!(titles(&tasks), ["zeta", "alpha", "mu"]);
}

#[rstest]
fn status_and_escaped_search_combine(pg_context: PgContext) {
    let context = pg_context;
    let alice = context.stored_user("alice");
    let mut discount = new_task("50% off", "", alice.id());
    discount.set_status(TaskStatus::Done, &DefaultClock);
    let mut hundred = new_task("500 items", "", alice.id());
    hundred.set_status(TaskStatus::Done, &DefaultClock);
    let open_discount = new_task("Another 50% off", "", alice.id());
    for task in [&discount, &hundred, &open_discount] {
        store(&context, task);
    }

    let filter = search("0%").with_status(TaskStatus::Done);
    let tasks = listed(&context, alice.id(), &filter);

    assert_eq!(titles(&tasks), ["50% off"]);
}

#[rstest]
#[case("a_c", &["a_c"])]
#[case("back\\slash", &["back\\slash"])]
#[case("Milk", &[])]
#[case("  ", &["Buy  milk"])]
#[case("leash", &["Walk dog"])]
fn search_is_a_literal_case_sensitive_substring(
    pg_context: PgContext,
    #[case] term: &str,
    #[case] expected: &[&str],
) {
    let context = pg_context;
    let alice = context.stored_user("alice");
    for (title, description) in [
        ("a_c", ""),
        ("abc", ""),
        ("back\\slash", ""),
        ("backslash", ""),
        ("Buy  milk", ""),
        ("Buy milk", ""),
        ("Walk dog", "bring the leash"),
    ] {
        store(&context, &new_task(title, description, alice.id()));
    }

    let tasks = listed(&context, alice.id(), &search(term));

    assert_eq!(titles(&tasks), expected);
}
