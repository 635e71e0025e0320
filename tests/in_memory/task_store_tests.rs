//! In-memory integration tests for owner-scoped task storage.

use std::sync::Arc;

use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskboard::auth::domain::UserId;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskStatus},
    services::{CreateTaskRequest, ListTasksRequest, TaskService, TaskServiceError},
};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title().as_str()).collect()
}

async fn seed(service: &TestService, owner: UserId) -> eyre::Result<()> {
    let milk = service
        .create(CreateTaskRequest::new("Buy milk", "semi-skimmed"), owner)
        .await?;
    let dog = service
        .create(CreateTaskRequest::new("Walk dog", "round the park"), owner)
        .await?;
    service
        .create(CreateTaskRequest::new("Pay rent", "milk money first"), owner)
        .await?;
    service.update_status(dog.id(), "DONE", owner).await?;
    service.update_status(milk.id(), "IN_PROGRESS", owner).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_preserves_insertion_order(service: TestService) -> eyre::Result<()> {
    let owner = UserId::new();
    seed(&service, owner).await?;

    let listed = service.list(owner, ListTasksRequest::new()).await?;

    ensure!(titles(&listed) == ["Buy milk", "Walk dog", "Pay rent"]);
    Ok(())
}

#[rstest]
#[case("OPEN", &["Pay rent"])]
#[case("IN_PROGRESS", &["Buy milk"])]
#[case("DONE", &["Walk dog"])]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_is_exact(
    service: TestService,
    #[case] status: &str,
    #[case] expected: &[&str],
) -> eyre::Result<()> {
    let owner = UserId::new();
    seed(&service, owner).await?;

    let listed = service
        .list(owner, ListTasksRequest::new().with_status(status))
        .await?;

    ensure!(titles(&listed) == expected, "unexpected tasks for {status}");
    Ok(())
}

#[rstest]
#[case("milk", &["Buy milk", "Pay rent"])]
#[case("park", &["Walk dog"])]
#[case("Milk", &[])]
#[case("cat", &[])]
#[tokio::test(flavor = "multi_thread")]
async fn search_covers_title_and_description(
    service: TestService,
    #[case] needle: &str,
    #[case] expected: &[&str],
) -> eyre::Result<()> {
    let owner = UserId::new();
    seed(&service, owner).await?;

    let listed = service
        .list(owner, ListTasksRequest::new().with_search(needle))
        .await?;

    ensure!(titles(&listed) == expected, "unexpected tasks for {needle}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_and_search_combine(service: TestService) -> eyre::Result<()> {
    let owner = UserId::new();
    seed(&service, owner).await?;

    let listed = service
        .list(
            owner,
            ListTasksRequest::new().with_status("OPEN").with_search("milk"),
        )
        .await?;

    ensure!(titles(&listed) == ["Pay rent"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_scoped_to_the_owner(service: TestService) -> eyre::Result<()> {
    let owner = UserId::new();
    let stranger = UserId::new();
    seed(&service, owner).await?;

    let listed = service.list(stranger, ListTasksRequest::new()).await?;

    ensure!(listed.is_empty(), "stranger saw {} tasks", listed.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_can_move_back_to_open(service: TestService) -> eyre::Result<()> {
    let owner = UserId::new();
    let task = service
        .create(CreateTaskRequest::new("Buy milk", ""), owner)
        .await?;

    service.update_status(task.id(), "DONE", owner).await?;
    let reopened = service.update_status(task.id(), "OPEN", owner).await?;

    ensure!(reopened.status() == TaskStatus::Open);
    ensure!(reopened.updated_at() >= task.updated_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_disappears_from_listing(service: TestService) -> eyre::Result<()> {
    let owner = UserId::new();
    let task = service
        .create(CreateTaskRequest::new("Buy milk", ""), owner)
        .await?;

    service.delete_by_id(task.id(), owner).await?;
    let listed = service.list(owner, ListTasksRequest::new()).await?;
    let second = service.delete_by_id(task.id(), owner).await;

    ensure!(listed.is_empty());
    ensure!(matches!(second, Err(TaskServiceError::NotFound(_))));
    Ok(())
}
