use alhootah::application::ports::StatusCheckRepository;
use alhootah::domain::StatusCheck;
use alhootah::infrastructure::persistence::InMemoryStatusCheckRepository;

#[tokio::test]
async fn given_empty_repository_when_listing_then_returns_nothing() {
    let repository = InMemoryStatusCheckRepository::new();

    assert!(repository.list(0, 100).await.unwrap().is_empty());
}

#[tokio::test]
async fn given_inserted_checks_when_listing_with_window_then_respects_skip_and_limit() {
    let repository = InMemoryStatusCheckRepository::new();
    for name in ["a", "b", "c", "d"] {
        repository.insert(&StatusCheck::new(name.to_string())).await.unwrap();
    }

    let page = repository.list(1, 2).await.unwrap();

    let names: Vec<_> = page.iter().map(|c| c.client_name.as_str()).collect();
    assert_eq!(names, vec!["b", "c"]);
}

#[tokio::test]
async fn given_skip_past_end_when_listing_then_returns_nothing() {
    let repository = InMemoryStatusCheckRepository::new();
    repository.insert(&StatusCheck::new("only".to_string())).await.unwrap();

    assert!(repository.list(5, 10).await.unwrap().is_empty());
}
