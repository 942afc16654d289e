use payloads::{ClientError, Item, ResourceKind};
use reqwest::StatusCode;
use test_helpers::spawn_app;

#[tokio::test]
async fn items_are_found_by_id_or_slug() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let by_id = app.client.get_item(ResourceKind::Post, "1").await?;
    let by_slug = app
        .client
        .get_item(ResourceKind::Post, "the-light-of-the-world")
        .await?;
    assert_eq!(by_id, by_slug);
    assert_eq!(by_id.title(), "The Light of the World");
    let Item::Post(post) = by_id else {
        panic!("expected a post");
    };
    assert!(post.content.is_some());

    let lesson = app.client.get_item(ResourceKind::Lesson, "pentecost").await?;
    assert!(matches!(lesson, Item::Lesson(ref l) if l.lesson_number == Some(1)));

    Ok(())
}

#[tokio::test]
async fn missing_item_is_an_api_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let err = app
        .client
        .get_item(ResourceKind::Lesson, "99")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::APIError(StatusCode::NOT_FOUND, _)));
    assert_eq!(err.to_string(), "Not found: lesson 99");

    Ok(())
}

#[tokio::test]
async fn slug_with_slashes_stays_on_its_own_endpoint() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let err = app
        .client
        .get_item(ResourceKind::Post, "../lessons/pentecost")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::APIError(StatusCode::NOT_FOUND, _)));
    assert!(err.to_string().starts_with("Not found: post"));

    let requests = app.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].path.starts_with("/api/posts/"));
    assert!(!requests[0].path.contains("/lessons/"));

    Ok(())
}

#[tokio::test]
async fn dot_segment_ids_are_rejected_without_a_request() -> anyhow::Result<()> {
    let app = spawn_app().await;

    for id in [".", ".."] {
        let err = app.client.get_item(ResourceKind::Post, id).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidId(_)));
    }
    assert!(app.requests().is_empty());

    Ok(())
}

#[tokio::test]
async fn empty_error_body_falls_back_to_status_reason() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.fail_with("");

    let err = app.client.get_item(ResourceKind::Post, "1").await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::APIError(StatusCode::SERVICE_UNAVAILABLE, _)
    ));
    assert_eq!(err.to_string(), "Service Unavailable");

    Ok(())
}
