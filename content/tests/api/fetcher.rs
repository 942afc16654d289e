use content::listing::DEFAULT_FEATURED_SLOTS;
use content::{
    CollectionQuery, Fetcher, GroupMatch, ListPolicy, SingleQuery, ViewFilter,
    project,
};
use payloads::{APIClient, Item, QueryParams};
use test_helpers::{TestApp, spawn_app};

fn collection_fetcher(client: &APIClient) -> Fetcher<APIClient, CollectionQuery> {
    Fetcher::new(client.clone())
}

#[tokio::test]
async fn fetched_posts_project_into_pages() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let fetcher = collection_fetcher(&app.client);

    fetcher
        .load(CollectionQuery::new("posts", QueryParams::new()))
        .await;
    let state = fetcher.state();
    assert!(!state.loading);
    assert!(state.error.is_none());
    let data = state.data.expect("posts were fetched");
    let posts = data.posts().expect("posts collection");

    let policy = ListPolicy::new(6).promote_featured(DEFAULT_FEATURED_SLOTS);
    let page = project(posts, &ViewFilter::default(), &policy);
    let featured: Vec<i64> = page.featured.iter().map(|p| p.id.0).collect();
    let grid: Vec<i64> = page.items.iter().map(|p| p.id.0).collect();
    assert_eq!(page.total_pages, 3);
    assert_eq!(featured, vec![1, 4]);
    assert_eq!(grid, vec![2, 3, 5, 6]);

    let mut filter = ViewFilter::default();
    filter.set_search("Light");
    let found = project(posts, &filter, &policy);
    assert_eq!(found.total_count, 1);
    assert_eq!(found.featured[0].title, "The Light of the World");

    Ok(())
}

#[tokio::test]
async fn lessons_filter_by_season_name() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let fetcher = collection_fetcher(&app.client);

    fetcher
        .load(CollectionQuery::new("lessons", QueryParams::new()))
        .await;
    let data = fetcher.state().data.expect("lessons were fetched");
    let lessons = data.lessons().expect("lessons collection");

    let mut filter = ViewFilter::default();
    filter.select("acts");
    let policy = ListPolicy::new(6).match_groups_by(GroupMatch::NameContains);
    let page = project(lessons, &filter, &policy);
    assert_eq!(page.total_count, 4);
    assert_eq!(page.total_pages, 1);

    Ok(())
}

#[tokio::test]
async fn backend_failure_message_lands_in_error_state() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let fetcher = collection_fetcher(&app.client);
    app.fail_with("Network down");

    fetcher
        .load(CollectionQuery::new("events", QueryParams::new()))
        .await;
    let state = fetcher.state();
    assert_eq!(state.error.as_deref(), Some("Network down"));
    assert!(!state.loading);
    assert!(state.data.is_none());

    // recovery through a manual refetch clears the error
    app.recover();
    fetcher.refetch().await;
    let state = fetcher.state();
    assert!(state.error.is_none());
    assert!(state.data.is_some());

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() -> anyhow::Result<()> {
    let fetcher = collection_fetcher(&TestApp::unreachable_client());

    fetcher
        .load(CollectionQuery::new("media", QueryParams::new()))
        .await;
    let state = fetcher.state();
    assert_eq!(
        state.error.as_deref(),
        Some("Network error. Please check your connection.")
    );
    assert!(!state.loading);

    Ok(())
}

#[tokio::test]
async fn unknown_endpoint_sends_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let fetcher = collection_fetcher(&app.client);

    fetcher
        .load(CollectionQuery::new("sermons", QueryParams::new()))
        .await;
    let state = fetcher.state();
    assert_eq!(state.error.as_deref(), Some("Unknown endpoint: sermons"));
    assert!(!state.loading);
    assert!(app.requests().is_empty());

    Ok(())
}

#[tokio::test]
async fn unchanged_params_do_not_refetch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let fetcher = collection_fetcher(&app.client);

    let query = |search: &str| {
        CollectionQuery::new(
            "posts",
            QueryParams::new().with("search", search).with("category", None::<i64>),
        )
    };
    fetcher.load(query("")).await;
    fetcher.load(query("")).await;
    assert_eq!(app.requests().len(), 1);

    fetcher.load(query("light")).await;
    assert_eq!(app.requests().len(), 2);
    let data = fetcher.state().data.expect("posts were fetched");
    assert_eq!(data.len(), 1);

    Ok(())
}

#[tokio::test]
async fn single_fetch_waits_for_an_id() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let fetcher: Fetcher<APIClient, SingleQuery> =
        Fetcher::new(app.client.clone());

    fetcher.load(SingleQuery::new("event", None)).await;
    assert!(fetcher.state().is_initial_loading());
    assert!(app.requests().is_empty());

    fetcher
        .load(SingleQuery::new("event", Some("youth-retreat".into())))
        .await;
    let state = fetcher.state();
    assert!(!state.loading);
    assert!(matches!(state.data, Some(Item::Event(ref e)) if e.title == "Youth Retreat"));

    Ok(())
}

#[tokio::test]
async fn blank_failure_still_leaves_a_readable_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let fetcher: Fetcher<APIClient, SingleQuery> =
        Fetcher::new(app.client.clone());
    app.fail_with("");

    fetcher
        .load(SingleQuery::new("post", Some("1".into())))
        .await;
    let state = fetcher.state();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Service Unavailable"));

    Ok(())
}
