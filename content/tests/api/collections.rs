use payloads::{ClientError, Collection, Listing, QueryParams, Resource};
use reqwest::StatusCode;
use test_helpers::{mock::reference_time, spawn_app};

#[tokio::test]
async fn posts_come_back_in_a_paged_envelope() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let posts = app.client.list_posts(&QueryParams::new().sanitized()).await?;
    let Listing::Paged(paged) = posts else {
        panic!("expected a paged envelope");
    };
    assert_eq!(paged.count, 13);
    assert_eq!(paged.results.len(), 13);
    assert!(paged.next.is_none());

    Ok(())
}

#[tokio::test]
async fn server_side_pages_follow_the_page_params() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let params = QueryParams::new().with("page", 3_i64).with("page_size", 6_i64);

    let posts = app.client.list_posts(&params.sanitized()).await?;
    let Listing::Paged(paged) = posts else {
        panic!("expected a paged envelope");
    };
    assert_eq!(paged.count, 13);
    assert_eq!(paged.results.len(), 1);
    assert!(paged.next.is_none());
    assert!(paged.previous.is_some());

    Ok(())
}

#[tokio::test]
async fn featured_posts_are_a_raw_list() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let featured = app
        .client
        .list(Resource::FeaturedPosts, &QueryParams::new().sanitized())
        .await?;
    let Collection::Posts(Listing::Raw(posts)) = featured else {
        panic!("expected a raw list of posts");
    };
    let ids: Vec<i64> = posts.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 4, 9]);
    assert!(posts.iter().all(|p| p.featured));

    Ok(())
}

#[tokio::test]
async fn empty_params_never_reach_the_backend() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let params = QueryParams::new()
        .with("category", 2_i64)
        .with("search", "")
        .with("season", None::<i64>);

    let posts = app.client.list_posts(&params.sanitized()).await?;
    assert_eq!(posts.items().len(), 4);
    assert!(
        posts
            .items()
            .iter()
            .all(|p| p.category.as_ref().is_some_and(|c| c.id.0 == 2))
    );

    let requests = app.requests();
    let last = requests.last().expect("request was recorded");
    assert_eq!(last.path, "/api/posts/");
    assert_eq!(last.query.get("category").map(String::as_str), Some("2"));
    assert!(!last.query.contains_key("search"));
    assert!(!last.query.contains_key("season"));

    Ok(())
}

#[tokio::test]
async fn lessons_filter_by_season() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let params = QueryParams::new().with("season", 2_i64);

    let lessons = app.client.list(Resource::Lessons, &params.sanitized()).await?;
    let lessons = lessons.lessons().expect("lessons collection");
    assert_eq!(lessons.len(), 4);
    assert!(
        lessons
            .iter()
            .all(|l| l.season.as_ref().is_some_and(|s| s.title == "Acts of the Apostles"))
    );

    Ok(())
}

#[tokio::test]
async fn upcoming_events_start_after_now_in_order() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let events = app
        .client
        .list_upcoming_events(&QueryParams::new().sanitized())
        .await?
        .into_items();
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Outreach Week Kickoff", "Youth Retreat", "Harvest Festival"]
    );
    assert!(events.iter().all(|e| e.starts_at > reference_time()));

    Ok(())
}

#[tokio::test]
async fn every_resource_name_resolves() -> anyhow::Result<()> {
    let app = spawn_app().await;

    for resource in Resource::ALL {
        let collection = app
            .client
            .list(resource, &QueryParams::new().sanitized())
            .await?;
        assert!(!collection.is_empty(), "{resource} returned nothing");
    }
    assert_eq!(app.requests().len(), Resource::ALL.len());

    Ok(())
}

#[tokio::test]
async fn oversized_page_is_a_bad_request() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let params = QueryParams::new()
        .with("page", usize::MAX.to_string())
        .with("page_size", 6_u32);
    let err = app.client.list_posts(&params.sanitized()).await.unwrap_err();
    assert!(matches!(err, ClientError::APIError(StatusCode::BAD_REQUEST, _)));

    Ok(())
}
