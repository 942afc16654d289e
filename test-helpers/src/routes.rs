//! HTTP routes of the fixture content API.
//!
//! Collections honour a small subset of the real backend's query parameters
//! (`search`, `category`, `season`, `media_type`, `page`, `page_size`) so that
//! client tests can observe parameters arriving.

use actix_web::{
    HttpRequest, HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, http::StatusCode, web,
};
use payloads::{Listing, Paged};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::FixtureState;

type Query = web::Query<BTreeMap<String, String>>;

const DEFAULT_PAGE_SIZE: usize = 100;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        // fixed paths must be registered before the `{id}` routes
        .service(featured_posts)
        .service(list_posts)
        .service(get_post)
        .service(list_seasons)
        .service(get_season)
        .service(list_lessons)
        .service(get_lesson)
        .service(upcoming_events)
        .service(featured_events)
        .service(list_events)
        .service(get_event)
        .service(list_media)
        .service(get_media)
        .service(list_categories)
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// Injected failure; the message is returned as the body verbatim.
    #[error("{0}")]
    Unavailable(String),
}

impl ResponseError for FixtureError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

/// Record the request and fail it if a failure has been injected.
fn admit(
    state: &FixtureState,
    req: &HttpRequest,
    query: &BTreeMap<String, String>,
) -> Result<(), FixtureError> {
    state.record(req.path(), query.clone());
    match state.injected_failure() {
        Some(message) => Err(FixtureError::Unavailable(message)),
        None => Ok(()),
    }
}

fn matches_search(query: &BTreeMap<String, String>, fields: &[&String]) -> bool {
    query.get("search").is_none_or(|term| {
        let term = term.to_lowercase();
        fields.iter().any(|f| f.to_lowercase().contains(&term))
    })
}

fn matches_id(
    query: &BTreeMap<String, String>,
    key: &str,
    id: Option<String>,
) -> bool {
    query.get(key).is_none_or(|wanted| id.as_ref() == Some(wanted))
}

/// Wrap already-filtered items in a paged envelope.
fn paginate<T: Clone + Serialize>(
    req: &HttpRequest,
    query: &BTreeMap<String, String>,
    items: Vec<&T>,
) -> Result<Listing<T>, FixtureError> {
    let parse = |key: &str, default: usize| -> Result<usize, FixtureError> {
        query.get(key).map_or(Ok(default), |v| {
            v.parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| FixtureError::BadRequest(format!("{key}={v}")))
        })
    };
    let page = parse("page", 1)?;
    let page_size = parse("page_size", DEFAULT_PAGE_SIZE)?;
    let end = page.checked_mul(page_size).ok_or_else(|| {
        FixtureError::BadRequest(format!("page={page}&page_size={page_size}"))
    })?;

    let count = items.len();
    let results: Vec<T> = items
        .into_iter()
        .skip(end - page_size)
        .take(page_size)
        .cloned()
        .collect();
    let link = |p: usize| format!("{}?page={p}&page_size={page_size}", req.path());
    Ok(Listing::Paged(Paged {
        count,
        next: (end < count).then(|| link(page + 1)),
        previous: (page > 1).then(|| link(page - 1)),
        results,
    }))
}

fn find<'a, T>(
    items: &'a [T],
    id: &str,
    key: impl Fn(&T) -> (String, &str),
    what: &str,
) -> Result<&'a T, FixtureError> {
    items
        .iter()
        .find(|item| {
            let (item_id, slug) = key(*item);
            item_id == id || slug == id
        })
        .ok_or_else(|| FixtureError::NotFound(format!("{what} {id}")))
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[get("/posts/")]
pub async fn list_posts(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    query: Query,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &query)?;
    let posts = state
        .dataset
        .posts
        .iter()
        .filter(|p| matches_search(&query, &[&p.title, &p.excerpt]))
        .filter(|p| {
            matches_id(&query, "category", p.category.as_ref().map(|c| c.id.to_string()))
        })
        .collect();
    Ok(HttpResponse::Ok().json(paginate(&req, &query, posts)?))
}

#[get("/posts/featured/")]
pub async fn featured_posts(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    query: Query,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &query)?;
    let posts: Vec<_> =
        state.dataset.posts.iter().filter(|p| p.featured).collect();
    Ok(HttpResponse::Ok().json(posts))
}

#[get("/posts/{id}/")]
pub async fn get_post(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    id: web::Path<String>,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &BTreeMap::new())?;
    let post = find(
        &state.dataset.posts,
        &id,
        |p| (p.id.to_string(), p.slug.as_str()),
        "post",
    )?;
    Ok(HttpResponse::Ok().json(post))
}

#[get("/seasons/")]
pub async fn list_seasons(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    query: Query,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &query)?;
    let seasons: Vec<_> = state
        .dataset
        .seasons
        .iter()
        .filter(|s| matches_search(&query, &[&s.title, &s.description]))
        .collect();
    Ok(HttpResponse::Ok().json(seasons))
}

#[get("/seasons/{id}/")]
pub async fn get_season(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    id: web::Path<String>,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &BTreeMap::new())?;
    let season = find(
        &state.dataset.seasons,
        &id,
        |s| (s.id.to_string(), s.slug.as_str()),
        "season",
    )?;
    Ok(HttpResponse::Ok().json(season))
}

#[get("/lessons/")]
pub async fn list_lessons(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    query: Query,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &query)?;
    let lessons = state
        .dataset
        .lessons
        .iter()
        .filter(|l| matches_search(&query, &[&l.title, &l.description]))
        .filter(|l| {
            matches_id(&query, "season", l.season.as_ref().map(|s| s.id.to_string()))
        })
        .collect();
    Ok(HttpResponse::Ok().json(paginate(&req, &query, lessons)?))
}

#[get("/lessons/{id}/")]
pub async fn get_lesson(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    id: web::Path<String>,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &BTreeMap::new())?;
    let lesson = find(
        &state.dataset.lessons,
        &id,
        |l| (l.id.to_string(), l.slug.as_str()),
        "lesson",
    )?;
    Ok(HttpResponse::Ok().json(lesson))
}

#[get("/events/")]
pub async fn list_events(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    query: Query,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &query)?;
    let events = state
        .dataset
        .events
        .iter()
        .filter(|e| matches_search(&query, &[&e.title, &e.description]))
        .filter(|e| {
            matches_id(&query, "category", e.category.as_ref().map(|c| c.id.to_string()))
        })
        .collect();
    Ok(HttpResponse::Ok().json(paginate(&req, &query, events)?))
}

#[get("/events/upcoming/")]
pub async fn upcoming_events(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    query: Query,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &query)?;
    Ok(HttpResponse::Ok().json(state.dataset.upcoming_events()))
}

#[get("/events/featured/")]
pub async fn featured_events(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    query: Query,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &query)?;
    let events: Vec<_> =
        state.dataset.events.iter().filter(|e| e.featured).collect();
    Ok(HttpResponse::Ok().json(events))
}

#[get("/events/{id}/")]
pub async fn get_event(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    id: web::Path<String>,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &BTreeMap::new())?;
    let event = find(
        &state.dataset.events,
        &id,
        |e| (e.id.to_string(), e.slug.as_str()),
        "event",
    )?;
    Ok(HttpResponse::Ok().json(event))
}

#[get("/media/")]
pub async fn list_media(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    query: Query,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &query)?;
    let media = state
        .dataset
        .media
        .iter()
        .filter(|m| matches_search(&query, &[&m.title, &m.description]))
        .filter(|m| matches_id(&query, "media_type", Some(m.media_type.to_string())))
        .collect();
    Ok(HttpResponse::Ok().json(paginate(&req, &query, media)?))
}

#[get("/media/{id}/")]
pub async fn get_media(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    id: web::Path<String>,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &BTreeMap::new())?;
    let media = find(
        &state.dataset.media,
        &id,
        |m| (m.id.to_string(), m.slug.as_str()),
        "media",
    )?;
    Ok(HttpResponse::Ok().json(media))
}

#[get("/categories/")]
pub async fn list_categories(
    state: web::Data<FixtureState>,
    req: HttpRequest,
    query: Query,
) -> Result<HttpResponse, FixtureError> {
    admit(&state, &req, &query)?;
    Ok(HttpResponse::Ok().json(&state.dataset.categories))
}
