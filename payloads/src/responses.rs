use crate::{Category, Event, Lesson, Media, Post, Season};
use serde::{Deserialize, Serialize};

/// The paged envelope returned by list endpoints that paginate server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A list response: endpoints return either a bare array or a [`Paged`]
/// envelope, depending on the resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Paged<T>),
    Raw(Vec<T>),
}

impl<T> Listing<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Paged(paged) => &paged.results,
            Self::Raw(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paged(paged) => paged.results,
            Self::Raw(items) => items,
        }
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::Raw(Vec::new())
    }
}

/// Result of a collection fetch, tagged by the kind of record it holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    Posts(Listing<Post>),
    Seasons(Listing<Season>),
    Lessons(Listing<Lesson>),
    Events(Listing<Event>),
    Media(Listing<Media>),
    Categories(Listing<Category>),
}

impl Collection {
    pub fn len(&self) -> usize {
        match self {
            Self::Posts(l) => l.items().len(),
            Self::Seasons(l) => l.items().len(),
            Self::Lessons(l) => l.items().len(),
            Self::Events(l) => l.items().len(),
            Self::Media(l) => l.items().len(),
            Self::Categories(l) => l.items().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn posts(&self) -> Option<&[Post]> {
        match self {
            Self::Posts(l) => Some(l.items()),
            _ => None,
        }
    }

    pub fn seasons(&self) -> Option<&[Season]> {
        match self {
            Self::Seasons(l) => Some(l.items()),
            _ => None,
        }
    }

    pub fn lessons(&self) -> Option<&[Lesson]> {
        match self {
            Self::Lessons(l) => Some(l.items()),
            _ => None,
        }
    }

    pub fn events(&self) -> Option<&[Event]> {
        match self {
            Self::Events(l) => Some(l.items()),
            _ => None,
        }
    }

    pub fn media(&self) -> Option<&[Media]> {
        match self {
            Self::Media(l) => Some(l.items()),
            _ => None,
        }
    }

    pub fn categories(&self) -> Option<&[Category]> {
        match self {
            Self::Categories(l) => Some(l.items()),
            _ => None,
        }
    }
}

/// Result of a single-record fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Post(Post),
    Lesson(Lesson),
    Event(Event),
    Season(Season),
    Media(Media),
}

impl Item {
    pub fn title(&self) -> &str {
        match self {
            Self::Post(p) => &p.title,
            Self::Lesson(l) => &l.title,
            Self::Event(e) => &e.title,
            Self::Season(s) => &s.title,
            Self::Media(m) => &m.title,
        }
    }
}
