pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use requests::{ParamValue, QueryParams, SanitizedParams};
pub use responses::{Collection, Item, Listing, Paged};

use derive_more::Display;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
pub struct PostId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct CategoryId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct SeasonId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct LessonId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct EventId(pub i64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct MediaId(pub i64);

/// A category as listed by the `categories` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// Compact category reference embedded in posts and events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: String,
}

/// Compact season reference embedded in lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRef {
    pub id: SeasonId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Full body, only present on single-post responses.
    #[serde(default)]
    pub content: Option<String>,
    pub category: Option<CategoryRef>,
    pub image_url: Option<String>,
    pub published_at: Timestamp,
    #[serde(default)]
    pub featured: bool,
}

/// A Bible study season, grouping a series of lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub year: Option<i32>,
    pub published_at: Timestamp,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub season: Option<SeasonRef>,
    /// Position within the season, starting at 1.
    pub lesson_number: Option<u32>,
    pub scripture: Option<String>,
    pub published_at: Timestamp,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: Option<CategoryRef>,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    #[display("video")]
    Video,
    #[display("audio")]
    Audio,
    #[display("image")]
    Image,
    #[display("document")]
    Document,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: MediaId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub media_type: MediaType,
    pub url: String,
    pub published_at: Timestamp,
    #[serde(default)]
    pub featured: bool,
}

/// The collection endpoints a page can ask for by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Resource {
    #[display("posts")]
    Posts,
    #[display("featured-posts")]
    FeaturedPosts,
    #[display("seasons")]
    Seasons,
    #[display("lessons")]
    Lessons,
    #[display("events")]
    Events,
    #[display("upcoming-events")]
    UpcomingEvents,
    #[display("featured-events")]
    FeaturedEvents,
    #[display("media")]
    Media,
    #[display("categories")]
    Categories,
}

impl Resource {
    pub const ALL: [Resource; 9] = [
        Resource::Posts,
        Resource::FeaturedPosts,
        Resource::Seasons,
        Resource::Lessons,
        Resource::Events,
        Resource::UpcomingEvents,
        Resource::FeaturedEvents,
        Resource::Media,
        Resource::Categories,
    ];

    /// Path of the endpoint below `/api/`.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Posts => "posts/",
            Self::FeaturedPosts => "posts/featured/",
            Self::Seasons => "seasons/",
            Self::Lessons => "lessons/",
            Self::Events => "events/",
            Self::UpcomingEvents => "events/upcoming/",
            Self::FeaturedEvents => "events/featured/",
            Self::Media => "media/",
            Self::Categories => "categories/",
        }
    }
}

impl FromStr for Resource {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|resource| resource.to_string() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// The kinds of record that can be fetched one at a time by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ResourceKind {
    #[display("post")]
    Post,
    #[display("lesson")]
    Lesson,
    #[display("event")]
    Event,
    #[display("season")]
    Season,
    #[display("media")]
    Media,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Post,
        ResourceKind::Lesson,
        ResourceKind::Event,
        ResourceKind::Season,
        ResourceKind::Media,
    ];

    /// Path of one record below `/api/`. The id is percent-encoded so it
    /// always stays a single path segment.
    pub fn path(&self, id: &str) -> String {
        let base = match self {
            Self::Post => "posts",
            Self::Lesson => "lessons",
            Self::Event => "events",
            Self::Season => "seasons",
            Self::Media => "media",
        };
        format!("{base}/{}/", urlencoding::encode(id))
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// A resource name or kind outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown endpoint: {0}")]
pub struct UnknownName(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_names_round_trip_through_display() {
        for resource in Resource::ALL {
            assert_eq!(resource.to_string().parse::<Resource>(), Ok(resource));
        }
        for kind in ResourceKind::ALL {
            assert_eq!(kind.to_string().parse::<ResourceKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "sermons".parse::<Resource>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown endpoint: sermons");
        assert!("posts".parse::<ResourceKind>().is_err());
        assert!("".parse::<Resource>().is_err());
    }

    #[test]
    fn single_paths_include_the_id() {
        assert_eq!(ResourceKind::Lesson.path("12"), "lessons/12/");
        assert_eq!(
            ResourceKind::Post.path("../lessons/pentecost"),
            "posts/..%2Flessons%2Fpentecost/"
        );
        assert_eq!(ResourceKind::Event.path("a?b#c"), "events/a%3Fb%23c/");
        assert_eq!(Resource::UpcomingEvents.path(), "events/upcoming/");
    }
}
