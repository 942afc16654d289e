//! Mock content for the fixture API
//!
//! This module provides the content served by the fixture API, used by:
//! - Development server (dev-server)
//! - Client integration tests
//!
//! The data is shaped like a real site: a handful of news categories, more
//! posts than fit on one page (some featured), two study seasons with their
//! lessons, past and upcoming events, and a few media items.

use jiff::{Span, Timestamp};
use payloads::{
    Category, CategoryId, CategoryRef, Event, EventId, Lesson, LessonId,
    Media, MediaId, MediaType, Post, PostId, Season, SeasonId, SeasonRef,
};

/// Time the fixture data is laid out around in tests.
pub const REFERENCE_TIME: &str = "2025-06-01T12:00:00Z";

const POST_TITLES: [&str; 13] = [
    "The Light of the World",
    "Spring Food Drive Results",
    "Welcoming Our New Youth Pastor",
    "Salt of the Earth",
    "Building Fund Update",
    "Choir Practice Moves to Thursdays",
    "Summer Camp Registration Opens",
    "Reflections on the Good Samaritan",
    "Volunteers Needed for Outreach Week",
    "A Letter from the Elders",
    "Bible Study Season Recap",
    "New Sermon Series Announced",
    "Thank You to Our Greeters",
];

const FEATURED_POSTS: [i64; 3] = [1, 4, 9];

pub struct Dataset {
    pub categories: Vec<Category>,
    pub posts: Vec<Post>,
    pub seasons: Vec<Season>,
    pub lessons: Vec<Lesson>,
    pub events: Vec<Event>,
    pub media: Vec<Media>,
    /// The fixture API's idea of "now", used for upcoming events.
    pub now: Timestamp,
}

impl Dataset {
    /// Lay out the dataset around `now`: posts and lessons are published in
    /// the past, events are split between past and upcoming.
    pub fn create(now: Timestamp) -> Self {
        let categories = vec![
            category(1, "News"),
            category(2, "Community"),
            category(3, "Outreach"),
        ];

        let posts = POST_TITLES
            .iter()
            .zip(1_i64..)
            .map(|(title, id)| {
                let category = &categories[(id as usize - 1) % categories.len()];
                Post {
                    id: PostId(id),
                    slug: slugify(title),
                    title: title.to_string(),
                    excerpt: format!("{title}: read the full story."),
                    content: Some(format!("Full text of \"{title}\".")),
                    category: Some(CategoryRef {
                        id: category.id,
                        name: category.name.clone(),
                    }),
                    image_url: None,
                    published_at: days_before(now, 30 - id),
                    featured: FEATURED_POSTS.contains(&id),
                }
            })
            .collect();

        let seasons = vec![
            Season {
                id: SeasonId(1),
                slug: "gospel-of-john".into(),
                title: "Gospel of John".into(),
                description: "Signs and discourses of the fourth gospel."
                    .into(),
                year: Some(2024),
                published_at: days_before(now, 300),
                featured: false,
            },
            Season {
                id: SeasonId(2),
                slug: "acts-of-the-apostles".into(),
                title: "Acts of the Apostles".into(),
                description: "The early church from Jerusalem to Rome.".into(),
                year: Some(2025),
                published_at: days_before(now, 120),
                featured: true,
            },
        ];

        let lessons = [
            (1, "In the Beginning Was the Word", "John 1:1-18"),
            (1, "Water into Wine", "John 2:1-11"),
            (1, "Born Again", "John 3:1-21"),
            (1, "The Bread of Life", "John 6:22-59"),
            (2, "Pentecost", "Acts 2:1-41"),
            (2, "Stephen's Witness", "Acts 6:8-7:60"),
            (2, "The Road to Damascus", "Acts 9:1-19"),
            (2, "Paul in Athens", "Acts 17:16-34"),
        ]
        .into_iter()
        .zip(1_i64..)
        .map(|((season_id, title, scripture), id)| {
            let season = &seasons[season_id - 1];
            let number = lessons_before(id, season_id);
            Lesson {
                id: LessonId(id),
                slug: slugify(title),
                title: title.to_string(),
                description: format!("Lesson {number} of {}.", season.title),
                season: Some(SeasonRef {
                    id: season.id,
                    title: season.title.clone(),
                }),
                lesson_number: Some(number),
                scripture: Some(scripture.to_string()),
                published_at: days_before(now, 100 - id),
                featured: number == 1,
            }
        })
        .collect();

        let events = [
            ("Easter Sunrise Service", 1, -40, false),
            ("Community Breakfast", 2, -3, false),
            ("Outreach Week Kickoff", 3, 2, true),
            ("Youth Retreat", 2, 9, false),
            ("Harvest Festival", 2, 60, true),
        ]
        .into_iter()
        .zip(1_i64..)
        .map(|((title, category_id, offset_days, featured), id)| {
            let category = &categories[category_id - 1];
            let starts_at = now + Span::new().hours(24 * offset_days);
            Event {
                id: EventId(id),
                slug: slugify(title),
                title: title.to_string(),
                description: format!("Join us for the {title}."),
                category: Some(CategoryRef {
                    id: category.id,
                    name: category.name.clone(),
                }),
                location: Some("Fellowship Hall".into()),
                starts_at,
                ends_at: Some(starts_at + Span::new().hours(2)),
                featured,
            }
        })
        .collect();

        let media = [
            ("Sunday Sermon: Living Water", MediaType::Video, true),
            ("Choir Anthem Recording", MediaType::Audio, false),
            ("Outreach Week Photos", MediaType::Image, false),
            ("Study Guide: Acts", MediaType::Document, false),
        ]
        .into_iter()
        .zip(1_i64..)
        .map(|((title, media_type, featured), id)| Media {
            id: MediaId(id),
            slug: slugify(title),
            title: title.to_string(),
            description: format!("{media_type} from the media library."),
            media_type,
            url: format!("https://media.example.org/{}", slugify(title)),
            published_at: days_before(now, 10 + id),
            featured,
        })
        .collect();

        Self {
            categories,
            posts,
            seasons,
            lessons,
            events,
            media,
            now,
        }
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available fixture content:");
        tracing::info!(
            "   📰 {} posts in {} categories ({} featured)",
            self.posts.len(),
            self.categories.len(),
            self.posts.iter().filter(|p| p.featured).count()
        );
        for season in &self.seasons {
            tracing::info!(
                "   📖 {} ({}): {} lessons",
                season.title,
                season.id,
                self.lessons
                    .iter()
                    .filter(|l| l.season.as_ref().is_some_and(|s| s.id == season.id))
                    .count()
            );
        }
        tracing::info!(
            "   📅 {} events, {} upcoming",
            self.events.len(),
            self.upcoming_events().len()
        );
        tracing::info!("   🎞️ {} media items", self.media.len());
    }

    /// Events that start after `now`, soonest first.
    pub fn upcoming_events(&self) -> Vec<&Event> {
        let mut upcoming: Vec<&Event> =
            self.events.iter().filter(|e| e.starts_at > self.now).collect();
        upcoming.sort_by_key(|e| e.starts_at);
        upcoming
    }
}

pub fn reference_time() -> Timestamp {
    REFERENCE_TIME.parse().expect("valid reference timestamp")
}

fn category(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId(id),
        name: name.to_string(),
        slug: slugify(name),
    }
}

fn days_before(now: Timestamp, days: i64) -> Timestamp {
    now - Span::new().hours(24 * days)
}

/// 1-based position of lesson `id` within its season.
fn lessons_before(id: i64, season_id: usize) -> u32 {
    // four lessons per season in the fixture data
    (id - 4 * (season_id as i64 - 1)) as u32
}

pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
