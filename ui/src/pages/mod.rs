pub mod events;
pub mod item_detail;
pub mod lessons;
pub mod media;
pub mod news;
pub mod not_found;

pub use events::EventsPage;
pub use item_detail::ItemDetailPage;
pub use lessons::LessonsPage;
pub use media::MediaPage;
pub use news::NewsPage;
pub use not_found::NotFoundPage;

/// Listing pages filter client side, so they ask for everything at once.
const FETCH_ALL: u32 = 100;
