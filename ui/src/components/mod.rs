pub mod content_card;
pub mod filter_bar;
pub mod listing_grid;
pub mod pagination_controls;

pub use content_card::ContentCard;
pub use filter_bar::{FilterBar, FilterOption};
pub use listing_grid::listing_grid;
pub use pagination_controls::PaginationControls;
