pub mod use_fetch;
pub mod use_list_view;
pub mod use_title;

pub use use_fetch::{items_of, use_collection, use_single};
pub use use_list_view::{ListViewHandle, use_list_view};
pub use use_title::use_title;
