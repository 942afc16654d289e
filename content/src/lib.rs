//! Data loading and list projection for the content site front-end.
//!
//! [`fetch`] resolves a named resource and its query parameters to a call on
//! a [`ContentSource`], tracking the loading / error / data state of the
//! latest request. [`listing`] turns a fetched collection into the page of
//! items a listing view shows.

pub mod fetch;
pub mod listing;
pub mod source;

pub use fetch::{CollectionQuery, FetchError, FetchState, Fetcher, Query, SingleQuery};
pub use listing::{GroupMatch, ListPage, ListPolicy, Listable, ViewFilter, project};
pub use source::ContentSource;
