//! Client-side search, filtering and pagination over a fetched collection.
//!
//! Every listing page projects the same way: text search over a fixed set of
//! fields, an optional category or season filter, then a page of results
//! with the first few featured items promoted on page 1. The only thing that
//! varies per page is the [`ListPolicy`].

use payloads::{Event, Lesson, Media, Post, Season};

/// Selection value that disables the group filter.
pub const ALL: &str = "all";

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Featured items promoted ahead of the grid on page 1.
pub const DEFAULT_FEATURED_SLOTS: usize = 2;

/// A record that can be shown in a listing view.
pub trait Listable {
    /// Fields searched by the free-text filter.
    fn search_fields(&self) -> Vec<&str>;

    /// Identifier of the category or season the item belongs to.
    fn group_id(&self) -> Option<String>;

    /// Display name of the category or season the item belongs to.
    fn group_name(&self) -> Option<&str>;

    fn is_featured(&self) -> bool;
}

/// How the selected category/season is compared against an item's group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMatch {
    /// The item's group id equals the selection.
    #[default]
    ExactId,
    /// The item's group name contains the selection, ignoring case.
    NameContains,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPolicy {
    pub page_size: usize,
    pub group_match: GroupMatch,
    pub featured_slots: usize,
}

impl Default for ListPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListPolicy {
    /// A policy with exact id matching and no featured promotion.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            group_match: GroupMatch::ExactId,
            featured_slots: 0,
        }
    }

    pub fn match_groups_by(mut self, group_match: GroupMatch) -> Self {
        self.group_match = group_match;
        self
    }

    pub fn promote_featured(mut self, slots: usize) -> Self {
        self.featured_slots = slots;
        self
    }
}

/// What the reader has typed, picked and paged to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFilter {
    pub search_term: String,
    pub selected: String,
    pub current_page: usize,
}

impl Default for ViewFilter {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected: ALL.to_string(),
            current_page: 1,
        }
    }
}

impl ViewFilter {
    /// Change the search term. The view returns to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Change the category/season selection. The view returns to page 1.
    pub fn select(&mut self, selected: impl Into<String>) {
        self.selected = selected.into();
        self.current_page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.current_page = (self.current_page + 1).min(total_pages.max(1));
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn is_filtered(&self) -> bool {
        !self.search_term.trim().is_empty() || self.selected != ALL
    }
}

/// One page of a projected listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    /// Promoted featured items; only ever populated on page 1.
    pub featured: Vec<T>,
    pub items: Vec<T>,
    pub total_pages: usize,
    /// The requested page, clamped into `1..=total_pages`.
    pub current_page: usize,
    /// Number of items left after filtering.
    pub total_count: usize,
}

pub fn matches_search<T: Listable>(item: &T, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    needle.is_empty()
        || item
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_group<T: Listable>(
    item: &T,
    selected: &str,
    group_match: GroupMatch,
) -> bool {
    if selected == ALL {
        return true;
    }
    match group_match {
        GroupMatch::ExactId => item.group_id().as_deref() == Some(selected),
        GroupMatch::NameContains => item
            .group_name()
            .is_some_and(|name| {
                name.to_lowercase().contains(&selected.to_lowercase())
            }),
    }
}

/// Filter, paginate and split out featured items. `items` is left untouched.
pub fn project<T: Listable + Clone>(
    items: &[T],
    filter: &ViewFilter,
    policy: &ListPolicy,
) -> ListPage<T> {
    let page_size = policy.page_size.max(1);
    let filtered: Vec<&T> = items
        .iter()
        .filter(|item| {
            matches_search(*item, &filter.search_term)
                && matches_group(*item, &filter.selected, policy.group_match)
        })
        .collect();

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let current_page = filter.current_page.clamp(1, total_pages);

    let page = filtered
        .iter()
        .skip((current_page - 1) * page_size)
        .take(page_size)
        .copied();

    let featured: Vec<&T> = if current_page == 1 {
        filtered
            .iter()
            .filter(|item| item.is_featured())
            .take(policy.featured_slots)
            .copied()
            .collect()
    } else {
        Vec::new()
    };

    let items = page
        .filter(|item| !featured.iter().any(|f| std::ptr::eq(*f, *item)))
        .cloned()
        .collect();

    ListPage {
        featured: featured.into_iter().cloned().collect(),
        items,
        total_pages,
        current_page,
        total_count,
    }
}

impl Listable for Post {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str()]
    }

    fn group_id(&self) -> Option<String> {
        self.category.as_ref().map(|c| c.id.to_string())
    }

    fn group_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Listable for Lesson {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.scripture.as_deref());
        fields
    }

    fn group_id(&self) -> Option<String> {
        self.season.as_ref().map(|s| s.id.to_string())
    }

    fn group_name(&self) -> Option<&str> {
        self.season.as_ref().map(|s| s.title.as_str())
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Listable for Season {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn group_id(&self) -> Option<String> {
        self.year.map(|year| year.to_string())
    }

    fn group_name(&self) -> Option<&str> {
        None
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Listable for Event {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.location.as_deref());
        fields
    }

    fn group_id(&self) -> Option<String> {
        self.category.as_ref().map(|c| c.id.to_string())
    }

    fn group_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Listable for Media {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn group_id(&self) -> Option<String> {
        Some(self.media_type.to_string())
    }

    fn group_name(&self) -> Option<&str> {
        None
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}
