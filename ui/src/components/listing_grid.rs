use content::ListPage;
use yew::prelude::*;

use super::PaginationControls;
use crate::hooks::ListViewHandle;

/// Featured row, card grid and pagination for one projected page.
///
/// `card` renders one item; its flag is true for promoted featured items.
pub fn listing_grid<T>(
    page: &ListPage<T>,
    card: impl Fn(&T, bool) -> Html,
    view: &ListViewHandle,
    is_loading: bool,
    error: Option<&String>,
) -> Html {
    let total_pages = page.total_pages;
    let empty_message = if view.filter.is_filtered() {
        "Nothing matches your search."
    } else {
        "Nothing here yet."
    };
    html! {
        <div>
            if is_loading {
                <p class="text-sm text-neutral-500 mb-2">{"Refreshing..."}</p>
            }
            if let Some(error) = error {
                <div class="p-3 mb-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            text-sm text-red-700 dark:text-red-400">
                    {error.clone()}
                </div>
            }
            if !page.featured.is_empty() {
                <section class="grid gap-4 mb-6">
                    {for page.featured.iter().map(|item| card(item, true))}
                </section>
            }
            if page.total_count == 0 {
                <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                    {empty_message}
                </p>
            } else {
                <section class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    {for page.items.iter().map(|item| card(item, false))}
                </section>
            }
            <PaginationControls
                current_page={page.current_page}
                total_pages={page.total_pages}
                total_count={page.total_count}
                on_page_change={view.on_page.clone()}
                on_previous={view.on_previous.clone()}
                on_next={view.on_next.reform(move |_: ()| total_pages)}
                {is_loading}
            />
        </div>
    }
}
