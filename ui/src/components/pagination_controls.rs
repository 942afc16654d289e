use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Current page (1-indexed)
    pub current_page: usize,
    pub total_pages: usize,
    /// Number of items matching the current filters
    pub total_count: usize,
    /// Callback with a page picked directly
    pub on_page_change: Callback<usize>,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    /// Whether currently loading (to disable buttons)
    #[prop_or(false)]
    pub is_loading: bool,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props {
        current_page,
        total_pages,
        total_count,
        is_loading,
        ..
    } = *props;

    // A single page needs no controls
    if total_pages <= 1 {
        return html! {};
    }

    let on_previous = props.on_previous.reform(|_: MouseEvent| ());
    let on_next = props.on_next.reform(|_: MouseEvent| ());

    let prev_disabled = current_page <= 1 || is_loading;
    let next_disabled = current_page >= total_pages || is_loading;

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    let page_buttons = (1..=total_pages).map(|page| {
        let on_page_change = props.on_page_change.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            on_page_change.emit(page);
        });
        let class = if page == current_page {
            "px-3 py-2 rounded-md text-sm font-semibold \
             bg-neutral-900 text-white dark:bg-neutral-100 \
             dark:text-neutral-900"
        } else {
            "px-3 py-2 rounded-md text-sm text-neutral-700 \
             dark:text-neutral-300 hover:bg-neutral-100 \
             dark:hover:bg-neutral-700"
        };
        html! {
            <button key={page} {onclick} {class} disabled={is_loading}>
                {page}
            </button>
        }
    });

    html! {
        <div class="flex items-center justify-between mt-4 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <button
                onclick={on_previous}
                disabled={prev_disabled}
                class={button_class(prev_disabled)}
            >
                {"Previous"}
            </button>

            <div class="flex items-center gap-1">
                {for page_buttons}
                <span class="ml-3 text-sm text-neutral-600 dark:text-neutral-400">
                    {format!("{} results", total_count)}
                </span>
            </div>

            <button
                onclick={on_next}
                disabled={next_disabled}
                class={button_class(next_disabled)}
            >
                {"Next"}
            </button>
        </div>
    }
}
