use content::ViewFilter;
use yew::prelude::*;

/// Search, selection and page of one listing page, with the callbacks the
/// filter bar and pagination controls emit into.
pub struct ListViewHandle {
    pub filter: ViewFilter,
    pub on_search: Callback<String>,
    pub on_select: Callback<String>,
    pub on_page: Callback<usize>,
    /// Step forward; carries the current total page count
    pub on_next: Callback<usize>,
    pub on_previous: Callback<()>,
}

#[hook]
pub fn use_list_view() -> ListViewHandle {
    let filter = use_state(ViewFilter::default);

    let on_search = {
        let filter = filter.clone();
        use_callback((*filter).clone(), move |term: String, current| {
            let mut next = current.clone();
            next.set_search(term);
            filter.set(next);
        })
    };

    let on_select = {
        let filter = filter.clone();
        use_callback((*filter).clone(), move |selected: String, current| {
            let mut next = current.clone();
            next.select(selected);
            filter.set(next);
        })
    };

    let on_page = {
        let filter = filter.clone();
        use_callback((*filter).clone(), move |page: usize, current| {
            let mut next = current.clone();
            next.set_page(page);
            filter.set(next);
        })
    };

    let on_next = {
        let filter = filter.clone();
        use_callback((*filter).clone(), move |total_pages: usize, current| {
            let mut next = current.clone();
            next.next_page(total_pages);
            filter.set(next);
        })
    };

    let on_previous = {
        let filter = filter.clone();
        use_callback((*filter).clone(), move |_: (), current| {
            let mut next = current.clone();
            next.previous_page();
            filter.set(next);
        })
    };

    ListViewHandle {
        filter: (*filter).clone(),
        on_search,
        on_select,
        on_page,
        on_next,
        on_previous,
    }
}
