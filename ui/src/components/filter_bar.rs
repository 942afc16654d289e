use content::listing::ALL;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// One entry of the category/season dropdown.
#[derive(Clone, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub search_term: String,
    pub selected: String,
    /// Label of the catch-all entry, e.g. "All categories"
    pub all_label: AttrValue,
    pub options: Vec<FilterOption>,
    pub on_search: Callback<String>,
    pub on_select: Callback<String>,
}

#[function_component]
pub fn FilterBar(props: &Props) -> Html {
    let on_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    let on_change = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(select.value());
        })
    };

    html! {
        <div class="flex flex-col sm:flex-row gap-3 mb-6">
            <input
                type="search"
                placeholder="Search..."
                value={props.search_term.clone()}
                oninput={on_input}
                class="flex-1 px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-800"
            />
            <select
                onchange={on_change}
                class="px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-800"
            >
                <option value={ALL} selected={props.selected == ALL}>
                    {props.all_label.clone()}
                </option>
                {for props.options.iter().map(|option| html! {
                    <option
                        key={option.value.clone()}
                        value={option.value.clone()}
                        selected={props.selected == option.value}
                    >
                        {option.label.clone()}
                    </option>
                })}
            </select>
        </div>
    }
}
