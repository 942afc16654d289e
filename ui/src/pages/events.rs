use content::{ListPolicy, project};
use payloads::{Collection, Event, QueryParams};
use yew::prelude::*;

use crate::Route;
use crate::components::{ContentCard, FilterBar, FilterOption, listing_grid};
use crate::hooks::{items_of, use_collection, use_list_view, use_title};
use crate::utils::time::format_starts_at;

#[function_component]
pub fn EventsPage() -> Html {
    use_title("Events");
    let view = use_list_view();
    let events_hook = use_collection("upcoming-events", QueryParams::new());
    let categories_hook = use_collection("categories", QueryParams::new());

    let options: Vec<FilterOption> =
        items_of(&categories_hook, Collection::categories)
            .into_iter()
            .map(|category| FilterOption {
                value: category.id.to_string(),
                label: category.name,
            })
            .collect();
    let policy = ListPolicy::default();

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-3xl font-bold mb-6">{"Upcoming Events"}</h1>
            <FilterBar
                search_term={view.filter.search_term.clone()}
                selected={view.filter.selected.clone()}
                all_label="All categories"
                {options}
                on_search={view.on_search.clone()}
                on_select={view.on_select.clone()}
            />
            {events_hook.render("events", |collection, is_loading, error| {
                let events = collection.events().unwrap_or_default();
                let page = project(events, &view.filter, &policy);
                listing_grid(&page, event_card, &view, is_loading, error)
            })}
        </main>
    }
}

fn event_card(event: &Event, featured: bool) -> Html {
    let mut meta = format_starts_at(event.starts_at);
    if let Some(location) = &event.location {
        meta = format!("{meta} · {location}");
    }
    html! {
        <ContentCard
            key={event.id.0}
            title={event.title.clone()}
            summary={event.description.clone()}
            meta={Some(AttrValue::from(meta))}
            link={Route::Event { id: event.slug.clone() }}
            {featured}
        />
    }
}
