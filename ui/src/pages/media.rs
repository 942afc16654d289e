use content::{ListPolicy, project};
use payloads::{Media, MediaType, QueryParams};
use yew::prelude::*;

use crate::components::{ContentCard, FilterBar, FilterOption, listing_grid};
use crate::hooks::{use_collection, use_list_view, use_title};
use crate::utils::time::format_date;

use super::FETCH_ALL;

const MEDIA_TYPES: [MediaType; 4] = [
    MediaType::Video,
    MediaType::Audio,
    MediaType::Image,
    MediaType::Document,
];

#[function_component]
pub fn MediaPage() -> Html {
    use_title("Media");
    let view = use_list_view();
    let media_hook =
        use_collection("media", QueryParams::new().with("page_size", FETCH_ALL));

    let options: Vec<FilterOption> = MEDIA_TYPES
        .iter()
        .map(|media_type| FilterOption {
            value: media_type.to_string(),
            label: media_type.to_string(),
        })
        .collect();
    let policy = ListPolicy::default();

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-3xl font-bold mb-6">{"Media"}</h1>
            <FilterBar
                search_term={view.filter.search_term.clone()}
                selected={view.filter.selected.clone()}
                all_label="All media"
                {options}
                on_search={view.on_search.clone()}
                on_select={view.on_select.clone()}
            />
            {media_hook.render("media", |collection, is_loading, error| {
                let media = collection.media().unwrap_or_default();
                let page = project(media, &view.filter, &policy);
                listing_grid(&page, media_card, &view, is_loading, error)
            })}
        </main>
    }
}

fn media_card(media: &Media, featured: bool) -> Html {
    html! {
        <a key={media.id.0} href={media.url.clone()} target="_blank" rel="noopener">
            <ContentCard
                title={media.title.clone()}
                summary={media.description.clone()}
                meta={Some(AttrValue::from(format!(
                    "{} · {}",
                    media.media_type,
                    format_date(media.published_at)
                )))}
                {featured}
            />
        </a>
    }
}
