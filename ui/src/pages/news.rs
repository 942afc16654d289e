use content::{ListPolicy, listing::DEFAULT_FEATURED_SLOTS, project};
use payloads::{Collection, Post, QueryParams};
use yew::prelude::*;

use crate::Route;
use crate::components::{ContentCard, FilterBar, FilterOption, listing_grid};
use crate::hooks::{items_of, use_collection, use_list_view, use_title};
use crate::utils::time::format_date;

use super::FETCH_ALL;

#[function_component]
pub fn NewsPage() -> Html {
    use_title("News");
    let view = use_list_view();
    let posts_hook =
        use_collection("posts", QueryParams::new().with("page_size", FETCH_ALL));
    let categories_hook = use_collection("categories", QueryParams::new());

    let options: Vec<FilterOption> =
        items_of(&categories_hook, Collection::categories)
            .into_iter()
            .map(|category| FilterOption {
                value: category.id.to_string(),
                label: category.name,
            })
            .collect();
    let policy = ListPolicy::default().promote_featured(DEFAULT_FEATURED_SLOTS);

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-3xl font-bold mb-6">{"News"}</h1>
            <FilterBar
                search_term={view.filter.search_term.clone()}
                selected={view.filter.selected.clone()}
                all_label="All categories"
                {options}
                on_search={view.on_search.clone()}
                on_select={view.on_select.clone()}
            />
            {posts_hook.render("news", |collection, is_loading, error| {
                let posts = collection.posts().unwrap_or_default();
                let page = project(posts, &view.filter, &policy);
                listing_grid(&page, post_card, &view, is_loading, error)
            })}
        </main>
    }
}

fn post_card(post: &Post, featured: bool) -> Html {
    let meta = match &post.category {
        Some(category) => {
            format!("{} · {}", category.name, format_date(post.published_at))
        }
        None => format_date(post.published_at),
    };
    html! {
        <ContentCard
            key={post.id.0}
            title={post.title.clone()}
            summary={post.excerpt.clone()}
            meta={Some(AttrValue::from(meta))}
            image_url={post.image_url.clone().map(AttrValue::from)}
            link={Route::Post { id: post.slug.clone() }}
            {featured}
        />
    }
}
