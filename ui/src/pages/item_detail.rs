use payloads::Item;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{use_single, use_title};
use crate::utils::time::{format_date, format_starts_at};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Record kind: "post", "lesson", "event", "season" or "media"
    pub kind: AttrValue,
    /// Id or slug; nothing is fetched while empty
    pub id: String,
}

#[function_component]
pub fn ItemDetailPage(props: &Props) -> Html {
    let item_hook = use_single(&props.kind, Some(props.id.clone()));
    let title = item_hook
        .data
        .as_ref()
        .map(|item| item.title().to_string())
        .unwrap_or_else(|| "Loading".into());
    use_title(&title);

    html! {
        <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            {item_hook.render(&props.kind, |item, _, error| html! {
                <article>
                    if let Some(error) = error {
                        <p class="mb-4 text-sm text-red-700 dark:text-red-400">
                            {error.clone()}
                        </p>
                    }
                    <h1 class="text-3xl font-bold mb-2">{item.title()}</h1>
                    {item_body(item)}
                </article>
            })}
        </main>
    }
}

fn item_body(item: &Item) -> Html {
    match item {
        Item::Post(post) => html! {
            <>
                <p class="text-sm text-neutral-500 mb-6">
                    {format_date(post.published_at)}
                    if let Some(category) = &post.category {
                        {format!(" · {}", category.name)}
                    }
                </p>
                if let Some(url) = &post.image_url {
                    <img src={url.clone()} alt="" class="mb-6 rounded-md w-full" />
                }
                <div class="prose dark:prose-invert">
                    {post.content.clone().unwrap_or_else(|| post.excerpt.clone())}
                </div>
                <Link<Route> to={Route::Home} classes="mt-8 inline-block underline">
                    {"Back to news"}
                </Link<Route>>
            </>
        },
        Item::Lesson(lesson) => html! {
            <>
                <p class="text-sm text-neutral-500 mb-6">
                    if let Some(season) = &lesson.season {
                        {season.title.clone()}
                    }
                    if let Some(number) = lesson.lesson_number {
                        {format!(" · Lesson {number}")}
                    }
                </p>
                if let Some(scripture) = &lesson.scripture {
                    <p class="italic mb-4">{scripture.clone()}</p>
                }
                <p>{lesson.description.clone()}</p>
                <Link<Route> to={Route::Lessons} classes="mt-8 inline-block underline">
                    {"All lessons"}
                </Link<Route>>
            </>
        },
        Item::Event(event) => html! {
            <>
                <p class="text-sm text-neutral-500 mb-6">
                    {format_starts_at(event.starts_at)}
                    if let Some(location) = &event.location {
                        {format!(" · {location}")}
                    }
                </p>
                <p>{event.description.clone()}</p>
                <Link<Route> to={Route::Events} classes="mt-8 inline-block underline">
                    {"All events"}
                </Link<Route>>
            </>
        },
        Item::Season(season) => html! {
            <>
                if let Some(year) = season.year {
                    <p class="text-sm text-neutral-500 mb-6">{year.to_string()}</p>
                }
                <p>{season.description.clone()}</p>
            </>
        },
        Item::Media(media) => html! {
            <>
                <p class="text-sm text-neutral-500 mb-6">
                    {media.media_type.to_string()}
                </p>
                <p>{media.description.clone()}</p>
                <a href={media.url.clone()} class="mt-4 inline-block underline">
                    {"Open"}
                </a>
            </>
        },
    }
}
