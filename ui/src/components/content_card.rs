use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub summary: AttrValue,
    /// Small line above the title: category, season, date...
    #[prop_or_default]
    pub meta: Option<AttrValue>,
    #[prop_or_default]
    pub image_url: Option<AttrValue>,
    #[prop_or_default]
    pub link: Option<Route>,
    /// Featured cards span the full row
    #[prop_or(false)]
    pub featured: bool,
}

#[function_component]
pub fn ContentCard(props: &Props) -> Html {
    let class = if props.featured {
        "p-6 rounded-lg border-2 border-neutral-900 dark:border-neutral-100"
    } else {
        "p-4 rounded-lg border border-neutral-200 dark:border-neutral-700"
    };

    let title = match &props.link {
        Some(route) => html! {
            <Link<Route> to={route.clone()} classes="hover:underline">
                {props.title.clone()}
            </Link<Route>>
        },
        None => html! { {props.title.clone()} },
    };

    html! {
        <article {class}>
            if let Some(url) = &props.image_url {
                <img src={url.clone()} alt="" class="mb-3 rounded-md w-full" />
            }
            if let Some(meta) = &props.meta {
                <p class="text-xs uppercase tracking-wide text-neutral-500">
                    {meta.clone()}
                </p>
            }
            <h3 class="text-lg font-semibold text-neutral-900 dark:text-white">
                {title}
            </h3>
            <p class="mt-1 text-sm text-neutral-600 dark:text-neutral-300">
                {props.summary.clone()}
            </p>
        </article>
    }
}
