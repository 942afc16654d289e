use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod logs;
mod pages;
mod utils;

use pages::{
    EventsPage, ItemDetailPage, LessonsPage, MediaPage, NewsPage, NotFoundPage,
};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <Nav />
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/news/:id")]
    Post { id: String },
    #[at("/lessons")]
    Lessons,
    #[at("/lessons/:id")]
    Lesson { id: String },
    #[at("/events")]
    Events,
    #[at("/events/:id")]
    Event { id: String },
    #[at("/media")]
    Media,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <NewsPage /> },
        Route::Post { id } => html! { <ItemDetailPage kind="post" {id} /> },
        Route::Lessons => html! { <LessonsPage /> },
        Route::Lesson { id } => html! { <ItemDetailPage kind="lesson" {id} /> },
        Route::Events => html! { <EventsPage /> },
        Route::Event { id } => html! { <ItemDetailPage kind="event" {id} /> },
        Route::Media => html! { <MediaPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component]
fn Nav() -> Html {
    let current = use_route::<Route>();
    let link = |to: Route, label: &str| {
        let active = current.as_ref() == Some(&to);
        let classes = if active {
            "font-semibold underline"
        } else {
            "hover:underline"
        };
        html! {
            <Link<Route> {to} classes={classes!(classes)}>{label.to_string()}</Link<Route>>
        }
    };

    html! {
        <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex gap-6 \
                    border-b border-neutral-200 dark:border-neutral-700">
            {link(Route::Home, "News")}
            {link(Route::Lessons, "Lessons")}
            {link(Route::Events, "Events")}
            {link(Route::Media, "Media")}
        </nav>
    }
}
