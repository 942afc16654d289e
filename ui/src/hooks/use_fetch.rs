use content::{
    CollectionQuery, FetchState, Fetcher, Query, SingleQuery,
};
use payloads::{APIClient, Collection, Item, QueryParams};
use yew::prelude::*;

use crate::get_api_client;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T> FetchHookReturn<T> {
    fn from_state(state: FetchState<T>, refetch: Callback<()>) -> Self {
        Self {
            data: state.data,
            is_loading: state.loading,
            error: state.error,
            refetch,
        }
    }

    /// Returns true if this is the initial load (no data, no error, loading)
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.data.is_none() && self.error.is_none()
    }

    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: `render_fn(data, is_loading, error)`, where `is_loading`
    ///   and `error` describe a reload that left the previous data in place.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                            <button
                                class="mt-2 text-sm underline text-red-700 dark:text-red-400"
                                onclick={self.refetch.reform(|_: MouseEvent| ())}
                            >
                                {"Try again"}
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Drive a [`Fetcher`] from a component.
///
/// The fetcher lives as long as the component. It reloads whenever the
/// query's key changes, and any request still in flight is detached on
/// unmount so its result is never applied.
#[hook]
pub fn use_query<Q>(query: Q) -> FetchHookReturn<Q::Output>
where
    Q: Query + 'static,
    Q::Output: 'static,
{
    let state = use_state(FetchState::<Q::Output>::default);

    let fetcher = {
        let state = state.clone();
        use_memo((), move |_| {
            let fetcher: Fetcher<APIClient, Q> = Fetcher::new(get_api_client());
            fetcher.subscribe(move |snapshot| state.set(snapshot.clone()));
            fetcher
        })
    };

    {
        let fetcher = fetcher.clone();
        use_effect_with(query.key(), move |_| {
            let loader = fetcher.clone();
            yew::platform::spawn_local(async move {
                loader.load(query).await;
            });
            move || fetcher.detach()
        });
    }

    let refetch = {
        let fetcher = fetcher.clone();
        use_callback((), move |_, _| {
            let fetcher = fetcher.clone();
            yew::platform::spawn_local(async move {
                fetcher.refetch().await;
            });
        })
    };

    FetchHookReturn::from_state((*state).clone(), refetch)
}

/// Fetch a named collection, e.g. `"posts"` or `"upcoming-events"`.
///
/// Parameters with empty values are dropped before the request is keyed, so
/// clearing a search box does not trigger a new request.
#[hook]
pub fn use_collection(
    resource: &str,
    params: QueryParams,
) -> FetchHookReturn<Collection> {
    use_query(CollectionQuery::new(resource, params))
}

/// Fetch one record by kind and id. Nothing is requested until `id` is set.
#[hook]
pub fn use_single(kind: &str, id: Option<String>) -> FetchHookReturn<Item> {
    use_query(SingleQuery::new(kind, id))
}

/// Project the loaded collection onto one of its typed variants.
pub fn items_of<T: Clone>(
    hook: &FetchHookReturn<Collection>,
    pick: impl Fn(&Collection) -> Option<&[T]>,
) -> Vec<T> {
    hook.data
        .as_ref()
        .and_then(pick)
        .map(<[T]>::to_vec)
        .unwrap_or_default()
}
