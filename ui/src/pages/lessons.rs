use content::{GroupMatch, ListPolicy, project};
use payloads::{Collection, Lesson, QueryParams};
use yew::prelude::*;

use crate::Route;
use crate::components::{ContentCard, FilterBar, FilterOption, listing_grid};
use crate::hooks::{items_of, use_collection, use_list_view, use_title};

use super::FETCH_ALL;

/// Lessons filtered by season. Seasons are matched by title, so the
/// dropdown values are season titles rather than ids.
#[function_component]
pub fn LessonsPage() -> Html {
    use_title("Lessons");
    let view = use_list_view();
    let lessons_hook = use_collection(
        "lessons",
        QueryParams::new().with("page_size", FETCH_ALL),
    );
    let seasons_hook = use_collection("seasons", QueryParams::new());

    let options: Vec<FilterOption> = items_of(&seasons_hook, Collection::seasons)
        .into_iter()
        .map(|season| FilterOption {
            value: season.title.clone(),
            label: season.title,
        })
        .collect();
    let policy = ListPolicy::default().match_groups_by(GroupMatch::NameContains);

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-3xl font-bold mb-6">{"Lessons"}</h1>
            <FilterBar
                search_term={view.filter.search_term.clone()}
                selected={view.filter.selected.clone()}
                all_label="All seasons"
                {options}
                on_search={view.on_search.clone()}
                on_select={view.on_select.clone()}
            />
            {lessons_hook.render("lessons", |collection, is_loading, error| {
                let lessons = collection.lessons().unwrap_or_default();
                let page = project(lessons, &view.filter, &policy);
                listing_grid(&page, lesson_card, &view, is_loading, error)
            })}
        </main>
    }
}

fn lesson_card(lesson: &Lesson, featured: bool) -> Html {
    let meta: Vec<String> = [
        lesson.season.as_ref().map(|s| s.title.clone()),
        lesson.lesson_number.map(|n| format!("Lesson {n}")),
        lesson.scripture.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();
    html! {
        <ContentCard
            key={lesson.id.0}
            title={lesson.title.clone()}
            summary={lesson.description.clone()}
            meta={(!meta.is_empty()).then(|| AttrValue::from(meta.join(" · ")))}
            link={Route::Lesson { id: lesson.slug.clone() }}
            {featured}
        />
    }
}
