//! Filter Bar Component
//!
//! Genre multi-select chips plus year and month selectors. Changing the
//! year or month triggers a refetch; toggling genres only refilters what is
//! already loaded.

use leptos::*;

use crate::dates::month_name;
use crate::state::global::GlobalState;

/// The dashboard's filter controls.
#[component]
pub fn FilterBar() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            <div class="flex flex-wrap items-end gap-6">
                <YearSelect />
                <MonthSelect />
            </div>
            <GenreChips />
        </section>
    }
}

/// Year dropdown over the available history window.
#[component]
fn YearSelect() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_change = move |ev| {
        if let Ok(year) = event_target_value(&ev).parse::<i32>() {
            state.set_year(year);
        }
    };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Year"</label>
            <select
                on:change=on_change
                class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                       focus:border-primary-500 focus:outline-none"
            >
                {state.window.years().into_iter().map(|year| view! {
                    <option
                        value=year.to_string()
                        selected=move || state.year.get() == year
                    >
                        {year.to_string()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Month dropdown; the option list narrows at the partial boundary years.
#[component]
fn MonthSelect() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_change = move |ev| {
        if let Ok(month) = event_target_value(&ev).parse::<u32>() {
            state.set_month(month);
        }
    };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Month"</label>
            <select
                on:change=on_change
                class="bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                       focus:border-primary-500 focus:outline-none"
            >
                {move || {
                    let year = state.year.get();
                    state.window.available_months(year).into_iter().map(|month| view! {
                        <option
                            value=month.to_string()
                            selected=move || state.month.get() == month
                        >
                            {month_name(month)}
                        </option>
                    }).collect_view()
                }}
            </select>
        </div>
    }
}

/// Genre chip toggles. Empty selection means every genre is shown; the
/// "All" chip clears back to that state.
#[component]
fn GenreChips() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Genres"</label>
            <div class="flex flex-wrap gap-2">
                <button
                    on:click=move |_| state.clear_genres()
                    class=move || {
                        let base = "px-3 py-1.5 rounded-lg text-sm font-medium transition-colors";
                        if state.selection.get().is_empty() {
                            format!("{} bg-primary-600 text-white", base)
                        } else {
                            format!("{} bg-gray-700 text-gray-400 hover:bg-gray-600", base)
                        }
                    }
                >
                    "All"
                </button>

                {move || {
                    state.genres.get().into_iter().map(|genre| {
                        let id = genre.id.clone();
                        let id_for_class = genre.id.clone();

                        view! {
                            <button
                                on:click=move |_| state.toggle_genre(&id)
                                class=move || {
                                    let base = "px-3 py-1.5 rounded-lg text-sm font-medium transition-colors";
                                    if state.selection.get().contains(&id_for_class) {
                                        format!("{} bg-primary-600 text-white", base)
                                    } else {
                                        format!("{} bg-gray-700 text-gray-400 hover:bg-gray-600", base)
                                    }
                                }
                            >
                                {genre.name}
                            </button>
                        }
                    }).collect_view()
                }}
            </div>
        </div>
    }
}
