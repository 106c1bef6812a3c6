//! Dashboard Page
//!
//! The main view: filter bar plus four tabs of per-genre metric charts for
//! the selected (year, month). Every panel fetches and fails independently.

use leptos::*;

use crate::components::{BarSeries, ChartCard, ChartData, ChartState, FilterBar};
use crate::format::{format_currency, format_number, format_percentage};
use crate::model::{
    CountRecord, GenreTagged, HhiRecord, RatingRecord, RevenueRecord, StabilityRecord,
    UserRecord, VersionRecord,
};
use crate::state::global::{Category, GlobalState, Panel, Series};

/// Series colors shared across the charts.
const PURPLE: &str = "#8884d8";
const GREEN: &str = "#82ca9d";
const AMBER: &str = "#ffc658";
const ORANGE: &str = "#ff8042";

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the genre list and all metric collections on mount
    create_effect(move |_| {
        state.load_genres();
        state.refresh_all();
    });

    let tab = create_rw_signal(0usize);

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"App Market Analytics"</h1>
                <p class="text-gray-400 mt-1">
                    "Revenue, users, ratings and competition by genre"
                </p>
            </div>

            <FilterBar />

            // Tab selector
            <div class="flex space-x-1 border-b border-gray-700">
                <TabButton label="Market Overview" index=0 tab=tab />
                <TabButton label="User Engagement" index=1 tab=tab />
                <TabButton label="App Performance" index=2 tab=tab />
                <TabButton label="Market Competition" index=3 tab=tab />
            </div>

            {move || match tab.get() {
                0 => view! {
                    <div class="grid md:grid-cols-2 gap-8">
                        <RevenuePanel />
                        <HhiPanel />
                    </div>
                }.into_view(),
                1 => view! {
                    <div class="grid md:grid-cols-2 gap-8">
                        <UsersPanel />
                        <RatingsPanel />
                    </div>
                }.into_view(),
                2 => view! {
                    <div class="grid md:grid-cols-2 gap-8">
                        <VersionsPanel />
                        <LifecyclePanel />
                    </div>
                }.into_view(),
                _ => view! {
                    <div class="grid gap-8">
                        <StabilityPanel />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

/// Tab selection button
#[component]
fn TabButton(label: &'static str, index: usize, tab: RwSignal<usize>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| tab.set(index)
            class=move || {
                let base = "px-4 py-2 text-sm font-medium transition-colors rounded-t-lg";
                if tab.get() == index {
                    format!("{} bg-gray-800 text-white border-b-2 border-primary-500", base)
                } else {
                    format!("{} text-gray-400 hover:text-white hover:bg-gray-800", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Build a chart-state memo for one category: panel status carried through,
/// records narrowed by the genre selection, genre ids resolved to names for
/// the x axis.
fn chart_state<T: GenreTagged + Clone + PartialEq + 'static>(
    state: GlobalState,
    series: Series<T>,
    bars: Vec<(&'static str, &'static str, fn(&T) -> f64)>,
) -> Memo<ChartState> {
    create_memo(move |_| {
        let status = series.panel.with(|panel| match panel {
            Panel::Loading => Some(ChartState::Loading),
            Panel::Failed(msg) => Some(ChartState::Failed(msg.clone())),
            Panel::Ready(_) => None,
        });
        if let Some(status) = status {
            return status;
        }

        let records = state.filtered(series);
        let labels = records
            .iter()
            .map(|record| state.genre_name(record.genre_id()))
            .collect();
        let series_data = bars
            .iter()
            .map(|&(label, color, extract)| BarSeries {
                label,
                color,
                values: records.iter().map(extract).collect(),
            })
            .collect();

        ChartState::Ready(ChartData {
            labels,
            series: series_data,
        })
    })
}

#[component]
fn RevenuePanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let chart = chart_state(
        state,
        state.revenue,
        vec![("Revenue", PURPLE, |r: &RevenueRecord| r.revenue)],
    );

    view! {
        <ChartCard
            title="Revenue Distribution"
            state=chart
            format=format_currency
            on_retry=move |_| state.refresh(Category::Revenue)
        />
    }
}

#[component]
fn HhiPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let chart = chart_state(
        state,
        state.hhi,
        vec![("HHI", GREEN, |r: &HhiRecord| r.hhi)],
    );

    view! {
        <ChartCard
            title="Market Concentration (HHI)"
            state=chart
            format=format_number
            on_retry=move |_| state.refresh(Category::Hhi)
        />
    }
}

#[component]
fn UsersPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let chart = chart_state(
        state,
        state.users,
        vec![
            ("Active Users", PURPLE, |r: &UserRecord| r.active_users),
            ("Install Base", GREEN, |r: &UserRecord| r.install_base),
        ],
    );

    view! {
        <ChartCard
            title="User Base"
            state=chart
            format=format_number
            on_retry=move |_| state.refresh(Category::Users)
        />
    }
}

#[component]
fn RatingsPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let chart = chart_state(
        state,
        state.ratings,
        vec![("Rating", PURPLE, |r: &RatingRecord| r.rating)],
    );

    view! {
        <ChartCard
            title="User Ratings"
            state=chart
            format=format_rating
            on_retry=move |_| state.refresh(Category::Ratings)
        />
    }
}

#[component]
fn VersionsPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let chart = chart_state(
        state,
        state.versions,
        vec![
            ("Major Updates", PURPLE, |r: &VersionRecord| r.big_version),
            ("Minor Updates", GREEN, |r: &VersionRecord| r.small_version),
        ],
    );

    view! {
        <ChartCard
            title="Version Updates"
            state=chart
            format=format_number
            on_retry=move |_| state.refresh(Category::Versions)
        />
    }
}

#[component]
fn LifecyclePanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let chart = chart_state(
        state,
        state.counts,
        vec![
            ("New Entrants", PURPLE, |r: &CountRecord| r.new_entrant),
            ("Exits", ORANGE, |r: &CountRecord| r.new_exit),
        ],
    );

    view! {
        <ChartCard
            title="App Lifecycle"
            state=chart
            format=format_number
            on_retry=move |_| state.refresh(Category::Counts)
        />
    }
}

#[component]
fn StabilityPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let chart = chart_state(
        state,
        state.stability,
        vec![
            ("Overall Stability", PURPLE, |r: &StabilityRecord| r.stability),
            ("Top 5 Stability", GREEN, |r: &StabilityRecord| r.stability_5),
            ("Top 10 Stability", AMBER, |r: &StabilityRecord| r.stability_10),
            ("Top 20 Stability", ORANGE, |r: &StabilityRecord| r.stability_20),
        ],
    );

    view! {
        <ChartCard
            title="Market Stability"
            state=chart
            format=format_percentage
            on_retry=move |_| state.refresh(Category::Stability)
        />
    }
}

/// Ratings sit on a 0-5 scale; one decimal, no magnitude suffix.
fn format_rating(value: f64) -> String {
    format!("{:.1}", value)
}
