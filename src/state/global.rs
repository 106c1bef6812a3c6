//! Global Application State
//!
//! Reactive state management using Leptos signals. Each metric category is
//! an independent `Series`: its own panel signal, its own in-flight request
//! sequence. A selection change refetches every category concurrently and a
//! stale response can never overwrite a newer one.

use leptos::*;
use std::future::Future;

use crate::api::client;
use crate::api::ApiError;
use crate::dates::DateWindow;
use crate::filter::{self, GenreSelection};
use crate::model::{
    CountRecord, CountryRankRecord, Genre, GenreTagged, HhiRecord, RatingRecord, RevenueRecord,
    StabilityRecord, UserRecord, VersionRecord,
};

/// Load status of one metric panel. `Ready` with an empty vec is a valid
/// empty result and renders an empty chart, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Panel<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Panel<T> {
    /// The records to render; empty while loading or failed.
    pub fn records(&self) -> &[T] {
        match self {
            Panel::Ready(records) => records,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Panel::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Panel::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Fold a resolved fetch into a panel state, given the token it was issued
/// with and the latest token for the category. Stale responses yield `None`
/// and must be dropped. Malformed envelopes degrade to an empty result.
fn reconcile<T>(
    token: u64,
    latest: u64,
    result: Result<Vec<T>, ApiError>,
) -> Option<Panel<T>> {
    if token != latest {
        return None;
    }

    Some(match result {
        Ok(records) => Panel::Ready(records),
        Err(ApiError::Malformed(_)) => Panel::Ready(Vec::new()),
        Err(e) => Panel::Failed(e.to_string()),
    })
}

/// One independently fetched metric category.
pub struct Series<T: 'static> {
    pub panel: RwSignal<Panel<T>>,
    /// Monotonically increasing request sequence; only a response carrying
    /// the latest token is accepted.
    seq: RwSignal<u64>,
}

impl<T> Clone for Series<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Series<T> {}

impl<T: 'static> Series<T> {
    fn new() -> Self {
        Self {
            panel: create_rw_signal(Panel::Loading),
            seq: create_rw_signal(0),
        }
    }

    /// Issue a new request token. Any response still in flight for an
    /// earlier token becomes stale.
    fn begin(&self) -> u64 {
        self.seq.update(|s| *s += 1);
        self.panel.set(Panel::Loading);
        self.seq.get_untracked()
    }

    /// Apply a fetch result if `token` is still the latest issued.
    fn accept(&self, token: u64, result: Result<Vec<T>, ApiError>) {
        let latest = self.seq.get_untracked();
        if token != latest {
            web_sys::console::warn_1(&"Dropping stale response".into());
            return;
        }

        // Diagnostics only for results actually applied; a stale malformed
        // response is just stale.
        if let Err(ApiError::Malformed(msg)) = &result {
            web_sys::console::warn_1(
                &format!("Malformed response treated as empty: {}", msg).into(),
            );
        }

        if let Some(panel) = reconcile(token, latest, result) {
            self.panel.set(panel);
        }
    }

    /// Start a fetch for this category, guarded by a fresh token.
    fn load<F>(&self, request: F)
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let series = *self;
        let token = series.begin();
        spawn_local(async move {
            series.accept(token, request.await);
        });
    }
}

/// The metric categories the dashboard fetches per (year, month).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Revenue,
    Users,
    Ratings,
    Versions,
    Counts,
    Hhi,
    Stability,
    CountryRanks,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Revenue,
        Category::Users,
        Category::Ratings,
        Category::Versions,
        Category::Counts,
        Category::Hhi,
        Category::Stability,
        Category::CountryRanks,
    ];
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Bounds of the available history, fixed for the session
    pub window: DateWindow,
    /// Genre reference list, fetched once at mount
    pub genres: RwSignal<Vec<Genre>>,
    /// Currently selected year
    pub year: RwSignal<i32>,
    /// Currently selected month
    pub month: RwSignal<u32>,
    /// Selected genre ids; empty means all genres
    pub selection: RwSignal<GenreSelection>,
    pub revenue: Series<RevenueRecord>,
    pub users: Series<UserRecord>,
    pub ratings: Series<RatingRecord>,
    pub versions: Series<VersionRecord>,
    pub counts: Series<CountRecord>,
    pub hhi: Series<HhiRecord>,
    pub stability: Series<StabilityRecord>,
    /// Fetched and held; no chart consumes it yet
    pub country_ranks: Series<CountryRankRecord>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let window = DateWindow::default();
    let (year, month) = window.latest();

    let state = GlobalState {
        window,
        genres: create_rw_signal(Vec::new()),
        year: create_rw_signal(year),
        month: create_rw_signal(month),
        selection: create_rw_signal(GenreSelection::new()),
        revenue: Series::new(),
        users: Series::new(),
        ratings: Series::new(),
        versions: Series::new(),
        counts: Series::new(),
        hhi: Series::new(),
        stability: Series::new(),
        country_ranks: Series::new(),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Fetch the genre list once at mount.
    pub fn load_genres(&self) {
        let genres = self.genres;
        let state = *self;
        spawn_local(async move {
            match client::fetch_genres().await {
                Ok(list) => genres.set(list),
                Err(e) => state.show_error(&format!("Failed to load genres: {}", e)),
            }
        });
    }

    /// Refetch one category for the current (year, month).
    pub fn refresh(&self, category: Category) {
        let year = self.year.get_untracked();
        let month = self.month.get_untracked();

        match category {
            Category::Revenue => self.revenue.load(client::fetch_revenue(year, month)),
            Category::Users => self.users.load(client::fetch_users(year, month)),
            Category::Ratings => self.ratings.load(client::fetch_ratings(year, month)),
            Category::Versions => self.versions.load(client::fetch_versions(year, month)),
            Category::Counts => self.counts.load(client::fetch_counts(year, month)),
            Category::Hhi => self.hhi.load(client::fetch_hhi(year, month)),
            Category::Stability => self.stability.load(client::fetch_stability(year, month)),
            Category::CountryRanks => {
                self.country_ranks.load(client::fetch_country_ranks(year, month))
            }
        }
    }

    /// Refetch every category concurrently. Panels populate independently
    /// as their own fetches resolve.
    pub fn refresh_all(&self) {
        for category in Category::ALL {
            self.refresh(category);
        }
    }

    /// Change the selected year, reconciling the month against the months
    /// valid in that year, then refetch.
    pub fn set_year(&self, year: i32) {
        self.year.set(year);
        let clamped = self.window.clamp_month(year, self.month.get_untracked());
        self.month.set(clamped);
        self.refresh_all();
    }

    /// Change the selected month and refetch.
    pub fn set_month(&self, month: u32) {
        self.month.set(self.window.clamp_month(self.year.get_untracked(), month));
        self.refresh_all();
    }

    /// Toggle one genre in the selection. Filtering is client-side, no
    /// refetch needed.
    pub fn toggle_genre(&self, genre_id: &str) {
        let genre_id = genre_id.to_string();
        self.selection.update(|selection| selection.toggle(&genre_id));
    }

    /// Clear the genre selection back to pass-through.
    pub fn clear_genres(&self) {
        self.selection.update(|selection| selection.clear());
    }

    /// Display name for a genre id, falling back to the id itself.
    pub fn genre_name(&self, genre_id: &str) -> String {
        filter::resolve_name(genre_id, &self.genres.get())
    }

    /// A category's records narrowed to the current genre selection.
    /// Reactive: reads both the panel and the selection.
    pub fn filtered<T: GenreTagged + Clone + 'static>(&self, series: Series<T>) -> Vec<T> {
        let selection = self.selection.get();
        series.panel.with(|panel| filter::filter_records(panel.records(), &selection))
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(genre_id: &str) -> RatingRecord {
        RatingRecord {
            genre_id: genre_id.to_string(),
            rating: 4.0,
        }
    }

    #[test]
    fn test_reconcile_accepts_latest_token() {
        let panel = reconcile(3, 3, Ok(vec![rating("action")]));
        assert_eq!(panel, Some(Panel::Ready(vec![rating("action")])));
    }

    #[test]
    fn test_reconcile_drops_stale_token() {
        // A response issued with token 2 resolves after token 3 was issued.
        let panel = reconcile::<RatingRecord>(2, 3, Ok(vec![rating("action")]));
        assert_eq!(panel, None);
    }

    #[test]
    fn test_reconcile_empty_result_is_ready() {
        let panel = reconcile::<RatingRecord>(1, 1, Ok(Vec::new()));
        assert_eq!(panel, Some(Panel::Ready(Vec::new())));
    }

    #[test]
    fn test_reconcile_stale_malformed_is_dropped() {
        // Staleness wins over the malformed degradation: an outdated
        // malformed response must not be applied as an empty result.
        let panel = reconcile::<RatingRecord>(
            2,
            3,
            Err(ApiError::Malformed("no data field".to_string())),
        );
        assert_eq!(panel, None);
    }

    #[test]
    fn test_reconcile_malformed_degrades_to_empty() {
        let panel = reconcile::<RatingRecord>(
            1,
            1,
            Err(ApiError::Malformed("no data field".to_string())),
        );
        assert_eq!(panel, Some(Panel::Ready(Vec::new())));
    }

    #[test]
    fn test_reconcile_network_failure_is_failed() {
        let panel = reconcile::<RatingRecord>(1, 1, Err(ApiError::Http { status: 502 }));
        assert_eq!(panel, Some(Panel::Failed("Server returned HTTP 502".to_string())));
    }

    #[test]
    fn test_panel_records_accessor() {
        let panel = Panel::Ready(vec![rating("rpg")]);
        assert_eq!(panel.records().len(), 1);

        let loading: Panel<RatingRecord> = Panel::Loading;
        assert!(loading.records().is_empty());
        assert!(loading.is_loading());

        let failed: Panel<RatingRecord> = Panel::Failed("boom".to_string());
        assert_eq!(failed.error(), Some("boom"));
    }
}
