//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod chart;
pub mod filter_bar;
pub mod loading;
pub mod toast;

pub use nav::Nav;
pub use chart::{BarSeries, ChartCard, ChartData, ChartState};
pub use filter_bar::FilterBar;
pub use loading::Loading;
pub use toast::Toast;
