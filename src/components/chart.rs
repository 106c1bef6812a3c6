//! Chart Components
//!
//! Grouped bar charts rendered on HTML5 Canvas, one chart per metric panel.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::loading::Loading;

/// One bar per label group, e.g. "Major Updates" across all genres.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Everything a bar chart needs: one x label per genre, one value per
/// (series, genre).
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<BarSeries>,
}

/// Render state of one chart panel.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartState {
    Loading,
    Failed(String),
    Ready(ChartData),
}

/// A titled chart panel. Shows a skeleton while its fetch is in flight, an
/// inline error with a retry button on failure, and the chart plus legend
/// once data arrives. Panels fail independently; one broken fetch never
/// takes down the page.
#[component]
pub fn ChartCard(
    title: &'static str,
    #[prop(into)] state: Signal<ChartState>,
    /// Y-axis tick formatter
    format: fn(f64) -> String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>

            {move || match state.get() {
                ChartState::Loading => view! {
                    <div class="h-64 flex items-center justify-center">
                        <Loading />
                    </div>
                }.into_view(),
                ChartState::Failed(message) => view! {
                    <div class="h-64 flex flex-col items-center justify-center space-y-3">
                        <span class="text-red-400 text-sm">{message}</span>
                        <button
                            on:click=move |_| on_retry.call(())
                            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                                   text-sm font-medium transition-colors"
                        >
                            "Retry"
                        </button>
                    </div>
                }.into_view(),
                ChartState::Ready(data) => view! {
                    <BarChart data=data.clone() format=format />
                    <ChartLegend series=data.series />
                }.into_view(),
            }}
        </section>
    }
}

/// The canvas itself; redraws whenever its data changes.
#[component]
fn BarChart(data: ChartData, format: fn(f64) -> String) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let data = store_value(data);

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            data.with_value(|data| draw_bars(&canvas, data, format));
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-96 rounded-lg"
        />
    }
}

/// Legend mapping series colors to labels, rendered in HTML below the canvas.
#[component]
fn ChartLegend(series: Vec<BarSeries>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {series.into_iter().map(|s| view! {
                <div class="flex items-center space-x-2">
                    <div
                        class="w-3 h-3 rounded-sm"
                        style=format!("background-color: {}", s.color)
                    />
                    <span class="text-sm text-gray-300">{s.label}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// Draw grouped bars on the canvas.
fn draw_bars(canvas: &HtmlCanvasElement, data: &ChartData, format: fn(f64) -> String) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 70.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 50.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if data.labels.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for selected filters", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    // Bars grow up from a zero baseline; headroom above the tallest bar
    let mut max_value = data
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);
    if max_value <= 0.0 {
        max_value = 1.0;
    }
    max_value *= 1.1;

    // Draw grid lines and y-axis labels (5 lines)
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max_value * (1.0 - i as f64 / 5.0);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format(value), 5.0, y + 4.0);
    }

    // Draw grouped bars
    let group_count = data.labels.len();
    let series_count = data.series.len().max(1);
    let group_width = chart_width / group_count as f64;
    let bar_width = (group_width * 0.7) / series_count as f64;
    let group_padding = group_width * 0.15;

    for (series_idx, series) in data.series.iter().enumerate() {
        ctx.set_fill_style(&series.color.into());

        for (group_idx, value) in series.values.iter().enumerate() {
            let x = margin_left
                + group_idx as f64 * group_width
                + group_padding
                + series_idx as f64 * bar_width;
            let bar_height = (value / max_value) * chart_height;
            let y = margin_top + chart_height - bar_height;

            ctx.fill_rect(x, y, bar_width.max(1.0), bar_height);
        }
    }

    // X-axis labels at group centers, truncated to keep them readable
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("11px sans-serif");

    for (group_idx, label) in data.labels.iter().enumerate() {
        let display: String = label.chars().take(10).collect();
        let x = margin_left + group_idx as f64 * group_width + group_width / 2.0;
        let offset = display.len() as f64 * 2.8;
        let _ = ctx.fill_text(&display, x - offset, height - 25.0);
    }
}
