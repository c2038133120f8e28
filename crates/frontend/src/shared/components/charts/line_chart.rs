use super::GridLines;
use crate::shared::theme::use_theme;
use contracts::shared::charts::axis::PlotArea;
use contracts::shared::charts::line::LineSeries;
use contracts::shared::charts::{line, svg_num, TimeSeriesPoint};
use contracts::shared::synthetic::SyntheticRng;
use leptos::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;

fn series_markers(series: &LineSeries, color: Signal<&'static str>) -> impl IntoView {
    series
        .points
        .iter()
        .map(|p| {
            view! { <circle cx=svg_num(p.x) cy=svg_num(p.y) r="3" fill=move || color.get() /> }
        })
        .collect_view()
}

/// "Revenue" line chart. With `previous_seed` a dashed previous-period
/// series is simulated from the current values.
#[component]
pub fn LineChart(
    points: Vec<TimeSeriesPoint>,
    #[prop(optional)] previous_seed: Option<u64>,
) -> impl IntoView {
    let theme = use_theme();
    let mut rng = previous_seed.map(SyntheticRng::from_seed);
    let area = PlotArea::new(56.0, 16.0, WIDTH - 72.0, HEIGHT - 48.0);
    let layout = line::layout(&points, rng.as_mut(), area);
    let label_y = svg_num(area.bottom() + 20.0);

    let current_color = Signal::derive(move || theme.palette().text);
    let previous_color = Signal::derive(move || theme.palette().actual_background);

    let labels = layout
        .labels
        .iter()
        .map(|(label, x)| {
            view! {
                <text
                    x=svg_num(*x)
                    y=label_y.clone()
                    text-anchor="middle"
                    font-size="11"
                    fill="var(--color-textSecondary)"
                >
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    let previous = layout.previous.as_ref().map(|series| {
        view! {
            <g class="line-chart__series line-chart__series--previous" data-series=series.name>
                <polyline
                    points=series.polyline()
                    fill="none"
                    stroke=move || previous_color.get()
                    stroke-width="2"
                    stroke-dasharray="5,3"
                />
                {series_markers(series, previous_color)}
            </g>
        }
    });

    let current = &layout.current;

    view! {
        <svg
            class="chart line-chart"
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            preserveAspectRatio="xMidYMid meet"
        >
            <GridLines ticks=layout.ticks.clone() area=layout.area />
            {previous}
            <g class="line-chart__series" data-series=current.name>
                <polyline
                    points=current.polyline()
                    fill="none"
                    stroke=move || current_color.get()
                    stroke-width="2"
                    stroke-linecap="round"
                />
                {series_markers(current, current_color)}
            </g>
            {labels}
        </svg>
    }
}
