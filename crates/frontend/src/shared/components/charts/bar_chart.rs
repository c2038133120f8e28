use super::GridLines;
use crate::shared::theme::use_theme;
use contracts::shared::charts::axis::PlotArea;
use contracts::shared::charts::{bar, svg_num, TimeSeriesPoint};
use contracts::shared::synthetic::SyntheticRng;
use leptos::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;

/// "Projections vs Actuals": the projection column sits behind the actual
/// one. Projections come from `seed`, so a remount with the same seed draws
/// the same chart.
#[component]
pub fn BarChart(points: Vec<TimeSeriesPoint>, seed: u64) -> impl IntoView {
    let theme = use_theme();
    let mut rng = SyntheticRng::from_seed(seed);
    let area = PlotArea::new(48.0, 16.0, WIDTH - 64.0, HEIGHT - 48.0);
    let layout = bar::layout(&points, &mut rng, area);
    let label_y = svg_num(area.bottom() + 20.0);

    let columns = layout
        .groups
        .into_iter()
        .map(|group| {
            let (px, py, pw, ph) = group.projection_rect.attrs();
            let (ax, ay, aw, ah) = group.actual_rect.attrs();
            view! {
                <g class="bar-chart__group">
                    <rect
                        x=px y=py width=pw height=ph rx="4"
                        fill=move || theme.palette().project_background
                        data-value=group.projection.to_string()
                    />
                    <rect
                        x=ax y=ay width=aw height=ah rx="4"
                        fill=move || theme.palette().actual_background
                        data-value=group.actual.to_string()
                    />
                    <text
                        x=svg_num(group.label_x)
                        y=label_y.clone()
                        text-anchor="middle"
                        font-size="11"
                        fill="var(--color-textSecondary)"
                    >
                        {group.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            class="chart bar-chart"
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            preserveAspectRatio="xMidYMid meet"
        >
            <GridLines ticks=layout.ticks area=layout.area />
            {columns}
        </svg>
    }
}
