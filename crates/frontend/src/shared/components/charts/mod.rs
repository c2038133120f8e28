//! SVG renderings of the chart layouts in `contracts::shared::charts`.
//!
//! Geometry is computed once per mount; only colours follow the theme.

pub mod bar_chart;
pub mod donut_chart;
pub mod line_chart;
pub mod world_map;

pub use bar_chart::BarChart;
pub use donut_chart::DonutChart;
pub use line_chart::LineChart;
pub use world_map::WorldMap;

use contracts::shared::charts::axis::{AxisTick, PlotArea};
use contracts::shared::charts::svg_num;
use leptos::prelude::*;

/// Horizontal grid lines with their labels left of the plot area.
#[component]
pub fn GridLines(ticks: Vec<AxisTick>, area: PlotArea) -> impl IntoView {
    ticks
        .into_iter()
        .map(|tick| {
            let y = svg_num(tick.y);
            view! {
                <g class="chart__grid">
                    <line
                        x1=svg_num(area.left)
                        x2=svg_num(area.right())
                        y1=y.clone()
                        y2=y.clone()
                        stroke="var(--color-border)"
                        stroke-width="0.5"
                    />
                    <text
                        x=svg_num(area.left - 8.0)
                        y=svg_num(tick.y + 4.0)
                        text-anchor="end"
                        font-size="11"
                        fill="var(--color-textSecondary)"
                    >
                        {tick.label}
                    </text>
                </g>
            }
        })
        .collect_view()
}
