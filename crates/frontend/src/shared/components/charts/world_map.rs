use crate::shared::theme::use_theme;
use contracts::shared::charts::axis::PlotArea;
use contracts::shared::charts::scatter_map::markers;
use contracts::shared::charts::svg_num;
use contracts::shared::format::format_money;
use leptos::prelude::*;

const WIDTH: f64 = 360.0;
const HEIGHT: f64 = 180.0;

/// "Revenue by Location": cities on an equirectangular grid, bubble size by
/// revenue. Marker colours follow the theme.
#[component]
pub fn WorldMap(points: Vec<(String, f64)>) -> impl IntoView {
    let theme = use_theme();
    let area = PlotArea::new(0.0, 0.0, WIDTH, HEIGHT);

    // meridians and parallels every 30 degrees
    let grid = (1..12)
        .map(|i| {
            let x = svg_num(WIDTH * i as f64 / 12.0);
            view! { <line x1=x.clone() x2=x y1="0" y2=svg_num(HEIGHT) /> }.into_any()
        })
        .chain((1..6).map(|i| {
            let y = svg_num(HEIGHT * i as f64 / 6.0);
            view! { <line x1="0" x2=svg_num(WIDTH) y1=y.clone() y2=y /> }.into_any()
        }))
        .collect_view();

    let dots = move || {
        let palette = theme.palette();
        markers(points.iter().map(|(name, value)| (name.as_str(), *value)), palette, &area)
            .into_iter()
            .map(|marker| {
                view! {
                    <circle
                        cx=svg_num(marker.center.x)
                        cy=svg_num(marker.center.y)
                        r=svg_num(marker.radius)
                        fill=marker.color
                        fill-opacity="0.8"
                        data-name=marker.name.clone()
                        data-value=format_money(marker.value)
                    />
                }
            })
            .collect_view()
    };

    view! {
        <svg
            class="chart world-map"
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            preserveAspectRatio="xMidYMid meet"
        >
            <rect x="0" y="0" width=svg_num(WIDTH) height=svg_num(HEIGHT) rx="8" fill="var(--color-card_background)" />
            <g class="world-map__grid" stroke="var(--color-border)" stroke-width="0.5">{grid}</g>
            {dots}
        </svg>
    }
}
