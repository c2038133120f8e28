use contracts::shared::charts::donut::{self, DonutGeometry, DonutInput, DonutSegment};
use contracts::shared::charts::svg_num;
use contracts::shared::format::format_thousands;
use leptos::prelude::*;

/// Segments for drawing. A zero total is logged and degrades to the empty
/// layout so the legend still lists every input.
fn segments_for(inputs: &[DonutInput], geometry: &DonutGeometry) -> Vec<DonutSegment> {
    match donut::try_layout(inputs, geometry) {
        Ok(segments) => segments,
        Err(e) => {
            log::warn!("donut chart with {} inputs: {}", inputs.len(), e);
            donut::layout(inputs, geometry)
        }
    }
}

/// Donut with a legend and the total in the middle. A zero total draws the
/// empty track only.
#[component]
pub fn DonutChart(
    inputs: Vec<DonutInput>,
    #[prop(default = 150.0)] size: f64,
    /// Caption under the total in the center.
    #[prop(optional)]
    center_label: Option<&'static str>,
) -> impl IntoView {
    let geometry = DonutGeometry::for_size(size);
    let segments = segments_for(&inputs, &geometry);
    let total = donut::total(&inputs);
    let track_radius = (geometry.outer_radius + geometry.inner_radius) / 2.0;
    let track_width = geometry.outer_radius - geometry.inner_radius;

    let arcs = segments
        .iter()
        .filter(|segment| !segment.path.is_empty())
        .map(|segment| {
            view! {
                <path
                    d=segment.path.clone()
                    fill=segment.color.clone()
                    data-name=segment.name.clone()
                />
            }
        })
        .collect_view();

    let legend = segments
        .into_iter()
        .map(|segment| {
            view! {
                <div class="donut-chart__legend-item">
                    <span class="donut-chart__swatch" style:background-color=segment.color></span>
                    <span class="donut-chart__name">{segment.name}</span>
                    <span class="donut-chart__value">{format!("${}", format_thousands(segment.value))}</span>
                    <span class="donut-chart__percent">{format!("{}%", segment.percentage)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="donut-chart">
            <svg
                class="chart donut-chart__svg"
                width=svg_num(size)
                height=svg_num(size)
                viewBox=format!("0 0 {} {}", svg_num(size), svg_num(size))
            >
                <circle
                    cx=svg_num(geometry.center.x)
                    cy=svg_num(geometry.center.y)
                    r=svg_num(track_radius)
                    fill="none"
                    stroke="var(--color-border)"
                    stroke-width=svg_num(track_width)
                />
                {arcs}
                <text
                    x=svg_num(geometry.center.x)
                    y=svg_num(geometry.center.y)
                    text-anchor="middle"
                    font-size="14"
                    font-weight="600"
                    fill="var(--color-text)"
                >
                    {format_thousands(total)}
                </text>
                {center_label.map(|label| view! {
                    <text
                        x=svg_num(geometry.center.x)
                        y=svg_num(geometry.center.y + 16.0)
                        text-anchor="middle"
                        font-size="10"
                        fill="var(--color-textSecondary)"
                    >
                        {label}
                    </text>
                })}
            </svg>
            <div class="donut-chart__legend">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_falls_back_to_empty_segments() {
        let geometry = DonutGeometry::for_size(150.0);
        let inputs = vec![
            DonutInput::new("Direct", 0.0, "#1c1c1c"),
            DonutInput::new("Affiliate", 0.0, "#baedbd"),
        ];
        let segments = segments_for(&inputs, &geometry);
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.path.is_empty() && s.percentage == "0.0"));
    }

    #[test]
    fn test_nonzero_total_draws_arcs() {
        let geometry = DonutGeometry::for_size(150.0);
        let inputs = vec![
            DonutInput::new("Direct", 300.0, "#1c1c1c"),
            DonutInput::new("Affiliate", 100.0, "#baedbd"),
        ];
        let segments = segments_for(&inputs, &geometry);
        assert_eq!(segments[0].percentage, "75.0");
        assert!(segments.iter().all(|s| !s.path.is_empty()));
    }
}
