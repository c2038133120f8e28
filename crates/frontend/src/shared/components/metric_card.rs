use crate::shared::icons::icon;
use contracts::dashboards::d400_ecommerce::{ChangeType, DashboardMetric};
use contracts::shared::format::format_change;
use leptos::prelude::*;

/// KPI tile: title, icon, pre-formatted value and the change vs last period.
#[component]
pub fn MetricCard(metric: DashboardMetric) -> impl IntoView {
    let change_class = match metric.change_type {
        ChangeType::Increase => "metric-card__change metric-card__change--up",
        ChangeType::Decrease => "metric-card__change metric-card__change--down",
    };

    view! {
        <div class="metric-card" data-metric=metric.id.clone()>
            <div class="metric-card__header">
                <div class="metric-card__label">{metric.title.clone()}</div>
                <div class="metric-card__icon">
                    {icon(&metric.icon)}
                </div>
            </div>
            <div class="metric-card__content">
                <div class="metric-card__value">{metric.value.clone()}</div>
                <span class=change_class>
                    {format_change(metric.change)}
                    {icon(metric.change_type.icon_name())}
                </span>
            </div>
        </div>
    }
}
