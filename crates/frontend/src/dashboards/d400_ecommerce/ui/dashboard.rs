use crate::shared::components::charts::{BarChart, DonutChart, LineChart, WorldMap};
use crate::shared::components::MetricCard;
use crate::shared::config::generator_seed;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_ecommerce::{
    mock_dashboard, EcommerceDashboard as EcommerceDashboardData, LocationRevenue, TopProduct,
};
use contracts::shared::config::Config;
use contracts::shared::format::{format_money, format_thousands};
use leptos::prelude::*;
use thaw::*;

const DONUT_SIZE: f64 = 150.0;

#[component]
fn Card(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-card">
            <div class="dashboard-card__title">{title}</div>
            <div class="dashboard-card__body">{children()}</div>
        </div>
    }
}

#[component]
fn LocationTable(locations: Vec<LocationRevenue>) -> impl IntoView {
    let max = locations.iter().map(|l| l.value).fold(0.0_f64, f64::max);

    locations
        .into_iter()
        .map(|location| {
            let share = if max > 0.0 { location.value / max * 100.0 } else { 0.0 };
            view! {
                <div class="location-row">
                    <div class="location-row__header">
                        <span>{location.location}</span>
                        <span>{format!("{}K", format_thousands(location.value / 1000.0))}</span>
                    </div>
                    <div class="location-row__bar">
                        <div class="location-row__fill" style:width=format!("{:.1}%", share)></div>
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn TopProductsTable(products: Vec<TopProduct>) -> impl IntoView {
    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                    <TableHeaderCell resizable=true min_width=90.0>"Price"</TableHeaderCell>
                    <TableHeaderCell resizable=true min_width=80.0>"Quantity"</TableHeaderCell>
                    <TableHeaderCell resizable=true min_width=100.0>"Amount"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {products.into_iter().map(|product| view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout truncate=true>{product.name}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{product.price}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{product.qty.to_string()}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{product.amount}</TableCellLayout>
                        </TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

/// eCommerce overview: KPI cards, the four charts and the product table.
#[component]
pub fn EcommerceDashboard() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    // one seed per mount; charts stay put until the view is re-entered
    let seed = generator_seed(&config);
    let data = mock_dashboard();

    let donut_inputs = data.donut_inputs();
    let map_points: Vec<(String, f64)> = data
        .map_points()
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    let EcommerceDashboardData {
        metrics,
        monthly,
        revenue,
        locations,
        top_products,
        ..
    } = data;
    let bar_points = monthly.clone();

    view! {
        <PageFrame page_id="d400_ecommerce--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"eCommerce"</h1>
                </div>
            </div>

            <div class="page__content dashboard-grid">
                <div class="dashboard-grid__metrics">
                    {metrics.into_iter().map(|metric| view! { <MetricCard metric=metric /> }).collect_view()}
                </div>

                <Card title="Projections vs Actuals">
                    <BarChart points=bar_points seed=seed />
                </Card>

                <Card title="Revenue">
                    <div class="revenue-legend">
                        <span class="revenue-legend__item">
                            "Current Week "<strong>{format_money(revenue.current)}</strong>
                        </span>
                        <span class="revenue-legend__item revenue-legend__item--muted">
                            "Previous Week "<strong>{format_money(revenue.previous)}</strong>
                        </span>
                    </div>
                    <LineChart points=monthly previous_seed=seed.wrapping_add(1) />
                </Card>

                <Card title="Revenue by Location">
                    <WorldMap points=map_points />
                    <LocationTable locations=locations />
                </Card>

                <Card title="Top Selling Products">
                    <TopProductsTable products=top_products />
                </Card>

                <Card title="Total Sales">
                    <DonutChart inputs=donut_inputs size=DONUT_SIZE center_label="Sales" />
                </Card>
            </div>
        </PageFrame>
    }
}
