pub mod state;

use self::state::{create_state, OpenMenu};
use crate::domain::a001_order::api;
use crate::shared::components::PaginationControls;
use crate::shared::config::generator_seed;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::theme::use_theme;
use chrono::Utc;
use contracts::domain::a001_order::provider::new_order;
use contracts::domain::a001_order::{Order, OrderListView, OrderStatus, SortField, StatusFilter};
use contracts::shared::config::Config;
use contracts::shared::format::{format_money, relative_time};
use contracts::shared::synthetic::{address, SyntheticRng};
use leptos::prelude::*;
use thaw::*;

fn status_options() -> Vec<StatusFilter> {
    std::iter::once(StatusFilter::All)
        .chain(OrderStatus::all().into_iter().map(StatusFilter::Only))
        .collect()
}

/// Header cell that toggles sorting on `field` and shows the direction.
#[component]
fn SortableHeader(
    field: SortField,
    min_width: f64,
    state: RwSignal<OrderListView>,
) -> impl IntoView {
    let indicator = move || {
        state.with(|s| {
            let query = s.query();
            if query.sort_enabled && query.sort_field == field {
                query.sort_direction.indicator()
            } else {
                " ⇅"
            }
        })
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| state.update(|s| s.toggle_sort(field))
            >
                {field.label()}
                <span class="table__sort-indicator">{indicator}</span>
            </div>
        </TableHeaderCell>
    }
}

#[component]
fn OrderRow(order: Order, search_term: String) -> impl IntoView {
    let theme = use_theme();
    let status = order.status;
    // derived from the order id, so re-rendering a row never changes it
    let order_address = address(order.display_seed());
    let order_id = order.id.clone();
    let avatar_url = order.avatar_url();
    let customer = order.customer.clone();
    let product = order.product.clone();
    let amount = order.amount;
    let date = order.date.clone();

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>{format!("#{}", order_id)}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span class="order-list__customer">
                        <img class="order-list__avatar" src=avatar_url alt="" />
                        {highlight_matches(&customer, &search_term)}
                    </span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{product}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{format_money(amount)}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{order_address}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    {relative_time(&date, Utc::now())}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span
                        class="status-badge"
                        style:color=move || status.color(theme.palette())
                    >
                        <span class="status-badge__dot"></span>
                        {status.display_name()}
                    </span>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let state = create_state(config.orders.page_size);
    let search = RwSignal::new(String::new());
    let open_menu = RwSignal::new(OpenMenu::None);

    let seed = generator_seed(&config);
    let local_rng = StoredValue::new(SyntheticRng::from_seed(seed.wrapping_add(1)));

    // one-shot fetch; the view may be gone by the time it resolves
    let provider = config.provider.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let mut rng = SyntheticRng::from_seed(seed);
        let orders = api::load_orders(&provider, &mut rng).await;
        if state.try_update(|s| s.set_orders(orders)).is_none() {
            log::warn!("order list closed before orders arrived; result dropped");
        }
    });

    Effect::new(move |_| {
        let term = search.get();
        state.update(|s| {
            if s.query().search_term != term {
                s.set_search(term);
            }
        });
    });

    let add_order = move |_| {
        let mut order = None;
        local_rng.update_value(|rng| order = Some(new_order(rng, Utc::now())));
        if let Some(order) = order {
            leptos::logging::log!("add order {}", order.id);
            state.update(|s| s.push_order(order));
        }
    };

    let set_filter = move |filter: StatusFilter| {
        state.update(|s| s.set_status_filter(filter));
        open_menu.set(OpenMenu::None);
    };

    let set_sort = move |field: Option<SortField>| {
        state.update(|s| match field {
            Some(field) => s.sort_by(field),
            None => s.clear_sort(),
        });
        open_menu.set(OpenMenu::None);
    };

    let snapshot = Memo::new(move |_| state.with(|s| s.snapshot()));

    let rows = move || {
        let term = search.get();
        let visible = snapshot.with(|p| p.rows.clone());
        if visible.is_empty() {
            return view! {
                <TableRow>
                    <TableCell>
                        <TableCellLayout>"No orders found"</TableCellLayout>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }
        visible
            .into_iter()
            .map(|order| view! { <OrderRow order=order search_term=term.clone() /> })
            .collect_view()
            .into_any()
    };

    view! {
        <PageFrame page_id="a001_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Order List"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="order-list__toolbar">
                    <Space gap=SpaceGap::Small>
                        <Button appearance=ButtonAppearance::Primary on_click=add_order>
                            {icon("plus")}
                        </Button>

                        <div class="order-list__menu">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| open_menu.update(|m| *m = m.toggled(OpenMenu::Status))
                            >
                                {icon("filter")}
                                {move || state.with(|s| s.query().status_filter.label())}
                            </Button>
                            <Show when=move || open_menu.get() == OpenMenu::Status>
                                <div class="order-list__popover">
                                    {status_options().into_iter().map(|filter| view! {
                                        <div
                                            class="order-list__popover-item"
                                            class:order-list__popover-item--active=move || {
                                                state.with(|s| s.query().status_filter == filter)
                                            }
                                            on:click=move |_| set_filter(filter)
                                        >
                                            {filter.label()}
                                        </div>
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>

                        <div class="order-list__menu">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| open_menu.update(|m| *m = m.toggled(OpenMenu::Sort))
                            >
                                {icon("arrow-up-down")}
                                {move || state.with(|s| {
                                    let query = s.query();
                                    if query.sort_enabled {
                                        format!("{}{}", query.sort_field.label(), query.sort_direction.indicator())
                                    } else {
                                        "Sort".to_string()
                                    }
                                })}
                            </Button>
                            <Show when=move || open_menu.get() == OpenMenu::Sort>
                                <div class="order-list__popover">
                                    {SortField::all().into_iter().map(|field| view! {
                                        <div
                                            class="order-list__popover-item"
                                            on:click=move |_| set_sort(Some(field))
                                        >
                                            {field.label()}
                                            {field.default_direction().indicator()}
                                        </div>
                                    }).collect_view()}
                                    <div
                                        class="order-list__popover-item order-list__popover-item--muted"
                                        on:click=move |_| set_sort(None)
                                    >
                                        "Clear sort"
                                    </div>
                                </div>
                            </Show>
                        </div>
                    </Space>

                    <div class="order-list__search">
                        <Input value=search placeholder="Search" />
                        <Show when=move || !search.get().is_empty()>
                            <button
                                class="order-list__search-clear"
                                title="Clear"
                                on:click=move |_| search.set(String::new())
                            >
                                {icon("x")}
                            </button>
                        </Show>
                    </div>
                </div>

                <Show
                    when=move || state.with(|s| s.is_loaded())
                    fallback=|| view! {
                        <div class="order-list__loading">
                            <Spinner label="Loading orders..." />
                        </div>
                    }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 900px;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeader field=SortField::Id min_width=100.0 state=state />
                                    <SortableHeader field=SortField::Customer min_width=180.0 state=state />
                                    <TableHeaderCell resizable=true min_width=160.0>"Product"</TableHeaderCell>
                                    <SortableHeader field=SortField::Amount min_width=100.0 state=state />
                                    <TableHeaderCell resizable=true min_width=220.0>"Address"</TableHeaderCell>
                                    <SortableHeader field=SortField::Date min_width=130.0 state=state />
                                    <TableHeaderCell resizable=true min_width=120.0>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {rows}
                            </TableBody>
                        </Table>
                    </div>

                    <PaginationControls
                        current_page=Signal::derive(move || snapshot.with(|p| p.current_page))
                        total_pages=Signal::derive(move || snapshot.with(|p| p.total_pages))
                        window=Signal::derive(move || snapshot.with(|p| p.window))
                        noun="orders"
                        on_page_change=Callback::new(move |page| state.update(|s| s.go_to_page(page)))
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
