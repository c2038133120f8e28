use crate::shared::icons::icon;
use contracts::shared::pagination::PageWindow;
use leptos::prelude::*;

/// Footer of a paged list: "Showing a to b of n" plus previous / numbered
/// pages / next. Pages are 1-based.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Visible item range
    #[prop(into)]
    window: Signal<PageWindow>,

    /// Plural noun used in the summary ("orders")
    #[prop(optional)]
    noun: Option<&'static str>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let noun = noun.unwrap_or("items");

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || window.get().summary(noun)}
            </span>
            <div class="pagination-controls__pages">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get_untracked();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    (1..=total_pages.get())
                        .map(|page| {
                            view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=move || current_page.get() == page
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get_untracked();
                        if page < total_pages.get_untracked() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
