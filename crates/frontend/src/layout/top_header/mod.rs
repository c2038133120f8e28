//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle buttons for sidebar and right panel
//! - Breadcrumbs of the active view
//! - Search box
//! - Theme toggle and notifications

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::NotificationDropdown;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let search = RwSignal::new(String::new());

    let is_sidebar_visible = move || ctx.left_open.get();
    let is_right_panel_visible = move || ctx.right_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    class:top-header__icon-btn--active=is_sidebar_visible
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide sidebar" } else { "Show sidebar" }
                >
                    {icon("panel-left")}
                </button>
                <button class="top-header__icon-btn" title="Favorite">
                    {icon("star")}
                </button>

                <nav class="top-header__breadcrumbs">
                    <span class="top-header__crumb top-header__crumb--muted">"Dashboard"</span>
                    <span class="top-header__crumb-separator">"›"</span>
                    <span class="top-header__crumb">{move || ctx.active.get().title()}</span>
                </nav>
            </div>

            <div class="top-header__actions">
                <label class="top-header__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <kbd class="top-header__kbd">"⌘K"</kbd>
                </label>

                <ThemeToggle />

                <button class="top-header__icon-btn" title="History">
                    {icon("clock")}
                </button>

                <NotificationDropdown />

                <button
                    class="top-header__icon-btn"
                    class:top-header__icon-btn--active=is_right_panel_visible
                    on:click=move |_| ctx.toggle_right()
                    title=move || if is_right_panel_visible() { "Hide panel" } else { "Show panel" }
                >
                    {icon("panel-right")}
                </button>
            </div>
        </div>
    }
}
