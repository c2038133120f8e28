//! Application Shell - root layout of the dashboard
//!
//! Wires the sidebar, the active view and the right panel into `Shell` and
//! starts the URL and viewport integrations of `AppGlobalContext`.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::registry::render_view;
use crate::layout::right::panel::RightPanel;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the shell is created.
    ctx.init_router_integration();
    ctx.init_viewport_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                // Re-rendered only when the active view changes.
                let active = Memo::new(move |_| ctx.active.get());
                (move || render_view(active.get())).into_any()
            }
            right=|| view! { <RightPanel /> }.into_any()
        />
    }
}
