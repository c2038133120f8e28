use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::theme::ThemeProvider;
use contracts::shared::config::Config;
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Configuration is read-only after startup.
    provide_context(config);

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <AppShell />
        </ThemeProvider>
    }
}
