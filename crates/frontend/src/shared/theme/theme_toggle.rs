use super::use_theme;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Sun/moon button flipping between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| theme.toggle()
            title=move || if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
        >
            {move || if theme.is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}
