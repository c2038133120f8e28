//! Theme management for the application.
//!
//! Light/dark mode is an explicit context. The palette is exported as
//! `--color-*` custom properties on the document element and the choice is
//! persisted through an injected `ThemeStorage` (localStorage in the browser).

pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use contracts::shared::config::Config;
use contracts::shared::theme::{load_mode, save_mode, Palette, ThemeMode, ThemeStorage};
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::JsCast;
use web_sys::window;

/// `window.localStorage`. Unavailable storage reads as empty and drops
/// writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl ThemeStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("theme not persisted: {:?}", e);
            }
        }
    }
}

pub type SharedStorage = Arc<dyn ThemeStorage + Send + Sync>;

/// Write the palette to `document.documentElement` and tag the body.
fn apply_palette(mode: ThemeMode) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let style = root.style();
        for (name, value) in mode.palette().css_variables() {
            let _ = style.set_property(name, value);
        }
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", mode.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
    storage_key: StoredValue<String>,
    storage: StoredValue<SharedStorage>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.mode.get().is_dark()
    }

    /// Palette of the current mode. Tracks the mode signal.
    pub fn palette(&self) -> &'static Palette {
        self.mode.get().palette()
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        let key = self.storage_key.get_value();
        self.storage.with_value(|s| save_mode(s.as_ref(), &key, mode));
        apply_palette(mode);
    }

    pub fn toggle(&self) {
        self.set_mode(self.mode.get_untracked().toggled());
    }
}

/// Provides `ThemeContext` to children. Expects `Config` in context.
#[component]
pub fn ThemeProvider(
    /// Storage override; localStorage when omitted.
    #[prop(optional)]
    storage: Option<SharedStorage>,
    children: Children,
) -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let storage: SharedStorage = storage.unwrap_or_else(|| Arc::new(LocalStorage));

    let default_mode = ThemeMode::from_dark(config.theme.default_dark);
    let initial = load_mode(storage.as_ref(), &config.theme.storage_key, default_mode);
    apply_palette(initial);

    provide_context(ThemeContext {
        mode: RwSignal::new(initial),
        storage_key: StoredValue::new(config.theme.storage_key),
        storage: StoredValue::new(storage),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
