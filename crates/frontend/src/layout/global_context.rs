use crate::layout::registry::ViewKey;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Viewport widths at which the panels change behaviour.
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;
pub const LARGE_MIN_WIDTH: f64 = 1200.0;

/// Panel visibility rules for a given viewport.
///
/// Below `DESKTOP_MIN_WIDTH` both panels are overlays closed by a backdrop.
/// The right panel only opens by itself on large screens and never over the
/// order list, which needs the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPolicy {
    pub is_desktop: bool,
    pub is_large: bool,
    pub orders_active: bool,
}

impl PanelPolicy {
    pub fn for_width(width: f64, orders_active: bool) -> Self {
        Self {
            is_desktop: width >= DESKTOP_MIN_WIDTH,
            is_large: width >= LARGE_MIN_WIDTH,
            orders_active,
        }
    }

    /// `(left_open, right_open)` on first render.
    pub fn initial(&self) -> (bool, bool) {
        (self.is_desktop, self.is_large && !self.orders_active)
    }

    /// `(left_open, right_open)` after a resize. The left panel keeps its
    /// state on desktop; it is never reopened automatically.
    pub fn after_resize(&self, left_open: bool) -> (bool, bool) {
        let left = self.is_desktop && left_open;
        let right = self.is_large && !self.orders_active;
        (left, right)
    }

    pub fn shows_backdrop(&self, left_open: bool, right_open: bool) -> bool {
        !self.is_desktop && (left_open || right_open)
    }
}

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(LARGE_MIN_WIDTH)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<ViewKey>,
    pub left_open: RwSignal<bool>,
    pub right_open: RwSignal<bool>,
    pub is_desktop: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let active = initial_view_from_url();
        let policy = PanelPolicy::for_width(viewport_width(), active == ViewKey::Orders);
        let (left, right) = policy.initial();
        Self {
            active: RwSignal::new(active),
            left_open: RwSignal::new(left),
            right_open: RwSignal::new(right),
            is_desktop: RwSignal::new(policy.is_desktop),
        }
    }

    fn policy(&self) -> PanelPolicy {
        PanelPolicy::for_width(
            viewport_width(),
            self.active.get_untracked() == ViewKey::Orders,
        )
    }

    /// Mirror the active view into `?active=` of the address bar.
    pub fn init_router_integration(&self) {
        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active_key.as_str().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Re-apply the panel policy whenever the window is resized.
    pub fn init_viewport_integration(&self) {
        let this = *self;
        let _ = window_event_listener(leptos::ev::resize, move |_| {
            let policy = this.policy();
            let (left, right) = policy.after_resize(this.left_open.get_untracked());
            this.is_desktop.set(policy.is_desktop);
            this.left_open.set(left);
            this.right_open.set(right);
        });
    }

    pub fn activate(&self, key: ViewKey) {
        leptos::logging::log!("activate view: '{}'", key.as_str());
        self.active.set(key);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_right(&self) {
        self.right_open.update(|val| *val = !*val);
    }

    /// Mobile backdrop click: closes both overlays.
    pub fn close_overlays(&self) {
        if !self.is_desktop.get_untracked() {
            self.left_open.set(false);
            self.right_open.set(false);
        }
    }

    pub fn shows_backdrop(&self) -> bool {
        !self.is_desktop.get() && (self.left_open.get() || self.right_open.get())
    }
}

fn initial_view_from_url() -> ViewKey {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .map(|key| ViewKey::from_key(key))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_panels_by_width() {
        assert_eq!(PanelPolicy::for_width(1400.0, false).initial(), (true, true));
        assert_eq!(PanelPolicy::for_width(1400.0, true).initial(), (true, false));
        assert_eq!(PanelPolicy::for_width(1000.0, false).initial(), (true, false));
        assert_eq!(PanelPolicy::for_width(500.0, false).initial(), (false, false));
    }

    #[test]
    fn test_resize_never_reopens_left() {
        let desktop = PanelPolicy::for_width(1000.0, false);
        assert_eq!(desktop.after_resize(false), (false, false));
        assert_eq!(desktop.after_resize(true), (true, false));
        let mobile = PanelPolicy::for_width(600.0, false);
        assert_eq!(mobile.after_resize(true), (false, false));
        let large = PanelPolicy::for_width(1300.0, false);
        assert_eq!(large.after_resize(true), (true, true));
    }

    #[test]
    fn test_backdrop_only_on_mobile() {
        let mobile = PanelPolicy::for_width(600.0, false);
        assert!(mobile.shows_backdrop(true, false));
        assert!(!mobile.shows_backdrop(false, false));
        assert!(!PanelPolicy::for_width(900.0, false).shows_backdrop(true, true));
    }

    #[test]
    fn test_breakpoints_are_inclusive() {
        let policy = PanelPolicy::for_width(DESKTOP_MIN_WIDTH, false);
        assert!(policy.is_desktop);
        assert!(!policy.is_large);
        assert!(PanelPolicy::for_width(LARGE_MIN_WIDTH, false).is_large);
    }
}
