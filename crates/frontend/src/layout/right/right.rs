use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;

const DEFAULT_WIDTH: f64 = 280.0;
const MIN_WIDTH: f64 = 200.0;
/// Space kept free for the sidebar and the content column.
const RESERVED_WIDTH: f64 = 240.0 + 400.0;

/// Width after dragging the resizer by `dx` px to the left.
fn resized_width(start_width: f64, dx: f64, window_width: f64) -> f64 {
    let max_width = (window_width - RESERVED_WIDTH).min(window_width * 0.5).max(MIN_WIDTH);
    (start_width + dx).clamp(MIN_WIDTH, max_width)
}

#[component]
pub fn Right(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.right_open.get();

    let width = RwSignal::new(DEFAULT_WIDTH);
    let is_resizing = RwSignal::new(false);
    let start_x = RwSignal::new(0.0f64);
    let start_width = RwSignal::new(DEFAULT_WIDTH);

    let on_resize_start = move |ev: leptos::ev::MouseEvent| {
        if !is_open() || !ctx.is_desktop.get_untracked() {
            return;
        }
        is_resizing.set(true);
        start_x.set(ev.client_x() as f64);
        start_width.set(width.get_untracked());
        ev.prevent_default();
    };

    let _ = window_event_listener(leptos::ev::mousemove, move |ev: leptos::ev::MouseEvent| {
        if !is_resizing.get_untracked() {
            return;
        }
        let Some(window_width) = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
        else {
            return;
        };

        let dx = start_x.get_untracked() - ev.client_x() as f64;
        width.set(resized_width(start_width.get_untracked(), dx, window_width));
    });

    let _ = window_event_listener(leptos::ev::mouseup, move |_ev: leptos::ev::MouseEvent| {
        if is_resizing.get_untracked() {
            is_resizing.set(false);
        }
    });

    // cursor and text selection while dragging
    Effect::new(move |_| {
        let is_resizing_value = is_resizing.get();

        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            if is_resizing_value {
                let _ = body.style().set_property("cursor", "col-resize");
                let _ = body.style().set_property("user-select", "none");
            } else {
                let _ = body.style().set_property("cursor", "");
                let _ = body.style().set_property("user-select", "");
            }
        }
    });

    view! {
        <div
            data-zone="right"
            class="right-panel"
            class:right-panel--hidden=move || !is_open()
            class:right-panel--overlay=move || !ctx.is_desktop.get()
            class:right-panel--resizing=move || is_resizing.get()
            style:width=move || if is_open() { format!("{}px", width.get()) } else { "0px".to_string() }
        >
            <div class="right-panel__resizer" on:mousedown=on_resize_start></div>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resized_width_bounds() {
        assert_eq!(resized_width(280.0, 20.0, 1600.0), 300.0);
        assert_eq!(resized_width(280.0, -500.0, 1600.0), MIN_WIDTH);
        assert_eq!(resized_width(280.0, 2000.0, 1600.0), 800.0);
        assert_eq!(resized_width(280.0, 100.0, 700.0), MIN_WIDTH);
    }
}
