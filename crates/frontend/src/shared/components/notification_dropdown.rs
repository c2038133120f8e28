use crate::shared::icons::icon;
use crate::shared::theme::use_theme;
use contracts::shared::notifications::{mock_notifications, NotificationItem, NotificationList};
use leptos::prelude::*;

/// Bell button with unread badge and a dropdown of notifications.
///
/// The list lives only in memory; clicking an entry marks it read, the
/// cross removes it.
#[component]
pub fn NotificationDropdown() -> impl IntoView {
    let notifications = RwSignal::new(mock_notifications());
    let is_open = RwSignal::new(false);
    let unread = Memo::new(move |_| notifications.with(NotificationList::unread_count));

    view! {
        <div class="notification-dropdown">
            <button
                class="top-header__icon-btn"
                on:click=move |_| is_open.update(|v| *v = !*v)
                title="Notifications"
            >
                {icon("bell")}
                <Show when=move || { unread.get() > 0 }>
                    <span class="notification-dropdown__badge">{move || unread.get().to_string()}</span>
                </Show>
            </button>

            <Show when=move || is_open.get()>
                <div class="notification-dropdown__overlay" on:click=move |_| is_open.set(false)></div>
                <div class="notification-dropdown__menu">
                    <div class="notification-dropdown__header">
                        <span class="notification-dropdown__title">"Notifications"</span>
                        <Show when=move || { unread.get() > 0 }>
                            <button
                                class="notification-dropdown__mark-all"
                                on:click=move |_| notifications.update(NotificationList::mark_all_read)
                            >
                                "Mark all read"
                            </button>
                        </Show>
                    </div>
                    <div class="notification-dropdown__list">
                        {move || {
                            let items = notifications.with(|list| list.items().to_vec());
                            if items.is_empty() {
                                view! {
                                    <div class="notification-dropdown__empty">"No notifications"</div>
                                }
                                .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|item| view! { <NotificationRow item=item notifications=notifications /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn NotificationRow(item: NotificationItem, notifications: RwSignal<NotificationList>) -> impl IntoView {
    let theme = use_theme();
    let kind = item.kind;
    let read_id = item.id.clone();
    let remove_id = item.id.clone();

    view! {
        <div
            class="notification-dropdown__item"
            class:notification-dropdown__item--unread=!item.read
            on:click=move |_| notifications.update(|list| list.mark_read(&read_id))
        >
            <div
                class="notification-dropdown__icon"
                style:color=move || kind.color(theme.palette())
            >
                {icon(kind.icon_name())}
            </div>
            <div class="notification-dropdown__body">
                <div class="notification-dropdown__item-title">{item.title}</div>
                <div class="notification-dropdown__message">{item.message}</div>
                <div class="notification-dropdown__time">{item.timestamp}</div>
            </div>
            <button
                class="notification-dropdown__remove"
                title="Remove"
                on:click=move |ev| {
                    ev.stop_propagation();
                    notifications.update(|list| list.remove(&remove_id));
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
