//! Right panel - store notifications, recent activity and contacts.

use crate::shared::icons::icon;
use crate::shared::theme::use_theme;
use contracts::shared::notifications::{activities, contacts, store_events, PANEL_EVENT_LIMIT};
use leptos::prelude::*;

#[component]
pub fn RightPanel() -> impl IntoView {
    view! {
        <div class="app-panel__content">
            <NotificationFeed />
            <ActivityFeed />
            <ContactList />
        </div>
    }
}

#[component]
fn NotificationFeed() -> impl IntoView {
    let events = store_events();

    view! {
        <section class="panel-section">
            <h4 class="panel-section__title">"Notifications"</h4>
            <div class="panel-section__items">
                {events.into_iter().take(PANEL_EVENT_LIMIT).map(|event| {
                    let accent = if event.unread { event.color } else { "transparent" };
                    view! {
                        <div
                            class="panel-event"
                            style:border-left=format!("2px solid {}", accent)
                        >
                            <div
                                class="panel-event__icon"
                                style:color=event.color
                                style:background-color=format!("{}15", event.color)
                            >
                                {icon(event.icon)}
                            </div>
                            <div class="panel-event__body">
                                <div class="panel-event__title">
                                    <span>{event.title}</span>
                                    {event.unread.then(|| view! {
                                        <span class="panel-event__dot" style:background-color=event.color></span>
                                    })}
                                </div>
                                <div class="panel-event__meta">
                                    <span class="panel-event__message">{event.message}</span>
                                    <span class="panel-event__time" title=event.time>{event.short_time()}</span>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ActivityFeed() -> impl IntoView {
    view! {
        <section class="panel-section panel-section--bordered">
            <h4 class="panel-section__title">"Activities"</h4>
            <div class="panel-section__items">
                {activities().into_iter().map(|activity| view! {
                    <div class="panel-activity">
                        <div class="panel-activity__icon">{activity.icon}</div>
                        <div class="panel-activity__body">
                            <div class="panel-activity__text">{activity.text}</div>
                            <div class="panel-activity__time">{activity.time}</div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ContactList() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section class="panel-section panel-section--bordered">
            <h4 class="panel-section__title">"Contacts"</h4>
            <div class="panel-section__items">
                {contacts().into_iter().map(|contact| {
                    let presence = contact.presence;
                    let color = move || presence.color(theme.palette());
                    view! {
                        <div class="panel-contact">
                            <div class="panel-contact__who">
                                <img
                                    class="panel-contact__avatar"
                                    src=contact.avatar_url()
                                    alt=format!("{} avatar", contact.name)
                                />
                                <span class="panel-contact__name">{contact.name}</span>
                            </div>
                            <div class="panel-contact__presence" style:color=color>
                                <span class="panel-contact__dot" style:background-color=color></span>
                                {presence.label()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
