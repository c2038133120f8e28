//! Sidebar: account, Favorites/Recently shortcuts and the collapsible menu.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::ViewKey;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    label: &'static str,
    icon: &'static str,
    /// `None` for entries without a page yet; they render but do nothing.
    view: Option<ViewKey>,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<MenuItem>,
}

const fn item(label: &'static str, icon: &'static str, view: Option<ViewKey>) -> MenuItem {
    MenuItem { label, icon, view }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            items: vec![
                item("Default", "layout-dashboard", Some(ViewKey::Dashboard)),
                item("Orders", "shopping-cart", Some(ViewKey::Orders)),
                item("Analytics", "bar-chart", None),
                item("Customers", "users", None),
                item("Reports", "file-text", None),
            ],
        },
        MenuGroup {
            id: "pages",
            label: "Pages",
            items: vec![
                item("Products", "package", None),
                item("Categories", "folder", None),
                item("Inventory", "inventory", None),
                item("Settings", "settings", None),
            ],
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ShortcutTab {
    Favorites,
    Recently,
}

fn shortcuts(tab: ShortcutTab) -> &'static [&'static str] {
    match tab {
        ShortcutTab::Favorites => &["Overview", "Projects"],
        ShortcutTab::Recently => &["Orders", "Default"],
    }
}

#[component]
fn Shortcuts() -> impl IntoView {
    let tab = RwSignal::new(ShortcutTab::Favorites);

    let tab_button = move |value: ShortcutTab, label: &'static str| {
        view! {
            <button
                class="app-sidebar__tab"
                class:app-sidebar__tab--active=move || tab.get() == value
                on:click=move |_| tab.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="app-sidebar__shortcuts">
            <div class="app-sidebar__tabs">
                {tab_button(ShortcutTab::Favorites, "Favorites")}
                {tab_button(ShortcutTab::Recently, "Recently")}
            </div>
            <ul class="app-sidebar__shortcut-list">
                {move || shortcuts(tab.get())
                    .iter()
                    .map(|name| view! { <li class="app-sidebar__shortcut">{*name}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["dashboards", "pages"]);
    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__account">
                <img
                    class="app-sidebar__avatar"
                    src="https://picsum.photos/seed/ByeWind/24/24"
                    alt="ByeWind"
                />
                <span class="app-sidebar__account-name">"ByeWind"</span>
            </div>

            <Shortcuts />

            {groups.into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__group-title"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <span>{group.label}</span>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {group.items.clone().into_iter().map(|entry| {
                                    let view_key = entry.view;
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                view_key.is_some_and(|key| ctx.active.get() == key)
                                            }
                                            class:app-sidebar__item--disabled=view_key.is_none()
                                            on:click=move |_| {
                                                if let Some(key) = view_key {
                                                    ctx.activate(key);
                                                    ctx.close_overlays();
                                                }
                                            }
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(entry.icon)}
                                                <span>{entry.label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_reaches_every_view() {
        let keys: Vec<ViewKey> = get_menu_groups()
            .into_iter()
            .flat_map(|group| group.items)
            .filter_map(|entry| entry.view)
            .collect();
        assert_eq!(keys, vec![ViewKey::Dashboard, ViewKey::Orders]);
    }
}
