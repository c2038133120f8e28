//! Notifications, activities and contacts shown in the header dropdown and
//! the right panel.

use super::theme::Palette;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Accent colour; `Info` uses the primary colour.
    pub fn color(&self, palette: &Palette) -> &'static str {
        match self {
            NotificationKind::Error => palette.error,
            NotificationKind::Success => palette.success,
            NotificationKind::Warning => palette.warning,
            NotificationKind::Info => palette.primary,
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            NotificationKind::Error => "bug",
            NotificationKind::Success => "check",
            NotificationKind::Warning => "alert-triangle",
            NotificationKind::Info => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    /// Already human readable ("Just now", "12 hours ago").
    pub timestamp: String,
    pub read: bool,
}

impl NotificationItem {
    fn new(id: &str, title: &str, message: &str, kind: NotificationKind, timestamp: &str, read: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            kind,
            timestamp: timestamp.to_string(),
            read,
        }
    }
}

/// Ordered notification list with read bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationList {
    items: Vec<NotificationItem>,
}

impl NotificationList {
    pub fn new(items: Vec<NotificationItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Unknown ids are ignored.
    pub fn mark_read(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }
}

pub fn mock_notifications() -> NotificationList {
    use NotificationKind::*;
    NotificationList::new(vec![
        NotificationItem::new("1", "Bug Report", "You have a bug that needs attention", Error, "Just now", false),
        NotificationItem::new("2", "New Registration", "New user registered", Success, "30 minutes ago", false),
        NotificationItem::new("3", "Bug Report", "You have a bug that needs attention", Error, "12 hours ago", true),
        NotificationItem::new("4", "New Subscription", "Andi Lane subscribed to you", Info, "Today, 11:59 AM", false),
    ])
}

// ============================================================================
// Right panel feeds
// ============================================================================

/// Store event shown in the right panel notification feed.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreEvent {
    pub id: u32,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub unread: bool,
}

impl StoreEvent {
    /// First word of the time label ("2 minutes ago" -> "2").
    pub fn short_time(&self) -> &'static str {
        self.time.split(' ').next().unwrap_or(self.time)
    }
}

/// The panel shows only the first few events.
pub const PANEL_EVENT_LIMIT: usize = 4;

pub fn store_events() -> Vec<StoreEvent> {
    vec![
        StoreEvent {
            id: 1,
            title: "New Order Received",
            message: "Order #12345 from John Doe",
            time: "2 minutes ago",
            icon: "shopping-cart",
            color: "#22C55E",
            unread: true,
        },
        StoreEvent {
            id: 2,
            title: "Customer Message",
            message: "Question about product availability",
            time: "15 minutes ago",
            icon: "message-square",
            color: "#3B82F6",
            unread: true,
        },
        StoreEvent {
            id: 3,
            title: "Low Stock Alert",
            message: "iPhone 14 Pro has only 3 units left",
            time: "1 hour ago",
            icon: "alert-circle",
            color: "#F59E0B",
            unread: false,
        },
        StoreEvent {
            id: 4,
            title: "Payment Received",
            message: "Payment of $1,200 confirmed",
            time: "2 hours ago",
            icon: "check-circle",
            color: "#10B981",
            unread: false,
        },
        StoreEvent {
            id: 5,
            title: "New User Registration",
            message: "Sarah Wilson joined your store",
            time: "3 hours ago",
            icon: "user",
            color: "#8B5CF6",
            unread: false,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub text: &'static str,
    pub icon: &'static str,
    pub time: &'static str,
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity { text: "You have a bug that needs attention", icon: "🐛", time: "Just now" },
        Activity { text: "Released a new version", icon: "🚀", time: "59 minutes ago" },
        Activity { text: "Submitted a bug", icon: "🐛", time: "12 hours ago" },
        Activity { text: "Modified A data in Page X", icon: "📝", time: "Today, 11:59 AM" },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Online,
    Away,
    Offline,
}

impl Presence {
    pub fn label(&self) -> &'static str {
        match self {
            Presence::Online => "Online",
            Presence::Away => "Away",
            Presence::Offline => "Offline",
        }
    }

    pub fn color(&self, palette: &Palette) -> &'static str {
        match self {
            Presence::Online => palette.success,
            Presence::Away => palette.warning,
            Presence::Offline => palette.text_secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: &'static str,
    pub presence: Presence,
}

impl Contact {
    pub fn avatar_url(&self) -> String {
        let seed: String = self.name.split_whitespace().collect();
        format!("https://picsum.photos/seed/{}/24/24", seed)
    }
}

pub fn contacts() -> Vec<Contact> {
    vec![
        Contact { name: "John Doe", presence: Presence::Online },
        Contact { name: "Jane Smith", presence: Presence::Away },
        Contact { name: "Mike Johnson", presence: Presence::Offline },
        Contact { name: "Sarah Wilson", presence: Presence::Online },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::theme::ThemeMode;

    #[test]
    fn test_unread_count_and_mark_read() {
        let mut list = mock_notifications();
        assert_eq!(list.unread_count(), 3);
        list.mark_read("2");
        assert_eq!(list.unread_count(), 2);
        list.mark_read("2");
        list.mark_read("missing");
        assert_eq!(list.unread_count(), 2);
        list.mark_all_read();
        assert_eq!(list.unread_count(), 0);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = mock_notifications();
        list.remove("1");
        let ids: Vec<&str> = list.items().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
        for id in ["2", "3", "4"] {
            list.remove(id);
        }
        assert!(list.is_empty());
        assert_eq!(list.unread_count(), 0);
    }

    #[test]
    fn test_kind_colors() {
        let palette = ThemeMode::Light.palette();
        assert_eq!(NotificationKind::Error.color(palette), "#EF4444");
        assert_eq!(NotificationKind::Info.color(palette), palette.primary);
        assert_eq!(Presence::Offline.color(palette), palette.text_secondary);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn test_panel_feed_helpers() {
        let events = store_events();
        assert_eq!(events[0].short_time(), "2");
        assert_eq!(events.iter().take(PANEL_EVENT_LIMIT).count(), 4);
        assert_eq!(contacts()[2].avatar_url(), "https://picsum.photos/seed/MikeJohnson/24/24");
        assert_eq!(activities().len(), 4);
    }
}
