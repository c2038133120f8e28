use contracts::domain::a001_order::OrderListView;
use leptos::prelude::*;

/// Which toolbar popover is open. At most one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpenMenu {
    #[default]
    None,
    Status,
    Sort,
}

impl OpenMenu {
    /// Clicking a menu button opens it, clicking it again closes it.
    pub fn toggled(self, menu: OpenMenu) -> OpenMenu {
        if self == menu {
            OpenMenu::None
        } else {
            menu
        }
    }
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state(page_size: usize) -> RwSignal<OrderListView> {
    RwSignal::new(OrderListView::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle() {
        assert_eq!(OpenMenu::None.toggled(OpenMenu::Status), OpenMenu::Status);
        assert_eq!(OpenMenu::Status.toggled(OpenMenu::Status), OpenMenu::None);
        assert_eq!(OpenMenu::Status.toggled(OpenMenu::Sort), OpenMenu::Sort);
    }
}
