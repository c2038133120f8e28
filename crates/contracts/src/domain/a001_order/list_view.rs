use super::aggregate::Order;
use super::query::{apply, QueryState, SortField, StatusFilter};
use crate::shared::pagination::{clamp_page, page, total_pages, PageWindow};

/// Everything the table and the pager need for one render, computed from a
/// single pass of the query pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub rows: Vec<Order>,
    pub current_page: usize,
    pub total_pages: usize,
    pub window: PageWindow,
}

/// Complete state of the order list screen.
///
/// Every mutation that can change the filtered set goes through a method here
/// and resets the page to 1, so the view never strands the user on an empty
/// trailing page.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderListView {
    orders: Vec<Order>,
    query: QueryState,
    current_page: usize,
    page_size: usize,
    loaded: bool,
}

impl OrderListView {
    pub fn new(page_size: usize) -> Self {
        Self {
            orders: Vec::new(),
            query: QueryState::default(),
            current_page: 1,
            page_size: page_size.max(1),
            loaded: false,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Provider result arrived. Replaces the whole collection in one step.
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.loaded = true;
        self.current_page = 1;
    }

    /// Local "add order". Appended after the provider orders.
    pub fn push_order(&mut self, order: Order) {
        self.orders.push(order);
        self.current_page = 1;
    }

    pub fn set_search(&mut self, term: String) {
        self.query.search_term = term;
        self.current_page = 1;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.query.status_filter = filter;
        self.current_page = 1;
    }

    pub fn sort_by(&mut self, field: SortField) {
        self.query.sort_by(field);
        self.current_page = 1;
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.query.toggle_sort(field);
        self.current_page = 1;
    }

    pub fn clear_sort(&mut self) {
        self.query.clear_sort();
        self.current_page = 1;
    }

    /// Jump to `page_number`, clamped into the valid range.
    pub fn go_to_page(&mut self, page_number: usize) {
        self.current_page = clamp_page(page_number, self.filtered().len(), self.page_size);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    // ------------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------------

    pub fn filtered(&self) -> Vec<Order> {
        apply(&self.orders, &self.query)
    }

    pub fn visible(&self) -> Vec<Order> {
        page(&self.filtered(), self.page_size, self.current_page).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.filtered().len(), self.page_size, self.current_page)
    }

    pub fn snapshot(&self) -> ListPage {
        let filtered = self.filtered();
        ListPage {
            rows: page(&filtered, self.page_size, self.current_page).to_vec(),
            current_page: self.current_page,
            total_pages: total_pages(filtered.len(), self.page_size),
            window: PageWindow::new(filtered.len(), self.page_size, self.current_page),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::aggregate::OrderStatus;

    fn cycling_orders(n: usize) -> Vec<Order> {
        let statuses = OrderStatus::all();
        (0..n)
            .map(|i| Order {
                id: format!("ID{:04}", i),
                customer: format!("Customer {}", i),
                product: "Mobile App".to_string(),
                amount: (i * 10) as f64,
                status: statuses[i % statuses.len()],
                date: format!("2024-01-{:02}", i % 28 + 1),
                location: None,
            })
            .collect()
    }

    #[test]
    fn test_approved_filter_first_page() {
        let mut view = OrderListView::new(10);
        view.set_orders(cycling_orders(12));
        view.set_status_filter(StatusFilter::Only(OrderStatus::Approved));
        let visible = view.visible();
        assert!(!visible.is_empty());
        assert!(visible.len() <= 10);
        assert!(visible.iter().all(|o| o.status == OrderStatus::Approved));
        // indices 2 and 7
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut view = OrderListView::new(10);
        view.set_orders(cycling_orders(35));
        view.go_to_page(4);
        assert_eq!(view.current_page(), 4);
        view.set_search("customer 1".into());
        assert_eq!(view.current_page(), 1);
        view.go_to_page(2);
        view.set_status_filter(StatusFilter::Only(OrderStatus::Pending));
        assert_eq!(view.current_page(), 1);
        view.go_to_page(2);
        view.sort_by(SortField::Amount);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_page_stays_in_range() {
        let mut view = OrderListView::new(10);
        view.set_orders(cycling_orders(23));
        view.go_to_page(99);
        assert_eq!(view.current_page(), 3);
        assert!(!view.has_next());
        view.next_page();
        assert_eq!(view.current_page(), 3);
        view.go_to_page(0);
        assert_eq!(view.current_page(), 1);
        view.previous_page();
        assert_eq!(view.current_page(), 1);
        assert!(!view.has_previous());
    }

    #[test]
    fn test_empty_list_is_page_one() {
        let mut view = OrderListView::new(10);
        view.set_orders(Vec::new());
        view.go_to_page(5);
        assert_eq!(view.current_page(), 1);
        assert!(view.visible().is_empty());
        assert_eq!(view.window().summary("orders"), "Showing 0 to 0 of 0 orders");
    }

    #[test]
    fn test_clear_sort_restores_fetch_order() {
        let mut view = OrderListView::new(10);
        let orders = cycling_orders(8);
        view.set_orders(orders.clone());
        view.sort_by(SortField::Amount);
        assert_eq!(view.visible()[0].id, "ID0007");
        view.clear_sort();
        assert_eq!(view.visible(), orders);
    }

    #[test]
    fn test_push_order_appends_and_resets_page() {
        let mut view = OrderListView::new(5);
        view.set_orders(cycling_orders(12));
        view.go_to_page(3);
        let mut extra = cycling_orders(1).remove(0);
        extra.id = "NEW001".into();
        view.push_order(extra);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.orders().len(), 13);
        assert_eq!(view.orders().last().unwrap().id, "NEW001");
    }

    #[test]
    fn test_snapshot_matches_derived_views() {
        let mut view = OrderListView::new(10);
        view.set_orders(cycling_orders(23));
        view.set_search("customer 1".into());
        view.go_to_page(2);
        let snapshot = view.snapshot();
        assert_eq!(snapshot.rows, view.visible());
        assert_eq!(snapshot.current_page, 2);
        assert_eq!(snapshot.total_pages, view.total_pages());
        assert_eq!(snapshot.window, view.window());
        // "customer 1" and "customer 10".."customer 19"
        assert_eq!(snapshot.window.total, 11);
        assert_eq!(snapshot.rows.len(), 1);
    }

    #[test]
    fn test_not_loaded_until_orders_arrive() {
        let mut view = OrderListView::new(0);
        assert!(!view.is_loaded());
        assert_eq!(view.page_size(), 1);
        view.set_orders(cycling_orders(2));
        assert!(view.is_loaded());
    }
}
