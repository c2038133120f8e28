//! Order list query pipeline: search, status filter and optional sort.

use super::aggregate::{Order, OrderStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Only(status) => status.display_name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    Id,
    Customer,
    Amount,
    Date,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Id => "Order ID",
            SortField::Customer => "Customer",
            SortField::Amount => "Amount",
            SortField::Date => "Date",
        }
    }

    /// Direction picked by the sort menu for this field.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            SortField::Id | SortField::Customer => SortDirection::Asc,
            SortField::Amount | SortField::Date => SortDirection::Desc,
        }
    }

    pub fn all() -> [SortField; 4] {
        [SortField::Id, SortField::Customer, SortField::Amount, SortField::Date]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    }
}

/// Combined search / filter / sort configuration of the order list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryState {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub sort_enabled: bool,
}

impl QueryState {
    /// Sort menu entry: enables sorting on `field` with its default direction.
    pub fn sort_by(&mut self, field: SortField) {
        self.sort_enabled = true;
        self.sort_field = field;
        self.sort_direction = field.default_direction();
    }

    /// Column header click: same field flips direction, other field starts
    /// ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_enabled && self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_enabled = true;
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Back to provider order. Field and direction are kept for the next
    /// `toggle_sort`.
    pub fn clear_sort(&mut self) {
        self.sort_enabled = false;
    }

    pub fn matches(&self, order: &Order) -> bool {
        let needle = self.search_term.to_lowercase();
        let search_ok = needle.is_empty() || order.customer.to_lowercase().contains(&needle);
        search_ok && self.status_filter.matches(order.status)
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Ascending comparison of two orders on `field`.
///
/// Total for every field: amounts use `total_cmp`, unparsable dates sort
/// before parsable ones.
pub fn compare_by_field(a: &Order, b: &Order, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.to_lowercase().cmp(&b.id.to_lowercase()),
        SortField::Customer => a.customer.to_lowercase().cmp(&b.customer.to_lowercase()),
        SortField::Amount => a.amount.total_cmp(&b.amount),
        SortField::Date => parse_date(&a.date).cmp(&parse_date(&b.date)),
    }
}

/// Produce the visible order subset for `state`. Input is left untouched.
pub fn apply(orders: &[Order], state: &QueryState) -> Vec<Order> {
    let mut result: Vec<Order> = orders
        .iter()
        .filter(|order| state.matches(order))
        .cloned()
        .collect();

    if state.sort_enabled {
        let field = state.sort_field;
        let direction = state.sort_direction;
        // slice::sort_by is stable; equal keys keep provider order in both directions
        result.sort_by(|a, b| {
            let cmp = compare_by_field(a, b, field);
            match direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, customer: &str, amount: f64, status: OrderStatus, date: &str) -> Order {
        Order {
            id: id.to_string(),
            customer: customer.to_string(),
            product: "Mobile App".to_string(),
            amount,
            status,
            date: date.to_string(),
            location: None,
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order("C3", "John Doe", 300.0, OrderStatus::Pending, "2024-03-02"),
            order("a1", "Jane Roe", 100.0, OrderStatus::Approved, "2024-03-10"),
            order("B2", "johnny Cash", 100.0, OrderStatus::Approved, "2024-01-20"),
            order("d4", "Alice", 250.0, OrderStatus::Rejected, "2024-03-10"),
        ]
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_empty_orders_yield_empty() {
        let mut state = QueryState::default();
        state.search_term = "john".into();
        state.sort_by(SortField::Amount);
        assert!(apply(&[], &state).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let orders = vec![
            order("A", "John Doe", 1.0, OrderStatus::Pending, "2024-01-01"),
            order("B", "Jane Roe", 1.0, OrderStatus::Pending, "2024-01-01"),
        ];
        for term in ["john", "JOHN", "JoHn"] {
            let state = QueryState { search_term: term.into(), ..Default::default() };
            let result = apply(&orders, &state);
            assert_eq!(result.len(), 1);
            assert_eq!(result[0].customer, "John Doe");
        }
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let state = QueryState { search_term: "zzz".into(), ..Default::default() };
        assert!(apply(&sample(), &state).is_empty());
    }

    #[test]
    fn test_status_filter_and_search_combine() {
        let state = QueryState {
            search_term: "john".into(),
            status_filter: StatusFilter::Only(OrderStatus::Approved),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&sample(), &state)), vec!["B2"]);
    }

    #[test]
    fn test_unsorted_preserves_input_order() {
        let state = QueryState::default();
        assert_eq!(ids(&apply(&sample(), &state)), vec!["C3", "a1", "B2", "d4"]);
    }

    #[test]
    fn test_result_is_subset_matching_predicate_and_idempotent() {
        let orders = sample();
        let mut state = QueryState {
            search_term: "o".into(),
            status_filter: StatusFilter::Only(OrderStatus::Approved),
            ..Default::default()
        };
        state.sort_by(SortField::Customer);
        let first = apply(&orders, &state);
        assert!(first.iter().all(|o| orders.contains(o) && state.matches(o)));
        assert_eq!(first, apply(&orders, &state));
    }

    #[test]
    fn test_sort_id_is_case_insensitive() {
        let mut state = QueryState::default();
        state.sort_by(SortField::Id);
        assert_eq!(ids(&apply(&sample(), &state)), vec!["a1", "B2", "C3", "d4"]);
    }

    #[test]
    fn test_sort_amount_desc_is_stable_for_ties() {
        let mut state = QueryState::default();
        state.sort_by(SortField::Amount);
        assert_eq!(state.sort_direction, SortDirection::Desc);
        // a1 and B2 tie at 100.0 and keep their input order
        assert_eq!(ids(&apply(&sample(), &state)), vec!["C3", "d4", "a1", "B2"]);
    }

    #[test]
    fn test_sort_amount_asc_is_stable_for_ties() {
        let mut state = QueryState::default();
        state.toggle_sort(SortField::Amount);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert_eq!(ids(&apply(&sample(), &state)), vec!["a1", "B2", "d4", "C3"]);
    }

    #[test]
    fn test_sort_date_compares_calendar_dates() {
        let mut orders = sample();
        orders.push(order("e5", "Bob", 1.0, OrderStatus::Completed, "2023-12-31T22:00:00Z"));
        let mut state = QueryState::default();
        state.sort_by(SortField::Date);
        state.sort_direction = SortDirection::Asc;
        assert_eq!(ids(&apply(&orders, &state)), vec!["e5", "B2", "C3", "a1", "d4"]);
    }

    #[test]
    fn test_unparsable_dates_sort_first() {
        let orders = vec![
            order("x", "A", 1.0, OrderStatus::Pending, "2024-05-01"),
            order("y", "B", 1.0, OrderStatus::Pending, "15/03/2024"),
        ];
        let mut state = QueryState::default();
        state.toggle_sort(SortField::Date);
        assert_eq!(ids(&apply(&orders, &state)), vec!["y", "x"]);
    }

    #[test]
    fn test_clear_sort_restores_input_order() {
        let orders = sample();
        let mut state = QueryState::default();
        state.sort_by(SortField::Customer);
        assert_eq!(ids(&apply(&orders, &state)), vec!["d4", "a1", "C3", "B2"]);
        state.clear_sort();
        assert_eq!(ids(&apply(&orders, &state)), vec!["C3", "a1", "B2", "d4"]);
    }

    #[test]
    fn test_toggle_sort_flips_direction_on_same_field() {
        let mut state = QueryState::default();
        state.toggle_sort(SortField::Customer);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        state.toggle_sort(SortField::Customer);
        assert_eq!(state.sort_direction, SortDirection::Desc);
        state.toggle_sort(SortField::Date);
        assert_eq!(state.sort_field, SortField::Date);
        assert_eq!(state.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let orders = sample();
        let snapshot = orders.clone();
        let mut state = QueryState::default();
        state.sort_by(SortField::Amount);
        let _ = apply(&orders, &state);
        assert_eq!(orders, snapshot);
    }
}
