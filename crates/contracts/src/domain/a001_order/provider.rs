//! Turning placeholder-API posts and users into orders.
//!
//! The HTTP part lives in the frontend; this module only shapes the decoded
//! records, so it can be exercised without a network.

use super::aggregate::{Order, OrderStatus};
use crate::shared::synthetic::{order_id, SyntheticRng};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const PROJECTS: [&str; 8] = [
    "Website Redesign",
    "Mobile App",
    "E-commerce Platform",
    "API Development",
    "Database Migration",
    "UI/UX Design",
    "Testing Suite",
    "DevOps Setup",
];

pub const LOCATIONS: [&str; 4] = ["New York", "San Francisco", "London", "Tokyo"];

pub const UNKNOWN_CUSTOMER: &str = "Unknown User";

/// Order dates fall within this many days before "now".
const DATE_WINDOW_DAYS: i64 = 30;

/// `/posts` record. Only the shape matters, the content is discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: u64,
    #[serde(default)]
    pub user_id: u64,
    #[serde(default)]
    pub title: String,
}

/// `/users` record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Build up to `limit` orders, one per post, in post order.
///
/// Customer is the user at `index % users.len()`; product, status and
/// location cycle through fixed lists; amount and date are drawn from `rng`.
pub fn synthesize_orders(
    posts: &[PostDto],
    users: &[UserDto],
    now: DateTime<Utc>,
    rng: &mut SyntheticRng,
    limit: usize,
) -> Vec<Order> {
    let statuses = OrderStatus::all();

    posts
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, _post)| {
            let customer = if users.is_empty() {
                UNKNOWN_CUSTOMER.to_string()
            } else {
                users[index % users.len()].name.clone()
            };
            let offset_secs = rng.range(0, (DATE_WINDOW_DAYS * 24 * 60 * 60) as u64) as i64;
            let date = (now - Duration::seconds(offset_secs)).date_naive();

            Order {
                id: order_id(rng),
                customer,
                product: PROJECTS[index % PROJECTS.len()].to_string(),
                amount: rng.range(50, 1050) as f64,
                status: statuses[index % statuses.len()],
                date: date.format("%Y-%m-%d").to_string(),
                location: Some(LOCATIONS[index % LOCATIONS.len()].to_string()),
            }
        })
        .collect()
}

/// The "add order" button: a local-only order dated today.
pub fn new_order(rng: &mut SyntheticRng, now: DateTime<Utc>) -> Order {
    const NEW_STATUSES: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Approved,
        OrderStatus::Rejected,
    ];
    let status = rng.pick(&NEW_STATUSES).copied().unwrap_or(OrderStatus::Pending);

    Order {
        id: order_id(rng),
        customer: "New Customer".to_string(),
        product: "New Product".to_string(),
        amount: rng.range(100, 1100) as f64,
        status,
        date: now.date_naive().format("%Y-%m-%d").to_string(),
        location: None,
    }
}
