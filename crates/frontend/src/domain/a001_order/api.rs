//! Order provider: placeholder posts and users turned into orders.

use chrono::Utc;
use contracts::domain::a001_order::provider::{synthesize_orders, PostDto, UserDto};
use contracts::domain::a001_order::Order;
use contracts::shared::config::ProviderConfig;
use contracts::shared::error::{DashboardError, Result};
use contracts::shared::synthetic::SyntheticRng;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| DashboardError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(DashboardError::Http {
            status: response.status(),
        });
    }

    response.json::<T>().await.map_err(decode_error)
}

/// A 2xx body that could not be read or did not match the DTO.
fn decode_error(e: gloo_net::Error) -> DashboardError {
    DashboardError::Decode(e.to_string())
}

pub async fn fetch_posts(config: &ProviderConfig) -> Result<Vec<PostDto>> {
    get_json(&config.posts_url).await
}

pub async fn fetch_users(config: &ProviderConfig) -> Result<Vec<UserDto>> {
    get_json(&config.users_url).await
}

/// Fetch and synthesize the order list.
///
/// Never fails: without posts the list is empty, without users every order
/// gets the unknown-customer placeholder.
pub async fn load_orders(config: &ProviderConfig, rng: &mut SyntheticRng) -> Vec<Order> {
    let posts = match fetch_posts(config).await {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Failed to load posts from {}: {}", config.posts_url, e);
            return Vec::new();
        }
    };

    let users = match fetch_users(config).await {
        Ok(users) => users,
        Err(e) => {
            log::error!("Failed to load users from {}: {}", config.users_url, e);
            Vec::new()
        }
    };

    let orders = synthesize_orders(&posts, &users, Utc::now(), rng, config.order_limit);
    leptos::logging::log!("loaded {} orders", orders.len());
    orders
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_failures_are_decode_errors() {
        let json_error = serde_json::from_str::<Vec<PostDto>>("{").unwrap_err();
        let error = decode_error(gloo_net::Error::SerdeError(json_error));
        assert!(matches!(error, DashboardError::Decode(_)));

        let error = decode_error(gloo_net::Error::GlooError("body already read".to_string()));
        assert!(matches!(error, DashboardError::Decode(msg) if msg.contains("body already read")));
    }
}
