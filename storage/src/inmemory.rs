//! In-memory [`UserStore`]. All data lives in process memory and is lost on restart.
//!
//! The map sits behind `Arc<RwLock<>>`, so clones share the same data and concurrent handlers
//! see a consistent view.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StorageError;
use crate::models::{Category, WishItem, DEFAULT_CATEGORY};
use crate::repository::UserStore;

#[derive(Debug, Clone, Default)]
struct UserData {
    categories: Vec<Category>,
}

impl UserData {
    fn with_default_category() -> Self {
        Self {
            categories: vec![Category::new(DEFAULT_CATEGORY)],
        }
    }
}

/// Store keeping every user's wishlist in a `HashMap` keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<i64, UserData>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn contains(&self, user_id: i64) -> bool {
        self.users.read().await.contains_key(&user_id)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn register(&self, user_id: i64) -> Result<bool, StorageError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user_id) {
            return Ok(false);
        }
        users.insert(user_id, UserData::with_default_category());
        debug!(user_id, "User registered");
        Ok(true)
    }

    async fn add_category(&self, user_id: i64, name: &str) -> Result<bool, StorageError> {
        let mut users = self.users.write().await;
        let Some(data) = users.get_mut(&user_id) else {
            return Ok(false);
        };
        data.categories.push(Category::new(name));
        debug!(user_id, category = %name, "Category added");
        Ok(true)
    }

    async fn add_item_to_category(
        &self,
        user_id: i64,
        category: &str,
        item: WishItem,
    ) -> Result<bool, StorageError> {
        let mut users = self.users.write().await;
        let Some(data) = users.get_mut(&user_id) else {
            return Ok(false);
        };
        let mut matched = 0usize;
        for cat in data.categories.iter_mut().filter(|c| c.name == category) {
            cat.items.push(item.clone());
            matched += 1;
        }
        debug!(user_id, category = %category, matched, item = %item.name, "Item added");
        Ok(true)
    }

    async fn list_categories(&self, user_id: i64) -> Result<Vec<String>, StorageError> {
        let users = self.users.read().await;
        Ok(users
            .get(&user_id)
            .map(|data| {
                data.categories
                    .iter()
                    .filter(|c| !c.is_default())
                    .map(|c| c.name.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list_items_by_category(&self, user_id: i64) -> Result<Vec<Category>, StorageError> {
        let users = self.users.read().await;
        users
            .get(&user_id)
            .map(|data| data.categories.clone())
            .ok_or(StorageError::UserNotFound(user_id))
    }
}
