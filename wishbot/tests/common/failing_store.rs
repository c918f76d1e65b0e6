#![allow(dead_code)]

//! [`storage::UserStore`] whose backend is always down.

use async_trait::async_trait;
use storage::{Category, StorageError, UserStore, WishItem};

fn unavailable() -> StorageError {
    StorageError::Backend("store unavailable".to_string())
}

pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn register(&self, _user_id: i64) -> Result<bool, StorageError> {
        Err(unavailable())
    }

    async fn add_category(&self, _user_id: i64, _name: &str) -> Result<bool, StorageError> {
        Err(unavailable())
    }

    async fn add_item_to_category(
        &self,
        _user_id: i64,
        _category: &str,
        _item: WishItem,
    ) -> Result<bool, StorageError> {
        Err(unavailable())
    }

    async fn list_categories(&self, _user_id: i64) -> Result<Vec<String>, StorageError> {
        Err(unavailable())
    }

    async fn list_items_by_category(&self, _user_id: i64) -> Result<Vec<Category>, StorageError> {
        Err(unavailable())
    }
}
