use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{Category, WishItem, DEFAULT_CATEGORY};

/// Users → categories → items. "Not found" is reported through return values, not errors,
/// except for [`UserStore::list_items_by_category`] which must tell an unknown user apart
/// from a user without items.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates the user with a single empty `default` category. Returns false if the user already exists.
    async fn register(&self, user_id: i64) -> Result<bool, StorageError>;

    /// Appends an empty category. Returns false if the user is unknown. Duplicate names are kept.
    async fn add_category(&self, user_id: i64, name: &str) -> Result<bool, StorageError>;

    /// Appends `item` to every category named `category`. Returns true for any known user,
    /// even when no category matched; false only if the user is unknown.
    async fn add_item_to_category(
        &self,
        user_id: i64,
        category: &str,
        item: WishItem,
    ) -> Result<bool, StorageError>;

    /// Shorthand for adding to the `default` category.
    async fn add_item(&self, user_id: i64, item: WishItem) -> Result<bool, StorageError> {
        self.add_item_to_category(user_id, DEFAULT_CATEGORY, item)
            .await
    }

    /// Category names except `default`, in insertion order. Empty for an unknown user.
    async fn list_categories(&self, user_id: i64) -> Result<Vec<String>, StorageError>;

    /// Snapshot of every category including `default`, in insertion order.
    /// Fails with [`StorageError::UserNotFound`] for an unknown user.
    async fn list_items_by_category(&self, user_id: i64) -> Result<Vec<Category>, StorageError>;
}
