//! Wishlist data model.

use serde::{Deserialize, Serialize};

/// Catch-all category every registered user owns. Hidden from category listings.
pub const DEFAULT_CATEGORY: &str = "default";

/// One desired thing: display name plus link. Neither field is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishItem {
    pub name: String,
    pub url: String,
}

impl WishItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Named group of items belonging to one user. Names are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<WishItem>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_CATEGORY
    }
}
