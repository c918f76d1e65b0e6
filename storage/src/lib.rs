//! Storage crate: users, their wishlist categories and items.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – WishItem, Category
//! - [`repository`] – UserStore trait
//! - [`inmemory`] – InMemoryUserStore (process memory only, lost on restart)

mod error;
mod inmemory;
mod models;
mod repository;

pub use error::StorageError;
pub use inmemory::InMemoryUserStore;
pub use models::{Category, WishItem, DEFAULT_CATEGORY};
pub use repository::UserStore;
