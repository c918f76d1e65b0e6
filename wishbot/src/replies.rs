//! Reply texts, keyboards and list rendering.

use std::fmt::{self, Write};

use storage::{Category, DEFAULT_CATEGORY};
use wishbot_core::{Button, ButtonRow};

use crate::commands::{category_callback, Command};

pub const WELCOME: &str = "Hi! I keep your wishlist. What would you like to do?";
pub const CATEGORY_ADDED: &str = "Category saved. What would you like to do next?";
pub const ITEM_ADDED: &str = "Item saved. What would you like to do next?";
pub const CANCELLED: &str = "Cancelled. What would you like to do?";
pub const ASK_CATEGORY_NAME: &str = "Send a name for the new category";
pub const ASK_CATEGORY_CHOICE: &str = "Choose a category for the new item";
pub const ASK_ITEM_NAME: &str = "Send the item name";
pub const ASK_ITEM_URL: &str = "Send a link to the item";
pub const NO_CATEGORIES: &str = "You have no categories yet";
pub const NOT_REGISTERED: &str = "Send /start to create your wishlist first";
pub const UNKNOWN_COMMAND: &str = "Unknown command";
pub const GENERIC_ERROR: &str = "Something went wrong, please try again later";

/// Label of the items that were added without choosing a category.
pub const NO_CATEGORY_LABEL: &str = "No category";

/// The four top-level actions, two per row.
pub fn main_menu() -> Vec<ButtonRow> {
    vec![
        vec![
            Button::new("Add category", Command::AddCategory.as_str()),
            Button::new("Add item", Command::AddItem.as_str()),
        ],
        vec![
            Button::new("Show categories", Command::ShowCategories.as_str()),
            Button::new("Show items", Command::ShowItems.as_str()),
        ],
    ]
}

pub fn cancel_only() -> Vec<ButtonRow> {
    vec![vec![Button::new("Cancel", Command::Cancel.as_str())]]
}

/// One row per category, then a trailing "no category" row selecting `default`.
pub fn category_picker(categories: &[String]) -> Vec<ButtonRow> {
    categories
        .iter()
        .map(|name| vec![Button::new(name.clone(), category_callback(name))])
        .chain(std::iter::once(vec![Button::new(
            NO_CATEGORY_LABEL,
            category_callback(DEFAULT_CATEGORY),
        )]))
        .collect()
}

/// `1. Books\n2. Games`
pub fn render_categories(categories: &[String]) -> Result<String, fmt::Error> {
    if categories.is_empty() {
        return Ok(NO_CATEGORIES.to_string());
    }
    let mut out = String::new();
    for (i, name) in categories.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write!(out, "{}. {}", i + 1, name)?;
    }
    Ok(out)
}

/// Header per category (the default one labelled "No category") followed by its numbered items.
pub fn render_items(categories: &[Category]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let header = if category.is_default() {
            NO_CATEGORY_LABEL
        } else {
            category.name.as_str()
        };
        writeln!(out, "{}:", header)?;
        for (n, item) in category.items.iter().enumerate() {
            writeln!(out, "{}. {} — {}", n + 1, item.name, item.url)?;
        }
    }
    Ok(out.trim_end().to_string())
}
