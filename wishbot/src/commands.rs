//! Commands the bot understands, matched on the exact message text or button payload.

use std::fmt;
use std::str::FromStr;

/// Payload prefix of the category picker buttons: `/cat <name>`.
pub const CATEGORY_CALLBACK_PREFIX: &str = "/cat ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    AddCategory,
    AddItem,
    ShowCategories,
    ShowItems,
    Cancel,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Start => "/start",
            Command::AddCategory => "/add_cat",
            Command::AddItem => "/add_item",
            Command::ShowCategories => "/show_cat",
            Command::ShowItems => "/show_item",
            Command::Cancel => "/cancel",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/start" => Ok(Command::Start),
            "/add_cat" => Ok(Command::AddCategory),
            "/add_item" => Ok(Command::AddItem),
            "/show_cat" => Ok(Command::ShowCategories),
            "/show_item" => Ok(Command::ShowItems),
            "/cancel" => Ok(Command::Cancel),
            _ => Err(()),
        }
    }
}

/// True for the text that aborts any pending flow. Never captured as flow input.
pub fn is_cancel(text: &str) -> bool {
    text == Command::Cancel.as_str()
}

/// `/cat Books` -> `Some("Books")`. The picker's "no category" button yields `Some("default")`.
pub fn parse_category_callback(payload: &str) -> Option<&str> {
    payload.strip_prefix(CATEGORY_CALLBACK_PREFIX)
}

/// Button payload selecting `category` in the picker.
pub fn category_callback(category: &str) -> String {
    format!("{}{}", CATEGORY_CALLBACK_PREFIX, category)
}
