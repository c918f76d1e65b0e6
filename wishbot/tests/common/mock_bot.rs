#![allow(dead_code)]

//! Mock implementation of [`wishbot_core::Bot`] for integration tests.
//!
//! Records every send so tests can assert on the reply text and keyboard without hitting Telegram.
//! Can be switched to fail every send to exercise transport errors.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use wishbot_core::{Bot, ButtonRow, DbotError, Result};

/// One recorded outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        user_id: i64,
        text: String,
    },
    Buttons {
        user_id: i64,
        text: String,
        rows: Vec<ButtonRow>,
    },
}

impl Sent {
    pub fn text(&self) -> &str {
        match self {
            Sent::Text { text, .. } | Sent::Buttons { text, .. } => text,
        }
    }

    pub fn rows(&self) -> Option<&[ButtonRow]> {
        match self {
            Sent::Text { .. } => None,
            Sent::Buttons { rows, .. } => Some(rows),
        }
    }
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail: AtomicBool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following send return a Bot error.
    pub fn fail_sends(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> Sent {
        self.sent
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("nothing was sent")
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    fn record(&self, sent: Sent) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("mock send failure".to_string()));
        }
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_text(&self, user_id: i64, text: &str) -> Result<()> {
        self.record(Sent::Text {
            user_id,
            text: text.to_string(),
        })
    }

    async fn send_with_buttons(&self, user_id: i64, text: &str, rows: &[ButtonRow]) -> Result<()> {
        self.record(Sent::Buttons {
            user_id,
            text: text.to_string(),
            rows: rows.to_vec(),
        })
    }
}
