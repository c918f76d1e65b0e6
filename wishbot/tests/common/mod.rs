#![allow(dead_code)]

pub mod failing_store;
pub mod mock_bot;

use std::sync::Arc;

use storage::{InMemoryUserStore, UserStore};
use wishbot::{ConversationEngine, InMemorySessionStore};

use mock_bot::MockBot;

/// Engine wired to in-memory stores and a recording bot; the stores are shared clones so tests can inspect them.
pub struct Harness {
    pub engine: ConversationEngine,
    pub store: InMemoryUserStore,
    pub sessions: InMemorySessionStore,
    pub bot: Arc<MockBot>,
}

impl Harness {
    pub fn new() -> Self {
        let store = InMemoryUserStore::new();
        let sessions = InMemorySessionStore::new();
        let bot = Arc::new(MockBot::new());
        let engine = ConversationEngine::new(
            Arc::new(store.clone()),
            Arc::new(sessions.clone()),
            bot.clone(),
        );
        Self {
            engine,
            store,
            sessions,
            bot,
        }
    }

    /// Engine backed by `store` instead; [`Harness::store`] is then a fresh, unused in-memory store.
    pub fn with_store(store: Arc<dyn UserStore>) -> Self {
        let sessions = InMemorySessionStore::new();
        let bot = Arc::new(MockBot::new());
        let engine = ConversationEngine::new(store, Arc::new(sessions.clone()), bot.clone());
        Self {
            engine,
            store: InMemoryUserStore::new(),
            sessions,
            bot,
        }
    }
}
