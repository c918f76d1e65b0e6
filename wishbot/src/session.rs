//! Per-user conversation state: which multi-step flow is in progress and what has been collected so far.
//!
//! State is transient (process lifetime only). A session is created on the first event from a user
//! and never torn down.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Command whose answer is expected in the user's next message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingCommand {
    /// `/add_cat`: next text is the new category name.
    AddCategory,
    /// `/add_item`: the category picker was shown.
    AddItem,
}

/// Transient state of one user's conversation.
///
/// `pending_item_name` is only set while `pending_category` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub pending_command: Option<PendingCommand>,
    pub pending_category: Option<String>,
    pub pending_item_name: Option<String>,
}

impl Session {
    pub fn is_idle(&self) -> bool {
        self == &Session::default()
    }
}

/// Sessions keyed by user id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current session of the user (default if none yet).
    async fn session(&self, user_id: i64) -> Session;

    /// Replaces the user's session.
    async fn save(&self, user_id: i64, session: Session);

    /// Applies `apply` to the user's session (default if none yet) under a single write lock.
    async fn update(&self, user_id: i64, apply: &mut (dyn for<'s> FnMut(&'s mut Session) + Send));

    /// Returns the pending command and clears it, leaving the rest of the session untouched.
    async fn take_pending_command(&self, user_id: i64) -> Option<PendingCommand>;

    /// Resets every pending field.
    async fn clear(&self, user_id: i64);
}

/// [`SessionStore`] in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<i64, Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn session(&self, user_id: i64) -> Session {
        self.sessions
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn save(&self, user_id: i64, session: Session) {
        self.sessions.write().await.insert(user_id, session);
    }

    async fn update(&self, user_id: i64, apply: &mut (dyn for<'s> FnMut(&'s mut Session) + Send)) {
        let mut sessions = self.sessions.write().await;
        apply(sessions.entry(user_id).or_default());
    }

    async fn take_pending_command(&self, user_id: i64) -> Option<PendingCommand> {
        self.sessions
            .write()
            .await
            .entry(user_id)
            .or_default()
            .pending_command
            .take()
    }

    async fn clear(&self, user_id: i64) {
        self.sessions.write().await.insert(user_id, Session::default());
    }
}
