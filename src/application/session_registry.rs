//! Registry of open browser chat sessions.
//!
//! Each session owns one `SessionContext` behind its own async mutex, so
//! turns on one session run one at a time while other sessions proceed
//! independently.
//!
//! ```text
//! token-a -> Mutex<SessionContext { lead 12 }>, last seen 10:02
//! token-b -> Mutex<SessionContext { lead 15 }>, last seen 09:31
//! ```
//!
//! Browsers rarely log out, so sessions untouched for longer than the idle
//! timeout are dropped by [`SessionRegistry::start_sweeper`]. The lead itself
//! stays in the store and can be reloaded from the session picker.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};
use tokio::time::MissedTickBehavior;

use crate::domain::conversation::SessionContext;
use crate::domain::foundation::ChatSessionId;
use crate::domain::lead::LeadError;

/// Shared handle to one session's context.
pub type SessionHandle = Arc<Mutex<SessionContext>>;

struct Entry {
    handle: SessionHandle,
    last_activity: Mutex<Instant>,
}

/// In-process map of session token to context.
///
/// Uses `RwLock` for the map since lookups (every turn) vastly outnumber
/// opens and closes.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<ChatSessionId, Entry>>,
    idle_timeout: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(Duration::from_secs(1800))
    }
}

impl SessionRegistry {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Registers a context under a fresh token.
    pub async fn open(&self, context: SessionContext) -> ChatSessionId {
        let id = ChatSessionId::new();
        let entry = Entry {
            handle: Arc::new(Mutex::new(context)),
            last_activity: Mutex::new(Instant::now()),
        };
        self.sessions.write().await.insert(id, entry);
        id
    }

    /// Looks up the handle for a token and marks the session as active.
    pub async fn get(&self, id: &ChatSessionId) -> Option<SessionHandle> {
        let sessions = self.sessions.read().await;
        let entry = sessions.get(id)?;
        *entry.last_activity.lock().await = Instant::now();
        Some(entry.handle.clone())
    }

    /// Like `get`, but an unknown token is a `ChatSessionNotFound` error.
    pub async fn require(&self, id: &ChatSessionId) -> Result<SessionHandle, LeadError> {
        self.get(id)
            .await
            .ok_or_else(|| LeadError::chat_session_not_found(*id))
    }

    /// Drops a session. Returns false if the token was unknown.
    pub async fn close(&self, id: &ChatSessionId) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    /// Drops every session idle for longer than the timeout as of `now`.
    /// Returns how many were removed.
    pub async fn evict_idle(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let mut idle = Vec::new();
        for (id, entry) in sessions.iter() {
            let last = *entry.last_activity.lock().await;
            if now.saturating_duration_since(last) > self.idle_timeout {
                idle.push(*id);
            }
        }
        for id in &idle {
            sessions.remove(id);
        }
        before - sessions.len()
    }

    /// Spawns a task that evicts idle sessions every `interval`.
    ///
    /// The task holds only a weak reference and stops once the registry is
    /// dropped.
    pub fn start_sweeper(self: &Arc<Self>, interval: Duration) {
        let registry: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            // interval() panics on a zero period
            let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(1)));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let Some(registry) = registry.upgrade() else {
                    break;
                };
                let evicted = registry.evict_idle(Instant::now()).await;
                if evicted > 0 {
                    let remaining = registry.len().await;
                    tracing::info!(evicted, remaining, "Idle chat sessions dropped");
                }
            }
        });
    }

    /// Number of open sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
