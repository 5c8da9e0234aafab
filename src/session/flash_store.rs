//! Session-keyed flash messages with time-based expiry.
//!
//! Entries expire after the configured TTL whether or not they were read, so
//! a message left by a client that never comes back does not linger.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, trace};
use uuid::Uuid;

/// Pending messages for one session.
#[derive(Debug, Clone)]
struct FlashEntry {
    messages: Vec<String>,
    inserted_at: Instant,
}

/// A thread-safe store of read-once messages keyed by session id.
///
/// Cloning is cheap and clones share the same underlying map.
#[derive(Clone)]
pub struct FlashStore {
    entries: Arc<RwLock<HashMap<String, FlashEntry>>>,
    ttl: Duration,
}

impl FlashStore {
    /// Create a new FlashStore whose messages expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// A fresh random session id.
    pub fn new_session_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Queue a message for `session`.
    ///
    /// Messages queued before the previous one was taken are kept in order.
    /// Each push restarts the expiry clock for the session.
    pub fn push(&self, session: &str, message: impl Into<String>) {
        let now = Instant::now();

        if let Ok(mut entries) = self.entries.write() {
            let entry = entries.entry(session.to_string()).or_insert_with(|| FlashEntry {
                messages: Vec::new(),
                inserted_at: now,
            });
            if now.duration_since(entry.inserted_at) >= self.ttl {
                entry.messages.clear();
            }
            entry.messages.push(message.into());
            entry.inserted_at = now;
        }
    }

    /// Remove and return the pending messages for `session`.
    ///
    /// Returns an empty list if there are none or they have expired. A second
    /// call without an intervening `push` always returns an empty list.
    pub fn take(&self, session: &str) -> Vec<String> {
        let now = Instant::now();

        let Ok(mut entries) = self.entries.write() else {
            return Vec::new();
        };

        match entries.remove(session) {
            Some(entry) if now.duration_since(entry.inserted_at) < self.ttl => {
                trace!(count = entry.messages.len(), "Flash messages taken");
                entry.messages
            }
            _ => Vec::new(),
        }
    }

    /// Drop every expired entry.
    pub fn cleanup_expired(&self) {
        let now = Instant::now();

        if let Ok(mut entries) = self.entries.write() {
            let before = entries.len();
            entries.retain(|_, entry| now.duration_since(entry.inserted_at) < self.ttl);
            let dropped = before - entries.len();
            if dropped > 0 {
                debug!(dropped, "Expired flash messages dropped");
            }
        }
    }

    /// Run `cleanup_expired` every `every` on the current tokio runtime.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                store.cleanup_expired();
            }
        })
    }

    /// Number of sessions with an entry (including expired ones).
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl std::fmt::Debug for FlashStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlashStore")
            .field("ttl", &self.ttl)
            .field("sessions", &self.len())
            .finish()
    }
}
