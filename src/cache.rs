//! Expiring bearer-token cache

use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Lifetime given to every cached token, regardless of the server's `expires_in`
pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

const TOKEN_KEY: &str = "sasapay_auth_token";

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Single-entry token cache owned by one client.
///
/// Clones share the same entry. Concurrent callers that miss at the same time
/// will each fetch and store a token; the last write wins.
#[derive(Debug, Clone)]
pub struct TokenCache {
    entries: Arc<DashMap<&'static str, CachedToken>>,
    ttl: Duration,
}

impl TokenCache {
    /// Create an empty cache with the standard TTL
    pub fn new() -> Self {
        Self::with_ttl(TOKEN_TTL)
    }

    pub(crate) fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Return the cached token if it has not expired
    pub fn get(&self) -> Option<String> {
        let now = Instant::now();
        let entry = self.entries.get(TOKEN_KEY)?;
        if entry.expires_at > now {
            Some(entry.token.clone())
        } else {
            None
        }
    }

    /// Store a token, replacing any previous entry
    pub fn insert(&self, token: impl Into<String>) {
        let cached = CachedToken {
            token: token.into(),
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.insert(TOKEN_KEY, cached);
    }

    /// Drop the cached token
    pub fn clear(&self) {
        self.entries.remove(TOKEN_KEY);
    }

    /// Lifetime applied to each inserted token
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}
