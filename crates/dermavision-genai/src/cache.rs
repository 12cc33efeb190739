//! Memoizing cache for resolver results.
//!
//! One [`ResolverCache`] is built per resolver at startup and shared by
//! `Arc`. Keys are condition labels normalized with [`normalize_key`].
//!
//! The first caller for a key spawns the resolution as its own task and
//! publishes the result on a `watch` channel; every caller for that key,
//! the first included, waits on the channel. Dropping a caller therefore
//! never cancels the request other callers are waiting on, and a finished
//! resolution is cached even if nobody is left to receive it.
//!
//! Entries expire after [`CachePolicy::ttl`] and the oldest settled entry is
//! evicted once [`CachePolicy::max_entries`] is reached. Values that report
//! themselves as not [`Cacheable`] are handed to every waiter of that flight
//! and then discarded, so the next call resolves afresh.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::time::Instant;

pub const DEFAULT_MAX_ENTRIES: usize = 512;
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// `None` means unbounded. `Some(0)` disables caching.
    pub max_entries: Option<usize>,
    /// `None` means entries never expire.
    pub ttl: Option<Duration>,
}

impl CachePolicy {
    pub fn unbounded() -> Self {
        Self {
            max_entries: None,
            ttl: None,
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            max_entries: Some(DEFAULT_MAX_ENTRIES),
            ttl: Some(DEFAULT_TTL),
        }
    }
}

/// Whether a resolved value may be kept for later callers.
pub trait Cacheable {
    fn is_cacheable(&self) -> bool {
        true
    }
}

/// Receiving side of one resolution. `None` until the value is published.
type Flight<V> = Arc<watch::Receiver<Option<V>>>;

type Entries<V> = Arc<Mutex<HashMap<String, Slot<V>>>>;

struct Slot<V> {
    flight: Flight<V>,
    inserted_at: Instant,
}

enum Join<V> {
    /// Another caller already started the resolution.
    Waiting(Flight<V>),
    /// This caller must start it.
    Leading(Flight<V>, watch::Sender<Option<V>>),
}

pub struct ResolverCache<V> {
    policy: CachePolicy,
    entries: Entries<V>,
}

/// Cache key for a condition label: trimmed and lowercased.
pub fn normalize_key(label: &str) -> String {
    label.trim().to_lowercase()
}

impl<V> ResolverCache<V>
where
    V: Cacheable + Clone + Send + Sync + 'static,
{
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Return the cached value for `label`, or resolve it.
    ///
    /// At most one resolution runs per key at a time; concurrent callers get
    /// a clone of its result. `resolve` is called again only if the spawned
    /// resolution panicked.
    pub async fn get_or_resolve<F, Fut>(&self, label: &str, resolve: F) -> V
    where
        F: Fn() -> Fut,
        Fut: Future<Output = V> + Send + 'static,
    {
        let key = normalize_key(label);
        let flight = match self.join(&key).await {
            Join::Waiting(flight) => flight,
            Join::Leading(flight, tx) => {
                self.launch(key.clone(), Arc::clone(&flight), tx, resolve());
                flight
            }
        };

        let mut rx = (*flight).clone();
        let settled = rx
            .wait_for(Option::is_some)
            .await
            .ok()
            .and_then(|value| value.as_ref().cloned());

        match settled {
            Some(value) => value,
            None => {
                tracing::warn!(key = %key, "resolution task failed, resolving inline");
                discard(&self.entries, &key, &flight).await;
                resolve().await
            }
        }
    }

    /// Cached value for `label`, if present and not expired. Never waits on
    /// an in-flight resolution.
    pub async fn peek(&self, label: &str) -> Option<V> {
        let key = normalize_key(label);
        let entries = self.entries.lock().await;
        let slot = entries.get(&key)?;
        if self.is_expired(slot, Instant::now()) {
            return None;
        }
        slot.flight.borrow().as_ref().cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    async fn join(&self, key: &str) -> Join<V> {
        let (tx, rx) = watch::channel(None);
        let flight = Arc::new(rx);

        if self.policy.max_entries == Some(0) {
            return Join::Leading(flight, tx);
        }

        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        if let Some(slot) = entries.get(key) {
            if !self.is_expired(slot, now) {
                return Join::Waiting(Arc::clone(&slot.flight));
            }
            entries.remove(key);
        }

        self.make_room(&mut entries, now);

        entries.insert(
            key.to_string(),
            Slot {
                flight: Arc::clone(&flight),
                inserted_at: now,
            },
        );
        Join::Leading(flight, tx)
    }

    fn launch<Fut>(
        &self,
        key: String,
        flight: Flight<V>,
        tx: watch::Sender<Option<V>>,
        fut: Fut,
    ) where
        Fut: Future<Output = V> + Send + 'static,
    {
        let entries = Arc::clone(&self.entries);
        tokio::spawn(async move {
            let value = fut.await;
            if !value.is_cacheable() {
                discard(&entries, &key, &flight).await;
            }
            // `flight` keeps a receiver alive, so the send cannot fail.
            let _ = tx.send(Some(value));
        });
    }

    /// Evict until there is room for one more entry. Only settled entries
    /// are evicted; while every entry is in flight the cache may briefly
    /// exceed its bound.
    fn make_room(&self, entries: &mut HashMap<String, Slot<V>>, now: Instant) {
        let Some(max) = self.policy.max_entries else {
            return;
        };
        if entries.len() < max {
            return;
        }

        entries.retain(|_, slot| !self.is_expired(slot, now));

        while entries.len() >= max {
            let oldest = entries
                .iter()
                .filter(|(_, slot)| slot.flight.borrow().is_some())
                .min_by_key(|(_, slot)| slot.inserted_at)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    tracing::debug!(key = %key, "evicting oldest cache entry");
                    entries.remove(&key);
                }
                None => break,
            }
        }
    }

    fn is_expired(&self, slot: &Slot<V>, now: Instant) -> bool {
        self.policy
            .ttl
            .is_some_and(|ttl| now.duration_since(slot.inserted_at) >= ttl)
    }
}

/// Remove `key` only if it still holds this flight; a newer flight may
/// already have replaced it.
async fn discard<V>(entries: &Mutex<HashMap<String, Slot<V>>>, key: &str, flight: &Flight<V>) {
    let mut entries = entries.lock().await;
    if entries
        .get(key)
        .is_some_and(|slot| Arc::ptr_eq(&slot.flight, flight))
    {
        entries.remove(key);
    }
}
