//! # Resource State Machine
//!
//! Generic request lifecycle shared by every data-backed view.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::error::ApiError;

/// Lifecycle state of one fetched resource.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    /// No fetch has been requested yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last-issued fetch succeeded.
    Ready(T),
    /// The last-issued fetch failed. The full error is kept so consumers
    /// can still distinguish network failures from HTTP rejections.
    Failed(ApiError),
}

impl<T> ResourceState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResourceState::Loading)
    }

    /// The ready value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            ResourceState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ResourceState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// What a resource does when a fetch fails.
///
/// Substituting canned data on failure masks real outages as healthy
/// responses, so it is never the default: callers must opt in, and the
/// substitution is logged when it happens.
#[derive(Debug, Clone)]
pub enum FallbackPolicy<T> {
    /// Surface failures as [`ResourceState::Failed`]. The default.
    None,
    /// Offline demo mode: substitute this dataset and report `Ready`.
    Sample(T),
}

/// One resource's request lifecycle.
///
/// Cheap to clone; clones share the same state, so a UI layer can hold one
/// handle while background tasks hold another.
pub struct Resource<T> {
    state: Arc<RwLock<ResourceState<T>>>,
    generation: Arc<AtomicU64>,
    fallback: Arc<FallbackPolicy<T>>,
    changes_tx: async_channel::Sender<()>,
    changes_rx: async_channel::Receiver<()>,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
            fallback: Arc::clone(&self.fallback),
            changes_tx: self.changes_tx.clone(),
            changes_rx: self.changes_rx.clone(),
        }
    }
}

impl<T> Resource<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a resource that surfaces failures.
    pub fn new() -> Self {
        Self::with_fallback(FallbackPolicy::None)
    }

    /// Create a resource with an explicit failure policy.
    pub fn with_fallback(fallback: FallbackPolicy<T>) -> Self {
        let (changes_tx, changes_rx) = async_channel::unbounded();
        Self {
            state: Arc::new(RwLock::new(ResourceState::Idle)),
            generation: Arc::new(AtomicU64::new(0)),
            fallback: Arc::new(fallback),
            changes_tx,
            changes_rx,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ResourceState<T> {
        self.state.read().clone()
    }

    /// Receiver signalled after every state transition.
    ///
    /// Notifications are consumed by whichever subscriber receives them
    /// first; a consumer should re-check `state()` after each wakeup rather
    /// than assume one notification per transition.
    pub fn subscribe(&self) -> async_channel::Receiver<()> {
        self.changes_rx.clone()
    }

    /// Start a fetch, replacing any in-flight one.
    ///
    /// The new fetch's generation supersedes all earlier ones: a completion
    /// from a superseded fetch is discarded without touching state, so the
    /// resource always settles on the last-issued input.
    pub fn load<F>(&self, fetch: F)
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            *self.state.write() = ResourceState::Loading;
        }
        let _ = self.changes_tx.try_send(());

        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        let fallback = Arc::clone(&self.fallback);
        let changes_tx = self.changes_tx.clone();

        tokio::spawn(async move {
            let outcome = fetch.await;

            if current.load(Ordering::SeqCst) != generation {
                tracing::debug!(generation, "Discarding stale resource response");
                return;
            }

            let next = match outcome {
                Ok(value) => ResourceState::Ready(value),
                Err(error) => match fallback.as_ref() {
                    FallbackPolicy::None => ResourceState::Failed(error),
                    FallbackPolicy::Sample(sample) => {
                        tracing::warn!(
                            error = %error,
                            "Fetch failed, substituting sample data (offline demo mode)"
                        );
                        ResourceState::Ready(sample.clone())
                    }
                },
            };

            {
                *state.write() = next;
            }
            let _ = changes_tx.try_send(());
        });
    }
}

impl<T> Default for Resource<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
