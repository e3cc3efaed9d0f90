//! Copy-on-write generations
//!
//! A generation is one immutable snapshot published for reading. Readers
//! clone an `Arc` to the current generation and keep it for the whole
//! query; a rebuild happens off the lock and is swapped in under a short
//! write lock, so no reader ever sees a half-built index or waits on a
//! rebuild.

use crate::{MatchError, Result, Snapshot};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use stylematch_features::{FeatureEncoder, UserProfile};

/// An immutable published snapshot
#[derive(Debug)]
pub struct Generation {
    id: u64,
    snapshot: Snapshot,
}

impl Generation {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

/// Holds the current generation and swaps in new ones
#[derive(Debug)]
pub struct GenerationStore {
    current: RwLock<Arc<Generation>>,
    rebuilding: AtomicBool,
}

impl GenerationStore {
    /// Start with `snapshot` as generation 0
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(Generation { id: 0, snapshot })),
            rebuilding: AtomicBool::new(false),
        }
    }

    /// The generation readers should use right now
    pub fn current(&self) -> Arc<Generation> {
        Arc::clone(&self.current.read())
    }

    /// Publish a built snapshot and return its generation id.
    /// Ids increase by one per publish.
    pub fn publish(&self, snapshot: Snapshot) -> u64 {
        let profiles = snapshot.len();
        let catalog_version = snapshot.catalog_version();

        let mut current = self.current.write();
        let id = current.id + 1;
        *current = Arc::new(Generation { id, snapshot });
        drop(current);

        tracing::info!(generation = id, profiles, catalog_version, "published generation");
        id
    }

    /// Build a snapshot from `profiles` and publish it
    pub fn rebuild(&self, profiles: Vec<UserProfile>, encoder: &FeatureEncoder) -> Result<u64> {
        let snapshot = Snapshot::build(profiles, encoder)?;
        Ok(self.publish(snapshot))
    }

    pub fn is_rebuilding(&self) -> bool {
        self.rebuilding.load(Ordering::Acquire)
    }

    /// Rebuild on a background thread. At most one background rebuild runs
    /// at a time.
    pub fn spawn_rebuild(
        self: &Arc<Self>,
        profiles: Vec<UserProfile>,
        encoder: Arc<FeatureEncoder>,
    ) -> Result<JoinHandle<Result<u64>>> {
        if self
            .rebuilding
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("rebuild requested while another is running; skipped");
            return Err(MatchError::RebuildInProgress);
        }

        let guard = RebuildGuard(Arc::clone(self));
        thread::Builder::new()
            .name("generation-rebuild".to_string())
            .spawn(move || {
                let result = guard.0.rebuild(profiles, &encoder);
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "background rebuild failed; keeping current generation");
                }
                result
            })
            .map_err(MatchError::from)
    }
}

/// Clears the rebuilding flag when the rebuild ends, even by panic.
/// Dropped in place if the thread never starts.
struct RebuildGuard(Arc<GenerationStore>);

impl Drop for RebuildGuard {
    fn drop(&mut self) {
        self.0.rebuilding.store(false, Ordering::Release);
    }
}
