use crate::{Generation, GenerationStore, MatchConfig, MatchOutcome, Result, Snapshot};
use std::sync::Arc;
use std::thread::JoinHandle;
use stylematch_features::{FeatureEncoder, UserProfile};

/// Read-side entry point: answers match requests against whichever
/// generation is current when the request arrives.
#[derive(Debug, Clone)]
pub struct MatchmakingService {
    encoder: Arc<FeatureEncoder>,
    store: Arc<GenerationStore>,
}

impl MatchmakingService {
    /// A service with an empty initial generation
    pub fn new(encoder: FeatureEncoder) -> Self {
        let store = GenerationStore::new(Snapshot::empty(&encoder));
        Self {
            encoder: Arc::new(encoder),
            store: Arc::new(store),
        }
    }

    pub fn from_config(config: MatchConfig) -> Result<Self> {
        Ok(Self::new(config.into_encoder()?))
    }

    /// A service whose first generation is built from `profiles`
    pub fn with_profiles(encoder: FeatureEncoder, profiles: Vec<UserProfile>) -> Result<Self> {
        let snapshot = Snapshot::build(profiles, &encoder)?;
        Ok(Self {
            encoder: Arc::new(encoder),
            store: Arc::new(GenerationStore::new(snapshot)),
        })
    }

    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    pub fn generation(&self) -> Arc<Generation> {
        self.store.current()
    }

    pub fn match_opponents(&self, user_id: &str, k: usize) -> MatchOutcome {
        self.store.current().snapshot().find_opponents(user_id, k)
    }

    /// Rebuild from a new population on the calling thread
    pub fn refresh(&self, profiles: Vec<UserProfile>) -> Result<u64> {
        self.store.rebuild(profiles, &self.encoder)
    }

    /// Rebuild from a new population on a background thread
    pub fn refresh_in_background(
        &self,
        profiles: Vec<UserProfile>,
    ) -> Result<JoinHandle<Result<u64>>> {
        self.store.spawn_rebuild(profiles, Arc::clone(&self.encoder))
    }
}
