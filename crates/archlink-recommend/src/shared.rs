//! Registry access from several threads at once.

use std::sync::{Arc, Mutex, MutexGuard};

use archlink_model::{Claimant, NounMapping};

use crate::error::{RecommendError, Result};
use crate::relation::{InstanceId, RecommendedRelation};
use crate::state::RecommendationState;

/// A [`RecommendationState`] behind a mutex.
///
/// Every upsert holds the lock from the similarity lookup until the merge or
/// insert is done, so concurrent callers never create two near-duplicate
/// instances.
#[derive(Debug, Clone, Default)]
pub struct SharedRecommendationState {
    inner: Arc<Mutex<RecommendationState>>,
}

impl SharedRecommendationState {
    pub fn new(state: RecommendationState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RecommendationState>> {
        self.inner.lock().map_err(|_| RecommendError::StatePoisoned)
    }

    pub fn add_recommended_instance(
        &self,
        name: &str,
        type_name: &str,
        claimant: Claimant,
        probability: f64,
        name_mappings: &[Arc<NounMapping>],
        type_mappings: &[Arc<NounMapping>],
    ) -> Result<InstanceId> {
        let mut state = self.lock()?;
        Ok(state.add_recommended_instance(
            name,
            type_name,
            claimant,
            probability,
            name_mappings,
            type_mappings,
        ))
    }

    pub fn add_recommended_relation(&self, relation: RecommendedRelation) -> Result<usize> {
        Ok(self.lock()?.add_recommended_relation(relation))
    }

    /// Runs `f` with exclusive access to the state.
    pub fn with_state<T>(&self, f: impl FnOnce(&mut RecommendationState) -> T) -> Result<T> {
        let mut state = self.lock()?;
        Ok(f(&mut state))
    }

    /// A consistent copy of the current state.
    pub fn snapshot(&self) -> Result<RecommendationState> {
        Ok(self.lock()?.clone())
    }

    /// Unwraps the state if this is the last handle, otherwise clones it.
    pub fn into_inner(self) -> Result<RecommendationState> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner().map_err(|_| RecommendError::StatePoisoned),
            Err(shared) => shared
                .lock()
                .map(|state| state.clone())
                .map_err(|_| RecommendError::StatePoisoned),
        }
    }
}
