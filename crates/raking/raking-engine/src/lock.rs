//! Poll-scoped run exclusivity.
//! At most one raking run may be in flight per poll; different polls never
//! block each other. Acquisition is non-blocking.

use std::sync::Mutex;

use raking_core::{FxHashSet, RakingError};

/// Set of polls with a run in flight.
#[derive(Debug, Default)]
pub struct PollLockRegistry {
    active: Mutex<FxHashSet<String>>,
}

impl PollLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `poll` for the lifetime of the returned guard.
    /// Fails immediately if another run holds it.
    pub fn try_acquire(&self, poll: &str) -> Result<PollGuard<'_>, RakingError> {
        // A poisoned set is still consistent: guards only insert and remove.
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        if !active.insert(poll.to_string()) {
            return Err(RakingError::RunInProgress {
                poll: poll.to_string(),
            });
        }
        Ok(PollGuard {
            registry: self,
            poll: poll.to_string(),
        })
    }

    pub fn is_locked(&self, poll: &str) -> bool {
        let active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        active.contains(poll)
    }
}

/// Releases its poll on drop.
#[derive(Debug)]
pub struct PollGuard<'a> {
    registry: &'a PollLockRegistry,
    poll: String,
}

impl PollGuard<'_> {
    pub fn poll(&self) -> &str {
        &self.poll
    }
}

impl Drop for PollGuard<'_> {
    fn drop(&mut self) {
        let mut active = self.registry.active.lock().unwrap_or_else(|e| e.into_inner());
        active.remove(&self.poll);
    }
}
