//! `RecordStore` trait: the external respondent record store.
//!
//! The engine never calls this itself. The raking service reads a snapshot
//! through `fetch_records`, rakes it, and writes the new weights back through
//! `persist_weights`, holding a poll-scoped guard across all three steps.

use std::sync::Arc;

use crate::errors::StoreError;
use crate::types::record::RespondentRecord;

pub trait RecordStore: Send + Sync {
    /// Consistent snapshot of every record belonging to `poll`.
    /// An unknown poll may be reported either as an empty list or as
    /// `StoreError::PollNotFound`.
    fn fetch_records(&self, poll: &str) -> Result<Vec<RespondentRecord>, StoreError>;

    /// Replace the stored weights of `poll`'s records with those in `records`.
    /// Non-weight fields are not written.
    fn persist_weights(&self, poll: &str, records: &[RespondentRecord]) -> Result<(), StoreError>;
}

// ─── Arc blanket impl ───────────────────────────────────────────────

impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    fn fetch_records(&self, poll: &str) -> Result<Vec<RespondentRecord>, StoreError> {
        (**self).fetch_records(poll)
    }

    fn persist_weights(&self, poll: &str, records: &[RespondentRecord]) -> Result<(), StoreError> {
        (**self).persist_weights(poll, records)
    }
}
