//! In-memory `RecordStore`, keyed by poll.

use std::sync::RwLock;

use raking_core::{FxHashMap, FxHashSet, RecordId, RecordStore, RespondentRecord, StoreError};

/// Records held in memory, grouped by poll in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    polls: RwLock<FxHashMap<String, Vec<RespondentRecord>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = RespondentRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Add a record under its own poll.
    pub fn insert(&self, record: RespondentRecord) {
        let mut polls = self.polls.write().unwrap_or_else(|e| e.into_inner());
        polls.entry(record.poll.clone()).or_default().push(record);
    }

    /// Poll names, sorted.
    pub fn polls(&self) -> Vec<String> {
        let polls = self.polls.read().unwrap_or_else(|e| e.into_inner());
        let mut names: Vec<String> = polls.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        let polls = self.polls.read().unwrap_or_else(|e| e.into_inner());
        polls.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for InMemoryRecordStore {
    fn fetch_records(&self, poll: &str) -> Result<Vec<RespondentRecord>, StoreError> {
        let polls = self.polls.read().map_err(|e| StoreError::Backend {
            message: e.to_string(),
        })?;
        Ok(polls.get(poll).cloned().unwrap_or_default())
    }

    fn persist_weights(&self, poll: &str, records: &[RespondentRecord]) -> Result<(), StoreError> {
        let mut polls = self.polls.write().map_err(|e| StoreError::Backend {
            message: e.to_string(),
        })?;

        let Some(stored) = polls.get_mut(poll) else {
            if records.is_empty() {
                return Ok(());
            }
            return Err(StoreError::PollNotFound {
                poll: poll.to_string(),
            });
        };

        if stored.len() != records.len() {
            return Err(StoreError::RecordSetMismatch {
                poll: poll.to_string(),
                reason: format!("stored {} records, received {}", stored.len(), records.len()),
            });
        }

        let weights: FxHashMap<RecordId, f64> = records.iter().map(|r| (r.id, r.weight)).collect();
        if weights.len() != records.len() {
            return Err(StoreError::RecordSetMismatch {
                poll: poll.to_string(),
                reason: "duplicate record ids".to_string(),
            });
        }
        let stored_ids: FxHashSet<RecordId> = stored.iter().map(|r| r.id).collect();
        if let Some(unknown) = weights.keys().find(|id| !stored_ids.contains(id)) {
            return Err(StoreError::RecordSetMismatch {
                poll: poll.to_string(),
                reason: format!("record {unknown} is not part of the poll"),
            });
        }

        for record in stored.iter_mut() {
            if let Some(&weight) = weights.get(&record.id) {
                record.weight = weight;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raking_core::{AgeBracket, Demographics, Education, Gender, IncomeBracket, Race, Urbanity};

    fn record(id: u64, poll: &str) -> RespondentRecord {
        RespondentRecord::new(
            id,
            poll,
            "Candidate A",
            Demographics {
                age: AgeBracket::From30To44,
                gender: Gender::Male,
                race: Race::White,
                income: IncomeBracket::Under50k,
                urbanity: Urbanity::Urban,
                education: Education::CollegeDegree,
            },
        )
    }

    #[test]
    fn fetch_is_scoped_to_poll() {
        let store = InMemoryRecordStore::from_records([record(1, "A"), record(2, "B"), record(3, "A")]);
        assert_eq!(store.fetch_records("A").unwrap().len(), 2);
        assert!(store.fetch_records("C").unwrap().is_empty());
        assert_eq!(store.polls(), vec!["A".to_string(), "B".to_string()]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn persist_updates_only_weights() {
        let store = InMemoryRecordStore::from_records([record(1, "A"), record(2, "A")]);
        let mut records = store.fetch_records("A").unwrap();
        records[0].weight = 2.5;
        records[0].candidate = "Candidate Z".to_string();
        store.persist_weights("A", &records).unwrap();

        let stored = store.fetch_records("A").unwrap();
        assert_eq!(stored[0].weight, 2.5);
        assert_eq!(stored[0].candidate, "Candidate A");
        assert_eq!(stored[1].weight, 1.0);
    }

    #[test]
    fn persist_rejects_foreign_records() {
        let store = InMemoryRecordStore::from_records([record(1, "A"), record(2, "A")]);
        let err = store
            .persist_weights("A", &[record(1, "A"), record(9, "A")])
            .unwrap_err();
        assert!(matches!(err, StoreError::RecordSetMismatch { .. }));

        let err = store.persist_weights("A", &[record(1, "A")]).unwrap_err();
        assert!(matches!(err, StoreError::RecordSetMismatch { .. }));

        let err = store.persist_weights("Z", &[record(1, "Z")]).unwrap_err();
        assert!(matches!(err, StoreError::PollNotFound { .. }));
    }
}
