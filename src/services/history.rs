use crate::catalog::Mood;
use crate::error::{ApiError, Result};
use crate::models::{MoodCount, MoodSearchRecord, SearchKind};
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

const DEFAULT_CAPACITY: usize = 1000;
const DEFAULT_RECENT_LIMIT: usize = 50;

/// Aggregate view of recorded searches for the admin dashboard.
#[derive(Debug, Clone)]
pub struct HistoryStats {
    pub total: usize,
    pub moods: Vec<MoodCount>,
}

/// Bounded in-memory log of mood searches.
///
/// Every analysis and lookup appends a record; once the buffer is full the
/// oldest records are dropped. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct HistoryService {
    records: Arc<RwLock<VecDeque<MoodSearchRecord>>>,
    capacity: usize,
}

impl HistoryService {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::new(RwLock::new(VecDeque::with_capacity(capacity.min(64)))),
            capacity,
        }
    }

    /// Record a free-text classification.
    pub fn record_analysis(&self, text: &str, mood: Mood) -> Result<()> {
        self.push(MoodSearchRecord {
            id: Uuid::new_v4(),
            kind: SearchKind::Analysis,
            input: text.to_string(),
            mood: mood.as_str().to_string(),
            fallback: false,
            timestamp: Utc::now(),
        })
    }

    /// Record a direct label lookup and how it resolved.
    pub fn record_lookup(&self, label: &str, resolved: &str, fallback: bool) -> Result<()> {
        self.push(MoodSearchRecord {
            id: Uuid::new_v4(),
            kind: SearchKind::Lookup,
            input: label.to_string(),
            mood: resolved.to_string(),
            fallback,
            timestamp: Utc::now(),
        })
    }

    /// Most recent records first, capped at `limit` (default 50).
    pub fn recent(&self, limit: Option<usize>) -> Result<Vec<MoodSearchRecord>> {
        let records = self.read()?;
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        Ok(records.iter().rev().take(limit).cloned().collect())
    }

    /// Total and per-mood counts, in vocabulary order.
    pub fn stats(&self) -> Result<HistoryStats> {
        let records = self.read()?;
        let moods = Mood::VOCABULARY
            .iter()
            .map(|mood| MoodCount {
                mood: mood.as_str().to_string(),
                count: records.iter().filter(|r| r.mood == mood.as_str()).count(),
            })
            .collect();

        Ok(HistoryStats {
            total: records.len(),
            moods,
        })
    }

    fn push(&self, record: MoodSearchRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| ApiError::InternalError("history lock poisoned".to_string()))?;
        while records.len() >= self.capacity.max(1) {
            records.pop_front();
        }
        records.push_back(record);
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, VecDeque<MoodSearchRecord>>> {
        self.records
            .read()
            .map_err(|_| ApiError::InternalError("history lock poisoned".to_string()))
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new()
    }
}
