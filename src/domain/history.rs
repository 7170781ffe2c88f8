use super::models::HistoryEntry;
use serde::{Deserialize, Serialize};

pub const HISTORY_CAPACITY: usize = 20;

/// Newest-first log of executed queries, never longer than
/// [`HISTORY_CAPACITY`]. Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Prepends `entry`. Returns the evicted oldest entry when the log was
    /// already full.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.insert(0, entry);
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<HistoryEntry>> for HistoryLog {
    fn from(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }
}

impl From<HistoryLog> for Vec<HistoryEntry> {
    fn from(log: HistoryLog) -> Self {
        log.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_is_newest_first() {
        let mut log = HistoryLog::default();
        log.push(HistoryEntry::new("first"));
        log.push(HistoryEntry::new("second"));
        assert_eq!(log.get(0).unwrap().query, "second");
        assert_eq!(log.get(1).unwrap().query, "first");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = HistoryLog::default();
        for i in 0..HISTORY_CAPACITY {
            assert!(log.push(HistoryEntry::new(format!("q{i}"))).is_none());
        }
        let evicted = log.push(HistoryEntry::new("overflow")).unwrap();
        assert_eq!(evicted.query, "q0");
        assert_eq!(log.len(), HISTORY_CAPACITY);
        assert_eq!(log.get(0).unwrap().query, "overflow");
        assert_eq!(log.get(HISTORY_CAPACITY - 1).unwrap().query, "q1");
    }

    #[test]
    fn test_oversized_stored_log_is_truncated() {
        let entries: Vec<HistoryEntry> = (0..30).map(|i| HistoryEntry::new(format!("q{i}"))).collect();
        let json = serde_json::to_string(&entries).unwrap();
        let log: HistoryLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log.len(), HISTORY_CAPACITY);
        assert_eq!(log.get(0).unwrap().query, "q0");
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = HistoryLog::default();
        log.push(HistoryEntry::new("a"));
        log.clear();
        assert!(log.is_empty());
    }
}
