//! Debug history ring buffer

use std::collections::VecDeque;
use std::time::SystemTime;

use serde::Serialize;
use serde_json::Value;

/// One recorded state change
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DebugHistoryRecord {
    /// `"scope.key"`
    pub key: String,
    /// Value before the change; `None` on first registration
    pub previous: Option<Value>,
    pub value: Value,
    pub timestamp: SystemTime,
}

/// Bounded log of state changes, oldest first
#[derive(Clone, Debug)]
pub struct DebugHistory {
    records: VecDeque<DebugHistoryRecord>,
    capacity: usize,
    /// Records evicted because the buffer was full
    dropped: u64,
}

impl DebugHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(1_024)),
            capacity,
            dropped: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Append a record, evicting the oldest when at capacity
    pub fn push(&mut self, record: DebugHistoryRecord) {
        if self.capacity == 0 {
            self.dropped += 1;
            return;
        }

        // Ring buffer: remove oldest if at capacity
        if self.records.len() >= self.capacity {
            self.records.pop_front();
            self.dropped += 1;
        }
        self.records.push_back(record);
    }

    pub fn records(&self) -> impl Iterator<Item = &DebugHistoryRecord> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.dropped = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(n: i64) -> DebugHistoryRecord {
        DebugHistoryRecord {
            key: "shared.n".into(),
            previous: None,
            value: json!(n),
            timestamp: SystemTime::now(),
        }
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut history = DebugHistory::new(3);
        for n in 0..5 {
            history.push(record(n));
        }
        let values: Vec<_> = history.records().map(|r| r.value.clone()).collect();
        assert_eq!(values, vec![json!(2), json!(3), json!(4)]);
        assert_eq!(history.dropped(), 2);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = DebugHistory::new(0);
        history.push(record(1));
        assert!(history.is_empty());
        assert_eq!(history.dropped(), 1);
    }
}
