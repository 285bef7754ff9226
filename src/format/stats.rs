use std::collections::HashMap;

use super::RecordType;

/// Running record counters for one metafile.
///
/// `max_record_size` feeds the header's max record size field at finalize.
#[derive(Debug, Clone, Default)]
pub struct RecordStats {
    records: u64,
    record_words: u64,
    max_record_size: u32,
    by_type: HashMap<RecordType, u64>,
}

impl RecordStats {
    /// Create empty counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record(&mut self, record_type: RecordType, size: u32) {
        self.records += 1;
        self.record_words += u64::from(size);
        self.max_record_size = self.max_record_size.max(size);
        *self.by_type.entry(record_type).or_insert(0) += 1;
    }

    /// Total records written, setup and EOF included.
    #[must_use]
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Largest record size seen, in words.
    #[must_use]
    pub fn max_record_size(&self) -> u32 {
        self.max_record_size
    }

    /// Number of records of one type.
    #[must_use]
    pub fn count(&self, record_type: RecordType) -> u64 {
        self.by_type.get(&record_type).copied().unwrap_or(0)
    }

    /// Average record size in words, 0 before any record.
    #[must_use]
    pub fn avg_record_size(&self) -> u64 {
        self.record_words.checked_div(self.records).unwrap_or(0)
    }
}
