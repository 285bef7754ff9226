//! Variable-length record encoding
//!
//! Every record is laid out as:
//!
//! ```text
//! +-----------------------+-------------+------------------------------+
//! | Size (double-word)    | Type (word) | Parameters (variable words)  |
//! +-----------------------+-------------+------------------------------+
//! ```
//!
//! `Size` counts words and includes its own two words and the type word.

use tracing::trace;

use super::{RECORD_PREFIX_WORDS, RecordStats, RecordType, WordStream};

/// One record parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// Single word
    Word(u16),
    /// Double-word, written low word first
    DoubleWord(u32),
    /// Pre-packed words written verbatim (packed strings, point lists)
    Block(Vec<u16>),
}

impl Param {
    /// Signed coordinate or extent, truncated to its low 16 bits
    #[must_use]
    pub const fn coord(value: i32) -> Self {
        Self::Word(value as u16)
    }

    /// Number of words this parameter occupies
    #[must_use]
    pub fn word_count(&self) -> usize {
        match self {
            Self::Word(_) => 1,
            Self::DoubleWord(_) => 2,
            Self::Block(words) => words.len(),
        }
    }

    fn write(&self, stream: &mut WordStream) {
        match self {
            Self::Word(word) => stream.write_word(*word),
            Self::DoubleWord(value) => stream.write_double_word(*value),
            Self::Block(words) => stream.write_block(words),
        }
    }
}

/// Writes records into a [`WordStream`] and tracks their sizes.
///
/// The encoder does not know any record's field layout; callers pass
/// parameters in the order the record type defines them.
#[derive(Debug, Clone, Default)]
pub struct RecordEncoder {
    stream: WordStream,
    stats: RecordStats,
}

impl RecordEncoder {
    /// Wrap a stream that may already hold header words
    #[must_use]
    pub fn new(stream: WordStream) -> Self {
        Self {
            stream,
            stats: RecordStats::new(),
        }
    }

    /// Append one record and return its size in words
    pub fn write_record(&mut self, record_type: RecordType, params: &[Param]) -> u32 {
        let param_words: usize = params.iter().map(Param::word_count).sum();
        let size = RECORD_PREFIX_WORDS.wrapping_add(param_words as u32);

        self.stats.record(record_type, size);
        self.stream.write_double_word(size);
        self.stream.write_word(record_type.as_u16());
        for param in params {
            param.write(&mut self.stream);
        }

        trace!(record = %record_type, size, "record written");
        size
    }

    /// Underlying stream
    #[must_use]
    pub const fn stream(&self) -> &WordStream {
        &self.stream
    }

    /// Underlying stream, for backfilling header fields
    pub fn stream_mut(&mut self) -> &mut WordStream {
        &mut self.stream
    }

    /// Record counters
    #[must_use]
    pub const fn stats(&self) -> &RecordStats {
        &self.stats
    }

    /// Largest record written so far, in words
    #[must_use]
    pub fn max_record_size(&self) -> u32 {
        self.stats.max_record_size()
    }
}

/// Map a string to single-byte characters; anything outside Latin-1 becomes `?`
#[must_use]
pub fn to_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

/// Pack bytes two per word, earlier byte low, zero-padding an odd tail
#[must_use]
pub fn pack_bytes(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks(2)
        .map(|pair| {
            let low = u16::from(pair[0]);
            let high = pair.get(1).copied().map_or(0, u16::from);
            low | (high << 8)
        })
        .collect()
}
