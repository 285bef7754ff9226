//! Append-only 16-bit word stream

use bytes::{BufMut, Bytes, BytesMut};

use super::{Error, Result};

/// Ordered sequence of 16-bit words, the only writer of the metafile.
///
/// Multi-word integers are appended low word first, and [`WordStream::to_bytes`]
/// emits every word low byte first, so the whole file is little-endian.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStream {
    words: Vec<u16>,
}

impl WordStream {
    /// Create an empty stream
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stream with room for `words` words
    #[must_use]
    pub fn with_capacity(words: usize) -> Self {
        Self {
            words: Vec::with_capacity(words),
        }
    }

    /// Append a word
    pub fn write_word(&mut self, value: u16) {
        self.words.push(value);
    }

    /// Append a double-word as low word, then high word
    pub fn write_double_word(&mut self, value: u32) {
        self.words.push((value & 0xFFFF) as u16);
        self.words.push((value >> 16) as u16);
    }

    /// Append a block of words verbatim
    pub fn write_block(&mut self, block: &[u16]) {
        self.words.extend_from_slice(block);
    }

    /// Number of words written
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`, if written
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u16> {
        self.words.get(index).copied()
    }

    /// All words written so far
    #[must_use]
    pub fn as_words(&self) -> &[u16] {
        &self.words
    }

    /// Overwrite a previously written word
    pub fn patch(&mut self, index: usize, value: u16) -> Result<()> {
        let len = self.words.len();
        let slot = self
            .words
            .get_mut(index)
            .ok_or(Error::PatchOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Overwrite a previously written double-word, low word first
    pub fn patch_double_word(&mut self, index: usize, value: u32) -> Result<()> {
        let len = self.words.len();
        let high = index
            .checked_add(1)
            .filter(|&high| high < len)
            .ok_or(Error::PatchOutOfBounds {
                index: index.saturating_add(1),
                len,
            })?;
        self.words[index] = (value & 0xFFFF) as u16;
        self.words[high] = (value >> 16) as u16;
        Ok(())
    }

    /// Serialize every word low byte first
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.words.len() * 2);
        for &word in &self.words {
            buf.put_u16_le(word);
        }
        buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_word_low_first() {
        let mut stream = WordStream::new();
        stream.write_double_word(0x9AC6_CDD7);

        assert_eq!(stream.as_words(), &[0xCDD7, 0x9AC6]);
    }

    #[test]
    fn test_bytes_little_endian() {
        let mut stream = WordStream::new();
        stream.write_word(0x0102);
        stream.write_block(&[0xA0B0, 0x00FF]);

        assert_eq!(stream.to_bytes().as_ref(), &[0x02, 0x01, 0xB0, 0xA0, 0xFF, 0x00]);
        assert_eq!(stream.len(), 3);
    }

    #[test]
    fn test_patch_in_place() {
        let mut stream = WordStream::new();
        stream.write_word(0);
        stream.write_double_word(0);
        stream.patch(0, 7).unwrap();
        stream.patch_double_word(1, 0x0001_0002).unwrap();

        assert_eq!(stream.as_words(), &[7, 2, 1]);
    }

    #[test]
    fn test_patch_out_of_bounds() {
        let mut stream = WordStream::new();
        stream.write_word(1);

        assert!(matches!(
            stream.patch(1, 0),
            Err(Error::PatchOutOfBounds { index: 1, len: 1 })
        ));
        assert!(matches!(
            stream.patch_double_word(0, 0),
            Err(Error::PatchOutOfBounds { index: 1, len: 1 })
        ));
        assert_eq!(stream.as_words(), &[1]);
    }

    #[test]
    fn test_patch_double_word_at_max_index() {
        let mut stream = WordStream::new();
        stream.write_word(1);

        assert!(matches!(
            stream.patch_double_word(usize::MAX, 0),
            Err(Error::PatchOutOfBounds {
                index: usize::MAX,
                len: 1,
            })
        ));
        assert!(matches!(
            stream.patch(usize::MAX, 0),
            Err(Error::PatchOutOfBounds { .. })
        ));
        assert_eq!(stream.as_words(), &[1]);
    }
}
