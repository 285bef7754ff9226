//! WMF wire format core
//!
//! This module provides the word stream, record encoding, header layout and
//! the value types shared by every record.

mod color;
mod error;
mod header;
mod record;
mod stats;
mod types;
mod words;

pub use color::Rgb;
pub use error::{Error, Result};
pub use header::{Frame, HeaderWriter};
pub use record::{Param, RecordEncoder, pack_bytes, to_latin1};
pub use stats::RecordStats;
pub use types::{BrushStyle, FontFamily, FontFlags, PenStyle, RecordType};
pub use words::WordStream;

/// Placeable header key: 0x9AC6CDD7, stored low word first
pub const PLACEABLE_MAGIC: u32 = 0x9AC6_CDD7;

/// Core header file type (1 = in-memory metafile)
pub const FILE_TYPE: u16 = 0x0001;

/// Core header size in words
pub const HEADER_SIZE_WORDS: u16 = 9;

/// Metafile format version (Windows 3.0)
pub const METAFILE_VERSION: u16 = 0x0300;

/// Words occupied by the placeable header
pub const PLACEABLE_HEADER_WORDS: usize = 11;

/// Words occupied by the placeable header and the core header together
pub const TOTAL_HEADER_WORDS: usize = PLACEABLE_HEADER_WORDS + HEADER_SIZE_WORDS as usize;

/// Word index of the placeable header checksum
pub const CHECKSUM_INDEX: usize = 10;

/// Word index of the file size double-word (in words, low word first)
pub const FILE_SIZE_INDEX: usize = 14;

/// Word index of the object count word
pub const OBJECT_COUNT_INDEX: usize = 16;

/// Word index of the max record size double-word (in words, low word first)
pub const MAX_RECORD_INDEX: usize = 17;

/// Words every record spends on its size and type fields
pub const RECORD_PREFIX_WORDS: u32 = 3;
