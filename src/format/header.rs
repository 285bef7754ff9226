//! Placeable and core metafile headers
//!
//! Both headers occupy the first 20 words of the file.
//!
//! # Wire Format
//!
//! ```text
//! word  0-1   placeable magic 0x9AC6CDD7         word 11  file type (1)
//! word  2     handle (0)                         word 12  header size (9)
//! word  3-6   bbox left, top, right, bottom      word 13  version (0x0300)
//! word  7     units per inch                     word 14-15  file size   *
//! word  8-9   reserved (0)                       word 16  object count   *
//! word 10     checksum                           word 17-18  max record  *
//!                                                word 19  parameter count (0)
//! ```
//!
//! Fields marked `*` are written as zero and backfilled once the last record
//! is known.

use tracing::debug;

use super::{
    CHECKSUM_INDEX, FILE_SIZE_INDEX, FILE_TYPE, HEADER_SIZE_WORDS, MAX_RECORD_INDEX,
    METAFILE_VERSION, OBJECT_COUNT_INDEX, PLACEABLE_MAGIC, Param, RecordEncoder, RecordType, Result,
    Rgb, WordStream,
};

/// MM_ANISOTROPIC: arbitrary units, axes scaled independently
const MAP_MODE_ANISOTROPIC: u16 = 8;

/// TRANSPARENT background mix mode
const BK_MODE_TRANSPARENT: u16 = 1;

/// WINDING polygon fill rule
const POLY_FILL_WINDING: u16 = 2;

/// TA_BASELINE | TA_NOUPDATECP
const TEXT_ALIGN_BASELINE: u16 = 0x0018;

/// R2_COPYPEN: pixels take the pen colour
const ROP2_COPY_PEN: u16 = 13;

/// Escape function emitted with the default setup records
const SETUP_ESCAPE: [u16; 4] = [23, 4, 5, 0];

/// Picture frame described by the placeable header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Bounding box right edge, also the logical window width
    pub width: u16,
    /// Bounding box bottom edge, also the logical window height
    pub height: u16,
    /// Logical units per inch
    pub pixels_per_inch: u16,
}

/// Writes the fixed-size headers and the default playback state
pub struct HeaderWriter;

impl HeaderWriter {
    /// Write the placeable header and the core header at the start of `stream`.
    ///
    /// The checksum is the XOR of the placeable words written before it.
    pub fn write(stream: &mut WordStream, frame: &Frame) {
        debug_assert!(stream.is_empty(), "headers must start the stream");

        stream.write_double_word(PLACEABLE_MAGIC);
        stream.write_word(0);
        stream.write_word(0);
        stream.write_word(0);
        stream.write_word(frame.width);
        stream.write_word(frame.height);
        stream.write_word(frame.pixels_per_inch);
        stream.write_double_word(0);
        stream.write_word(checksum(&stream.as_words()[..CHECKSUM_INDEX]));

        stream.write_word(FILE_TYPE);
        stream.write_word(HEADER_SIZE_WORDS);
        stream.write_word(METAFILE_VERSION);
        stream.write_double_word(0);
        stream.write_word(0);
        stream.write_double_word(0);
        stream.write_word(0);
    }

    /// Write the records that pin down the playback state consumers would
    /// otherwise default on their own.
    pub fn write_defaults(encoder: &mut RecordEncoder, frame: &Frame) {
        encoder.write_record(
            RecordType::SetWindowExt,
            &[Param::Word(frame.height), Param::Word(frame.width)],
        );
        encoder.write_record(RecordType::SetWindowOrg, &[Param::Word(0), Param::Word(0)]);
        encoder.write_record(RecordType::SetMapMode, &[Param::Word(MAP_MODE_ANISOTROPIC)]);
        encoder.write_record(
            RecordType::SetBkMode,
            &[Param::Word(BK_MODE_TRANSPARENT), Param::Word(0)],
        );
        encoder.write_record(
            RecordType::SetPolyFillMode,
            &[Param::Word(POLY_FILL_WINDING), Param::Word(0)],
        );
        encoder.write_record(
            RecordType::SetTextAlign,
            &[Param::Word(TEXT_ALIGN_BASELINE), Param::Word(0)],
        );
        encoder.write_record(
            RecordType::SetTextColor,
            &[Param::DoubleWord(Rgb::BLACK.colorref())],
        );
        encoder.write_record(
            RecordType::SetRop2,
            &[Param::Word(ROP2_COPY_PEN), Param::Word(0)],
        );
        encoder.write_record(RecordType::Escape, &SETUP_ESCAPE.map(Param::Word));
    }

    /// Patch the deferred core header fields.
    pub fn backfill(
        stream: &mut WordStream,
        object_count: u16,
        max_record_size: u32,
    ) -> Result<()> {
        let file_words = stream.len() as u32;
        stream.patch_double_word(FILE_SIZE_INDEX, file_words)?;
        stream.patch(OBJECT_COUNT_INDEX, object_count)?;
        stream.patch_double_word(MAX_RECORD_INDEX, max_record_size)?;

        debug!(file_words, object_count, max_record_size, "header backfilled");
        Ok(())
    }
}

fn checksum(words: &[u16]) -> u16 {
    words.iter().fold(0, |acc, word| acc ^ word)
}
