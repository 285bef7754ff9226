//! GDI object creation and selection bookkeeping

use std::fmt;

use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::{
    BrushStyle, FontFamily, FontFlags, Param, PenStyle, RecordEncoder, RecordType, Rgb, pack_bytes,
    to_latin1,
};

/// Index of a created pen, brush or font.
///
/// Handles are assigned in creation order from one counter shared by all
/// object kinds, starting at 0. They are never freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Handle(u16);

impl Handle {
    /// Wrap a raw object index
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Raw object index
    #[must_use]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Selection slot; pens, brushes and fonts are selected independently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Current pen
    Pen,
    /// Current brush
    Brush,
    /// Current font
    Font,
}

/// Logical font description
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Font {
    /// Face name, e.g. `"Arial"`
    pub name: String,
    /// Font family
    #[cfg_attr(feature = "serde", serde(rename = "fontFamily"))]
    pub family: FontFamily,
    /// Character height in logical units
    pub height: i16,
    /// Weight, 400 normal, 700 bold
    pub weight: u16,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
    /// Strikeout
    pub strikeout: bool,
}

impl Font {
    /// Regular-weight font with no style flags
    pub fn new(name: impl Into<String>, family: FontFamily, height: i16) -> Self {
        Self {
            name: name.into(),
            family,
            height,
            weight: 400,
            ..Self::default()
        }
    }

    /// Style flags double-word
    #[must_use]
    pub const fn flags(&self) -> FontFlags {
        FontFlags::from_styles(self.italic, self.underline, self.strikeout)
    }

    /// Face name as NUL-terminated bytes packed two per word
    #[must_use]
    pub fn packed_name(&self) -> Vec<u16> {
        let mut bytes = to_latin1(&self.name);
        if bytes.last() != Some(&0) {
            bytes.push(0);
        }
        pack_bytes(&bytes)
    }
}

/// Handle counter and current selection state
#[derive(Debug, Clone, Default)]
pub struct ObjectTable {
    created: u32,
    pen: Option<Handle>,
    brush: Option<Handle>,
    font: Option<Handle>,
}

impl ObjectTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Objects created so far
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.created
    }

    /// Check if no objects exist
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.created == 0
    }

    /// Currently selected handle in `slot`
    #[must_use]
    pub const fn selected(&self, slot: Slot) -> Option<Handle> {
        match slot {
            Slot::Pen => self.pen,
            Slot::Brush => self.brush,
            Slot::Font => self.font,
        }
    }

    /// Emit a pen record: style, width, unused height, colour
    pub fn create_pen(
        &mut self,
        encoder: &mut RecordEncoder,
        style: PenStyle,
        color: Rgb,
        width: u16,
    ) -> Handle {
        encoder.write_record(
            RecordType::CreatePenIndirect,
            &[
                Param::Word(style.as_u16()),
                Param::Word(width),
                Param::Word(0),
                Param::DoubleWord(color.colorref()),
            ],
        );
        self.allocate("pen")
    }

    /// Emit a brush record: style, colour, hatch.
    ///
    /// `None` makes a hollow brush; the colour field is still written, as white.
    pub fn create_brush(&mut self, encoder: &mut RecordEncoder, color: Option<Rgb>) -> Handle {
        let (style, color) = match color {
            Some(color) => (BrushStyle::Solid, color),
            None => (BrushStyle::Null, Rgb::WHITE),
        };
        encoder.write_record(
            RecordType::CreateBrushIndirect,
            &[
                Param::Word(style.as_u16()),
                Param::DoubleWord(color.colorref()),
                Param::Word(0),
            ],
        );
        self.allocate("brush")
    }

    /// Emit a logical font record
    pub fn create_font(&mut self, encoder: &mut RecordEncoder, font: &Font) -> Handle {
        encoder.write_record(
            RecordType::CreateFontIndirect,
            &[
                Param::Word(font.height as u16),
                Param::Word(0),
                Param::Word(0),
                Param::Word(0),
                Param::Word(font.weight),
                Param::DoubleWord(font.flags().as_u32()),
                // out precision, clip precision
                Param::Word(0),
                Param::Word(font.family.as_word()),
                Param::Block(font.packed_name()),
            ],
        );
        self.allocate("font")
    }

    /// Select `handle` into `slot`, writing a record only when it changes the
    /// slot. Returns whether a record was written.
    pub fn select(&mut self, encoder: &mut RecordEncoder, slot: Slot, handle: Handle) -> bool {
        let current = match slot {
            Slot::Pen => &mut self.pen,
            Slot::Brush => &mut self.brush,
            Slot::Font => &mut self.font,
        };
        if *current == Some(handle) {
            return false;
        }
        if u32::from(handle.index()) >= self.created {
            warn!(
                %handle,
                ?slot,
                created = self.created,
                "selecting handle that was never created"
            );
        }

        *current = Some(handle);
        encoder.write_record(RecordType::SelectObject, &[Param::Word(handle.index())]);
        true
    }

    fn allocate(&mut self, kind: &'static str) -> Handle {
        let handle = Handle((self.created & 0xFFFF) as u16);
        self.created = self.created.wrapping_add(1);
        debug!(kind, %handle, "object created");
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_shared_across_kinds() {
        let mut encoder = RecordEncoder::default();
        let mut table = ObjectTable::new();

        let pen = table.create_pen(&mut encoder, PenStyle::Solid, Rgb::BLACK, 1);
        let brush = table.create_brush(&mut encoder, None);
        let font = table.create_font(&mut encoder, &Font::new("Arial", FontFamily::Swiss, 12));

        assert_eq!([pen, brush, font], [Handle(0), Handle(1), Handle(2)]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_null_brush_layout() {
        let mut encoder = RecordEncoder::default();
        let mut table = ObjectTable::new();
        table.create_brush(&mut encoder, None);

        assert_eq!(
            encoder.stream().as_words(),
            &[7, 0, 0x02FC, 1, 0xFFFF, 0x00FF, 0]
        );
    }

    #[test]
    fn test_black_brush_is_solid() {
        let mut encoder = RecordEncoder::default();
        let mut table = ObjectTable::new();
        table.create_brush(&mut encoder, Some(Rgb::BLACK));

        assert_eq!(encoder.stream().as_words(), &[7, 0, 0x02FC, 0, 0, 0, 0]);
    }

    #[test]
    fn test_font_layout() {
        let mut encoder = RecordEncoder::default();
        let mut table = ObjectTable::new();
        let font = Font {
            italic: true,
            underline: true,
            strikeout: true,
            weight: 700,
            ..Font::new("Arial", FontFamily::Swiss, -16)
        };
        table.create_font(&mut encoder, &font);

        assert_eq!(
            encoder.stream().as_words(),
            &[
                15, 0, 0x02FB, 0xFFF0, 0, 0, 0, 700, 0x0101, 0x0001, 0, 0x2000, 0x7241, 0x6169,
                0x006C,
            ]
        );
        assert_eq!(encoder.max_record_size(), 15);
    }

    #[test]
    fn test_font_name_terminator_not_doubled() {
        let font = Font::new("Ab\0", FontFamily::DontCare, 10);
        assert_eq!(font.packed_name(), vec![0x6241, 0x0000]);

        let even = Font::new("Abcd", FontFamily::DontCare, 10);
        assert_eq!(even.packed_name().len(), 3);
    }

    #[test]
    fn test_reselect_is_elided() {
        let mut encoder = RecordEncoder::default();
        let mut table = ObjectTable::new();
        let a = table.create_pen(&mut encoder, PenStyle::Solid, Rgb::BLACK, 1);
        let b = table.create_pen(&mut encoder, PenStyle::Dash, Rgb::WHITE, 2);

        assert!(table.select(&mut encoder, Slot::Pen, a));
        assert!(!table.select(&mut encoder, Slot::Pen, a));
        assert!(table.select(&mut encoder, Slot::Pen, b));
        assert!(table.select(&mut encoder, Slot::Pen, a));
        assert_eq!(encoder.stats().count(RecordType::SelectObject), 3);
        assert_eq!(table.selected(Slot::Pen), Some(a));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut encoder = RecordEncoder::default();
        let mut table = ObjectTable::new();
        let handle = table.create_pen(&mut encoder, PenStyle::Solid, Rgb::BLACK, 1);

        assert!(table.select(&mut encoder, Slot::Pen, handle));
        assert!(table.select(&mut encoder, Slot::Brush, handle));
        assert_eq!(table.selected(Slot::Font), None);
    }

    #[test]
    fn test_dangling_handle_still_written() {
        let mut encoder = RecordEncoder::default();
        let mut table = ObjectTable::new();

        assert!(table.select(&mut encoder, Slot::Brush, Handle::new(9)));
        assert_eq!(encoder.stream().as_words(), &[4, 0, 0x012D, 9]);
    }
}
