//! WMF record types and object styles

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// WMF record types written by this crate
///
/// The low byte is the GDI function number, the high byte the parameter
/// count hint carried by the original Windows API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum RecordType {
    /// End of file
    Eof = 0x0000,
    /// Background mix mode
    SetBkMode = 0x0102,
    /// Mapping mode
    SetMapMode = 0x0103,
    /// Foreground binary raster operation
    SetRop2 = 0x0104,
    /// Polygon fill mode
    SetPolyFillMode = 0x0106,
    /// Select an object into the playback context
    SelectObject = 0x012D,
    /// Text alignment flags
    SetTextAlign = 0x012E,
    /// Text foreground colour
    SetTextColor = 0x0209,
    /// Logical window origin
    SetWindowOrg = 0x020B,
    /// Logical window extent
    SetWindowExt = 0x020C,
    /// Line from the current position
    LineTo = 0x0213,
    /// Move the current position
    MoveTo = 0x0214,
    /// Create a logical pen
    CreatePenIndirect = 0x02FA,
    /// Create a logical font
    CreateFontIndirect = 0x02FB,
    /// Create a logical brush
    CreateBrushIndirect = 0x02FC,
    /// Filled closed polygon
    Polygon = 0x0324,
    /// Open polyline
    Polyline = 0x0325,
    /// Ellipse inscribed in a bounding box
    Ellipse = 0x0418,
    /// Rectangle
    Rectangle = 0x041B,
    /// Character string at a position
    TextOut = 0x0521,
    /// Device escape
    Escape = 0x0626,
}

impl RecordType {
    /// Convert to the on-disk function word
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "EOF",
            Self::SetBkMode => "SETBKMODE",
            Self::SetMapMode => "SETMAPMODE",
            Self::SetRop2 => "SETROP2",
            Self::SetPolyFillMode => "SETPOLYFILLMODE",
            Self::SelectObject => "SELECTOBJECT",
            Self::SetTextAlign => "SETTEXTALIGN",
            Self::SetTextColor => "SETTEXTCOLOR",
            Self::SetWindowOrg => "SETWINDOWORG",
            Self::SetWindowExt => "SETWINDOWEXT",
            Self::LineTo => "LINETO",
            Self::MoveTo => "MOVETO",
            Self::CreatePenIndirect => "CREATEPENINDIRECT",
            Self::CreateFontIndirect => "CREATEFONTINDIRECT",
            Self::CreateBrushIndirect => "CREATEBRUSHINDIRECT",
            Self::Polygon => "POLYGON",
            Self::Polyline => "POLYLINE",
            Self::Ellipse => "ELLIPSE",
            Self::Rectangle => "RECTANGLE",
            Self::TextOut => "TEXTOUT",
            Self::Escape => "ESCAPE",
        };
        write!(f, "{name}")
    }
}

/// Pen line styles
///
/// With the `serde` feature a style deserializes from its upper-case name
/// (`"SOLID"`) or from its style number (`0`), and serializes as the name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u16)]
pub enum PenStyle {
    /// Solid line
    #[default]
    Solid = 0,
    /// Dashed line
    Dash = 1,
    /// Dotted line
    Dot = 2,
    /// Alternating dashes and dots
    DashDot = 3,
    /// Alternating dashes and double dots
    DashDotDot = 4,
    /// Invisible pen
    Null = 5,
    /// Solid line drawn inside the shape's bounding box
    InsideFrame = 6,
}

impl PenStyle {
    /// Convert to the on-disk style word
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Brush styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum BrushStyle {
    /// Solid colour fill
    Solid = 0,
    /// Hollow brush, nothing is filled
    Null = 1,
}

impl BrushStyle {
    /// Convert to the on-disk style word
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Font families, stored in bits 4..7 of the pitch-and-family byte.
///
/// The discriminants are the LOGFONT family values, already shifted into the
/// family bits. With the `serde` feature a family deserializes from its
/// upper-case name (`"SWISS"`) or from that value (`32`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum FontFamily {
    /// Let the consumer choose
    #[default]
    DontCare = 0x00,
    /// Proportional serif
    Roman = 0x10,
    /// Proportional sans serif
    Swiss = 0x20,
    /// Fixed pitch
    Modern = 0x30,
    /// Handwriting
    Script = 0x40,
    /// Novelty
    Decorative = 0x50,
}

impl FontFamily {
    /// The font record's last fixed word: quality byte (0) low, pitch-and-family
    /// byte high.
    ///
    /// The family lands in the high byte with default pitch. Writing the raw
    /// family value as the whole word would put it in the quality byte
    /// instead, where consumers ignore it as a family.
    #[must_use]
    pub const fn as_word(self) -> u16 {
        (self as u16) << 8
    }
}

/// Italic/underline/strikeout bytes of a logical font, packed as a double-word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontFlags(u32);

impl FontFlags {
    /// Valid flag bits mask
    pub const VALID_MASK: u32 = Self::ITALIC | Self::UNDERLINE | Self::STRIKEOUT;
    /// Italic byte set
    pub const ITALIC: u32 = 0x01;
    /// Underline byte set
    pub const UNDERLINE: u32 = 0x0100;
    /// Strikeout byte set
    pub const STRIKEOUT: u32 = 0x01_0000;

    /// Create empty flags
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Build flags from the three style switches
    #[must_use]
    pub const fn from_styles(italic: bool, underline: bool, strikeout: bool) -> Self {
        let mut flags = Self::new();
        if italic {
            flags = flags.with(Self::ITALIC);
        }
        if underline {
            flags = flags.with(Self::UNDERLINE);
        }
        if strikeout {
            flags = flags.with(Self::STRIKEOUT);
        }
        flags
    }

    /// Convert to the on-disk double-word
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Set a flag
    #[must_use]
    pub const fn with(mut self, flag: u32) -> Self {
        debug_assert!(flag & !Self::VALID_MASK == 0, "invalid flag bit");
        self.0 |= flag;
        self
    }
}

#[cfg(feature = "serde")]
mod wire_names {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};

    use super::{FontFamily, PenStyle};

    /// Enum written as a name or as its on-disk number
    trait WireName: Copy + 'static {
        const KIND: &'static str;
        const VARIANTS: &'static [Self];
        /// Upper-case names, in `VARIANTS` order
        const NAMES: &'static [&'static str];

        fn value(self) -> u64;
    }

    impl WireName for PenStyle {
        const KIND: &'static str = "pen style";
        const VARIANTS: &'static [Self] = &[
            Self::Solid,
            Self::Dash,
            Self::Dot,
            Self::DashDot,
            Self::DashDotDot,
            Self::Null,
            Self::InsideFrame,
        ];
        const NAMES: &'static [&'static str] = &[
            "SOLID",
            "DASH",
            "DOT",
            "DASH_DOT",
            "DASH_DOT_DOT",
            "NULL",
            "INSIDE_FRAME",
        ];

        fn value(self) -> u64 {
            u64::from(self.as_u16())
        }
    }

    impl WireName for FontFamily {
        const KIND: &'static str = "font family";
        const VARIANTS: &'static [Self] = &[
            Self::DontCare,
            Self::Roman,
            Self::Swiss,
            Self::Modern,
            Self::Script,
            Self::Decorative,
        ];
        const NAMES: &'static [&'static str] =
            &["DONT_CARE", "ROMAN", "SWISS", "MODERN", "SCRIPT", "DECORATIVE"];

        fn value(self) -> u64 {
            u64::from(self as u8)
        }
    }

    struct NameOrValue<T>(PhantomData<T>);

    impl<T: WireName> Visitor<'_> for NameOrValue<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a {} name or number", T::KIND)
        }

        fn visit_str<E: de::Error>(self, name: &str) -> Result<T, E> {
            T::NAMES
                .iter()
                .position(|&known| known == name)
                .map(|i| T::VARIANTS[i])
                .ok_or_else(|| E::unknown_variant(name, T::NAMES))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
            T::VARIANTS
                .iter()
                .copied()
                .find(|variant| variant.value() == value)
                .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
            match u64::try_from(value) {
                Ok(value) => self.visit_u64(value),
                Err(_) => Err(E::invalid_value(Unexpected::Signed(value), &self)),
            }
        }
    }

    impl<'de> Deserialize<'de> for PenStyle {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(NameOrValue(PhantomData))
        }
    }

    impl<'de> Deserialize<'de> for FontFamily {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(NameOrValue(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_words() {
        assert_eq!(RecordType::Eof.as_u16(), 0x0000);
        assert_eq!(RecordType::CreateFontIndirect.as_u16(), 0x02FB);
        assert_eq!(RecordType::Escape.as_u16(), 0x0626);
        assert_eq!(RecordType::SelectObject.to_string(), "SELECTOBJECT");
    }

    #[test]
    fn test_font_flags() {
        let flags = FontFlags::from_styles(true, false, true);
        assert_eq!(flags.as_u32(), 0x01_0001);

        let all = FontFlags::new()
            .with(FontFlags::UNDERLINE)
            .with(FontFlags::ITALIC)
            .with(FontFlags::STRIKEOUT);
        assert_eq!(all, FontFlags::from_styles(true, true, true));
        assert_eq!(all.as_u32(), FontFlags::VALID_MASK);
    }

    #[test]
    fn test_family_in_high_byte() {
        assert_eq!(FontFamily::Swiss.as_word(), 0x2000);
        assert_eq!(FontFamily::DontCare.as_word(), 0);
    }
}
