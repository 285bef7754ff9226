//! RGB colour packing

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB colour with 8-bit channels.
///
/// Written as a COLORREF double-word: red in the low byte, then green, then
/// blue, with the top byte reserved and always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Rgb {
    /// Create a colour from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Unpack a `0xRRGGBB` integer. Bits above the low 24 are ignored.
    #[must_use]
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            red: ((rgb >> 16) & 0xFF) as u8,
            green: ((rgb >> 8) & 0xFF) as u8,
            blue: (rgb & 0xFF) as u8,
        }
    }

    /// Pack as a COLORREF (`0x00BBGGRR`).
    #[must_use]
    pub const fn colorref(self) -> u32 {
        (self.red as u32) | ((self.green as u32) << 8) | ((self.blue as u32) << 16)
    }

    /// Black
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// White
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

impl From<u32> for Rgb {
    fn from(rgb: u32) -> Self {
        Self::from_hex(rgb)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}
