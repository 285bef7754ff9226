//! Metafile builder
//!
//! [`MetafileBuilder`] owns one word stream for its whole life. It writes
//! the headers and default records on construction, accepts object, selection
//! and drawing calls while open, and backfills the header on
//! [`finalize`](MetafileBuilder::finalize).

mod geometry;
mod objects;

use std::io::Write;

use bytes::Bytes;
use tracing::{debug, instrument};

use crate::format::{
    Error, Frame, HeaderWriter, Param, PenStyle, RecordEncoder, RecordStats, RecordType, Result,
    Rgb, TOTAL_HEADER_WORDS, WordStream,
};

pub use geometry::GeometryEmitter;
pub use objects::{Font, Handle, ObjectTable, Slot};

/// Builder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Picture width in logical units
    pub width: u16,
    /// Picture height in logical units
    pub height: u16,
    /// Logical units per inch
    pub pixels_per_inch: u16,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            width: 14_030,
            height: 9_920,
            pixels_per_inch: 1_200,
        }
    }
}

impl From<Options> for Frame {
    fn from(options: Options) -> Self {
        Self {
            width: options.width,
            height: options.height,
            pixels_per_inch: options.pixels_per_inch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    Finalized,
}

/// Assembles a placeable WMF in memory
#[derive(Debug, Clone)]
pub struct MetafileBuilder {
    options: Options,
    encoder: RecordEncoder,
    objects: ObjectTable,
    state: State,
}

impl MetafileBuilder {
    /// Start a metafile of the given size and resolution
    #[must_use]
    pub fn new(width: u16, height: u16, pixels_per_inch: u16) -> Self {
        Self::with_options(Options {
            width,
            height,
            pixels_per_inch,
        })
    }

    /// Start a metafile from `options`
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        let frame = Frame::from(options);
        let mut stream = WordStream::with_capacity(TOTAL_HEADER_WORDS * 4);
        HeaderWriter::write(&mut stream, &frame);

        let mut encoder = RecordEncoder::new(stream);
        HeaderWriter::write_defaults(&mut encoder, &frame);

        debug!(?options, words = encoder.stream().len(), "metafile opened");
        Self {
            options,
            encoder,
            objects: ObjectTable::new(),
            state: State::Open,
        }
    }

    /// Configuration this builder was created with
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Create a pen
    #[instrument(level = "trace", skip(self, color))]
    pub fn create_pen(
        &mut self,
        style: PenStyle,
        color: impl Into<Rgb>,
        width: u16,
    ) -> Result<Handle> {
        self.ensure_open("create pen")?;
        let color = color.into();
        Ok(self
            .objects
            .create_pen(&mut self.encoder, style, color, width))
    }

    /// Create a brush; `None` is a hollow brush
    #[instrument(level = "trace", skip(self))]
    pub fn create_brush(&mut self, color: Option<Rgb>) -> Result<Handle> {
        self.ensure_open("create brush")?;
        Ok(self.objects.create_brush(&mut self.encoder, color))
    }

    /// Create a font
    #[instrument(level = "trace", skip(self))]
    pub fn create_font(&mut self, font: &Font) -> Result<Handle> {
        self.ensure_open("create font")?;
        Ok(self.objects.create_font(&mut self.encoder, font))
    }

    /// Make `handle` the current pen
    pub fn select_pen(&mut self, handle: Handle) -> Result<()> {
        self.select(Slot::Pen, handle)
    }

    /// Make `handle` the current brush
    pub fn select_brush(&mut self, handle: Handle) -> Result<()> {
        self.select(Slot::Brush, handle)
    }

    /// Make `handle` the current font
    pub fn select_font(&mut self, handle: Handle) -> Result<()> {
        self.select(Slot::Font, handle)
    }

    fn select(&mut self, slot: Slot, handle: Handle) -> Result<()> {
        self.ensure_open("select object")?;
        self.objects.select(&mut self.encoder, slot, handle);
        Ok(())
    }

    /// Set the colour used by subsequent text
    pub fn set_text_color(&mut self, color: impl Into<Rgb>) -> Result<()> {
        self.ensure_open("set text color")?;
        self.encoder.write_record(
            RecordType::SetTextColor,
            &[Param::DoubleWord(color.into().colorref())],
        );
        Ok(())
    }

    /// Draw a line between two points
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
        self.geometry("draw line")?.line(x1, y1, x2, y2);
        Ok(())
    }

    /// Draw a rectangle from its top-left corner and size
    pub fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        self.geometry("draw rectangle")?.rectangle(x, y, width, height);
        Ok(())
    }

    /// Draw the ellipse inscribed in a box
    pub fn draw_ellipse(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        self.geometry("draw ellipse")?.ellipse(x, y, width, height);
        Ok(())
    }

    /// Draw a circle from its centre and radius
    pub fn draw_circle(&mut self, x: i32, y: i32, radius: i32) -> Result<()> {
        self.geometry("draw circle")?.circle(x, y, radius);
        Ok(())
    }

    /// Draw an open polyline
    pub fn draw_polyline(&mut self, points: &[(i32, i32)]) -> Result<()> {
        self.geometry("draw polyline")?.polyline(points)
    }

    /// Draw a closed, filled polygon
    pub fn draw_polygon(&mut self, points: &[(i32, i32)]) -> Result<()> {
        self.geometry("draw polygon")?.polygon(points)
    }

    /// Draw text with the current font and text colour
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<()> {
        self.geometry("draw text")?.text(x, y, text)
    }

    fn geometry(&mut self, operation: &'static str) -> Result<GeometryEmitter<'_>> {
        self.ensure_open(operation)?;
        Ok(GeometryEmitter::new(&mut self.encoder))
    }

    /// Write the EOF record and backfill file size, object count and max
    /// record size. Nothing can be written afterwards.
    #[instrument(level = "trace", skip(self))]
    pub fn finalize(&mut self) -> Result<()> {
        self.ensure_open("finalize")?;
        self.encoder.write_record(RecordType::Eof, &[]);

        let object_count = (self.objects.len() & 0xFFFF) as u16;
        let max_record_size = self.encoder.max_record_size();
        HeaderWriter::backfill(self.encoder.stream_mut(), object_count, max_record_size)?;

        self.state = State::Finalized;
        let stats = self.encoder.stats();
        debug!(
            words = self.encoder.stream().len(),
            records = stats.records(),
            avg_record_size = stats.avg_record_size(),
            max_record_size,
            "metafile finalized"
        );
        Ok(())
    }

    /// Check if [`finalize`](Self::finalize) has run
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.state == State::Finalized
    }

    /// The finished file
    pub fn to_bytes(&self) -> Result<Bytes> {
        if !self.is_finalized() {
            return Err(Error::NotFinalized);
        }
        Ok(self.encoder.stream().to_bytes())
    }

    /// Finalize and return the file
    pub fn finish(mut self) -> Result<Bytes> {
        self.finalize()?;
        self.to_bytes()
    }

    /// Write the finished file to `writer`
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.to_bytes()?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Objects created so far
    #[must_use]
    pub const fn object_count(&self) -> u32 {
        self.objects.len()
    }

    /// Largest record written so far, in words
    #[must_use]
    pub fn max_record_size(&self) -> u32 {
        self.encoder.max_record_size()
    }

    /// Words written so far, headers included
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.encoder.stream().len()
    }

    /// Per-record counters
    #[must_use]
    pub const fn stats(&self) -> &RecordStats {
        self.encoder.stats()
    }

    /// Raw words written so far; header fields are zero until finalized
    #[must_use]
    pub fn words(&self) -> &[u16] {
        self.encoder.stream().as_words()
    }

    fn ensure_open(&self, operation: &'static str) -> Result<()> {
        match self.state {
            State::Open => Ok(()),
            State::Finalized => Err(Error::Finalized { operation }),
        }
    }
}

impl Default for MetafileBuilder {
    fn default() -> Self {
        Self::with_options(Options::default())
    }
}
