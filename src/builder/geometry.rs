//! Shape records
//!
//! Coordinates are logical units. Each is written as the low 16 bits of its
//! value; no range checking is done. Single-point records put y before x and
//! box records put bottom-right before top-left, as the format defines them.

use crate::format::{Error, Param, RecordEncoder, RecordType, Result, pack_bytes, to_latin1};

/// Largest point or byte count a 16-bit count field can hold
const MAX_COUNT: usize = u16::MAX as usize;

/// Writes drawing records with whatever pen and brush are selected
pub struct GeometryEmitter<'a> {
    encoder: &'a mut RecordEncoder,
}

impl<'a> GeometryEmitter<'a> {
    /// Emit through `encoder`
    pub fn new(encoder: &'a mut RecordEncoder) -> Self {
        Self { encoder }
    }

    /// Move to the first point, then draw to the second
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.encoder
            .write_record(RecordType::MoveTo, &[Param::coord(y1), Param::coord(x1)]);
        self.encoder
            .write_record(RecordType::LineTo, &[Param::coord(y2), Param::coord(x2)]);
    }

    /// Rectangle with top-left corner (`x`, `y`)
    pub fn rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.bounding_box(RecordType::Rectangle, x, y, width, height);
    }

    /// Ellipse inscribed in the given box
    pub fn ellipse(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.bounding_box(RecordType::Ellipse, x, y, width, height);
    }

    /// Circle centred on (`x`, `y`), written as the ellipse in its bounding square
    pub fn circle(&mut self, x: i32, y: i32, radius: i32) {
        let diameter = radius.wrapping_mul(2);
        self.ellipse(
            x.wrapping_sub(radius),
            y.wrapping_sub(radius),
            diameter,
            diameter,
        );
    }

    /// Open polyline through `points`
    pub fn polyline(&mut self, points: &[(i32, i32)]) -> Result<()> {
        self.point_list(RecordType::Polyline, points)
    }

    /// Closed polygon through `points`, filled with the current brush
    pub fn polygon(&mut self, points: &[(i32, i32)]) -> Result<()> {
        self.point_list(RecordType::Polygon, points)
    }

    /// Text with its reference point at (`x`, `y`)
    pub fn text(&mut self, x: i32, y: i32, text: &str) -> Result<()> {
        let bytes = to_latin1(text);
        if bytes.len() > MAX_COUNT {
            return Err(Error::TextTooLong {
                len: bytes.len(),
                max: MAX_COUNT,
            });
        }

        self.encoder.write_record(
            RecordType::TextOut,
            &[
                Param::Word(bytes.len() as u16),
                Param::Block(pack_bytes(&bytes)),
                Param::coord(y),
                Param::coord(x),
            ],
        );
        Ok(())
    }

    fn bounding_box(&mut self, record_type: RecordType, x: i32, y: i32, width: i32, height: i32) {
        self.encoder.write_record(
            record_type,
            &[
                Param::coord(y.wrapping_add(height)),
                Param::coord(x.wrapping_add(width)),
                Param::coord(y),
                Param::coord(x),
            ],
        );
    }

    fn point_list(&mut self, record_type: RecordType, points: &[(i32, i32)]) -> Result<()> {
        if points.len() > MAX_COUNT {
            return Err(Error::TooManyPoints {
                count: points.len(),
                max: MAX_COUNT,
            });
        }

        let coords = points
            .iter()
            .flat_map(|&(x, y)| [x as u16, y as u16])
            .collect();
        self.encoder.write_record(
            record_type,
            &[Param::Word(points.len() as u16), Param::Block(coords)],
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(draw: impl FnOnce(&mut GeometryEmitter<'_>)) -> Vec<u16> {
        let mut encoder = RecordEncoder::default();
        draw(&mut GeometryEmitter::new(&mut encoder));
        encoder.stream().as_words().to_vec()
    }

    #[test]
    fn test_line_is_y_first() {
        let words = emit(|g| g.line(10, 20, 90, 60));
        assert_eq!(words, vec![5, 0, 0x0214, 20, 10, 5, 0, 0x0213, 60, 90]);
    }

    #[test]
    fn test_rectangle_bottom_right_first() {
        let words = emit(|g| g.rectangle(1, 4, 52, 30));
        assert_eq!(words, vec![7, 0, 0x041B, 34, 53, 4, 1]);
    }

    #[test]
    fn test_ellipse_shares_box_layout() {
        let words = emit(|g| g.ellipse(30, 30, 50, 10));
        assert_eq!(words, vec![7, 0, 0x0418, 40, 80, 30, 30]);
    }

    #[test]
    fn test_circle_matches_ellipse() {
        let circle = emit(|g| g.circle(40, 40, 20));
        let ellipse = emit(|g| g.ellipse(20, 20, 40, 40));
        assert_eq!(circle, ellipse);
    }

    #[test]
    fn test_negative_coordinates_wrap() {
        let words = emit(|g| g.rectangle(-5, -5, 3, 3));
        assert_eq!(&words[3..], &[0xFFFE, 0xFFFE, 0xFFFB, 0xFFFB]);
    }

    #[test]
    fn test_polyline_x_first() {
        let words = emit(|g| g.polyline(&[(1, 2), (3, 4)]).unwrap());
        assert_eq!(words, vec![8, 0, 0x0325, 2, 1, 2, 3, 4]);
    }

    #[test]
    fn test_polygon_record_type() {
        let words = emit(|g| g.polygon(&[(0, 0), (10, 0), (5, 8)]).unwrap());
        assert_eq!(words[2], 0x0324);
        assert_eq!(words[0], 3 + 1 + 6);
    }

    #[test]
    fn test_too_many_points() {
        let mut encoder = RecordEncoder::default();
        let points = vec![(0, 0); MAX_COUNT + 1];
        let result = GeometryEmitter::new(&mut encoder).polyline(&points);

        assert!(matches!(result, Err(Error::TooManyPoints { .. })));
        assert!(encoder.stream().is_empty());
    }

    #[test]
    fn test_text_padded() {
        let words = emit(|g| g.text(5, 9, "abc").unwrap());
        assert_eq!(words, vec![8, 0, 0x0521, 3, 0x6261, 0x0063, 9, 5]);
    }
}
