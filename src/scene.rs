//! Declarative scene rendering
//!
//! A [`Scene`] lists objects and entities; [`render`] creates every object in
//! order, so the object at index `i` gets handle `i`, then draws each entity
//! with its pen and brush selected.
//!
//! With the `serde` feature a scene loads from camelCase JSON. `penStyle` and
//! `fontFamily` take either the upper-case name or the numeric value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bytes::Bytes;
use tracing::debug;

use crate::builder::{Font, Handle, MetafileBuilder, Options};
use crate::format::{PenStyle, Result, Rgb};

/// Picture description
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Scene {
    /// Picture width in logical units
    pub width: u16,
    /// Picture height in logical units
    pub height: u16,
    /// Logical units per inch
    pub pixels_per_inch: u16,
    /// Pens, brushes and fonts, in handle order
    pub objects: Vec<SceneObject>,
    /// Shapes, in drawing order
    pub entities: Vec<Entity>,
}

/// Object definition; colours are `0xRRGGBB`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum SceneObject {
    /// Pen
    Pen {
        /// Line style
        #[cfg_attr(feature = "serde", serde(rename = "penStyle"))]
        style: PenStyle,
        /// Line colour
        color: u32,
        /// Line width
        width: u16,
    },
    /// Brush; no colour means hollow
    Brush {
        /// Fill colour
        color: Option<u32>,
    },
    /// Font
    Font(Font),
}

/// Shape drawn with a given pen and brush
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entity {
    /// Pen handle
    pub pen: Handle,
    /// Brush handle
    pub brush: Handle,
    /// Geometry
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub shape: Shape,
}

/// Entity geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Shape {
    /// Line segment
    Line {
        /// Start x
        x1: i32,
        /// Start y
        y1: i32,
        /// End x
        x2: i32,
        /// End y
        y2: i32,
    },
    /// Axis-aligned rectangle
    Rectangle {
        /// Left
        x: i32,
        /// Top
        y: i32,
        /// Width
        width: i32,
        /// Height
        height: i32,
    },
    /// Ellipse inscribed in a box
    Ellipse {
        /// Left
        x: i32,
        /// Top
        y: i32,
        /// Width
        width: i32,
        /// Height
        height: i32,
    },
    /// Circle
    Circle {
        /// Centre x
        x: i32,
        /// Centre y
        y: i32,
        /// Radius
        radius: i32,
    },
}

/// Render `scene` to a finished metafile
pub fn render(scene: &Scene) -> Result<Bytes> {
    let mut builder = MetafileBuilder::with_options(Options {
        width: scene.width,
        height: scene.height,
        pixels_per_inch: scene.pixels_per_inch,
    });

    for object in &scene.objects {
        match object {
            SceneObject::Pen {
                style,
                color,
                width,
            } => builder.create_pen(*style, Rgb::from_hex(*color), *width)?,
            SceneObject::Brush { color } => builder.create_brush(color.map(Rgb::from_hex))?,
            SceneObject::Font(font) => builder.create_font(font)?,
        };
    }

    for entity in &scene.entities {
        builder.select_pen(entity.pen)?;
        builder.select_brush(entity.brush)?;
        match entity.shape {
            Shape::Line { x1, y1, x2, y2 } => builder.draw_line(x1, y1, x2, y2)?,
            Shape::Rectangle {
                x,
                y,
                width,
                height,
            } => builder.draw_rectangle(x, y, width, height)?,
            Shape::Ellipse {
                x,
                y,
                width,
                height,
            } => builder.draw_ellipse(x, y, width, height)?,
            Shape::Circle { x, y, radius } => builder.draw_circle(x, y, radius)?,
        }
    }

    debug!(
        objects = scene.objects.len(),
        entities = scene.entities.len(),
        "scene rendered"
    );
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordType;

    fn scene(entities: Vec<Entity>) -> Scene {
        Scene {
            width: 100,
            height: 75,
            pixels_per_inch: 5,
            objects: vec![
                SceneObject::Pen {
                    style: PenStyle::Solid,
                    color: 0x00_0000,
                    width: 1,
                },
                SceneObject::Brush { color: None },
            ],
            entities,
        }
    }

    #[test]
    fn test_matches_direct_builder_calls() {
        let rendered = render(&scene(vec![Entity {
            pen: Handle::new(0),
            brush: Handle::new(1),
            shape: Shape::Rectangle {
                x: 1,
                y: 4,
                width: 52,
                height: 30,
            },
        }]))
        .unwrap();

        let mut builder = MetafileBuilder::new(100, 75, 5);
        let pen = builder.create_pen(PenStyle::Solid, Rgb::BLACK, 1).unwrap();
        let brush = builder.create_brush(None).unwrap();
        builder.select_pen(pen).unwrap();
        builder.select_brush(brush).unwrap();
        builder.draw_rectangle(1, 4, 52, 30).unwrap();

        assert_eq!(rendered, builder.finish().unwrap());
    }

    #[test]
    fn test_shared_pen_selected_once() {
        let entity = |shape| Entity {
            pen: Handle::new(0),
            brush: Handle::new(1),
            shape,
        };
        let scene = scene(vec![
            entity(Shape::Line {
                x1: 0,
                y1: 0,
                x2: 10,
                y2: 10,
            }),
            entity(Shape::Circle {
                x: 5,
                y: 5,
                radius: 2,
            }),
        ]);

        let bytes = render(&scene).unwrap();
        let select_word = RecordType::SelectObject.as_u16().to_le_bytes();
        let selects = bytes
            .chunks_exact(2)
            .filter(|pair| *pair == select_word)
            .count();
        assert_eq!(selects, 2);
    }
}
