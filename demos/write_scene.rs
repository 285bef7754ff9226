//! Render a small scene and write it as `image.wmf`

use std::fs::File;

use wmf::{Entity, Handle, PenStyle, Scene, SceneObject, Shape};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("WMF Scene Example");
    println!("=================\n");

    let entity = |pen, brush, shape| Entity {
        pen: Handle::new(pen),
        brush: Handle::new(brush),
        shape,
    };

    let scene = Scene {
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
            SceneObject::Pen {
                style: PenStyle::Solid,
                color: 0xFF_0000,
                width: 1,
            },
            SceneObject::Brush {
                color: Some(0x00_FF00),
            },
        ],
        entities: vec![
            entity(
                0,
                1,
                Shape::Rectangle {
                    x: 1,
                    y: 4,
                    width: 52,
                    height: 30,
                },
            ),
            entity(
                0,
                1,
                Shape::Line {
                    x1: 10,
                    y1: 10,
                    x2: 90,
                    y2: 60,
                },
            ),
            entity(
                0,
                3,
                Shape::Ellipse {
                    x: 30,
                    y: 30,
                    width: 50,
                    height: 10,
                },
            ),
            entity(
                2,
                1,
                Shape::Circle {
                    x: 40,
                    y: 40,
                    radius: 20,
                },
            ),
        ],
    };

    let bytes = wmf::render(&scene)?;
    println!("Rendered {} bytes ({} words)", bytes.len(), bytes.len() / 2);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "image.wmf".to_string());
    std::io::Write::write_all(&mut File::create(&path)?, &bytes)?;
    println!("Wrote {path}");

    Ok(())
}
