#![cfg(feature = "serde")]

use wmf::{FontFamily, MetafileBuilder, PenStyle, Rgb, Scene, SceneObject, Shape, render};

const SCENE: &str = r#"{
    "width": 100,
    "height": 75,
    "pixelsPerInch": 5,
    "objects": [
        { "type": "pen", "penStyle": "SOLID", "color": 0, "width": 1 },
        { "type": "brush", "color": null },
        { "type": "font", "name": "Arial", "fontFamily": "SWISS", "height": 12,
          "weight": 400, "italic": false, "underline": true, "strikeout": false }
    ],
    "entities": [
        { "type": "rectangle", "x": 1, "y": 4, "width": 52, "height": 30, "pen": 0, "brush": 1 }
    ]
}"#;

#[test]
fn deserializes_scene() {
    let scene: Scene = serde_json::from_str(SCENE).unwrap();

    assert_eq!(scene.pixels_per_inch, 5);
    assert!(matches!(
        scene.objects[0],
        SceneObject::Pen {
            style: PenStyle::Solid,
            color: 0,
            width: 1,
        }
    ));
    assert!(matches!(scene.objects[1], SceneObject::Brush { color: None }));
    assert_eq!(scene.entities[0].brush.index(), 1);
    assert_eq!(
        scene.entities[0].shape,
        Shape::Rectangle {
            x: 1,
            y: 4,
            width: 52,
            height: 30,
        }
    );
}

#[test]
fn renders_deserialized_scene() {
    let scene: Scene = serde_json::from_str(SCENE).unwrap();
    let rendered = render(&scene).unwrap();

    let mut builder = MetafileBuilder::new(100, 75, 5);
    let pen = builder.create_pen(PenStyle::Solid, Rgb::BLACK, 1).unwrap();
    let brush = builder.create_brush(None).unwrap();
    let SceneObject::Font(font) = &scene.objects[2] else {
        panic!("third object should be a font");
    };
    builder.create_font(font).unwrap();
    builder.select_pen(pen).unwrap();
    builder.select_brush(brush).unwrap();
    builder.draw_rectangle(1, 4, 52, 30).unwrap();

    assert_eq!(rendered, builder.finish().unwrap());
}

#[test]
fn scene_roundtrips_through_json() {
    let scene: Scene = serde_json::from_str(SCENE).unwrap();
    let json = serde_json::to_string(&scene).unwrap();
    let again: Scene = serde_json::from_str(&json).unwrap();
    assert_eq!(scene, again);
}

#[test]
fn accepts_numeric_styles() {
    let json = r#"[
        { "type": "pen", "penStyle": 2, "color": 255, "width": 3 },
        { "type": "font", "name": "Arial", "fontFamily": 32, "height": 12,
          "weight": 700, "italic": true, "underline": false, "strikeout": false }
    ]"#;
    let objects: Vec<SceneObject> = serde_json::from_str(json).unwrap();

    assert!(matches!(
        objects[0],
        SceneObject::Pen {
            style: PenStyle::Dot,
            color: 255,
            width: 3,
        }
    ));
    let SceneObject::Font(font) = &objects[1] else {
        panic!("second object should be a font");
    };
    assert_eq!(font.family, FontFamily::Swiss);
    assert_eq!(font.family.as_word(), 0x2000);
}

#[test]
fn style_names_and_numbers_agree() {
    let by_name: PenStyle = serde_json::from_str(r#""DASH_DOT_DOT""#).unwrap();
    let by_number: PenStyle = serde_json::from_str("4").unwrap();
    assert_eq!(by_name, by_number);
    assert_eq!(
        serde_json::to_string(&PenStyle::DashDotDot).unwrap(),
        r#""DASH_DOT_DOT""#
    );

    let family: FontFamily = serde_json::from_str("80").unwrap();
    assert_eq!(family, FontFamily::Decorative);
}

#[test]
fn rejects_unknown_styles() {
    let err = serde_json::from_str::<PenStyle>("9").unwrap_err();
    assert!(err.to_string().contains("pen style"));
    assert!(serde_json::from_str::<PenStyle>("-1").is_err());
    assert!(serde_json::from_str::<FontFamily>(r#""SANS""#).is_err());
    assert!(serde_json::from_str::<FontFamily>("2").is_err());
}
