//! WMF writer - bit-exact Windows Metafile assembly
//!
//! This library writes placeable Windows Metafiles: a placeable header, the
//! core header, a list of GDI records and the EOF record. Header fields that
//! depend on the finished file (file size, object count, largest record) are
//! backfilled when the builder is finalized.
//!
//! # Quick Start
//!
//! ```rust
//! use wmf::{MetafileBuilder, PenStyle, Rgb};
//!
//! let mut builder = MetafileBuilder::new(100, 75, 5);
//! let pen = builder.create_pen(PenStyle::Solid, Rgb::BLACK, 1)?;
//! let brush = builder.create_brush(None)?;
//! builder.select_pen(pen)?;
//! builder.select_brush(brush)?;
//! builder.draw_rectangle(1, 4, 52, 30)?;
//!
//! let bytes = builder.finish()?;
//! assert_eq!(&bytes[..4], &[0xD7, 0xCD, 0xC6, 0x9A]);
//! # Ok::<(), wmf::Error>(())
//! ```
//!
//! # Features
//!
//! - **Deterministic output** - identical calls produce identical bytes
//! - **Selection elision** - reselecting the current object writes nothing
//! - **Explicit lifecycle** - writes after finalize and reads before it fail
//! - **Scene rendering** - build a whole picture from a [`Scene`] description
//!
//! Numeric inputs are never range-checked: each word field keeps the low
//! 16 bits of its value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod builder;
pub mod format;
pub mod scene;

pub use builder::{Font, GeometryEmitter, Handle, MetafileBuilder, ObjectTable, Options, Slot};
pub use format::{
    BrushStyle, Error, FontFamily, FontFlags, PenStyle, RecordEncoder, RecordType, Result, Rgb,
    WordStream,
};
pub use scene::{Entity, Scene, SceneObject, Shape, render};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
