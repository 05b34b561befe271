//! Artlint Canonical Document Model
//!
//! This crate provides the typed, in-memory representation of a design
//! document that the artlint rule engine inspects. A document is a tree of
//! [`Layer`] nodes, each carrying a unique id, a kind tag, a frame, and
//! kind-specific attributes (text content, font, symbol master, ...).
//!
//! The model owns no lint logic. Documents are produced by an external
//! loader (out of scope here) or built directly with the constructor
//! helpers, and are treated as immutable for the duration of a lint run.
//!
//! # Example
//!
//! ```
//! use artlint_document::{Document, Frame, Layer};
//!
//! let doc = Document::new(vec![Layer::artboard(
//!     "home",
//!     "Home Screen",
//!     Frame::sized(375.0, 812.0),
//! )
//! .with_child(
//!     Layer::text("title", "Title", Frame::new(16.0, 44.0, 343.0, 32.0), "Welcome")
//!         .with_font("SFPro-Bold", 28.0),
//! )]);
//!
//! assert_eq!(doc.layers.len(), 1);
//! ```

pub mod document;
pub mod layer;

pub use document::Document;
pub use layer::{Frame, Layer, LayerKind, TextAttributes};
