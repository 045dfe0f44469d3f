//! # The-Sifter Surface
//!
//! A retained widget surface for hosting list interfaces headlessly.
//!
//! ## Overview
//!
//! This crate provides the small slice of a rendering host that the
//! sifter widget needs: a tree of nodes with classes, attributes and
//! control state, a top-down stacked layout, simple selector queries,
//! and per-node transform offsets with transition marks so positions
//! can be animated. It has no renderer of its own; embedders draw the
//! tree however they like and feed interactions back in.
//!
//! ## Quick Start
//!
//! ```rust
//! use the_sifter_surface::{
//!   Document,
//!   Motion,
//!   Node,
//! };
//!
//! let mut doc = Document::new();
//! let list = doc.append(doc.root(), Node::element().class("list"));
//! let first = doc.append(list, Node::element().label("Alpha"));
//! let second = doc.append(list, Node::element().label("Beta"));
//! doc.flush_layout();
//!
//! // Reordering children moves their measured rectangles.
//! doc.move_to_end(list, first);
//! doc.flush_layout();
//! assert!(doc.measure(first).unwrap().y > doc.measure(second).unwrap().y);
//! ```

mod document;
mod event;
mod geometry;
mod motion;
mod node;
mod selector;

pub use document::Document;
pub use event::Interaction;
pub use geometry::{
  Rect,
  Vec2,
};
pub use motion::Motion;
pub use node::{
  Node,
  NodeId,
  NodeKind,
};
pub use selector::{
  Selector,
  SelectorError,
};
