//! # The-Sifter
//!
//! A client-side filtering, sorting, and reordering widget for lists
//! embedded in a document tree.
//!
//! ## Overview
//!
//! A markup author annotates a list once (per-item metadata on each
//! item, marker attributes on whatever controls they like) and the
//! sifter wires the rest. Filter predicates combine with AND across
//! attributes and OR within one attribute's values, and sort
//! comparators derive from the selected attribute, toggling direction
//! on repeat. Every reorder or show/hide is wrapped in a position-diff
//! animation that carries items smoothly to their new places, and
//! control state (active classes, sort direction indicators, input
//! values) is re-synchronized from the model after every mutation.
//!
//! ## Quick Start
//!
//! ```rust
//! use the_sifter::{
//!   Options,
//!   Sifter,
//! };
//! use the_sifter_surface::{
//!   Document,
//!   Interaction,
//!   Node,
//! };
//!
//! let mut doc = Document::new();
//! let container = doc.append(doc.root(), Node::element().id("campsites"));
//! let list = doc.append(container, Node::element().class("sift-list"));
//! let bear = doc.append(
//!   list,
//!   Node::element()
//!     .class("sift-item")
//!     .label("Bear Hollow")
//!     .attr("data-sift", "capacity-4 type-tent"),
//! );
//! let aspen = doc.append(
//!   list,
//!   Node::element()
//!     .class("sift-item")
//!     .label("Aspen Flat")
//!     .attr("data-sift", "capacity-6 type-cabin"),
//! );
//! let tents = doc.append(
//!   container,
//!   Node::checkbox(false)
//!     .attr("data-action", "filter")
//!     .attr("data-attribute", "type")
//!     .attr("data-value", "tent"),
//! );
//!
//! let mut sifter =
//!   Sifter::new(&mut doc, container, &Options::new(), &Options::new()).unwrap();
//! sifter.handle_interaction(&mut doc, tents, &Interaction::Toggled(true));
//!
//! assert!(!doc.has_class(bear, "is-hidden"));
//! assert!(doc.has_class(aspen, "is-hidden"));
//!
//! // Pump the position animation to completion.
//! while sifter.is_animating() {
//!   sifter.tick(&mut doc, 1.0 / 60.0);
//! }
//! ```

mod animate;
mod config;
mod controls;
mod error;
mod filters;
mod properties;
mod sifter;
mod sorting;

pub use animate::Animator;
pub use config::{
  Config,
  Options,
};
pub use controls::{
  Action,
  ControlKind,
};
pub use error::{
  Result,
  SifterError,
};
pub use filters::FilterSet;
pub use properties::{
  Properties,
  PropertyValue,
};
pub use sifter::Sifter;
pub use sorting::{
  Direction,
  SortState,
};
