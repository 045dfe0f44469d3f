//! Node types for the retained document tree.

use std::time::Duration;

use indexmap::IndexMap;

use crate::geometry::{
  Rect,
  Vec2,
};

slotmap::new_key_type! {
  /// Stable identity for a document node. Keys survive reordering and
  /// remain valid until the node is removed from the document.
  pub struct NodeId;
}

/// What a node is, along with the interactive state the document encodes
/// for it. Plain markup (containers, list items, links, buttons) is
/// `Element`; form-like controls carry their own state so interactions
/// can be replayed onto the document before widgets decode them.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
  /// Generic block element.
  Element,
  /// Two-state toggle input.
  Checkbox { checked: bool },
  /// Grouped single-choice input; checking one unchecks the rest of its
  /// group.
  Radio { checked: bool, group: String },
  /// Single-line text input with a live value.
  TextInput { value: String },
  /// Option picker; `selected` indexes into `options`.
  Select {
    options:  Vec<String>,
    selected: usize,
  },
}

/// A single document node. Constructed builder-style, then appended to a
/// [`Document`](crate::Document), which owns tree links and layout state.
#[derive(Debug, Clone)]
pub struct Node {
  pub(crate) kind:       NodeKind,
  pub(crate) id:         Option<String>,
  pub(crate) classes:    Vec<String>,
  pub(crate) attrs:      IndexMap<String, String>,
  pub(crate) label:      String,
  pub(crate) display:    bool,
  pub(crate) height:     f32,
  // Filled in by the document.
  pub(crate) parent:     Option<NodeId>,
  pub(crate) children:   Vec<NodeId>,
  pub(crate) rect:       Option<Rect>,
  pub(crate) offset:     Option<Vec2>,
  pub(crate) transition: Option<Duration>,
}

/// Default row height for laid-out nodes, in surface pixels.
pub(crate) const DEFAULT_HEIGHT: f32 = 40.0;

impl Node {
  fn with_kind(kind: NodeKind) -> Self {
    Self {
      kind,
      id: None,
      classes: Vec::new(),
      attrs: IndexMap::new(),
      label: String::new(),
      display: true,
      height: DEFAULT_HEIGHT,
      parent: None,
      children: Vec::new(),
      rect: None,
      offset: None,
      transition: None,
    }
  }

  /// Create a generic element node.
  pub fn element() -> Self {
    Self::with_kind(NodeKind::Element)
  }

  /// Create a checkbox node.
  pub fn checkbox(checked: bool) -> Self {
    Self::with_kind(NodeKind::Checkbox { checked })
  }

  /// Create a radio node belonging to `group`.
  pub fn radio(group: impl Into<String>, checked: bool) -> Self {
    Self::with_kind(NodeKind::Radio {
      checked,
      group: group.into(),
    })
  }

  /// Create an empty text input node.
  pub fn text_input() -> Self {
    Self::with_kind(NodeKind::TextInput {
      value: String::new(),
    })
  }

  /// Create a select node; the first option starts selected.
  pub fn select(options: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self::with_kind(NodeKind::Select {
      options: options.into_iter().map(Into::into).collect(),
      selected: 0,
    })
  }

  // --- Builder API -------------------------------------------------------

  /// Set the node id (builder-style)
  pub fn id(mut self, id: impl Into<String>) -> Self {
    self.id = Some(id.into());
    self
  }

  /// Add a class (builder-style)
  pub fn class(mut self, class: impl Into<String>) -> Self {
    self.classes.push(class.into());
    self
  }

  /// Set an attribute (builder-style)
  pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.attrs.insert(name.into(), value.into());
    self
  }

  /// Set the text label (builder-style)
  pub fn label(mut self, label: impl Into<String>) -> Self {
    self.label = label.into();
    self
  }

  /// Set the laid-out row height (builder-style)
  pub fn height(mut self, height: f32) -> Self {
    self.height = height;
    self
  }

  /// Set initial visibility (builder-style)
  pub fn display(mut self, display: bool) -> Self {
    self.display = display;
    self
  }
}
