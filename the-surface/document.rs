//! A retained in-memory document: the host surface widgets act on.
//!
//! The document owns a tree of [`Node`]s addressed by [`NodeId`], replays
//! interactions onto control state, and computes a simple top-down stacked
//! layout so that reordering or hiding children observably moves
//! rectangles. Inline transform offsets and transition marks are stored
//! per node the way a browser keeps inline styles; advancing them over
//! time is the animator's job, not the document's.

use std::time::Duration;

use slotmap::SlotMap;

use crate::{
  event::Interaction,
  geometry::{
    Rect,
    Vec2,
  },
  motion::Motion,
  node::{
    Node,
    NodeId,
    NodeKind,
  },
  selector::Selector,
};

/// Default viewport width given to the root node, in surface pixels.
const DEFAULT_WIDTH: f32 = 800.0;

pub struct Document {
  nodes: SlotMap<NodeId, Node>,
  root:  NodeId,
  width: f32,
}

impl Default for Document {
  fn default() -> Self {
    Self::new()
  }
}

impl Document {
  /// Create an empty document with a root element node.
  pub fn new() -> Self {
    let mut nodes = SlotMap::with_key();
    let root = nodes.insert(Node::element());
    Self {
      nodes,
      root,
      width: DEFAULT_WIDTH,
    }
  }

  /// Set the viewport width used for layout (builder-style)
  pub fn with_width(mut self, width: f32) -> Self {
    self.width = width;
    self
  }

  pub fn root(&self) -> NodeId {
    self.root
  }

  // --- Tree construction and order ---------------------------------------

  /// Append `node` as the last child of `parent`, returning its id.
  pub fn append(&mut self, parent: NodeId, node: Node) -> NodeId {
    if !self.nodes.contains_key(parent) {
      log::warn!("append onto unknown parent node; attaching to root");
      return self.append(self.root, node);
    }
    let id = self.nodes.insert(node);
    self.nodes[id].parent = Some(parent);
    self.nodes[parent].children.push(id);
    id
  }

  /// Move `child` to the end of `parent`'s child list, keeping identity
  /// and state. Re-appending an already-last child is a no-op.
  pub fn move_to_end(&mut self, parent: NodeId, child: NodeId) {
    let belongs = self
      .nodes
      .get(child)
      .is_some_and(|node| node.parent == Some(parent));
    if !belongs {
      log::warn!("move_to_end on a node that is not a child of the given parent");
      return;
    }
    let children = &mut self.nodes[parent].children;
    if let Some(position) = children.iter().position(|&id| id == child) {
      children.remove(position);
      children.push(child);
    }
  }

  /// The ordered child list of `parent`.
  pub fn children(&self, parent: NodeId) -> &[NodeId] {
    self
      .nodes
      .get(parent)
      .map(|node| node.children.as_slice())
      .unwrap_or(&[])
  }

  /// All descendants of `scope` in depth-first order, excluding `scope`.
  pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = self
      .children(scope)
      .iter()
      .rev()
      .copied()
      .collect();
    while let Some(id) = stack.pop() {
      out.push(id);
      stack.extend(self.children(id).iter().rev().copied());
    }
    out
  }

  /// First descendant of `scope` matching `selector`, in document order.
  pub fn query(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
    self
      .descendants(scope)
      .into_iter()
      .find(|&id| self.node_matches(id, selector))
  }

  /// All descendants of `scope` matching `selector`, in document order.
  pub fn query_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
    self
      .descendants(scope)
      .into_iter()
      .filter(|&id| self.node_matches(id, selector))
      .collect()
  }

  pub fn node_matches(&self, id: NodeId, selector: &Selector) -> bool {
    self
      .nodes
      .get(id)
      .is_some_and(|node| selector.matches(node))
  }

  // --- Classes, attributes, labels ---------------------------------------

  pub fn has_class(&self, id: NodeId, class: &str) -> bool {
    self
      .nodes
      .get(id)
      .is_some_and(|node| node.classes.iter().any(|c| c == class))
  }

  pub fn add_class(&mut self, id: NodeId, class: &str) {
    if let Some(node) = self.nodes.get_mut(id)
      && !node.classes.iter().any(|c| c == class)
    {
      node.classes.push(class.to_string());
    }
  }

  pub fn remove_class(&mut self, id: NodeId, class: &str) {
    if let Some(node) = self.nodes.get_mut(id) {
      node.classes.retain(|c| c != class);
    }
  }

  /// Toggle `class` on or off to match `on`.
  pub fn set_class(&mut self, id: NodeId, class: &str, on: bool) {
    if on {
      self.add_class(id, class);
    } else {
      self.remove_class(id, class);
    }
  }

  pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
    self
      .nodes
      .get(id)
      .and_then(|node| node.attrs.get(name))
      .map(String::as_str)
  }

  pub fn label(&self, id: NodeId) -> &str {
    self
      .nodes
      .get(id)
      .map(|node| node.label.as_str())
      .unwrap_or("")
  }

  pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) {
    if let Some(node) = self.nodes.get_mut(id) {
      node.label = label.into();
    }
  }

  // --- Visibility --------------------------------------------------------

  pub fn is_displayed(&self, id: NodeId) -> bool {
    self.nodes.get(id).is_some_and(|node| node.display)
  }

  pub fn set_display(&mut self, id: NodeId, display: bool) {
    if let Some(node) = self.nodes.get_mut(id) {
      node.display = display;
    }
  }

  // --- Control state -----------------------------------------------------

  pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
    self.nodes.get(id).map(|node| &node.kind)
  }

  pub fn is_checked(&self, id: NodeId) -> bool {
    matches!(
      self.nodes.get(id).map(|node| &node.kind),
      Some(NodeKind::Checkbox { checked: true }) | Some(NodeKind::Radio { checked: true, .. })
    )
  }

  /// Set a checkbox or radio's checked state. Checking a radio unchecks
  /// every other radio in its group, without emitting interactions, the
  /// way native radio groups behave.
  pub fn set_checked(&mut self, id: NodeId, checked: bool) {
    let group = match self.nodes.get_mut(id) {
      Some(node) => {
        match &mut node.kind {
          NodeKind::Checkbox { checked: state } => {
            *state = checked;
            None
          },
          NodeKind::Radio {
            checked: state,
            group,
          } => {
            *state = checked;
            checked.then(|| group.clone())
          },
          _ => {
            log::debug!("set_checked on a non-checkable node");
            None
          },
        }
      },
      None => None,
    };

    if let Some(group) = group {
      let siblings: Vec<NodeId> = self
        .nodes
        .iter()
        .filter_map(|(other, node)| {
          match &node.kind {
            NodeKind::Radio { group: g, .. } if other != id && *g == group => Some(other),
            _ => None,
          }
        })
        .collect();
      for other in siblings {
        if let Some(node) = self.nodes.get_mut(other)
          && let NodeKind::Radio { checked: state, .. } = &mut node.kind
        {
          *state = false;
        }
      }
    }
  }

  pub fn text_value(&self, id: NodeId) -> Option<&str> {
    match self.nodes.get(id).map(|node| &node.kind) {
      Some(NodeKind::TextInput { value }) => Some(value.as_str()),
      _ => None,
    }
  }

  pub fn set_text_value(&mut self, id: NodeId, value: impl Into<String>) {
    if let Some(node) = self.nodes.get_mut(id) {
      match &mut node.kind {
        NodeKind::TextInput { value: state } => *state = value.into(),
        _ => log::debug!("set_text_value on a non-text node"),
      }
    }
  }

  pub fn selected_index(&self, id: NodeId) -> Option<usize> {
    match self.nodes.get(id).map(|node| &node.kind) {
      Some(NodeKind::Select { selected, .. }) => Some(*selected),
      _ => None,
    }
  }

  /// The value of a select's currently chosen option.
  pub fn selected_value(&self, id: NodeId) -> Option<&str> {
    match self.nodes.get(id).map(|node| &node.kind) {
      Some(NodeKind::Select { options, selected }) => {
        options.get(*selected).map(String::as_str)
      },
      _ => None,
    }
  }

  /// Choose a select option by index. Out-of-range indexes are rejected
  /// with a warning and leave the selection unchanged.
  pub fn select_option(&mut self, id: NodeId, index: usize) -> bool {
    if let Some(node) = self.nodes.get_mut(id) {
      match &mut node.kind {
        NodeKind::Select { options, selected } => {
          if index < options.len() {
            *selected = index;
            return true;
          }
          log::warn!(
            "select option index {index} out of range ({} options)",
            options.len()
          );
        },
        _ => log::debug!("select_option on a non-select node"),
      }
    }
    false
  }

  /// Replay an interaction's encoded state change onto the node, the way
  /// a browser updates an input before change handlers run. Returns false
  /// when the interaction does not fit the node's kind.
  pub fn apply_interaction(&mut self, id: NodeId, interaction: &Interaction) -> bool {
    let Some(node) = self.nodes.get(id) else {
      log::debug!("interaction on unknown node");
      return false;
    };

    match (&node.kind, interaction) {
      (NodeKind::Checkbox { .. } | NodeKind::Radio { .. }, Interaction::Toggled(checked)) => {
        self.set_checked(id, *checked);
        true
      },
      (NodeKind::TextInput { .. }, Interaction::Edited(text)) => {
        self.set_text_value(id, text.clone());
        true
      },
      (NodeKind::Select { .. }, Interaction::Picked(index)) => self.select_option(id, *index),
      (NodeKind::Element, Interaction::Clicked) => true,
      (kind, interaction) => {
        log::debug!("interaction {interaction:?} does not fit node kind {kind:?}");
        false
      },
    }
  }

  // --- Style inspection ---------------------------------------------------

  /// The node's in-flight transform offset, if any.
  pub fn offset(&self, id: NodeId) -> Option<Vec2> {
    self.nodes.get(id).and_then(|node| node.offset)
  }

  /// The node's armed transition duration, if any.
  pub fn transition(&self, id: NodeId) -> Option<Duration> {
    self.nodes.get(id).and_then(|node| node.transition)
  }

  /// The node's laid-out rectangle, before any transform offset.
  pub fn layout_rect(&self, id: NodeId) -> Option<Rect> {
    self.nodes.get(id).and_then(|node| node.rect)
  }

  // --- Layout -------------------------------------------------------------

  fn layout_node(&mut self, id: NodeId, x: f32, y: f32, width: f32) -> f32 {
    if !self.nodes[id].display {
      self.clear_rects(id);
      return 0.0;
    }

    let children = self.nodes[id].children.clone();
    let mut used = 0.0;
    if children.is_empty() {
      used = self.nodes[id].height;
    } else {
      for child in children {
        used += self.layout_node(child, x, y + used, width);
      }
    }
    self.nodes[id].rect = Some(Rect::new(x, y, width, used));
    used
  }

  fn clear_rects(&mut self, id: NodeId) {
    let children = match self.nodes.get_mut(id) {
      Some(node) => {
        node.rect = None;
        node.children.clone()
      },
      None => return,
    };
    for child in children {
      self.clear_rects(child);
    }
  }
}

impl Motion for Document {
  /// The visual rectangle: layout position plus any in-flight offset.
  /// Hidden nodes have no rectangle.
  fn measure(&self, id: NodeId) -> Option<Rect> {
    let node = self.nodes.get(id)?;
    let rect = node.rect?;
    Some(match node.offset {
      Some(offset) => rect.translated(offset),
      None => rect,
    })
  }

  fn flush_layout(&mut self) {
    let width = self.width;
    self.layout_node(self.root, 0.0, 0.0, width);
  }

  fn set_offset(&mut self, id: NodeId, offset: Vec2) {
    if let Some(node) = self.nodes.get_mut(id) {
      node.offset = Some(offset);
    }
  }

  fn clear_offset(&mut self, id: NodeId) {
    if let Some(node) = self.nodes.get_mut(id) {
      node.offset = None;
    }
  }

  fn begin_transition(&mut self, id: NodeId, duration: Duration) {
    if let Some(node) = self.nodes.get_mut(id) {
      node.transition = Some(duration);
    }
  }

  fn end_transition(&mut self, id: NodeId) {
    if let Some(node) = self.nodes.get_mut(id) {
      node.transition = None;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn stacked_list(doc: &mut Document) -> (NodeId, Vec<NodeId>) {
    let list = doc.append(doc.root(), Node::element().class("list"));
    let items = (0..3)
      .map(|i| doc.append(list, Node::element().label(format!("item {i}"))))
      .collect();
    doc.flush_layout();
    (list, items)
  }

  #[test]
  fn test_layout_stacks_children() {
    let mut doc = Document::new();
    let (_, items) = stacked_list(&mut doc);

    let rects: Vec<Rect> = items.iter().map(|&id| doc.measure(id).unwrap()).collect();
    assert_eq!(rects[0].y, 0.0);
    assert_eq!(rects[1].y, rects[0].height);
    assert_eq!(rects[2].y, rects[0].height + rects[1].height);
  }

  #[test]
  fn test_hidden_nodes_leave_the_flow_and_lose_rects() {
    let mut doc = Document::new();
    let (_, items) = stacked_list(&mut doc);

    doc.set_display(items[0], false);
    doc.flush_layout();

    assert_eq!(doc.measure(items[0]), None);
    assert_eq!(doc.measure(items[1]).unwrap().y, 0.0);
  }

  #[test]
  fn test_move_to_end_reorders_layout() {
    let mut doc = Document::new();
    let (list, items) = stacked_list(&mut doc);

    doc.move_to_end(list, items[0]);
    doc.flush_layout();

    assert_eq!(doc.children(list), &[items[1], items[2], items[0]]);
    assert_eq!(doc.measure(items[1]).unwrap().y, 0.0);
    let last = doc.measure(items[0]).unwrap();
    assert!(last.y > doc.measure(items[2]).unwrap().y);
  }

  #[test]
  fn test_measure_includes_offset() {
    let mut doc = Document::new();
    let (_, items) = stacked_list(&mut doc);

    let resting = doc.measure(items[1]).unwrap();
    doc.set_offset(items[1], Vec2::new(0.0, -12.0));
    assert_eq!(doc.measure(items[1]).unwrap().y, resting.y - 12.0);

    doc.clear_offset(items[1]);
    assert_eq!(doc.measure(items[1]).unwrap(), resting);
  }

  #[test]
  fn test_radio_groups_are_exclusive() {
    let mut doc = Document::new();
    let root = doc.root();
    let a = doc.append(root, Node::radio("capacity", true));
    let b = doc.append(root, Node::radio("capacity", false));
    let other = doc.append(root, Node::radio("season", true));

    doc.set_checked(b, true);

    assert!(!doc.is_checked(a));
    assert!(doc.is_checked(b));
    assert!(doc.is_checked(other), "other groups are untouched");
  }

  #[test]
  fn test_apply_interaction_respects_node_kind() {
    let mut doc = Document::new();
    let root = doc.root();
    let check = doc.append(root, Node::checkbox(false));
    let select = doc.append(root, Node::select(["name", "capacity"]));

    assert!(doc.apply_interaction(check, &Interaction::Toggled(true)));
    assert!(doc.is_checked(check));

    assert!(!doc.apply_interaction(check, &Interaction::Picked(1)));
    assert!(doc.apply_interaction(select, &Interaction::Picked(1)));
    assert_eq!(doc.selected_value(select), Some("capacity"));
    assert!(!doc.apply_interaction(select, &Interaction::Picked(7)));
    assert_eq!(doc.selected_index(select), Some(1));
  }

  #[test]
  fn test_query_scopes_to_descendants() {
    let mut doc = Document::new();
    let root = doc.root();
    let outer = doc.append(root, Node::element().class("pane"));
    let inner = doc.append(outer, Node::element().class("pane"));
    let selector = Selector::parse(".pane").unwrap();

    assert_eq!(doc.query(outer, &selector), Some(inner));
    assert_eq!(doc.query_all(root, &selector), vec![outer, inner]);
  }
}
