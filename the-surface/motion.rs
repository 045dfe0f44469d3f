use std::time::Duration;

use crate::{
  geometry::{
    Rect,
    Vec2,
  },
  node::NodeId,
};

/// The narrow surface a position animator needs from its host.
///
/// Anything that can report where a node sits, recompute layout on
/// demand, and hold a transform offset plus a transition mark on a node
/// can be animated. [`crate::Document`] implements it; tests and
/// embedders are free to provide their own.
pub trait Motion {
  /// The node's current visual rectangle, including any in-flight
  /// transform offset. `None` when the node is not rendered.
  fn measure(&self, id: NodeId) -> Option<Rect>;

  /// Synchronously recompute layout so later measurements observe
  /// mutations made since the last flush.
  fn flush_layout(&mut self);

  /// Pin a transform offset onto the node, relative to its laid-out
  /// position.
  fn set_offset(&mut self, id: NodeId, offset: Vec2);

  /// Drop the node's transform offset, letting it render at its
  /// laid-out position.
  fn clear_offset(&mut self, id: NodeId);

  /// Arm a transition of the given duration on the node's transform.
  fn begin_transition(&mut self, id: NodeId, duration: Duration);

  /// Disarm the node's transition so offset changes apply instantly.
  fn end_transition(&mut self, id: NodeId);
}
