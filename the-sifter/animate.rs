//! The position-diff animator.
//!
//! Every mutation runs inside [`Animator::run`]: measure the affected
//! nodes, mutate, reflow, measure again, pin each moved node back at
//! its old position with an instantaneous inverse offset, then arm a
//! timed transition and interpolate the offset to zero as the host
//! pumps [`Animator::tick`]. The result reads as continuous motion
//! across a discontinuous reorder or show/hide.

use std::time::Duration;

use indexmap::IndexMap;
use the_sifter_surface::{
  Motion,
  NodeId,
  Vec2,
};

/// Movement at or below this distance on both axes is not animated.
const TOLERANCE: f32 = 0.5;

/// One node's in-progress return to its laid-out position.
#[derive(Debug)]
struct Flight {
  start:    Vec2,
  duration: f32,
  elapsed:  f32,
}

impl Flight {
  fn new(start: Vec2, duration: Duration) -> Self {
    Self {
      start,
      duration: duration.as_secs_f32(),
      elapsed: 0.0,
    }
  }

  /// Advance by `dt` seconds; true once the flight has landed.
  fn update(&mut self, dt: f32) -> bool {
    self.elapsed += dt;
    self.elapsed >= self.duration
  }

  fn current(&self) -> Vec2 {
    let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
    self.start.lerp(&Vec2::ZERO, t)
  }
}

#[derive(Debug)]
pub struct Animator {
  enabled:  bool,
  duration: Duration,
  flights:  IndexMap<NodeId, Flight>,
}

impl Animator {
  /// A zero duration disables animation outright.
  pub fn new(enabled: bool, duration: Duration) -> Self {
    Self {
      enabled: enabled && !duration.is_zero(),
      duration,
      flights: IndexMap::new(),
    }
  }

  /// Run `mutate` under before/after position measurement and start a
  /// flight for every affected node that moved. Nodes with no
  /// measurable rectangle on either side (hidden before or after) are
  /// skipped. With animation disabled, `mutate` runs directly and only
  /// layout is refreshed.
  pub fn run<M, F>(&mut self, surface: &mut M, affected: &[NodeId], mutate: F)
  where
    M: Motion,
    F: FnOnce(&mut M),
  {
    if !self.enabled {
      mutate(surface);
      surface.flush_layout();
      return;
    }

    // First: the visual rectangles, so a mutation landing mid-transition
    // starts from wherever the node currently is.
    let first: Vec<(NodeId, Vec2)> = affected
      .iter()
      .filter_map(|&id| surface.measure(id).map(|rect| (id, Vec2::new(rect.x, rect.y))))
      .collect();

    mutate(surface);
    surface.flush_layout();

    for (id, before) in first {
      // Disarm before clearing the old offset: on a host with live
      // transitions the snap back to the laid-out position must be
      // instantaneous, not animated.
      surface.end_transition(id);
      surface.clear_offset(id);
      self.flights.shift_remove(&id);

      // Last: the resting rectangle after the mutation.
      let Some(after) = surface.measure(id) else {
        continue;
      };
      let delta = Vec2::new(before.x - after.x, before.y - after.y);
      if !delta.exceeds(TOLERANCE) {
        continue;
      }

      surface.set_offset(id, delta);
      surface.flush_layout();
      surface.begin_transition(id, self.duration);
      self.flights.insert(id, Flight::new(delta, self.duration));
    }
  }

  /// Advance every flight by `dt` seconds, writing interpolated offsets
  /// through the surface. A landed flight clears its node's offset and
  /// transition exactly once and is dropped.
  pub fn tick<M: Motion>(&mut self, surface: &mut M, dt: f32) {
    let mut landed = Vec::new();
    for (&id, flight) in self.flights.iter_mut() {
      if flight.update(dt) {
        landed.push(id);
      } else {
        surface.set_offset(id, flight.current());
      }
    }
    for id in landed {
      self.flights.shift_remove(&id);
      surface.clear_offset(id);
      surface.end_transition(id);
    }
  }

  pub fn is_animating(&self) -> bool {
    !self.flights.is_empty()
  }

  pub fn in_flight(&self) -> usize {
    self.flights.len()
  }
}
