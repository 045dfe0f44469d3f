//! Pixel-space geometry shared by layout and the motion seam.

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
  pub x:      f32,
  pub y:      f32,
  pub width:  f32,
  pub height: f32,
}

impl Rect {
  pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  pub fn right(&self) -> f32 {
    self.x + self.width
  }

  pub fn bottom(&self) -> f32 {
    self.y + self.height
  }

  /// The rectangle shifted by `offset`, size unchanged.
  pub fn translated(&self, offset: Vec2) -> Self {
    Self {
      x: self.x + offset.x,
      y: self.y + offset.y,
      width: self.width,
      height: self.height,
    }
  }

  /// Positional difference `self - other` between two rectangles' origins.
  pub fn delta_from(&self, other: &Rect) -> Vec2 {
    Vec2 {
      x: self.x - other.x,
      y: self.y - other.y,
    }
  }
}

/// A 2D offset in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
  pub x: f32,
  pub y: f32,
}

impl Vec2 {
  pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

  pub fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }

  /// Linear interpolation between self and target.
  /// t is in the range [0.0, 1.0] where 0.0 = self, 1.0 = target.
  pub fn lerp(&self, target: &Self, t: f32) -> Self {
    Self {
      x: self.x + (target.x - self.x) * t,
      y: self.y + (target.y - self.y) * t,
    }
  }

  /// True if either component exceeds `tolerance` in magnitude.
  pub fn exceeds(&self, tolerance: f32) -> bool {
    self.x.abs() > tolerance || self.y.abs() > tolerance
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_translated_shifts_origin_only() {
    let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
    let moved = rect.translated(Vec2::new(-4.0, 8.0));
    assert_eq!(moved, Rect::new(6.0, 28.0, 100.0, 40.0));
  }

  #[test]
  fn test_delta_from() {
    let first = Rect::new(0.0, 120.0, 100.0, 40.0);
    let last = Rect::new(0.0, 40.0, 100.0, 40.0);
    assert_eq!(first.delta_from(&last), Vec2::new(0.0, 80.0));
  }

  #[test]
  fn test_lerp_endpoints_and_midpoint() {
    let from = Vec2::new(0.0, 80.0);
    let to = Vec2::ZERO;
    assert_eq!(from.lerp(&to, 0.0), from);
    assert_eq!(from.lerp(&to, 0.5), Vec2::new(0.0, 40.0));
    assert_eq!(from.lerp(&to, 1.0), to);
  }

  #[test]
  fn test_exceeds_tolerance_per_axis() {
    assert!(!Vec2::new(0.5, 0.5).exceeds(0.5));
    assert!(Vec2::new(0.0, 0.6).exceeds(0.5));
    assert!(Vec2::new(-0.6, 0.0).exceeds(0.5));
  }
}
