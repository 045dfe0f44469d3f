//! Sort state: the active sort attribute, its direction, and the
//! comparator derived from both.

use std::cmp::Ordering;

use crate::properties::{
  Properties,
  PropertyValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
  #[default]
  Ascending,
  Descending,
}

impl Direction {
  fn flipped(self) -> Self {
    match self {
      Direction::Ascending => Direction::Descending,
      Direction::Descending => Direction::Ascending,
    }
  }

  /// The suffix appended to the primary sort control's label.
  pub fn indicator(self) -> &'static str {
    match self {
      Direction::Ascending => " ▲",
      Direction::Descending => " ▼",
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
  attribute: Option<String>,
  direction: Direction,
}

impl SortState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn attribute(&self) -> Option<&str> {
    self.attribute.as_deref()
  }

  pub fn direction(&self) -> Direction {
    self.direction
  }

  /// Request a sort on `attribute`: re-requesting the current attribute
  /// flips direction, anything else selects it ascending.
  pub fn set_or_toggle(&mut self, attribute: &str) {
    if self.attribute.as_deref() == Some(attribute) {
      self.direction = self.direction.flipped();
    } else {
      self.attribute = Some(attribute.to_string());
      self.direction = Direction::Ascending;
    }
  }

  /// Back to no active sort, ascending.
  pub fn clear(&mut self) {
    *self = Self::default();
  }

  /// Compare two items' properties under the current sort. Neutral when
  /// no attribute is set. Items missing the attribute sort last in both
  /// directions, so the absence rule sits outside the direction flip.
  pub fn compare(&self, a: &Properties, b: &Properties) -> Ordering {
    let Some(attribute) = self.attribute.as_deref() else {
      return Ordering::Equal;
    };
    match (a.get(attribute), b.get(attribute)) {
      (None, None) => Ordering::Equal,
      (None, Some(_)) => Ordering::Greater,
      (Some(_), None) => Ordering::Less,
      (Some(a), Some(b)) => {
        let ordering = compare_values(a, b);
        match self.direction {
          Direction::Ascending => ordering,
          Direction::Descending => ordering.reverse(),
        }
      },
    }
  }
}

/// Numeric when both sides are numbers, otherwise a case-folded
/// comparison of their display forms.
fn compare_values(a: &PropertyValue, b: &PropertyValue) -> Ordering {
  if let (Some(a), Some(b)) = (a.as_number(), b.as_number()) {
    return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
  }
  a.to_string()
    .to_lowercase()
    .cmp(&b.to_string().to_lowercase())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn named(name: &str) -> Properties {
    Properties::parse(Some(&format!("name-{name}")))
  }

  #[test]
  fn test_toggle_flips_direction_only_for_same_attribute() {
    let mut sort = SortState::new();
    sort.set_or_toggle("name");
    assert_eq!(sort.attribute(), Some("name"));
    assert_eq!(sort.direction(), Direction::Ascending);

    sort.set_or_toggle("name");
    assert_eq!(sort.direction(), Direction::Descending);

    sort.set_or_toggle("capacity");
    assert_eq!(sort.attribute(), Some("capacity"));
    assert_eq!(sort.direction(), Direction::Ascending);
  }

  #[test]
  fn test_unset_sort_compares_neutral() {
    let sort = SortState::new();
    assert_eq!(sort.compare(&named("b"), &named("a")), Ordering::Equal);
  }

  #[test]
  fn test_string_comparison_folds_case() {
    let mut sort = SortState::new();
    sort.set_or_toggle("name");

    let mut items = [named("Banana"), named("apple"), named("Cherry")];
    items.sort_by(|a, b| sort.compare(a, b));
    let order: Vec<String> = items
      .iter()
      .map(|p| p.get("name").unwrap().to_string())
      .collect();
    assert_eq!(order, ["apple", "Banana", "Cherry"]);

    sort.set_or_toggle("name");
    items.sort_by(|a, b| sort.compare(a, b));
    let order: Vec<String> = items
      .iter()
      .map(|p| p.get("name").unwrap().to_string())
      .collect();
    assert_eq!(order, ["Cherry", "Banana", "apple"]);
  }

  #[test]
  fn test_numeric_pairs_compare_numerically() {
    let mut sort = SortState::new();
    sort.set_or_toggle("capacity");

    let nine = Properties::parse(Some("capacity-9"));
    let ten = Properties::parse(Some("capacity-10"));
    assert_eq!(sort.compare(&nine, &ten), Ordering::Less);

    // A non-numeric side falls back to string comparison.
    let worded = Properties::parse(Some("capacity-many"));
    assert_eq!(sort.compare(&ten, &worded), Ordering::Less);
  }

  #[test]
  fn test_absent_values_sort_last_in_both_directions() {
    let mut sort = SortState::new();
    sort.set_or_toggle("name");
    let missing = Properties::parse(Some("capacity-4"));

    assert_eq!(sort.compare(&missing, &named("apple")), Ordering::Greater);
    assert_eq!(sort.compare(&named("apple"), &missing), Ordering::Less);
    assert_eq!(sort.compare(&missing, &missing), Ordering::Equal);

    sort.set_or_toggle("name");
    assert_eq!(sort.direction(), Direction::Descending);
    assert_eq!(sort.compare(&missing, &named("apple")), Ordering::Greater);
  }
}
