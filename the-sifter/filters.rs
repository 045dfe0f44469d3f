//! The active filter predicate set: attribute name to accepted values.
//!
//! Visibility combines predicates with AND across attributes and OR
//! within one attribute's accepted values. All value comparison is
//! case-insensitive, and an attribute whose value set drains to empty
//! is removed outright so it can never veto matches.

use indexmap::IndexMap;

use crate::properties::Properties;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
  accepted: IndexMap<String, Vec<String>>,
}

impl FilterSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Accept `value` for `attribute`. An exclusive add clears the
  /// attribute's other values first (radio semantics: at most one
  /// active value per attribute). Re-adding an already accepted value
  /// is a no-op.
  pub fn add(&mut self, attribute: &str, value: &str, exclusive: bool) {
    let values = self.accepted.entry(attribute.to_string()).or_default();
    if exclusive {
      values.clear();
    }
    if !values.iter().any(|existing| fold_eq(existing, value)) {
      values.push(value.to_string());
    }
  }

  /// Stop accepting `value` for `attribute`. Draining an attribute's
  /// last value removes the attribute key entirely.
  pub fn remove(&mut self, attribute: &str, value: &str) {
    if let Some(values) = self.accepted.get_mut(attribute) {
      values.retain(|existing| !fold_eq(existing, value));
      if values.is_empty() {
        self.accepted.shift_remove(attribute);
      }
    }
  }

  /// Drop every accepted value for `attribute` in one step.
  pub fn clear_attribute(&mut self, attribute: &str) {
    self.accepted.shift_remove(attribute);
  }

  /// Whether `value` is currently accepted for `attribute`. Decides if
  /// a repeated non-exclusive interaction should toggle the filter off.
  pub fn is_active(&self, attribute: &str, value: &str) -> bool {
    self
      .accepted
      .get(attribute)
      .is_some_and(|values| values.iter().any(|existing| fold_eq(existing, value)))
  }

  /// Whether an item with these properties passes every active
  /// predicate. An absent property compares as the empty string, so it
  /// never matches a non-empty accepted value. An empty set matches
  /// everything.
  pub fn matches(&self, properties: &Properties) -> bool {
    self.accepted.iter().all(|(attribute, values)| {
      let actual = properties
        .get(attribute)
        .map(|value| value.to_string())
        .unwrap_or_default();
      values.iter().any(|accepted| fold_eq(accepted, &actual))
    })
  }

  pub fn is_empty(&self) -> bool {
    self.accepted.is_empty()
  }

  pub fn clear(&mut self) {
    self.accepted.clear();
  }
}

fn fold_eq(a: &str, b: &str) -> bool {
  a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_exclusive_add_keeps_one_value() {
    let mut filters = FilterSet::new();
    filters.add("type", "tent", true);
    filters.add("type", "cabin", true);

    assert!(!filters.is_active("type", "tent"));
    assert!(filters.is_active("type", "cabin"));
  }

  #[test]
  fn test_remove_drains_attribute_key() {
    let mut filters = FilterSet::new();
    filters.add("type", "tent", false);
    filters.add("capacity", "4", false);
    filters.remove("type", "TENT");

    let tent = Properties::parse(Some("capacity-4 type-tent"));
    let cabin = Properties::parse(Some("capacity-4 type-cabin"));
    assert!(filters.matches(&tent), "drained attribute no longer vetoes");
    assert!(filters.matches(&cabin));
    assert!(!filters.is_empty());
  }

  #[test]
  fn test_clear_attribute_drops_all_values_at_once() {
    let mut filters = FilterSet::new();
    filters.add("name", "bear", false);
    filters.add("name", "dune", false);
    filters.add("type", "tent", false);
    filters.clear_attribute("name");

    assert!(!filters.is_active("name", "bear"));
    assert!(!filters.is_active("name", "dune"));
    assert!(filters.is_active("type", "tent"));
    assert!(filters.matches(&Properties::parse(Some("type-tent"))));
  }

  #[test]
  fn test_matches_ands_attributes_and_ors_values() {
    let mut filters = FilterSet::new();
    filters.add("type", "tent", false);
    filters.add("type", "cabin", false);
    filters.add("capacity", "4", false);

    assert!(filters.matches(&Properties::parse(Some("type-tent capacity-4"))));
    assert!(filters.matches(&Properties::parse(Some("type-cabin capacity-4"))));
    assert!(!filters.matches(&Properties::parse(Some("type-tent capacity-6"))));
    assert!(!filters.matches(&Properties::parse(Some("type-rv capacity-4"))));
  }

  #[test]
  fn test_matching_is_case_insensitive() {
    let mut filters = FilterSet::new();
    filters.add("type", "Tent", false);

    assert!(filters.matches(&Properties::parse(Some("type-TENT"))));
    assert!(filters.is_active("type", "tent"));
  }

  #[test]
  fn test_absent_property_never_matches_nonempty_value() {
    let mut filters = FilterSet::new();
    filters.add("type", "tent", false);

    assert!(!filters.matches(&Properties::parse(Some("capacity-4"))));
    assert!(!filters.matches(&Properties::parse(None)));
  }

  #[test]
  fn test_numeric_properties_match_their_display_form() {
    let mut filters = FilterSet::new();
    filters.add("capacity", "4", false);

    assert!(filters.matches(&Properties::parse(Some("capacity-4"))));
    assert!(!filters.matches(&Properties::parse(Some("capacity-4.5"))));
  }

  #[test]
  fn test_empty_set_matches_everything() {
    let filters = FilterSet::new();
    assert!(filters.matches(&Properties::parse(None)));
    assert!(filters.matches(&Properties::parse(Some("type-tent"))));
  }
}
