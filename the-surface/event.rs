//! Interaction events forwarded from the host to widgets.
//!
//! Each variant corresponds to the native event a control kind emits:
//! state-change for checkboxes and radios, per-keystroke input for text
//! fields, change for selects, and click for everything else.

/// A single user interaction on a document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
  /// State-change on a checkbox or radio; carries the new checked state.
  Toggled(bool),
  /// Edit of a text input; carries the full live text after the keystroke.
  Edited(String),
  /// Change of a select's chosen option; carries the new option index.
  Picked(usize),
  /// Activation click on a link, button, or other plain element.
  Clicked,
}
