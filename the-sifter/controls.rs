//! Control discovery and interaction decoding.
//!
//! Any descendant of the container carrying the action marker attribute
//! becomes a control. Actions and control kinds are closed enums, so an
//! unknown action string is rejected once at discovery and can never
//! reach the mutation engine.

use the_sifter_surface::{
  Document,
  Interaction,
  NodeId,
  NodeKind,
};

pub(crate) const ACTION_MARKER: &str = "data-action";
pub(crate) const ATTRIBUTE_MARKER: &str = "data-attribute";
pub(crate) const VALUE_MARKER: &str = "data-value";
pub(crate) const EMPTY_MARKER: &str = "data-empty";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Filter,
  Sort,
  Reset,
  Reverse,
}

impl Action {
  fn parse(raw: &str) -> Option<Self> {
    match raw {
      "filter" => Some(Action::Filter),
      "sort" => Some(Action::Sort),
      "reset" => Some(Action::Reset),
      "reverse" => Some(Action::Reverse),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
  Checkbox,
  Radio,
  Text,
  Select,
  Clickable,
}

impl ControlKind {
  fn of(kind: &NodeKind) -> Self {
    match kind {
      NodeKind::Checkbox { .. } => ControlKind::Checkbox,
      NodeKind::Radio { .. } => ControlKind::Radio,
      NodeKind::TextInput { .. } => ControlKind::Text,
      NodeKind::Select { .. } => ControlKind::Select,
      NodeKind::Element => ControlKind::Clickable,
    }
  }
}

/// One bound control. `base_label` is the label at discovery time; sort
/// controls get a direction indicator appended and restored from it.
#[derive(Debug, Clone)]
pub(crate) struct Control {
  pub node:       NodeId,
  pub action:     Action,
  pub kind:       ControlKind,
  pub attribute:  Option<String>,
  pub value:      Option<String>,
  pub base_label: String,
}

/// Walk the container once and bind every marked descendant. Unknown
/// action values are warned and skipped.
pub(crate) fn discover(doc: &Document, container: NodeId) -> Vec<Control> {
  let mut controls = Vec::new();
  for id in doc.descendants(container) {
    let Some(raw) = doc.attr(id, ACTION_MARKER) else {
      continue;
    };
    let Some(action) = Action::parse(raw) else {
      log::warn!("ignoring control with unknown action {raw:?}");
      continue;
    };
    let Some(kind) = doc.kind(id) else {
      continue;
    };
    controls.push(Control {
      node: id,
      action,
      kind: ControlKind::of(kind),
      attribute: doc.attr(id, ATTRIBUTE_MARKER).map(str::to_string),
      value: doc.attr(id, VALUE_MARKER).map(str::to_string),
      base_label: doc.label(id).to_string(),
    });
  }
  if controls.is_empty() {
    log::warn!("no controls found; the list will stay static");
  }
  controls
}

/// A decoded, dispatchable interaction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
  Filter {
    attribute: String,
    value:     String,
    exclusive: bool,
  },
  Unfilter {
    attribute: String,
    value:     String,
  },
  ClearFilter {
    attribute: String,
  },
  Sort {
    attribute: String,
  },
  Reset,
  Reverse,
}

/// Decode an interaction against a control into a command, or `None`
/// when nothing is actionable: the event kind does not fit the control,
/// an unchecked radio fires, or a required marker is missing.
pub(crate) fn decode(
  control: &Control,
  interaction: &Interaction,
  doc: &Document,
) -> Option<Command> {
  let fits = matches!(
    (control.kind, interaction),
    (ControlKind::Checkbox | ControlKind::Radio, Interaction::Toggled(_))
      | (ControlKind::Text, Interaction::Edited(_))
      | (ControlKind::Select, Interaction::Picked(_))
      | (ControlKind::Clickable, Interaction::Clicked)
  );
  if !fits {
    log::debug!(
      "{interaction:?} does not fit a {:?} control; ignoring",
      control.kind
    );
    return None;
  }

  if let Interaction::Toggled(false) = interaction {
    // Unchecked radios never dispatch; an unchecked filter checkbox
    // routes straight to removal.
    if control.kind == ControlKind::Radio {
      return None;
    }
    if control.action == Action::Filter {
      let attribute = control.attribute.clone()?;
      let value = control.value.clone()?;
      return Some(Command::Unfilter { attribute, value });
    }
  }

  match control.action {
    Action::Reset => Some(Command::Reset),
    Action::Reverse => Some(Command::Reverse),
    Action::Sort => {
      let attribute = match &control.attribute {
        Some(attribute) => attribute.clone(),
        // An unconfigured sort select picks the attribute itself.
        None if control.kind == ControlKind::Select => {
          doc.selected_value(control.node)?.to_string()
        },
        None => {
          log::debug!("sort control has no attribute to sort by");
          return None;
        },
      };
      Some(Command::Sort { attribute })
    },
    Action::Filter => {
      let attribute = control.attribute.clone()?;
      // A text filter tracks the live value: each keystroke replaces
      // the previous one, and an emptied box drops the attribute.
      if let (ControlKind::Text, Interaction::Edited(text)) = (control.kind, interaction) {
        if text.is_empty() {
          return Some(Command::ClearFilter { attribute });
        }
        return Some(Command::Filter {
          attribute,
          value: text.clone(),
          exclusive: true,
        });
      }
      let (value, exclusive) = match (control.kind, interaction) {
        (ControlKind::Select, _) => (doc.selected_value(control.node)?.to_string(), true),
        (ControlKind::Radio, _) => (control.value.clone()?, true),
        _ => (control.value.clone()?, false),
      };
      Some(Command::Filter {
        attribute,
        value,
        exclusive,
      })
    },
  }
}
