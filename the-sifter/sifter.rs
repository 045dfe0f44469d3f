//! The widget itself: construction against a container node, the four
//! mutations (filter, sort, reset, reverse), and the control-state
//! synchronizer that runs after every one of them.

use the_sifter_surface::{
  Document,
  Interaction,
  Motion,
  NodeId,
  Selector,
};

use crate::{
  SifterError,
  animate::Animator,
  config::{
    Config,
    Options,
  },
  controls::{
    self,
    Action,
    Command,
    Control,
    ControlKind,
    EMPTY_MARKER,
  },
  filters::FilterSet,
  properties::Properties,
  sorting::SortState,
};

/// The one attribute whose sort control gets a direction indicator
/// appended to its label; other sort controls keep their base label.
const PRIMARY_SORT_KEY: &str = "name";

/// One managed list item. Properties are parsed once at construction
/// and never re-read.
#[derive(Debug)]
struct Item {
  node:       NodeId,
  properties: Properties,
}

#[derive(Debug)]
pub struct Sifter {
  config:   Config,
  list:     NodeId,
  items:    Vec<Item>,
  original: Vec<(NodeId, bool)>,
  filters:  FilterSet,
  sort:     SortState,
  controls: Vec<Control>,
  empty:    Option<NodeId>,
  animator: Animator,
}

impl Sifter {
  /// Resolve `container_selector` against the document root and build
  /// a sifter on the matching node.
  pub fn attach(
    doc: &mut Document,
    container_selector: &str,
    defaults: &Options,
    options: &Options,
  ) -> crate::Result<Self> {
    let selector = Selector::parse(container_selector).map_err(|err| {
      log::error!("invalid container selector {container_selector:?}: {err}");
      SifterError::BadSelector(err)
    })?;
    let Some(container) = doc.query(doc.root(), &selector) else {
      log::error!("no container matches {container_selector:?}");
      return Err(SifterError::ContainerNotFound);
    };
    Self::new(doc, container, defaults, options)
  }

  /// Build a sifter on `container`. Configuration layers resolve as
  /// instance options over `defaults` over the built-ins, snapshotted
  /// here. Fails only on a missing container or list; zero items and
  /// zero controls degrade with a warning.
  pub fn new(
    doc: &mut Document,
    container: NodeId,
    defaults: &Options,
    options: &Options,
  ) -> crate::Result<Self> {
    let config = Config::resolve(Config::default(), defaults, options);

    if doc.kind(container).is_none() {
      log::error!("container node no longer exists");
      return Err(SifterError::ContainerNotFound);
    }

    let list_selector = Selector::parse(&config.list_selector).map_err(|err| {
      log::error!("invalid list selector {:?}: {err}", config.list_selector);
      SifterError::BadSelector(err)
    })?;
    let Some(list) = doc.query(container, &list_selector) else {
      log::error!("no list element matches {:?}", config.list_selector);
      return Err(SifterError::ListNotFound(config.list_selector.clone()));
    };

    let item_selector = Selector::parse(&config.item_selector).map_err(|err| {
      log::error!("invalid item selector {:?}: {err}", config.item_selector);
      SifterError::BadSelector(err)
    })?;
    let items: Vec<Item> = doc
      .query_all(list, &item_selector)
      .into_iter()
      .map(|node| {
        Item {
          node,
          properties: Properties::parse(doc.attr(node, &config.item_data_attribute)),
        }
      })
      .collect();
    if items.is_empty() {
      log::warn!("no items match {:?}; nothing to sift", config.item_selector);
    }

    // Snapshot identity, order, and visibility for reset, normalizing
    // the display flag to the hidden-class classification.
    let original: Vec<(NodeId, bool)> = items
      .iter()
      .map(|item| (item.node, !doc.has_class(item.node, &config.hidden_class)))
      .collect();
    for &(node, visible) in &original {
      doc.set_display(node, visible);
    }

    let controls = controls::discover(doc, container);
    let empty = doc
      .descendants(container)
      .into_iter()
      .find(|&id| doc.attr(id, EMPTY_MARKER).is_some());

    let animator = Animator::new(config.enable_transitions, config.transition_duration);

    let sifter = Self {
      config,
      list,
      items,
      original,
      filters: FilterSet::new(),
      sort: SortState::new(),
      controls,
      empty,
      animator,
    };

    if let Some(indicator) = sifter.empty {
      let any_visible = sifter.original.iter().any(|&(_, visible)| visible);
      doc.set_display(indicator, !any_visible);
    }
    doc.flush_layout();
    sifter.sync(doc);
    Ok(sifter)
  }

  pub fn list(&self) -> NodeId {
    self.list
  }

  /// Current item order in the model, which the list's child order
  /// tracks after every mutation.
  pub fn order(&self) -> Vec<NodeId> {
    self.items.iter().map(|item| item.node).collect()
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn is_animating(&self) -> bool {
    self.animator.is_animating()
  }

  /// Advance in-flight position transitions by `dt` seconds.
  pub fn tick(&mut self, doc: &mut Document, dt: f32) {
    self.animator.tick(doc, dt);
  }

  /// Feed one host interaction through its bound control. Returns true
  /// when the interaction belonged to a control and was applied, so
  /// hosts can suppress default behavior such as anchor navigation.
  pub fn handle_interaction(
    &mut self,
    doc: &mut Document,
    node: NodeId,
    interaction: &Interaction,
  ) -> bool {
    let Some(control) = self
      .controls
      .iter()
      .find(|control| control.node == node)
      .cloned()
    else {
      return false;
    };

    if !doc.apply_interaction(node, interaction) {
      return false;
    }

    match controls::decode(&control, interaction, doc) {
      Some(Command::Filter {
        attribute,
        value,
        exclusive,
      }) => {
        // Repeating an active non-exclusive filter toggles it off.
        if !exclusive && self.filters.is_active(&attribute, &value) {
          self.unfilter(doc, &attribute, &value);
        } else {
          self.filter(doc, &attribute, &value, exclusive);
        }
      },
      Some(Command::Unfilter { attribute, value }) => self.unfilter(doc, &attribute, &value),
      Some(Command::ClearFilter { attribute }) => self.clear_filter(doc, &attribute),
      Some(Command::Sort { attribute }) => self.sort_by(doc, &attribute),
      Some(Command::Reset) => self.reset(doc),
      Some(Command::Reverse) => self.reverse(doc),
      // Nothing actionable, but the synchronizer still runs.
      None => self.sync(doc),
    }
    true
  }

  // --- Mutations ---------------------------------------------------------

  /// Accept `value` for `attribute` and re-derive visibility.
  pub fn filter(&mut self, doc: &mut Document, attribute: &str, value: &str, exclusive: bool) {
    self.filters.add(attribute, value, exclusive);
    self.project_visibility(doc);
    self.sync(doc);
  }

  /// Stop accepting `value` for `attribute` and re-derive visibility.
  pub fn unfilter(&mut self, doc: &mut Document, attribute: &str, value: &str) {
    self.filters.remove(attribute, value);
    self.project_visibility(doc);
    self.sync(doc);
  }

  /// Drop every accepted value for `attribute` and re-derive
  /// visibility.
  pub fn clear_filter(&mut self, doc: &mut Document, attribute: &str) {
    self.filters.clear_attribute(attribute);
    self.project_visibility(doc);
    self.sync(doc);
  }

  /// Reorder items by the current sort state. Logged no-op when no
  /// sort attribute is set.
  pub fn sort(&mut self, doc: &mut Document) {
    if self.sort.attribute().is_none() {
      log::warn!("sort requested with no sort attribute set");
      self.sync(doc);
      return;
    }

    let affected = self.visible_items(doc);
    let sort = self.sort.clone();
    self.items.sort_by(|a, b| sort.compare(&a.properties, &b.properties));

    let order = self.order();
    let list = self.list;
    self.animator.run(doc, &affected, move |doc| {
      for node in order {
        doc.move_to_end(list, node);
      }
    });
    self.sync(doc);
  }

  /// Select or toggle `attribute` and sort: the path a sort control
  /// takes.
  pub fn sort_by(&mut self, doc: &mut Document, attribute: &str) {
    self.sort.set_or_toggle(attribute);
    self.sort(doc);
  }

  /// Reverse the full item order, hidden items included.
  pub fn reverse(&mut self, doc: &mut Document) {
    let affected = self.visible_items(doc);
    self.items.reverse();

    let order = self.order();
    let list = self.list;
    self.animator.run(doc, &affected, move |doc| {
      for node in order {
        doc.move_to_end(list, node);
      }
    });
    self.sync(doc);
  }

  /// Clear all filter and sort state and restore the construction-time
  /// order, visibility, and control state.
  pub fn reset(&mut self, doc: &mut Document) {
    self.filters.clear();
    self.sort.clear();

    let affected = self.visible_items(doc);
    let original = self.original.clone();
    {
      let by_original = &original;
      self
        .items
        .sort_by_key(|item| by_original.iter().position(|&(id, _)| id == item.node));
    }

    let list = self.list;
    let hidden = self.config.hidden_class.clone();
    let empty = self.empty;
    let any_visible = original.iter().any(|&(_, visible)| visible);
    self.animator.run(doc, &affected, move |doc| {
      for &(node, _) in &original {
        doc.move_to_end(list, node);
      }
      for &(node, visible) in &original {
        doc.set_class(node, &hidden, !visible);
        doc.set_display(node, visible);
      }
      if let Some(indicator) = empty {
        doc.set_display(indicator, !any_visible);
      }
    });

    self.restore_controls(doc);
    self.sync(doc);
  }

  // --- Internals ---------------------------------------------------------

  /// Re-classify every item against the predicate set, animating the
  /// items that were visible going in, and keep the no-matches
  /// indicator in step.
  fn project_visibility(&mut self, doc: &mut Document) {
    let affected = self.visible_items(doc);
    let decisions: Vec<(NodeId, bool)> = self
      .items
      .iter()
      .map(|item| (item.node, self.filters.matches(&item.properties)))
      .collect();

    let hidden = self.config.hidden_class.clone();
    let empty = self.empty;
    let any_visible = decisions.iter().any(|&(_, visible)| visible);
    self.animator.run(doc, &affected, move |doc| {
      for &(node, visible) in &decisions {
        doc.set_class(node, &hidden, !visible);
        doc.set_display(node, visible);
      }
      if let Some(indicator) = empty {
        doc.set_display(indicator, !any_visible);
      }
    });
  }

  fn visible_items(&self, doc: &Document) -> Vec<NodeId> {
    self
      .items
      .iter()
      .map(|item| item.node)
      .filter(|&node| !doc.has_class(node, &self.config.hidden_class))
      .collect()
  }

  /// Put every control back to its neutral input state. Labels are
  /// handled by the synchronizer pass that follows.
  fn restore_controls(&self, doc: &mut Document) {
    for control in &self.controls {
      match control.kind {
        ControlKind::Checkbox | ControlKind::Radio => doc.set_checked(control.node, false),
        ControlKind::Text => doc.set_text_value(control.node, ""),
        ControlKind::Select => {
          doc.select_option(control.node, 0);
        },
        ControlKind::Clickable => {},
      }
    }
  }

  /// Recompute every control's visual state from the model. The pass
  /// is idempotent, which is also what restores a clicked sort
  /// control's siblings to their unadorned base labels.
  fn sync(&self, doc: &mut Document) {
    let active_class = &self.config.active_filter_class;
    let mut reset_seen = false;

    for control in &self.controls {
      match control.action {
        Action::Filter => {
          // Checkbox, radio, and text controls show their own input
          // state; only selects and clickables carry the active class.
          if matches!(control.kind, ControlKind::Select | ControlKind::Clickable) {
            let active = match (&control.attribute, &control.value) {
              (Some(attribute), Some(value)) => self.filters.is_active(attribute, value),
              _ => false,
            };
            doc.set_class(control.node, active_class, active);
          }
        },
        Action::Reset => {
          // Only the first reset control is ever marked active.
          let neutral = self.filters.is_empty() && self.sort.attribute().is_none();
          doc.set_class(control.node, active_class, neutral && !reset_seen);
          reset_seen = true;
        },
        Action::Sort => {
          // An unconfigured sort select is an attribute picker and
          // carries no active state or label decoration.
          if control.kind == ControlKind::Select && control.attribute.is_none() {
            continue;
          }
          let active = match (control.attribute.as_deref(), self.sort.attribute()) {
            (Some(mine), Some(current)) => mine == current,
            _ => false,
          };
          doc.set_class(control.node, active_class, active);

          let label = if active && control.attribute.as_deref() == Some(PRIMARY_SORT_KEY) {
            format!("{}{}", control.base_label, self.sort.direction().indicator())
          } else {
            control.base_label.clone()
          };
          doc.set_label(control.node, label);
        },
        Action::Reverse => {},
      }
    }
  }
}
