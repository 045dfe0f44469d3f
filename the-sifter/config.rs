//! Configuration resolution: built-in defaults, then a caller-supplied
//! defaults layer, then per-instance options. The resolved value is
//! snapshotted at construction; later changes to the caller's defaults
//! never reach constructed instances.

use std::time::Duration;

use serde::Deserialize;
use toml::Value;

use crate::SifterError;

/// A fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub list_selector:       String,
  pub item_selector:       String,
  pub item_data_attribute: String,
  pub hidden_class:        String,
  pub active_filter_class: String,
  pub enable_transitions:  bool,
  pub transition_duration: Duration,
}

impl Default for Config {
  /// The built-in defaults every resolution starts from.
  fn default() -> Self {
    Self {
      list_selector: ".sift-list".into(),
      item_selector: ".sift-item".into(),
      item_data_attribute: "data-sift".into(),
      hidden_class: "is-hidden".into(),
      active_filter_class: "is-active".into(),
      enable_transitions: true,
      transition_duration: Duration::from_millis(300),
    }
  }
}

impl Config {
  /// Merge the three layers, lowest first. The flag and duration fields
  /// of an [`Options`] layer are raw TOML values; entries of the wrong
  /// shape are discarded with a warning so the next-lower layer's value
  /// stays in effect.
  pub fn resolve(builtin: Config, defaults: &Options, instance: &Options) -> Config {
    let mut config = builtin;
    for layer in [defaults, instance] {
      apply_layer(&mut config, layer);
    }
    config
  }
}

fn apply_layer(config: &mut Config, layer: &Options) {
  if let Some(value) = &layer.list_selector {
    config.list_selector = value.clone();
  }
  if let Some(value) = &layer.item_selector {
    config.item_selector = value.clone();
  }
  if let Some(value) = &layer.item_data_attribute {
    config.item_data_attribute = value.clone();
  }
  if let Some(value) = &layer.hidden_class {
    config.hidden_class = value.clone();
  }
  if let Some(value) = &layer.active_filter_class {
    config.active_filter_class = value.clone();
  }
  match &layer.enable_transitions {
    Some(Value::Boolean(flag)) => config.enable_transitions = *flag,
    Some(other) => log::warn!("ignoring enable_transitions = {other}: expected a boolean"),
    None => {},
  }
  match &layer.transition_duration {
    Some(Value::Integer(ms)) if *ms >= 0 => {
      config.transition_duration = Duration::from_millis(*ms as u64);
    },
    Some(other) => {
      log::warn!("ignoring transition_duration = {other}: expected non-negative milliseconds");
    },
    None => {},
  }
}

/// One unresolved layer of options. Every field is optional; unset
/// fields defer to the next-lower layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Options {
  pub list_selector:       Option<String>,
  pub item_selector:       Option<String>,
  pub item_data_attribute: Option<String>,
  pub hidden_class:        Option<String>,
  pub active_filter_class: Option<String>,
  pub enable_transitions:  Option<Value>,
  pub transition_duration: Option<Value>,
}

impl Options {
  pub fn new() -> Self {
    Self::default()
  }

  /// Ingest an options layer from a TOML document.
  pub fn from_toml(raw: &str) -> crate::Result<Self> {
    toml::from_str(raw).map_err(SifterError::BadDefaults)
  }

  // --- Builder API ---

  pub fn list_selector(mut self, selector: impl Into<String>) -> Self {
    self.list_selector = Some(selector.into());
    self
  }

  pub fn item_selector(mut self, selector: impl Into<String>) -> Self {
    self.item_selector = Some(selector.into());
    self
  }

  pub fn item_data_attribute(mut self, attribute: impl Into<String>) -> Self {
    self.item_data_attribute = Some(attribute.into());
    self
  }

  pub fn hidden_class(mut self, class: impl Into<String>) -> Self {
    self.hidden_class = Some(class.into());
    self
  }

  pub fn active_filter_class(mut self, class: impl Into<String>) -> Self {
    self.active_filter_class = Some(class.into());
    self
  }

  pub fn enable_transitions(mut self, on: bool) -> Self {
    self.enable_transitions = Some(Value::Boolean(on));
    self
  }

  pub fn transition_duration(mut self, millis: u64) -> Self {
    self.transition_duration = Some(Value::Integer(millis as i64));
    self
  }
}
