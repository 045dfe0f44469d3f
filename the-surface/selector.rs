//! Minimal node selectors: `#id`, `.class`, and `[attr]`.

use thiserror::Error;

use crate::node::Node;

/// Errors raised when parsing a selector string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
  /// The selector was empty or contained only whitespace.
  #[error("empty selector")]
  Empty,

  /// An attribute selector was missing its closing bracket.
  #[error("unterminated attribute selector `{0}`")]
  Unterminated(String),

  /// The selector did not match any supported form.
  #[error("unsupported selector `{0}` (expected `#id`, `.class`, or `[attr]`)")]
  Unsupported(String),
}

/// A parsed selector, matched against one node at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
  /// Matches a node whose id equals the given string.
  Id(String),
  /// Matches a node carrying the given class.
  Class(String),
  /// Matches a node carrying the given attribute, with any value.
  Attr(String),
}

impl Selector {
  /// Parse a selector string. Leading and trailing whitespace is ignored.
  pub fn parse(raw: &str) -> Result<Self, SelectorError> {
    let raw = raw.trim();
    if raw.is_empty() {
      return Err(SelectorError::Empty);
    }

    if let Some(id) = raw.strip_prefix('#') {
      if id.is_empty() {
        return Err(SelectorError::Empty);
      }
      return Ok(Selector::Id(id.to_string()));
    }

    if let Some(class) = raw.strip_prefix('.') {
      if class.is_empty() {
        return Err(SelectorError::Empty);
      }
      return Ok(Selector::Class(class.to_string()));
    }

    if let Some(rest) = raw.strip_prefix('[') {
      let Some(attr) = rest.strip_suffix(']') else {
        return Err(SelectorError::Unterminated(raw.to_string()));
      };
      if attr.is_empty() {
        return Err(SelectorError::Empty);
      }
      return Ok(Selector::Attr(attr.to_string()));
    }

    Err(SelectorError::Unsupported(raw.to_string()))
  }

  pub(crate) fn matches(&self, node: &Node) -> bool {
    match self {
      Selector::Id(id) => node.id.as_deref() == Some(id.as_str()),
      Selector::Class(class) => node.classes.iter().any(|c| c == class),
      Selector::Attr(attr) => node.attrs.contains_key(attr.as_str()),
    }
  }
}
