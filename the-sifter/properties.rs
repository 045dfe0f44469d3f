//! Per-item metadata parsing: a whitespace-separated list of `key-value`
//! tokens, parsed once at construction and cached for the item's lifetime.

use std::fmt;

use indexmap::IndexMap;

/// A single parsed property value. Values that fully match an
/// optional-sign integer-or-decimal pattern are coerced to numbers;
/// everything else stays text.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
  Text(String),
  Number(f64),
}

impl PropertyValue {
  pub fn as_number(&self) -> Option<f64> {
    match self {
      PropertyValue::Number(number) => Some(*number),
      PropertyValue::Text(_) => None,
    }
  }
}

impl fmt::Display for PropertyValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PropertyValue::Text(text) => f.write_str(text),
      // Integral numbers display without a fractional suffix so
      // `capacity-4` stringifies back to "4" for filter matching.
      PropertyValue::Number(number) if number.fract() == 0.0 => write!(f, "{number:.0}"),
      PropertyValue::Number(number) => write!(f, "{number}"),
    }
  }
}

/// An item's attribute name to value mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
  values: IndexMap<String, PropertyValue>,
}

impl Properties {
  /// Parse a raw metadata string. Tokens split on whitespace; within a
  /// token the key/value separator is the last hyphen, so keys may
  /// themselves contain hyphens. Malformed tokens are dropped with a
  /// warning and never poison their siblings; absent or blank input
  /// yields an empty mapping.
  pub fn parse(raw: Option<&str>) -> Self {
    let mut values = IndexMap::new();
    let Some(raw) = raw else {
      return Self { values };
    };

    for token in raw.split_whitespace() {
      let separator = match token.rfind('-') {
        Some(position) if position > 0 && position < token.len() - 1 => position,
        _ => {
          log::warn!("skipping malformed metadata token {token:?}: no key-value separator");
          continue;
        },
      };
      let key = &token[..separator];
      let value = &token[separator + 1..];
      values.insert(key.to_string(), coerce(value));
    }

    Self { values }
  }

  pub fn get(&self, attribute: &str) -> Option<&PropertyValue> {
    self.values.get(attribute)
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

fn coerce(value: &str) -> PropertyValue {
  if is_numeric(value)
    && let Ok(number) = value.parse::<f64>()
  {
    return PropertyValue::Number(number);
  }
  PropertyValue::Text(value.to_string())
}

/// Optional sign, digits, optional decimal point with digits after it.
/// Deliberately narrower than `f64::from_str`, which would also accept
/// exponents, leading dots, and infinities.
fn is_numeric(raw: &str) -> bool {
  fn all_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
  }

  let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
  match unsigned.split_once('.') {
    Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
    None => all_digits(unsigned),
  }
}
