use the_sifter_surface::SelectorError;
use thiserror::Error;

/// Construction-time failures. Everything after construction degrades
/// with a logged warning instead of erroring.
#[derive(Error, Debug, Clone)]
pub enum SifterError {
  /// No node matches the container reference
  #[error("container element not found")]
  ContainerNotFound,

  /// The container has no descendant matching the list selector
  #[error("no list element matches {0:?}")]
  ListNotFound(String),

  /// A configured selector failed to parse
  #[error("invalid selector: {0}")]
  BadSelector(#[from] SelectorError),

  /// A defaults document failed to deserialize
  #[error("invalid defaults document: {0}")]
  BadDefaults(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SifterError>;
