//! Error types shared by the core and the web frontend.

use thiserror::Error;

/// Reasons a carousel could not be mounted on the current page.
///
/// None of these are faults: a page without the expected markup simply has
/// no carousel, and the frontend logs and skips it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("no carousel container #{0}")]
    MissingContainer(String),
    #[error("carousel #{0} has no track matching {1:?}")]
    MissingTrack(String, String),
    #[error("carousel #{0} has no cards matching {1:?}")]
    NoCards(String, String),
}

/// Invalid carousel configuration, usually from a `data-` attribute override.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown carousel option {0:?}")]
    UnknownKey(String),
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
    #[error("tablet breakpoint {tablet}px must be below desktop breakpoint {desktop}px")]
    BreakpointsOutOfOrder { tablet: f64, desktop: f64 },
    #[error("swipe threshold must be positive, got {0}")]
    NonPositiveThreshold(f64),
    #[error("fallback gap must be non-negative, got {0}")]
    NegativeGap(f64),
}
