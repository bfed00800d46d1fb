use crate::constants::*;
use crate::error::ConfigError;
use crate::layout::Breakpoints;

/// Per-carousel tuning. Defaults come from `constants.rs`; the web frontend
/// layers `data-` attribute overrides from the container element on top.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub breakpoints: Breakpoints,
    pub swipe_threshold: f64,
    pub resize_debounce_ms: u32,
    pub fallback_gap: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            swipe_threshold: SWIPE_THRESHOLD_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            fallback_gap: FALLBACK_GAP_PX,
        }
    }
}

/// Attribute names accepted by [`CarouselConfig::with_overrides`].
pub const OVERRIDE_ATTRIBUTES: [&str; 5] = [
    "data-swipe-threshold",
    "data-resize-debounce-ms",
    "data-tablet-breakpoint",
    "data-desktop-breakpoint",
    "data-fallback-gap",
];

impl CarouselConfig {
    /// Apply `(attribute, value)` overrides and validate the result.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in overrides {
            match key {
                "data-swipe-threshold" => self.swipe_threshold = parse_px(key, value)?,
                "data-resize-debounce-ms" => {
                    self.resize_debounce_ms =
                        value.trim().parse().map_err(|_| invalid(key, value))?
                }
                "data-tablet-breakpoint" => self.breakpoints.tablet = parse_px(key, value)?,
                "data-desktop-breakpoint" => self.breakpoints.desktop = parse_px(key, value)?,
                "data-fallback-gap" => self.fallback_gap = parse_px(key, value)?,
                _ => return Err(ConfigError::UnknownKey(key.to_string())),
            }
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Breakpoints { tablet, desktop } = self.breakpoints;
        if tablet >= desktop {
            return Err(ConfigError::BreakpointsOutOfOrder { tablet, desktop });
        }
        if self.swipe_threshold <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold(self.swipe_threshold));
        }
        if self.fallback_gap < 0.0 {
            return Err(ConfigError::NegativeGap(self.fallback_gap));
        }
        Ok(())
    }
}

fn parse_px(key: &str, value: &str) -> Result<f64, ConfigError> {
    let v = value.trim();
    let v = v.strip_suffix("px").unwrap_or(v);
    match v.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(CarouselConfig::default().validate().is_ok());
    }

    #[test]
    fn overrides_accept_px_suffix() {
        let cfg = CarouselConfig::default()
            .with_overrides([("data-swipe-threshold", "80px"), ("data-fallback-gap", " 16 ")])
            .unwrap();
        assert_eq!(cfg.swipe_threshold, 80.0);
        assert_eq!(cfg.fallback_gap, 16.0);
        assert_eq!(cfg.resize_debounce_ms, RESIZE_DEBOUNCE_MS);
    }

    #[test]
    fn overrides_reject_garbage() {
        let err = CarouselConfig::default()
            .with_overrides([("data-resize-debounce-ms", "soon")])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "data-resize-debounce-ms".into(),
                value: "soon".into()
            }
        );
    }

    #[test]
    fn overrides_are_validated_together() {
        let err = CarouselConfig::default()
            .with_overrides([("data-tablet-breakpoint", "1200")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::BreakpointsOutOfOrder { .. }));

        let err = CarouselConfig::default()
            .with_overrides([("data-swipe-threshold", "0")])
            .unwrap_err();
        assert_eq!(err, ConfigError::NonPositiveThreshold(0.0));
    }

    #[test]
    fn unknown_keys_are_reported() {
        let err = CarouselConfig::default()
            .with_overrides([("data-autoplay", "true")])
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownKey("data-autoplay".into()));
    }
}
