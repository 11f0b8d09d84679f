//! High-wind alert settings

use serde::{Deserialize, Serialize};

/// Threshold used when nothing has been persisted yet (km/h)
pub const DEFAULT_ALERT_THRESHOLD_KMH: u32 = 70;

/// Smallest threshold the settings control offers (km/h)
pub const MIN_ALERT_THRESHOLD_KMH: u32 = 10;

/// Largest threshold the settings control offers (km/h)
pub const MAX_ALERT_THRESHOLD_KMH: u32 = 150;

/// Increment of the settings control (km/h)
pub const ALERT_THRESHOLD_STEP_KMH: u32 = 5;

/// User-configured high-wind alert
///
/// Range and step are enforced by the input control, not here; any value
/// handed to [`AlertSettings::with_threshold`] is taken as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSettings {
    /// Speed at or above which the alert fires (km/h)
    pub threshold_kmh: u32,
    /// Whether alerts are switched on
    pub enabled: bool,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            threshold_kmh: DEFAULT_ALERT_THRESHOLD_KMH,
            enabled: true,
        }
    }
}

impl AlertSettings {
    /// Create settings with explicit values
    #[must_use]
    pub const fn new(threshold_kmh: u32, enabled: bool) -> Self {
        Self {
            threshold_kmh,
            enabled,
        }
    }

    /// Copy with a different threshold
    #[must_use]
    pub const fn with_threshold(self, threshold_kmh: u32) -> Self {
        Self {
            threshold_kmh,
            ..self
        }
    }

    /// Copy with the enabled flag flipped
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            enabled: !self.enabled,
            ..self
        }
    }

    /// Whether a wind speed raises the alert
    ///
    /// Fires when enabled and `speed_kmh >= threshold`; equality triggers.
    #[must_use]
    pub fn is_triggered_by(&self, speed_kmh: f64) -> bool {
        self.enabled && speed_kmh >= f64::from(self.threshold_kmh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = AlertSettings::default();
        assert_eq!(settings.threshold_kmh, 70);
        assert!(settings.enabled);
    }

    #[test]
    fn equal_speed_triggers() {
        let settings = AlertSettings::new(70, true);
        assert!(settings.is_triggered_by(70.0));
    }

    #[test]
    fn below_threshold_does_not_trigger() {
        let settings = AlertSettings::new(70, true);
        assert!(!settings.is_triggered_by(69.9));
    }

    #[test]
    fn disabled_never_triggers() {
        let settings = AlertSettings::new(10, false);
        assert!(!settings.is_triggered_by(200.0));
    }

    #[test]
    fn toggled_flips_only_enabled() {
        let settings = AlertSettings::new(95, true).toggled();
        assert_eq!(settings, AlertSettings::new(95, false));
        assert_eq!(settings.toggled(), AlertSettings::new(95, true));
    }

    #[test]
    fn with_threshold_keeps_enabled() {
        let settings = AlertSettings::new(70, false).with_threshold(120);
        assert_eq!(settings, AlertSettings::new(120, false));
    }

    #[test]
    fn out_of_range_threshold_is_accepted() {
        let settings = AlertSettings::default().with_threshold(3);
        assert_eq!(settings.threshold_kmh, 3);
    }
}
