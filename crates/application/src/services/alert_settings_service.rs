//! Alert settings service
//!
//! Holds the high-wind alert configuration in memory and writes every
//! change through to a [`SettingsStore`]. Values are stored as strings
//! under fixed keys so an existing store stays readable.

use std::{fmt, sync::Arc};

use domain::{AlertSettings, WindReport, DEFAULT_ALERT_THRESHOLD_KMH};
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::{error::ApplicationError, ports::SettingsStore};

/// Store key for the alert threshold in km/h
pub const THRESHOLD_KEY: &str = "windThreshold";

/// Store key for the alert on/off switch
pub const ENABLED_KEY: &str = "alertsEnabled";

/// Service managing persisted alert settings
pub struct AlertSettingsService {
    store: Arc<dyn SettingsStore>,
    current: RwLock<AlertSettings>,
    /// Serializes read-modify-write sequences
    write_lock: Mutex<()>,
}

impl fmt::Debug for AlertSettingsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertSettingsService")
            .field("current", &*self.current.read())
            .finish_non_exhaustive()
    }
}

impl AlertSettingsService {
    /// Load settings from the store, falling back to defaults for missing keys
    #[instrument(skip(store))]
    pub async fn load(store: Arc<dyn SettingsStore>) -> Result<Self, ApplicationError> {
        let defaults = AlertSettings::default();

        let threshold_kmh = match store.get(THRESHOLD_KEY).await? {
            Some(raw) => parse_threshold(&raw),
            None => defaults.threshold_kmh,
        };
        let enabled = match store.get(ENABLED_KEY).await? {
            Some(raw) => parse_enabled(&raw, defaults.enabled),
            None => defaults.enabled,
        };

        let settings = AlertSettings::new(threshold_kmh, enabled);
        info!(
            threshold_kmh = settings.threshold_kmh,
            enabled = settings.enabled,
            "Alert settings loaded"
        );

        Ok(Self {
            store,
            current: RwLock::new(settings),
            write_lock: Mutex::new(()),
        })
    }

    /// Current settings
    pub fn current(&self) -> AlertSettings {
        *self.current.read()
    }

    /// Set the alert threshold and persist it
    #[instrument(skip(self))]
    pub async fn set_threshold(&self, threshold_kmh: u32) -> Result<AlertSettings, ApplicationError> {
        let _guard = self.write_lock.lock().await;

        self.store
            .set(THRESHOLD_KEY, &threshold_kmh.to_string())
            .await?;

        let updated = {
            let mut current = self.current.write();
            *current = current.with_threshold(threshold_kmh);
            *current
        };
        debug!(threshold_kmh, "Alert threshold updated");
        Ok(updated)
    }

    /// Flip the alert switch and persist it
    #[instrument(skip(self))]
    pub async fn toggle(&self) -> Result<AlertSettings, ApplicationError> {
        let _guard = self.write_lock.lock().await;

        let toggled = self.current().toggled();
        self.store
            .set(ENABLED_KEY, &toggled.enabled.to_string())
            .await?;

        *self.current.write() = toggled;
        debug!(enabled = toggled.enabled, "Alerts toggled");
        Ok(toggled)
    }

    /// Whether the given report should raise a high-wind alert
    pub fn is_alert_active(&self, report: Option<&WindReport>) -> bool {
        report.is_some_and(|r| self.current().is_triggered_by(r.speed_kmh))
    }
}

/// Reads the leading integer of a stored threshold
///
/// Leading whitespace and a `+` sign are skipped and anything after the
/// first run of digits is ignored, so `"95.5"` reads as 95. Values without
/// leading digits fall back to the default.
fn parse_threshold(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..digits_end].parse().unwrap_or_else(|_| {
        warn!(value = raw, "Stored alert threshold is not a number, using default");
        DEFAULT_ALERT_THRESHOLD_KMH
    })
}

/// Only the exact string `true` switches alerts on; an empty value keeps the default
fn parse_enabled(raw: &str, default: bool) -> bool {
    if raw.is_empty() {
        default
    } else {
        raw == "true"
    }
}
