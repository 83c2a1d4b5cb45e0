//! Política del motor de pronóstico
//!
//! Intervalos de mantenimiento y umbrales de urgencia. Se inyectan en el
//! servicio en lugar de vivir como literales.

use super::{parse_or, process_env};
use crate::utils::errors::{configuration_error, AppResult};

/// Intervalos de mantenimiento y ventana de estimación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastPolicy {
    /// Distancia máxima entre dos mantenimientos
    pub interval_km: i64,
    /// Días máximos entre dos mantenimientos
    pub interval_days: i64,
    /// Lecturas más recientes consideradas para el ritmo diario
    pub mileage_window: usize,
}

impl Default for ForecastPolicy {
    fn default() -> Self {
        Self {
            interval_km: 10_000,
            interval_days: 180,
            mileage_window: 30,
        }
    }
}

impl ForecastPolicy {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let policy = Self {
            interval_km: parse_or(&lookup, "MAINTENANCE_INTERVAL_KM", defaults.interval_km)?,
            interval_days: parse_or(&lookup, "MAINTENANCE_INTERVAL_DAYS", defaults.interval_days)?,
            mileage_window: parse_or(&lookup, "MILEAGE_WINDOW", defaults.mileage_window)?,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.interval_km <= 0 {
            return Err(configuration_error("MAINTENANCE_INTERVAL_KM", "must be positive"));
        }
        if self.interval_days <= 0 {
            return Err(configuration_error("MAINTENANCE_INTERVAL_DAYS", "must be positive"));
        }
        if self.mileage_window == 0 {
            return Err(configuration_error("MILEAGE_WINDOW", "must be positive"));
        }
        Ok(())
    }
}

/// Umbrales en días para clasificar la urgencia
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyThresholds {
    /// `days_remaining <= urgent_days` → urgent
    pub urgent_days: i64,
    /// `days_remaining <= warning_days` → warning
    pub warning_days: i64,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            urgent_days: 7,
            warning_days: 30,
        }
    }
}

impl UrgencyThresholds {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let thresholds = Self {
            urgent_days: parse_or(&lookup, "URGENCY_URGENT_DAYS", defaults.urgent_days)?,
            warning_days: parse_or(&lookup, "URGENCY_WARNING_DAYS", defaults.warning_days)?,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.urgent_days > self.warning_days {
            return Err(configuration_error(
                "URGENCY_URGENT_DAYS",
                "must not exceed URGENCY_WARNING_DAYS",
            ));
        }
        Ok(())
    }
}
