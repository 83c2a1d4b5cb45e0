//! Tipos derivados del motor de pronóstico
//!
//! Ninguno de estos tipos se persiste: se calculan de nuevo en cada consulta.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::closed_category;
use super::vehicle::Vehicle;

/// Pronóstico del próximo mantenimiento de un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaintenanceForecast {
    pub predicted_date: NaiveDate,
    pub predicted_mileage: i64,
    pub is_overdue: bool,
    /// 0 cuando está vencido; puede ser negativo si solo vence el plazo en días
    pub days_remaining: i64,
    /// 0 cuando está vencido
    pub km_remaining: i64,
}

impl MaintenanceForecast {
    pub fn overdue(today: NaiveDate, current_mileage: i64) -> Self {
        Self {
            predicted_date: today,
            predicted_mileage: current_mileage,
            is_overdue: true,
            days_remaining: 0,
            km_remaining: 0,
        }
    }
}

/// Nivel de urgencia del mantenimiento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Unknown,
    Overdue,
    Urgent,
    Warning,
    Normal,
}

closed_category!(UrgencyLevel, "urgency level", {
    Unknown => "unknown",
    Overdue => "overdue",
    Urgent => "urgent",
    Warning => "warning",
    Normal => "normal",
});

impl UrgencyLevel {
    /// Severidad ordinal: normal < warning < urgent < overdue.
    /// `Unknown` queda fuera de la escala (0).
    pub fn severity(&self) -> u8 {
        match self {
            UrgencyLevel::Unknown => 0,
            UrgencyLevel::Normal => 1,
            UrgencyLevel::Warning => 2,
            UrgencyLevel::Urgent => 3,
            UrgencyLevel::Overdue => 4,
        }
    }
}

/// Entrada de la vista de flota
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingMaintenance {
    pub vehicle: Vehicle,
    pub forecast: MaintenanceForecast,
    pub urgency: UrgencyLevel,
}
