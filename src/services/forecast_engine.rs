//! Cálculo puro del próximo mantenimiento
//!
//! Dos estimaciones independientes, por distancia y por calendario; gana la
//! que vence antes. Sin E/S: el servicio obtiene los datos y llama aquí.

use chrono::{Duration, NaiveDate};

use crate::config::ForecastPolicy;
use crate::models::forecast::MaintenanceForecast;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::vehicle::Vehicle;

/// Kilometraje objetivo del próximo mantenimiento.
///
/// Un `next_maintenance_km` explícito y positivo en el último registro manda;
/// si falta o es 0, base (último registro o kilometraje inicial) + intervalo.
pub fn target_mileage(
    vehicle: &Vehicle,
    last_maintenance: Option<&MaintenanceRecord>,
    policy: &ForecastPolicy,
) -> i64 {
    if let Some(explicit) = last_maintenance
        .and_then(|record| record.next_maintenance_km)
        .filter(|km| *km > 0)
    {
        return explicit;
    }

    let baseline = last_maintenance
        .map(|record| record.mileage)
        .unwrap_or(vehicle.initial_mileage);
    baseline.saturating_add(policy.interval_km)
}

/// Días hasta agotar `remaining_km` al ritmo dado; sin ritmo útil se usa el
/// intervalo de calendario.
pub fn days_by_distance(remaining_km: i64, daily_rate: f64, policy: &ForecastPolicy) -> f64 {
    if daily_rate > 0.0 {
        remaining_km as f64 / daily_rate
    } else {
        policy.interval_days as f64
    }
}

/// Días que quedan del intervalo de calendario desde el último mantenimiento
pub fn days_by_calendar(
    last_maintenance: Option<&MaintenanceRecord>,
    policy: &ForecastPolicy,
    today: NaiveDate,
) -> f64 {
    match last_maintenance {
        Some(record) => {
            let days_since = (today - record.date).num_days();
            policy.interval_days.saturating_sub(days_since) as f64
        }
        None => policy.interval_days as f64,
    }
}

/// Pronóstico para un vehículo que todavía no ha alcanzado el objetivo.
///
/// `days_remaining` no se recorta a cero: si el plazo de calendario ya
/// venció, el resultado es negativo y la fecha queda en el pasado.
pub fn project_forecast(
    target_mileage: i64,
    remaining_km: i64,
    last_maintenance: Option<&MaintenanceRecord>,
    daily_rate: f64,
    policy: &ForecastPolicy,
    today: NaiveDate,
) -> MaintenanceForecast {
    let by_distance = days_by_distance(remaining_km, daily_rate, policy);
    let by_calendar = days_by_calendar(last_maintenance, policy, today);

    // `as` satura, y el mínimo nunca supera el intervalo de calendario
    let days_remaining = by_distance.min(by_calendar).trunc() as i64;

    MaintenanceForecast {
        predicted_date: shift_date(today, days_remaining),
        predicted_mileage: target_mileage,
        is_overdue: false,
        days_remaining,
        km_remaining: remaining_km,
    }
}

/// Situación del vehículo respecto a su objetivo de kilometraje
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStatus {
    /// Objetivo alcanzado o superado: pronóstico vencido
    Reached(MaintenanceForecast),
    Ahead { target: i64, remaining_km: i64 },
}

/// Primer paso del pronóstico. Con `Reached` no hace falta calcular el ritmo.
pub fn target_status(
    vehicle: &Vehicle,
    last_maintenance: Option<&MaintenanceRecord>,
    policy: &ForecastPolicy,
    today: NaiveDate,
) -> TargetStatus {
    let target = target_mileage(vehicle, last_maintenance, policy);
    let remaining_km = target.saturating_sub(vehicle.current_mileage);
    if remaining_km <= 0 {
        TargetStatus::Reached(MaintenanceForecast::overdue(today, vehicle.current_mileage))
    } else {
        TargetStatus::Ahead { target, remaining_km }
    }
}

fn shift_date(today: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| today.checked_add_signed(delta))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}
