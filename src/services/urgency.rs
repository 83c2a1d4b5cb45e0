//! Clasificación de urgencia de un pronóstico

use crate::config::UrgencyThresholds;
use crate::models::forecast::{MaintenanceForecast, UrgencyLevel};

/// `None` (vehículo inexistente) → `Unknown`
pub fn classify(forecast: Option<&MaintenanceForecast>, thresholds: &UrgencyThresholds) -> UrgencyLevel {
    let Some(forecast) = forecast else {
        return UrgencyLevel::Unknown;
    };

    if forecast.is_overdue {
        UrgencyLevel::Overdue
    } else if forecast.days_remaining <= thresholds.urgent_days {
        UrgencyLevel::Urgent
    } else if forecast.days_remaining <= thresholds.warning_days {
        UrgencyLevel::Warning
    } else {
        UrgencyLevel::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn forecast(days_remaining: i64) -> MaintenanceForecast {
        MaintenanceForecast {
            predicted_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            predicted_mileage: 100_000,
            is_overdue: false,
            days_remaining,
            km_remaining: 1_000,
        }
    }

    #[test]
    fn test_threshold_boundaries() {
        let thresholds = UrgencyThresholds::default();
        assert_eq!(classify(Some(&forecast(7)), &thresholds), UrgencyLevel::Urgent);
        assert_eq!(classify(Some(&forecast(8)), &thresholds), UrgencyLevel::Warning);
        assert_eq!(classify(Some(&forecast(30)), &thresholds), UrgencyLevel::Warning);
        assert_eq!(classify(Some(&forecast(31)), &thresholds), UrgencyLevel::Normal);
    }

    #[test]
    fn test_absent_and_overdue() {
        let thresholds = UrgencyThresholds::default();
        assert_eq!(classify(None, &thresholds), UrgencyLevel::Unknown);

        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let overdue = MaintenanceForecast::overdue(today, 120_000);
        assert_eq!(classify(Some(&overdue), &thresholds), UrgencyLevel::Overdue);
    }

    #[test]
    fn test_negative_days_are_urgent() {
        assert_eq!(
            classify(Some(&forecast(-12)), &UrgencyThresholds::default()),
            UrgencyLevel::Urgent
        );
    }

    #[test]
    fn test_monotonic_in_days_remaining() {
        let thresholds = UrgencyThresholds::default();
        let mut previous = classify(Some(&forecast(400)), &thresholds).severity();
        for days in (-50..400).rev() {
            let severity = classify(Some(&forecast(days)), &thresholds).severity();
            assert!(severity >= previous, "severity dropped at {} days", days);
            previous = severity;
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = UrgencyThresholds {
            urgent_days: 14,
            warning_days: 60,
        };
        assert_eq!(classify(Some(&forecast(10)), &thresholds), UrgencyLevel::Urgent);
        assert_eq!(classify(Some(&forecast(45)), &thresholds), UrgencyLevel::Warning);
        assert_eq!(classify(Some(&forecast(61)), &thresholds), UrgencyLevel::Normal);
    }
}
