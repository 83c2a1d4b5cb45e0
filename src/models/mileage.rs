//! Modelo del journal de kilometraje
//!
//! Cada lectura es acumulativa (odómetro). El motor de pronóstico solo usa
//! `date` y `mileage`; `driver` y `notes` son metadatos libres.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Entrada del journal - mapea a la tabla mileage_logs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MileageLogEntry {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub mileage: i64,
    pub driver: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Nueva lectura de kilometraje
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMileageLog {
    pub date: NaiveDate,

    #[validate(range(min = 0))]
    pub mileage: i64,

    #[validate(length(max = 200))]
    pub driver: Option<String>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl NewMileageLog {
    pub fn new(date: NaiveDate, mileage: i64) -> Self {
        Self {
            date,
            mileage,
            driver: None,
            notes: None,
        }
    }

    /// Construye la entrada persistible para un vehículo
    pub fn into_entry(self, vehicle_id: Uuid) -> MileageLogEntry {
        MileageLogEntry {
            id: Uuid::new_v4(),
            vehicle_id,
            date: self.date,
            mileage: self.mileage,
            driver: self.driver,
            notes: self.notes,
            created_at: Utc::now(),
        }
    }
}
