use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::mileage::MileageLogEntry;

// Response de una lectura del journal
#[derive(Debug, Serialize)]
pub struct MileageLogResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub mileage: i64,
    pub driver: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MileageLogEntry> for MileageLogResponse {
    fn from(entry: MileageLogEntry) -> Self {
        Self {
            id: entry.id,
            vehicle_id: entry.vehicle_id,
            date: entry.date,
            mileage: entry.mileage,
            driver: entry.driver,
            notes: entry.notes,
            created_at: entry.created_at,
        }
    }
}
