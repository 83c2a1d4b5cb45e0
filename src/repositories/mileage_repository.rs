use sqlx::PgPool;
use uuid::Uuid;

use crate::models::mileage::{MileageLogEntry, NewMileageLog};
use crate::utils::errors::{not_found_error, AppError};

const MILEAGE_COLUMNS: &str = "id, vehicle_id, date, mileage, driver, notes, created_at";

pub struct MileageRepository {
    pool: PgPool,
}

impl MileageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_recent_by_vehicle(
        &self,
        vehicle_id: Uuid,
        limit: usize,
    ) -> Result<Vec<MileageLogEntry>, AppError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let logs = sqlx::query_as::<_, MileageLogEntry>(&format!(
            "SELECT {} FROM mileage_logs WHERE vehicle_id = $1 ORDER BY date DESC, created_at DESC LIMIT $2",
            MILEAGE_COLUMNS
        ))
        .bind(vehicle_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    /// Inserta la lectura y sube el kilometraje actual del vehículo en una
    /// sola transacción. La fila del vehículo queda bloqueada hasta el commit.
    pub async fn record(&self, vehicle_id: Uuid, log: NewMileageLog) -> Result<MileageLogEntry, AppError> {
        let mut tx = self.pool.begin().await?;

        let locked: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM vehicles WHERE id = $1 FOR UPDATE")
            .bind(vehicle_id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Err(not_found_error("Vehicle", &vehicle_id.to_string()));
        }

        let entry = log.into_entry(vehicle_id);
        let inserted = sqlx::query_as::<_, MileageLogEntry>(&format!(
            r#"
            INSERT INTO mileage_logs ({cols})
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {cols}
            "#,
            cols = MILEAGE_COLUMNS
        ))
        .bind(entry.id)
        .bind(entry.vehicle_id)
        .bind(entry.date)
        .bind(entry.mileage)
        .bind(&entry.driver)
        .bind(&entry.notes)
        .bind(entry.created_at)
        .fetch_one(&mut *tx)
        .await?;

        // Nunca baja: solo se aplica si la lectura supera el valor actual
        sqlx::query("UPDATE vehicles SET current_mileage = $2 WHERE id = $1 AND current_mileage < $2")
            .bind(vehicle_id)
            .bind(inserted.mileage)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(inserted)
    }
}
