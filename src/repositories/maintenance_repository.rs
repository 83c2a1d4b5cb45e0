use sqlx::PgPool;
use uuid::Uuid;

use crate::models::maintenance::MaintenanceRecord;
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_latest_by_vehicle(&self, vehicle_id: Uuid) -> Result<Option<MaintenanceRecord>, AppError> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            SELECT id, vehicle_id, kind, date, mileage, cost, description, next_maintenance_km, created_at
            FROM maintenance
            WHERE vehicle_id = $1
            ORDER BY date DESC, created_at DESC
            LIMIT 1
            "#
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
