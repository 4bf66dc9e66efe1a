use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::models::vehicle::{NewVehicle, SearchField, Vehicle};
use crate::repositories::VehicleStore;
use crate::utils::errors::AppError;

const VEHICLE_COLUMNS: &str = "id, make, model, year, color, price, miles";

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleStore for PgVehicleRepository {
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let query = format!("SELECT {} FROM vehicles ORDER BY id", VEHICLE_COLUMNS);

        let vehicles = sqlx::query_as::<_, Vehicle>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    async fn insert(&self, vehicle: NewVehicle) -> Result<i32, AppError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO vehicles (make, model, year, color, price, miles)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(vehicle.make)
        .bind(vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.color)
        .bind(vehicle.price)
        .bind(vehicle.miles)
        .fetch_one(&self.pool)
        .await?;

        debug!("Vehículo insertado con id {}", id);
        Ok(id)
    }

    async fn find_by(&self, field: SearchField, pattern: &str) -> Result<Vec<Vehicle>, AppError> {
        // La columna sale del enum, nunca del input del usuario
        let query = format!(
            r"SELECT {} FROM vehicles WHERE CAST({} AS TEXT) LIKE $1 ESCAPE '\' ORDER BY id",
            VEHICLE_COLUMNS,
            field.column()
        );

        let vehicles = sqlx::query_as::<_, Vehicle>(&query)
            .bind(contains_pattern(pattern))
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }
}

/// Patrón LIKE `%term%` con los comodines del término escapados
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
