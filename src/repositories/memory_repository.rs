//! Store en memoria
//!
//! Mantiene los vehículos en un `Vec` protegido por `RwLock`. Los ids se
//! asignan de forma incremental empezando en 1, como un `SERIAL`.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::vehicle::{NewVehicle, SearchField, Vehicle};
use crate::repositories::VehicleStore;
use crate::utils::errors::AppError;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Vehicle>,
    last_id: i32,
}

#[derive(Clone, Default)]
pub struct InMemoryVehicleRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleRepository {
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.clone())
    }

    async fn insert(&self, vehicle: NewVehicle) -> Result<i32, AppError> {
        let mut table = self.table.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("vehicle id sequence exhausted".to_string()))?;

        table.last_id = id;
        table.rows.push(vehicle.into_vehicle(id));
        Ok(id)
    }

    async fn find_by(&self, field: SearchField, pattern: &str) -> Result<Vec<Vehicle>, AppError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|v| field.matches(v, pattern))
            .cloned()
            .collect())
    }
}
