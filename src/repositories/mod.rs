//! Repositorios de datos
//!
//! `VehicleStore` es la frontera entre el servicio de consultas y el
//! almacenamiento. Ambas implementaciones devuelven los registros en orden
//! ascendente de id.

pub mod memory_repository;
pub mod vehicle_repository;

pub use memory_repository::InMemoryVehicleRepository;
pub use vehicle_repository::PgVehicleRepository;

use async_trait::async_trait;

use crate::models::vehicle::{NewVehicle, SearchField, Vehicle};
use crate::utils::errors::AppError;

#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Todos los vehículos almacenados
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError>;

    /// Persistir un vehículo y devolver el id asignado
    async fn insert(&self, vehicle: NewVehicle) -> Result<i32, AppError>;

    /// Vehículos cuyo campo `field` contiene `pattern` como subcadena
    async fn find_by(&self, field: SearchField, pattern: &str) -> Result<Vec<Vehicle>, AppError>;
}
