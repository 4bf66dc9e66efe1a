use std::sync::Arc;
use tracing::{debug, info};

use crate::dto::vehicle_dto::{CreateVehicleRequest, CreatedVehicleResponse, LabeledVehicleList};
use crate::models::vehicle::SearchField;
use crate::repositories::VehicleStore;
use crate::utils::errors::AppError;
use crate::utils::pagination::PageRange;

pub struct VehicleController {
    store: Arc<dyn VehicleStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<LabeledVehicleList, AppError> {
        let vehicles = self.store.list_all().await?;
        debug!("Listando {} vehículos", vehicles.len());
        Ok(LabeledVehicleList::all(vehicles))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<CreatedVehicleResponse, AppError> {
        let id = self.store.insert(request.into()).await?;
        info!("🚗 Vehículo creado con id {}", id);
        Ok(CreatedVehicleResponse { id })
    }

    pub async fn search(&self, field: SearchField, term: &str) -> Result<LabeledVehicleList, AppError> {
        let vehicles = self.store.find_by(field, term).await?;
        debug!("Búsqueda {}='{}': {} resultado(s)", field, term, vehicles.len());
        Ok(LabeledVehicleList::search(field, term, vehicles))
    }

    pub async fn search_paginated(
        &self,
        field: SearchField,
        term: &str,
        start: &str,
        end: &str,
    ) -> Result<LabeledVehicleList, AppError> {
        // Validar antes de tocar el store
        let range = PageRange::parse(start, end)?;

        let matches = self.store.find_by(field, term).await?;
        let total = matches.len();
        let page = range.slice(matches);
        debug!(
            "Búsqueda {}='{}' [{}..{}): {} de {} resultado(s)",
            field,
            term,
            range.start,
            range.end,
            page.len(),
            total
        );

        Ok(LabeledVehicleList::page(field, term, page))
    }
}
