use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::vehicle::{NewVehicle, SearchField, Vehicle};

// Request para crear un vehículo. Todas las claves son obligatorias;
// `miles` admite null pero la clave debe estar presente.
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
    #[serde(deserialize_with = "required_nullable")]
    pub miles: Option<i32>,
}

fn required_nullable<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer)
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(request: CreateVehicleRequest) -> Self {
        Self {
            make: request.make,
            model: request.model,
            year: request.year,
            color: request.color,
            price: request.price,
            miles: request.miles,
        }
    }
}

// Response de vehículo
#[derive(Debug, Clone, Serialize)]
pub struct VehicleResponse {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Make")]
    pub make: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Miles")]
    pub miles: Option<i32>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            color: vehicle.color,
            price: vehicle.price,
            miles: vehicle.miles,
        }
    }
}

// Response de inserción
#[derive(Debug, Serialize)]
pub struct CreatedVehicleResponse {
    #[serde(rename = "ID")]
    pub id: i32,
}

/// Listado con una única clave descriptiva cuyo valor es el array de vehículos
#[derive(Debug)]
pub struct LabeledVehicleList {
    pub label: String,
    pub vehicles: Vec<VehicleResponse>,
}

impl LabeledVehicleList {
    pub fn all(vehicles: Vec<Vehicle>) -> Self {
        Self {
            label: "List of Vehicles".to_string(),
            vehicles: vehicles.into_iter().map(VehicleResponse::from).collect(),
        }
    }

    pub fn search(field: SearchField, term: &str, vehicles: Vec<Vehicle>) -> Self {
        Self {
            label: format!("List of Vehicles with {} of {} - Showing all result(s)", field, term),
            vehicles: vehicles.into_iter().map(VehicleResponse::from).collect(),
        }
    }

    pub fn page(field: SearchField, term: &str, vehicles: Vec<Vehicle>) -> Self {
        Self {
            label: format!(
                "List of Vehicles with {} of {} - Showing {} result(s)",
                field,
                term,
                vehicles.len()
            ),
            vehicles: vehicles.into_iter().map(VehicleResponse::from).collect(),
        }
    }
}

impl Serialize for LabeledVehicleList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.label, &self.vehicles)?;
        map.end()
    }
}
