//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como vive en la tabla
//! `vehicles` y el selector de campo usado por las búsquedas.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
    pub miles: Option<i32>,
}

/// Campos descriptivos de un vehículo todavía sin id
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
    pub miles: Option<i32>,
}

impl NewVehicle {
    pub fn into_vehicle(self, id: i32) -> Vehicle {
        Vehicle {
            id,
            make: self.make,
            model: self.model,
            year: self.year,
            color: self.color,
            price: self.price,
            miles: self.miles,
        }
    }
}

/// Campo sobre el que se aplica una búsqueda por subcadena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Make,
    Model,
    Year,
    Color,
}

impl SearchField {
    /// Nombre de la columna en la tabla vehicles
    pub fn column(&self) -> &'static str {
        match self {
            SearchField::Make => "make",
            SearchField::Model => "model",
            SearchField::Year => "year",
            SearchField::Color => "color",
        }
    }

    /// Forma textual del campo; el año se compara como texto
    pub fn text_of<'a>(&self, vehicle: &'a Vehicle) -> std::borrow::Cow<'a, str> {
        match self {
            SearchField::Make => vehicle.make.as_str().into(),
            SearchField::Model => vehicle.model.as_str().into(),
            SearchField::Year => vehicle.year.to_string().into(),
            SearchField::Color => vehicle.color.as_str().into(),
        }
    }

    /// Contención de subcadena, sensible a mayúsculas
    pub fn matches(&self, vehicle: &Vehicle, pattern: &str) -> bool {
        self.text_of(vehicle).contains(pattern)
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
