//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema PostgreSQL.

pub mod vehicle;

pub use vehicle::{NewVehicle, SearchField, Vehicle};
