//! Vehicle search service
//!
//! Servicio HTTP de un solo recurso: alta y listado de vehículos y búsqueda
//! por subcadena sobre make, model, year o color, con paginación opcional.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
