//! Utilidades del sistema
//!
//! Manejo de errores y paginación compartidos por los handlers.

pub mod errors;
pub mod pagination;
