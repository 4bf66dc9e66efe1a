//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del servicio de vehículos
//! y su conversión a respuestas HTTP.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

/// Mensaje devuelto cuando los parámetros de paginación no son numéricos
pub const INVALID_RANGE_MESSAGE: &str = "Not valid search query parameter input";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid range parameter: start={start}, end={end}")]
    InvalidRangeParameter { start: String, end: String },

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            // Texto plano sin envoltorio JSON, con el status por defecto
            AppError::InvalidRangeParameter { start, end } => {
                warn!("Parámetros de rango inválidos: s={} e={}", start, end);
                return (StatusCode::OK, INVALID_RANGE_MESSAGE).into_response();
            }

            AppError::Database(e) => {
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        code: "DB_ERROR".to_string(),
                    },
                )
            }

            AppError::MissingField(msg) => {
                warn!("Payload inválido: {}", msg);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse {
                        error: "Missing Field".to_string(),
                        message: msg,
                        code: "MISSING_FIELD".to_string(),
                    },
                )
            }

            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        code: "NOT_FOUND".to_string(),
                    },
                )
            }

            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        code: "INTERNAL_ERROR".to_string(),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
