//! Utilidades de paginación
//!
//! Los endpoints paginados reciben un segmento de ruta con la forma
//! `s=<start>e=<end>`. Aquí se separa ese segmento, se validan los índices
//! y se aplica el corte `[start, end)` sobre los resultados ya filtrados.

use crate::utils::errors::{AppError, AppResult};

/// Separar un segmento `s=<start>e=<end>` en sus dos partes crudas.
///
/// Ambas partes deben tener al menos un carácter. El separador `e=` se busca
/// desde el final, así `s=1e=2e=3` produce `("1e=2", "3")`.
pub fn split_range_segment(segment: &str) -> Option<(&str, &str)> {
    let rest = segment.strip_prefix("s=")?;

    rest.rmatch_indices("e=")
        .map(|(idx, _)| idx)
        .find(|idx| *idx >= 1 && idx + 2 < rest.len())
        .map(|idx| (&rest[..idx], &rest[idx + 2..]))
}

/// Rango `[start, end)` validado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    /// Validar los índices crudos. Solo se aceptan dígitos decimales ASCII;
    /// valores que no caben en `usize` se saturan.
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        match (parse_index(start), parse_index(end)) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(AppError::InvalidRangeParameter {
                start: start.to_string(),
                end: end.to_string(),
            }),
        }
    }

    /// Tomar `items[start..end]`, recortando `end` a la longitud disponible.
    /// Devuelve vacío si `start >= len` o `start > end`.
    pub fn slice<T>(&self, mut items: Vec<T>) -> Vec<T> {
        let end = self.end.min(items.len());
        if self.start >= end {
            return Vec::new();
        }

        items.truncate(end);
        items.split_off(self.start)
    }
}

fn parse_index(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Solo dígitos: el único fallo posible es overflow
    Some(raw.parse::<usize>().unwrap_or(usize::MAX))
}
