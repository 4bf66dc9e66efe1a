//! Configuración de conexión a PostgreSQL
//!
//! Este módulo abre el pool y crea la tabla de vehículos si no existe.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::config::database::DatabaseConfig;

const CREATE_VEHICLES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS vehicles (
    id    SERIAL PRIMARY KEY,
    make  VARCHAR(60) NOT NULL,
    model VARCHAR(60) NOT NULL,
    year  INTEGER NOT NULL,
    color VARCHAR(60) NOT NULL,
    price DOUBLE PRECISION NOT NULL,
    miles INTEGER
)
"#;

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Conectar usando la configuración dada
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("🔌 Conectando a {}", mask_database_url(&config.url));
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_VEHICLES_TABLE).execute(&self.pool).await?;
        info!("✅ Tabla vehicles lista");
        Ok(())
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.find('@') else {
        return url.to_string();
    };

    match url.find("://") {
        Some(scheme_end) if scheme_end + 3 <= at_pos => {
            format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
