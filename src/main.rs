use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use vehicle_search::config::database::DatabaseConfig;
use vehicle_search::config::environment::{EnvironmentConfig, StoreBackend};
use vehicle_search::database::DatabaseConnection;
use vehicle_search::repositories::{InMemoryVehicleRepository, PgVehicleRepository, VehicleStore};
use vehicle_search::routes::create_app_router;
use vehicle_search::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    info!("🚗 Vehicle Search Service");
    info!("========================");

    // Inicializar store
    let store: Arc<dyn VehicleStore> = match config.store {
        StoreBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let db_connection = match DatabaseConnection::connect(&db_config).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };
            db_connection.run_migrations().await?;
            Arc::new(PgVehicleRepository::new(db_connection.pool().clone()))
        }
        StoreBackend::Memory => {
            warn!("⚠️ Usando store en memoria, los datos no se persisten");
            Arc::new(InMemoryVehicleRepository::new())
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app_router(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /vehicles - Listar vehículos");
    info!("   POST /vehicles - Crear vehículo");
    info!("   GET  /searchby{{make,model,year,color}}/:term - Buscar por subcadena");
    info!("   GET  /searchby{{make,model,year,color}}/:term/s=<start>e=<end> - Buscar paginado");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
