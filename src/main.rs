use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use vehicle_service_booking::{
    config::{database::DatabaseConfig, EnvironmentConfig, StorageBackend},
    create_app,
    database::DatabaseConnection,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt().with_max_level(config.log_level).init();

    info!("🔧 Vehicle Service Booking API ({})", config.environment);
    if config.is_development() {
        info!("🧪 Modo desarrollo: nivel de log {}", config.log_level);
    }

    let state = match config.storage {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let db = DatabaseConnection::connect(&db_config).await.map_err(|e| {
                error!("❌ Error conectando a la base de datos: {:#}", e);
                e
            })?;
            if config.run_migrations {
                db.run_migrations().await?;
            }
            AppState::postgres(db.pool().clone(), config.clone())
        }
        StorageBackend::Memory => {
            warn!("⚠️ STORAGE=memory: los datos se pierden al reiniciar");
            AppState::in_memory(config.clone())
        }
    };

    let app = create_app(state);

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_url()))?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Estado del servicio");
    info!("   POST /register - Registrar usuario");
    info!("   POST /login - Login");
    info!("   POST /vehicles - Registrar vehículo");
    info!("   GET  /vehicles/:user_id - Vehículos de un usuario");
    info!("   GET  /services - Catálogo de servicios");
    info!("   POST /bookings - Crear reserva");
    info!("   GET  /bookings/:user_id - Reservas de un usuario");
    info!("   PUT  /bookings/status - Actualizar estado de reserva");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
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
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
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
