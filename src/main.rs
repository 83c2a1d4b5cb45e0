use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fleet_maintenance::config::{DatabaseConfig, EnvironmentConfig, ForecastPolicy, UrgencyThresholds};
use fleet_maintenance::database;
use fleet_maintenance::repositories::{FleetRepository, InMemoryFleetRepository, PgFleetRepository};
use fleet_maintenance::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    info!("🚛 Fleet Maintenance - Pronóstico de mantenimiento");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    let policy = ForecastPolicy::from_env()?;
    let thresholds = UrgencyThresholds::from_env()?;

    info!(
        "🔧 Política: cada {} km o {} días, ventana de {} lecturas",
        policy.interval_km, policy.interval_days, policy.mileage_window
    );
    info!(
        "🚦 Umbrales: urgente ≤ {} días, aviso ≤ {} días",
        thresholds.urgent_days, thresholds.warning_days
    );

    let repository: Arc<dyn FleetRepository> = if config.in_memory_store {
        warn!("⚠️ FLEET_STORE=memory: los datos no se persisten");
        Arc::new(InMemoryFleetRepository::new())
    } else {
        let db_config = DatabaseConfig::from_env()?;
        let pool = match database::create_pool(&db_config).await {
            Ok(pool) => pool,
            Err(e) => {
                error!("❌ Error conectando a la base de datos: {}", e);
                return Err(anyhow::anyhow!("Error de base de datos: {}", e));
            }
        };
        Arc::new(PgFleetRepository::new(pool))
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(repository, config, policy, thresholds));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/maintenance/upcoming - Próximos mantenimientos de la flota");
    info!("   GET  /api/vehicles/:id/prediction - Pronóstico de un vehículo");
    info!("   GET  /api/vehicles/:id/urgency - Urgencia de un vehículo");
    info!("   GET  /api/vehicles/:id/mileage - Journal de kilometraje");
    info!("   POST /api/vehicles/:id/mileage - Registrar lectura");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

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
