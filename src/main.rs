use clinica_core::application::content::ContentService;
use clinica_core::application::ports::time::Clock;
use clinica_core::application::services::ApplicationServices;
use clinica_core::config::AppConfig;
use clinica_core::infrastructure::{
    database,
    repositories::{
        PostgresBlogStore, PostgresClinicServiceStore, PostgresDepartmentStore,
        PostgresFacultyStore, PostgresProgramStore,
    },
    seed,
    time::SystemClock,
};
use clinica_core::presentation::http::{routes::build_router, state::HttpState};

use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let departments = Arc::new(ContentService::from_store(
        Arc::new(PostgresDepartmentStore::new(pool.clone())),
        Arc::clone(&clock),
    ));
    let clinic_services = Arc::new(ContentService::from_store(
        Arc::new(PostgresClinicServiceStore::new(pool.clone())),
        Arc::clone(&clock),
    ));
    let programs = Arc::new(ContentService::from_store(
        Arc::new(PostgresProgramStore::new(pool.clone())),
        Arc::clone(&clock),
    ));
    let blog = Arc::new(ContentService::from_store(
        Arc::new(PostgresBlogStore::new(pool.clone())),
        Arc::clone(&clock),
    ));
    let faculty = Arc::new(ContentService::from_store(
        Arc::new(PostgresFacultyStore::new(pool)),
        Arc::clone(&clock),
    ));

    seed::seed_default_departments(&departments).await?;

    let services = Arc::new(ApplicationServices::new(
        departments,
        clinic_services,
        programs,
        blog,
        faculty,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
