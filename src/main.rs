use anyhow::{Context, Result};
use blog_core::application::{
    ports::{
        assets::{AssetStore, UploadPolicy},
        time::Clock,
    },
    services::ApplicationServices,
};
use blog_core::config::AppConfig;
use blog_core::domain::{
    blog::{BlogReadRepository, BlogWriteRepository},
    category::CategoryRepository,
};
use blog_core::infrastructure::{
    assets::LocalAssetStore,
    database,
    repositories::{
        PostgresBlogReadRepository, PostgresBlogWriteRepository, PostgresCategoryRepository,
    },
    time::SystemClock,
};
use blog_core::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("failed to connect to database")?;
    database::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let blog_write_repo: Arc<dyn BlogWriteRepository> =
        Arc::new(PostgresBlogWriteRepository::new(pool.clone()));
    let blog_read_repo: Arc<dyn BlogReadRepository> =
        Arc::new(PostgresBlogReadRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));

    let local_assets = LocalAssetStore::new(config.asset_root(), config.asset_public_url());
    tokio::fs::create_dir_all(local_assets.root())
        .await
        .with_context(|| format!("failed to create {}", local_assets.root().display()))?;
    let asset_store: Arc<dyn AssetStore> = Arc::new(local_assets);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&blog_write_repo),
        Arc::clone(&blog_read_repo),
        Arc::clone(&category_repo),
        Arc::clone(&asset_store),
        Arc::clone(&clock),
        UploadPolicy::new(config.upload_max_bytes()),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_options(state, RouterOptions::from_config(&config));
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        %address,
        assets = %config.asset_root().display(),
        "listening"
    );

    axum::serve(listener, service)
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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
