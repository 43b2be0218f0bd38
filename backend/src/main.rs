//! Backend entry-point: loads settings, prepares storage and serves the API.

use std::ffi::OsString;

use actix_web::web;
use color_eyre::eyre::WrapErr;
use mockable::{DefaultClock, DefaultEnv};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use jobdesk::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use jobdesk::inbound::http::health::HealthState;
use jobdesk::inbound::http::session_config::{BuildMode, session_settings_from_env};
use jobdesk::outbound::persistence::{DbPool, run_migrations};
use jobdesk::outbound::security::Argon2Hasher;
use jobdesk::server::{ServerConfig, ServerSettings, create_server, http_state_for};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Settings come from the environment and config files only.
    let program = [std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("jobdesk"))];
    let settings = ServerSettings::load_from_iter(program.clone())
        .wrap_err("loading JOBDESK_* settings")?;
    let example_data = ExampleDataSettings::load_from_iter(program)
        .wrap_err("loading EXAMPLE_DATA_* settings")?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("configuring sessions")?;
    let bind_addr = settings.bind_addr()?;

    let pool = match settings.pool_config() {
        Some(pool_config) => {
            let applied = run_migrations(pool_config.database_url())
                .await
                .wrap_err("applying migrations")?;
            info!(applied, "database schema ready");
            Some(DbPool::new(&pool_config).await.wrap_err("building pool")?)
        }
        None => {
            warn!("JOBDESK_DATABASE_URL not set; records are kept in memory");
            None
        }
    };

    let http_state = http_state_for(pool.as_ref(), Argon2Hasher::default());
    seed_example_data_on_startup(&example_data, &http_state, &DefaultClock)
        .await
        .wrap_err("seeding example data")?;

    let config = ServerConfig::new(session, bind_addr);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(
        jobdesk::server::make_metrics()
            .map_err(|e| color_eyre::eyre::eyre!("configuring Prometheus metrics: {e}"))?,
    ));

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "listening");
    create_server(health_state, http_state, config)?.await?;
    Ok(())
}
