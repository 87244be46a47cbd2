//! # petcared: petcare daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`petcare.toml` plus environment overrides)
//! - Initialize `tracing` from the configured filter
//! - Load the pet roster into the in-memory repository
//! - Construct application services, injecting the repository and clock
//! - Build the axum router and serve until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use petcare_adapter_http_axum::router;
use petcare_adapter_http_axum::state::AppState;
use petcare_adapter_roster::InMemoryPetRepository;
use petcare_app::clock::SystemClock;
use petcare_app::services::pet_service::PetService;
use petcare_app::services::reminder_service::ReminderService;

use crate::config::Config;

/// Days ahead covered by the startup reminder summary.
const STARTUP_HORIZON_DAYS: i64 = 7;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.logging.filter);

    // Repository
    let repo = InMemoryPetRepository::from_roster_file(&config.roster.path)
        .with_context(|| format!("failed to load roster {}", config.roster.path.display()))?;

    // Services
    let pet_service = PetService::new(repo.clone(), SystemClock);
    let reminder_service = ReminderService::new(repo, SystemClock);
    log_due_soon(&reminder_service).await?;

    // HTTP
    let app = router::build(AppState::new(pet_service, reminder_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "petcared listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("petcared stopped");
    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}), falling back to info");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn log_due_soon(
    service: &ReminderService<InMemoryPetRepository, SystemClock>,
) -> anyhow::Result<()> {
    let reminders = service
        .upcoming(Some(STARTUP_HORIZON_DAYS))
        .await
        .context("failed to compute reminders")?;
    let overdue = reminders.iter().filter(|r| r.is_overdue()).count();
    if overdue > 0 {
        tracing::warn!(overdue, "some pets are overdue for care");
    }
    tracing::info!(
        due = reminders.len() - overdue,
        horizon_days = STARTUP_HORIZON_DAYS,
        "reminders due soon"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
