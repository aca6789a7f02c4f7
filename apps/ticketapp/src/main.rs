// apps/ticketapp/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use ticketapp::config::AppConfig;
use ticketapp::state::AppState;
use ticketapp::web::{self, handlers::page_handlers, render::Renderer};
use ticketapp_core::{JsonFileUserStore, UserRepository};

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(15 * 60);

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting ticketapp server...");

  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;

  // First load seeds the demo account when the file does not exist yet.
  let users: Arc<dyn UserRepository> = Arc::new(JsonFileUserStore::new(&app_config.users_file));
  let known_users = users.load().context("Failed to open the user store")?.len();
  tracing::info!(known_users, users_file = %app_config.users_file.display(), "User store ready.");

  let renderer = Renderer::new(&app_config.templates_dir, app_config.template_reload)
    .context("Failed to load page templates")?;

  let app_state = AppState::new(app_config, users, renderer);

  let sessions = app_state.sessions.clone();
  actix_rt::spawn(async move {
    let mut ticker = actix_rt::time::interval(SESSION_PURGE_INTERVAL);
    loop {
      ticker.tick().await;
      let purged = sessions.purge_expired();
      if purged > 0 {
        tracing::info!(purged, "Expired sessions purged.");
      }
    }
  });

  let server_address = app_state.config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
      .default_service(actix_data::to(page_handlers::not_found_handler))
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await?;

  Ok(())
}
