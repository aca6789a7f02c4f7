// apps/ticketapp/src/state.rs
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::pipelines;
use crate::web::render::Renderer;
use orka::Orka;
use std::sync::Arc;
use ticketapp_core::{SessionStore, UserRepository};

#[derive(Clone)]
pub struct AppState {
  pub users: Arc<dyn UserRepository>,
  pub sessions: Arc<SessionStore>,
  pub renderer: Arc<Renderer>,
  pub config: Arc<AppConfig>, // Share loaded config
  pub orka: Arc<Orka<AppError>>,
}

impl AppState {
  /// Builds the shared state and registers the account pipelines.
  pub fn new(config: AppConfig, users: Arc<dyn UserRepository>, renderer: Renderer) -> Self {
    let sessions = SessionStore::new(chrono::Duration::days(config.session_ttl_days));
    let orka = Arc::new(Orka::<AppError>::new());
    pipelines::register_all_pipelines(&orka);
    Self {
      users,
      sessions: Arc::new(sessions),
      renderer: Arc::new(renderer),
      config: Arc::new(config),
      orka,
    }
  }
}
