// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::test::TestRequest;
use actix_web::web;
use std::path::PathBuf;
use std::sync::Arc;
use ticketapp::config::AppConfig;
use ticketapp::state::AppState;
use ticketapp::web::render::Renderer;
use ticketapp_core::{InMemoryUserStore, UserRepository};
use tracing::Level;

pub const TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/views");

/// Builds the same App `main.rs` serves, around the given state.
#[macro_export]
macro_rules! init_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data($state.clone())
        .configure(ticketapp::web::configure_app_routes)
        .default_service(actix_web::web::to(
          ticketapp::web::handlers::page_handlers::not_found_handler,
        )),
    )
    .await
  };
}

pub fn app_state_with(templates_dir: impl Into<PathBuf>, users: Arc<dyn UserRepository>) -> web::Data<AppState> {
  let templates_dir = templates_dir.into();
  let config = AppConfig {
    templates_dir: templates_dir.clone(),
    ..AppConfig::default()
  };
  let renderer = Renderer::new(templates_dir, false).expect("renderer loads");
  web::Data::new(AppState::new(config, users, renderer))
}

/// Real templates plus an in-memory store holding the demo account.
pub fn app_state() -> web::Data<AppState> {
  let users = InMemoryUserStore::with_demo_user().expect("demo user hashes");
  app_state_with(TEMPLATES_DIR, Arc::new(users))
}

/// Browser-side cookie jar carried between requests.
#[derive(Debug, Default, Clone)]
pub struct Browser {
  cookies: Vec<Cookie<'static>>,
}

impl Browser {
  /// Applies every Set-Cookie of `resp`. Empty values are removals.
  pub fn absorb<B>(&mut self, resp: &ServiceResponse<B>) {
    for cookie in resp.response().cookies() {
      self.cookies.retain(|c| c.name() != cookie.name());
      if !cookie.value().is_empty() {
        self.cookies.push(cookie.into_owned());
      }
    }
  }

  pub fn get(&self, name: &str) -> Option<&Cookie<'static>> {
    self.cookies.iter().find(|c| c.name() == name)
  }

  pub fn set(&mut self, cookie: Cookie<'static>) {
    self.cookies.retain(|c| c.name() != cookie.name());
    self.cookies.push(cookie);
  }

  pub fn attach(&self, mut req: TestRequest) -> TestRequest {
    for cookie in &self.cookies {
      req = req.cookie(cookie.clone());
    }
    req
  }
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
  resp
    .headers()
    .get(header::LOCATION)
    .and_then(|v| v.to_str().ok())
    .map(str::to_string)
}

pub fn login_request(email: &str, password: &str) -> TestRequest {
  TestRequest::post()
    .uri("/login")
    .set_form(vec![("email", email), ("password", password)])
}

pub fn signup_request(name: &str, email: &str, password: &str, confirm: &str) -> TestRequest {
  TestRequest::post().uri("/signup").set_form(vec![
    ("name", name),
    ("email", email),
    ("password", password),
    ("confirm_password", confirm),
  ])
}

pub fn ticket_request(fields: &[(&str, &str)]) -> TestRequest {
  TestRequest::post().uri("/tickets").set_form(fields.to_vec())
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
