// apps/ticketapp/src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers::{auth_handlers, page_handlers, ticket_handlers};

/// One entry of the flat route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
  pub path: &'static str,
  /// Template under the templates dir; `None` for pure actions.
  pub template: Option<&'static str>,
  pub auth_required: bool,
}

pub const ROUTES: &[Route] = &[
  Route { path: "/", template: Some("pages/landing.html"), auth_required: false },
  Route { path: "/login", template: Some("pages/login.html"), auth_required: false },
  Route { path: "/signup", template: Some("pages/signup.html"), auth_required: false },
  Route { path: "/dashboard", template: Some("pages/dashboard.html"), auth_required: true },
  Route { path: "/tickets", template: Some("pages/tickets.html"), auth_required: true },
  Route { path: "/logout", template: None, auth_required: true },
];

pub fn lookup(path: &str) -> Option<&'static Route> {
  ROUTES.iter().find(|route| route.path == path)
}

/// Template registered for `path`; `NotFound` for unknown paths and pure actions.
pub fn template_for(path: &str) -> Result<&'static str, AppError> {
  lookup(path).and_then(|route| route.template).ok_or(AppError::NotFound)
}

// Called in `main.rs` (and the HTTP tests) to register every path on the Actix App.
// Methods are only told apart where a form posts back to its own page; everything
// else answers any method the same way.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .service(web::resource("/").route(web::route().to(page_handlers::page_handler)))
    .service(
      web::resource("/login")
        .route(web::post().to(auth_handlers::login_handler))
        .route(web::route().to(page_handlers::page_handler)),
    )
    .service(
      web::resource("/signup")
        .route(web::post().to(auth_handlers::signup_handler))
        .route(web::route().to(page_handlers::page_handler)),
    )
    .service(web::resource("/dashboard").route(web::route().to(page_handlers::page_handler)))
    .service(
      web::resource("/tickets")
        .route(web::post().to(ticket_handlers::ticket_action_handler))
        .route(web::route().to(page_handlers::page_handler)),
    )
    .service(web::resource("/logout").route(web::route().to(auth_handlers::logout_handler)));
}
