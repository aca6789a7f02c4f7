// apps/ticketapp/src/web/handlers/page_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{debug, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::cookies::TicketJar;
use crate::web::page::PageView;
use crate::web::routes;
use crate::web::session::Session;

/// Renders whichever page the route table maps the request path to,
/// enforcing the route's auth requirement first.
#[instrument(
    name = "handler::page",
    skip(req, app_state, session),
    fields(path = %req.path(), method = %req.method())
)]
pub async fn page_handler(
  req: HttpRequest,
  app_state: web::Data<AppState>,
  session: Session,
) -> Result<HttpResponse, AppError> {
  let route = routes::lookup(req.path()).ok_or(AppError::NotFound)?;
  if route.auth_required {
    session.require_user()?;
  }
  let template = routes::template_for(route.path)?;

  let jar = TicketJar::read(&req, session.user());
  debug!(template, tickets = jar.tickets.len(), "Rendering page.");
  let view = PageView::new(&req, session.user(), &jar.tickets);
  super::render_html(&app_state, template, view)
}

/// Fallback for every path the route table does not know.
pub async fn not_found_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  debug!(path = %req.path(), "No route matched.");
  Err(AppError::NotFound)
}
