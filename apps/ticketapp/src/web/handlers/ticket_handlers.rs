// apps/ticketapp/src/web/handlers/ticket_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::field::{debug, Empty};
use tracing::{info, instrument, warn, Span};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::cookies::TicketJar;
use crate::web::page::PageView;
use crate::web::routes;
use crate::web::session::Session;
use ticketapp_core::{TicketAction, TicketForm};

/// POST `/tickets`: create, update or delete one ticket in the caller's cookie.
///
/// The list is rebuilt from this request's own cookie and written back whole,
/// so two tabs racing each other keep whichever response arrived last.
///
/// A missing or unreadable body is treated as an empty form, so the sign-in check
/// always comes first.
#[instrument(
    name = "handler::ticket_action",
    skip(req, app_state, session, form),
    fields(action = Empty, ticket_id = Empty)
)]
pub async fn ticket_action_handler(
  req: HttpRequest,
  app_state: web::Data<AppState>,
  session: Session,
  form: Option<web::Form<TicketForm>>,
) -> Result<HttpResponse, AppError> {
  let user = session.require_user()?;
  let form = form.map(web::Form::into_inner).unwrap_or_default();
  let span = Span::current();
  span.record("action", debug(&form.action));
  span.record("ticket_id", debug(&form.id));

  let jar = TicketJar::read(&req, Some(user));

  let action = match TicketAction::from_form(&form) {
    Ok(Some(action)) => action,
    Ok(None) => {
      // Unknown action: behave like a plain page load.
      let view = PageView::new(&req, Some(user), &jar.tickets);
      return super::render_html(&app_state, routes::template_for("/tickets")?, view);
    }
    Err(errors) => {
      warn!(error_count = errors.len(), "Ticket form rejected.");
      let view = PageView::new(&req, Some(user), &jar.tickets).with_errors(&errors);
      return super::render_html(&app_state, routes::template_for("/tickets")?, view);
    }
  };

  let location = match action {
    TicketAction::Delete { .. } => "/tickets",
    _ => "/tickets?success=1",
  };
  let action_name = action.name();
  let tickets = action.apply(jar.tickets.clone());
  let cookie = jar.store(&tickets, app_state.config.cookie_secure)?;

  info!(action = action_name, user_id = user.id, count = tickets.len(), "Tickets saved.");
  Ok(super::redirect(location, vec![cookie]))
}
