// apps/ticketapp/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::pipelines::contexts::{SigninCtxData, SignupCtxData};
use crate::state::AppState;
use crate::web::cookies::TicketJar;
use crate::web::page::PageView;
use crate::web::routes;
use crate::web::session::Session;
use orka::{ContextData, PipelineResult};
use ticketapp_core::{LoginForm, SignupForm};

/// POST `/login`: runs the sign-in pipeline. A missing body counts as an empty form.
#[instrument(name = "handler::login", skip(req, app_state, session, form))]
pub async fn login_handler(
  req: HttpRequest,
  app_state: web::Data<AppState>,
  mut session: Session,
  form: Option<web::Form<LoginForm>>,
) -> Result<HttpResponse, AppError> {
  let form = form.map(web::Form::into_inner).unwrap_or_default();
  let email = form.email.clone();

  let ctx = ContextData::new(SigninCtxData::new(app_state.users.clone(), form));
  match app_state.orka.run(ctx.clone()).await? {
    PipelineResult::Completed => {
      let user = ctx
        .read()
        .user
        .clone()
        .ok_or_else(|| AppError::Internal("Signin completed without a user".to_string()))?;
      info!(user_id = user.id, "Login successful.");
      let cookies = session.login(user);
      Ok(super::redirect("/dashboard", cookies))
    }
    PipelineResult::Stopped => {
      let errors = ctx.read().errors.clone();
      warn!(error_count = errors.len(), "Login rejected.");
      let jar = TicketJar::read(&req, session.user());
      let view = PageView::new(&req, session.user(), &jar.tickets)
        .with_errors(&errors)
        .with_email(email.as_deref());
      super::render_html(&app_state, routes::template_for("/login")?, view)
    }
  }
}

/// POST `/signup`: runs the sign-up pipeline and signs the new account in.
#[instrument(name = "handler::signup", skip(req, app_state, session, form))]
pub async fn signup_handler(
  req: HttpRequest,
  app_state: web::Data<AppState>,
  mut session: Session,
  form: Option<web::Form<SignupForm>>,
) -> Result<HttpResponse, AppError> {
  let form = form.map(web::Form::into_inner).unwrap_or_default();
  let (name, email) = (form.name.clone(), form.email.clone());

  let ctx = ContextData::new(SignupCtxData::new(app_state.users.clone(), form));
  match app_state.orka.run(ctx.clone()).await? {
    PipelineResult::Completed => {
      let user = ctx
        .read()
        .new_user
        .as_ref()
        .map(ticketapp_core::SessionUser::from)
        .ok_or_else(|| AppError::Internal("Signup completed without a user".to_string()))?;
      info!(user_id = user.id, "Signup successful, signing in.");
      let cookies = session.login(user);
      Ok(super::redirect("/dashboard", cookies))
    }
    PipelineResult::Stopped => {
      let errors = ctx.read().errors.clone();
      warn!(error_count = errors.len(), "Signup rejected.");
      let jar = TicketJar::read(&req, session.user());
      let view = PageView::new(&req, session.user(), &jar.tickets)
        .with_errors(&errors)
        .with_name(name.as_deref())
        .with_email(email.as_deref());
      super::render_html(&app_state, routes::template_for("/signup")?, view)
    }
  }
}

/// Always succeeds: drops the server session, expires the session cookies, goes home.
#[instrument(name = "handler::logout", skip(session))]
pub async fn logout_handler(mut session: Session) -> HttpResponse {
  if let Some(user) = session.user() {
    info!(user_id = user.id, "Logging out.");
  }
  let cookies = session.clear();
  super::redirect("/", cookies)
}
