// apps/ticketapp/src/web/session.rs

//! The per-request session context handed to handlers.

use actix_web::cookie::Cookie;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use std::sync::Arc;
use ticketapp_core::{generate_token, SessionStore, SessionUser};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::cookies;

/// Server session id. Lives for the browser session.
pub const SESSION_ID_COOKIE: &str = "ticketapp_sid";
/// Auth marker for client-side scripts. Never checked by the server.
pub const SESSION_MARKER_COOKIE: &str = "ticketapp_session";

/// Read / write / clear access to the caller's session.
///
/// Changes that affect the browser come back as cookies the handler must attach
/// to its response.
pub struct Session {
  store: Arc<SessionStore>,
  sid: Option<String>,
  user: Option<SessionUser>,
  secure_cookies: bool,
}

impl Session {
  pub fn user(&self) -> Option<&SessionUser> {
    self.user.as_ref()
  }

  /// The signed-in user, or [`AppError::AuthRequired`] which answers with a redirect to `/login`.
  pub fn require_user(&self) -> Result<&SessionUser, AppError> {
    self.user.as_ref().ok_or(AppError::AuthRequired)
  }

  /// Replaces whatever session the caller had with a fresh one for `user`.
  pub fn login(&mut self, user: SessionUser) -> Vec<Cookie<'static>> {
    if let Some(old_sid) = self.sid.take() {
      self.store.remove(&old_sid);
    }
    let sid = self.store.create(user.clone());
    self.sid = Some(sid.clone());
    self.user = Some(user);

    vec![
      cookies::session_cookie(SESSION_ID_COOKIE, sid, self.secure_cookies),
      cookies::persistent_cookie(SESSION_MARKER_COOKIE, generate_token(), self.secure_cookies),
    ]
  }

  pub fn clear(&mut self) -> Vec<Cookie<'static>> {
    if let Some(sid) = self.sid.take() {
      self.store.remove(&sid);
    }
    self.user = None;
    vec![
      cookies::removal_cookie(SESSION_ID_COOKIE),
      cookies::removal_cookie(SESSION_MARKER_COOKIE),
    ]
  }
}

impl FromRequest for Session {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let Some(app_state) = req.app_data::<web::Data<AppState>>() else {
      warn!("Session extractor: AppState is not registered on the App.");
      return ready(Err(AppError::Internal("Application state missing".to_string())));
    };

    let sid = req.cookie(SESSION_ID_COOKIE).map(|c| c.value().to_string());
    let user = sid.as_deref().and_then(|sid| app_state.sessions.get(sid));
    debug!(has_sid = sid.is_some(), signed_in = user.is_some(), "Session resolved.");

    ready(Ok(Session {
      store: app_state.sessions.clone(),
      sid,
      user,
      secure_cookies: app_state.config.cookie_secure,
    }))
  }
}
