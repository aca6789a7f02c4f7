// apps/ticketapp/src/web/cookies.rs

//! Cookie builders and the per-user ticket jar.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::HttpRequest;
use ticketapp_core::{cookie_name_for, decode, dedup, encode, SessionUser, Ticket, LEGACY_COOKIE_NAME};

use crate::errors::Result;

pub const COOKIE_MAX_AGE_DAYS: i64 = 30;

/// Key used for the ticket cookie when nobody is signed in.
const ANONYMOUS_TICKET_OWNER: &str = "default";

/// Script-readable cookie that outlives the browser session.
pub fn persistent_cookie(name: &str, value: String, secure: bool) -> Cookie<'static> {
  Cookie::build(name.to_string(), value)
    .path("/")
    .max_age(CookieDuration::days(COOKIE_MAX_AGE_DAYS))
    .same_site(SameSite::Lax)
    .secure(secure)
    .finish()
}

/// HttpOnly cookie that the browser drops when it closes.
pub fn session_cookie(name: &str, value: String, secure: bool) -> Cookie<'static> {
  Cookie::build(name.to_string(), value)
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .secure(secure)
    .finish()
}

pub fn removal_cookie(name: &str) -> Cookie<'static> {
  let mut cookie = Cookie::build(name.to_string(), "").path("/").finish();
  cookie.make_removal();
  cookie
}

/// The caller's tickets as read from their cookie, already deduplicated.
#[derive(Debug, Clone)]
pub struct TicketJar {
  pub cookie_name: String,
  pub tickets: Vec<Ticket>,
}

impl TicketJar {
  /// Reads the per-user cookie, falling back to the legacy generic one when it is absent.
  pub fn read(req: &HttpRequest, user: Option<&SessionUser>) -> Self {
    let owner = user.map(|u| u.email.as_str()).unwrap_or(ANONYMOUS_TICKET_OWNER);
    let cookie_name = cookie_name_for(owner);

    let tickets = req
      .cookie(&cookie_name)
      .or_else(|| req.cookie(LEGACY_COOKIE_NAME))
      .map(|c| decode(c.value()))
      .unwrap_or_default();

    Self {
      cookie_name,
      tickets: dedup(tickets),
    }
  }

  /// The cookie that replaces the stored list with `tickets`.
  pub fn store(&self, tickets: &[Ticket], secure: bool) -> Result<Cookie<'static>> {
    Ok(persistent_cookie(&self.cookie_name, encode(tickets)?, secure))
  }
}
