// apps/ticketapp/src/web/handlers/mod.rs

pub mod auth_handlers;
pub mod page_handlers;
pub mod ticket_handlers;

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::HttpResponse;

use crate::errors::Result;
use crate::state::AppState;
use crate::web::page::PageView;

/// 302 to `location`, setting `cookies` on the way.
pub(crate) fn redirect(location: &str, cookies: Vec<Cookie<'static>>) -> HttpResponse {
  let mut response = HttpResponse::Found();
  response.insert_header((header::LOCATION, location));
  for cookie in cookies {
    response.cookie(cookie);
  }
  response.finish()
}

pub(crate) fn render_html(app_state: &AppState, template: &str, view: PageView) -> Result<HttpResponse> {
  let body = app_state.renderer.render(template, &view.into_context())?;
  Ok(
    HttpResponse::Ok()
      .content_type("text/html; charset=utf-8")
      .body(body),
  )
}
