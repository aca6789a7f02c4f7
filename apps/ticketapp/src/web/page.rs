// apps/ticketapp/src/web/page.rs

//! Builds the data every page template receives.

use actix_web::{web, HttpRequest};
use serde::Serialize;
use std::collections::BTreeMap;
use ticketapp_core::{SessionUser, Ticket, TicketStatus};

#[derive(Debug, Serialize)]
struct RequestView {
  path: String,
  method: String,
  query: BTreeMap<String, String>,
}

#[derive(Debug, Default, Serialize)]
struct TicketStats {
  total: usize,
  open: usize,
  in_progress: usize,
  closed: usize,
}

impl TicketStats {
  fn count(tickets: &[Ticket]) -> Self {
    let with = |status: TicketStatus| tickets.iter().filter(|t| t.status == status).count();
    TicketStats {
      total: tickets.len(),
      open: with(TicketStatus::Open),
      in_progress: with(TicketStatus::InProgress),
      closed: with(TicketStatus::Closed),
    }
  }
}

/// Echoed form values for re-rendered forms. Passwords are never echoed.
#[derive(Debug, Default, Serialize)]
struct FormEcho {
  name: String,
  email: String,
}

/// Template context under construction.
pub struct PageView {
  ctx: tera::Context,
  form: FormEcho,
}

impl PageView {
  pub fn new(req: &HttpRequest, user: Option<&SessionUser>, tickets: &[Ticket]) -> Self {
    let query = web::Query::<BTreeMap<String, String>>::from_query(req.query_string())
      .map(web::Query::into_inner)
      .unwrap_or_default();
    let success = query.get("success").is_some_and(|v| v == "1");

    let request = RequestView {
      path: req.path().to_string(),
      method: req.method().to_string(),
      query,
    };

    let mut ctx = tera::Context::new();
    ctx.insert("user", &user);
    ctx.insert("tickets", tickets);
    ctx.insert("stats", &TicketStats::count(tickets));
    ctx.insert("current_path", req.path());
    ctx.insert("request", &request);
    ctx.insert("success", &success);
    ctx.insert("errors", &Vec::<String>::new());

    PageView {
      ctx,
      form: FormEcho::default(),
    }
  }

  pub fn with_errors(mut self, errors: &[String]) -> Self {
    self.ctx.insert("errors", errors);
    self
  }

  pub fn with_name(mut self, name: Option<&str>) -> Self {
    self.form.name = name.unwrap_or_default().to_string();
    self
  }

  pub fn with_email(mut self, email: Option<&str>) -> Self {
    self.form.email = email.unwrap_or_default().to_string();
    self
  }

  pub fn into_context(mut self) -> tera::Context {
    self.ctx.insert("form", &self.form);
    self.ctx
  }
}
