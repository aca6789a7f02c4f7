// core/src/tickets/action.rs

//! The three ticket mutations and the validation they share.

use super::model::{Ticket, TicketStatus, DEFAULT_PRIORITY};
use crate::auth::ValidationErrors;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Raw `/tickets` form submission; every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketForm {
  pub action: Option<String>,
  pub id: Option<String>,
  pub title: Option<String>,
  pub description: Option<String>,
  pub status: Option<String>,
  pub priority: Option<String>,
}

/// Validated field values for a create or an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
  pub title: String,
  pub description: String,
  pub status: TicketStatus,
  pub priority: String,
}

impl TicketDraft {
  /// Title must be present; status must be present and one of the known values.
  /// Description defaults to empty and priority to [`DEFAULT_PRIORITY`].
  pub fn validate(form: &TicketForm) -> Result<Self, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = form.title.as_deref().filter(|t| !t.is_empty());
    if title.is_none() {
      errors.push("Title is required".to_string());
    }

    let status = match form.status.as_deref().filter(|s| !s.is_empty()) {
      None => {
        errors.push("Status is required".to_string());
        None
      }
      Some(raw) => match raw.parse::<TicketStatus>() {
        Ok(status) => Some(status),
        Err(_) => {
          errors.push("Invalid status value".to_string());
          None
        }
      },
    };

    match (title, status) {
      (Some(title), Some(status)) if errors.is_empty() => Ok(TicketDraft {
        title: title.to_string(),
        description: form.description.clone().unwrap_or_default(),
        status,
        priority: form
          .priority
          .clone()
          .filter(|p| !p.is_empty())
          .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
      }),
      _ => Err(errors),
    }
  }

  fn into_ticket(self, id: String, created_at: NaiveDate) -> Ticket {
    Ticket {
      id,
      title: self.title,
      description: self.description,
      status: self.status,
      priority: self.priority,
      created_at,
    }
  }
}

/// What a POST to `/tickets` asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketAction {
  Create(TicketDraft),
  Update { id: String, draft: TicketDraft },
  Delete { id: String },
}

impl TicketAction {
  /// Reads the `action` field and validates what that action needs.
  ///
  /// `Ok(None)` means no recognised action was submitted.
  pub fn from_form(form: &TicketForm) -> Result<Option<Self>, ValidationErrors> {
    let id = || form.id.clone().unwrap_or_default();
    match form.action.as_deref() {
      Some("create_ticket") => TicketDraft::validate(form).map(|d| Some(TicketAction::Create(d))),
      Some("update_ticket") => TicketDraft::validate(form).map(|draft| Some(TicketAction::Update { id: id(), draft })),
      Some("delete_ticket") => Ok(Some(TicketAction::Delete { id: id() })),
      _ => Ok(None),
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      TicketAction::Create(_) => "create_ticket",
      TicketAction::Update { .. } => "update_ticket",
      TicketAction::Delete { .. } => "delete_ticket",
    }
  }

  /// Applies the action to an already deduplicated list, dated today.
  pub fn apply(self, tickets: Vec<Ticket>) -> Vec<Ticket> {
    self.apply_on(tickets, Utc::now().date_naive())
  }

  /// [`TicketAction::apply`] with an explicit creation date.
  ///
  /// Update touches the first ticket with the id and is a no-op when there is none.
  /// Delete removes every ticket with the id.
  #[instrument(name = "TicketAction::apply", skip(self, tickets), fields(action = self.name(), count = tickets.len()))]
  pub fn apply_on(self, mut tickets: Vec<Ticket>, today: NaiveDate) -> Vec<Ticket> {
    match self {
      TicketAction::Create(draft) => {
        let ticket = draft.into_ticket(generate_ticket_id(), today);
        debug!(ticket_id = %ticket.id, "Ticket created.");
        tickets.push(ticket);
      }
      TicketAction::Update { id, draft } => match tickets.iter_mut().find(|t| t.id == id) {
        Some(ticket) => {
          *ticket = draft.into_ticket(id, ticket.created_at);
          debug!(ticket_id = %ticket.id, "Ticket updated.");
        }
        None => debug!(ticket_id = %id, "No ticket to update."),
      },
      TicketAction::Delete { id } => {
        let before = tickets.len();
        tickets.retain(|t| t.id != id);
        debug!(ticket_id = %id, removed = before - tickets.len(), "Tickets deleted.");
      }
    }
    tickets
  }
}

/// Fresh ticket id: a v4 UUID without hyphens.
pub fn generate_ticket_id() -> String {
  Uuid::new_v4().simple().to_string()
}
