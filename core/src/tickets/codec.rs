// core/src/tickets/codec.rs

//! Client-state codec: a ticket list <-> one opaque, cookie-safe string.

use super::model::Ticket;
use crate::error::CoreResult;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Generic ticket cookie, consulted only when the per-user one is absent.
pub const LEGACY_COOKIE_NAME: &str = "ticketapp_tickets";

/// Per-user cookie name: the legacy name plus the hex SHA-256 of the email.
pub fn cookie_name_for(email: &str) -> String {
  let digest = Sha256::digest(email.as_bytes());
  format!("{}_{}", LEGACY_COOKIE_NAME, hex::encode(digest))
}

/// Serializes the whole list to JSON and wraps it in URL-safe base64.
pub fn encode(tickets: &[Ticket]) -> CoreResult<String> {
  let json = serde_json::to_vec(tickets)?;
  Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Inverse of [`encode`]. A bare JSON array is accepted as well.
///
/// A value that is not a JSON array at all yields an empty list; inside an array,
/// elements that are not valid tickets are dropped and the rest are kept.
pub fn decode(value: &str) -> Vec<Ticket> {
  let value = value.trim();
  if value.is_empty() {
    return Vec::new();
  }

  let json = if value.starts_with('[') {
    value.as_bytes().to_vec()
  } else {
    match URL_SAFE_NO_PAD.decode(value) {
      Ok(bytes) => bytes,
      Err(e) => {
        warn!(error = %e, "Ticket cookie is not valid base64, ignoring it.");
        return Vec::new();
      }
    }
  };

  let elements = match serde_json::from_slice::<Vec<serde_json::Value>>(&json) {
    Ok(elements) => elements,
    Err(e) => {
      warn!(error = %e, "Ticket cookie is not a JSON array, ignoring it.");
      return Vec::new();
    }
  };

  let total = elements.len();
  let tickets: Vec<Ticket> = elements
    .into_iter()
    .enumerate()
    .filter_map(|(index, element)| match serde_json::from_value::<Ticket>(element) {
      Ok(ticket) => Some(ticket),
      Err(e) => {
        warn!(index, error = %e, "Dropping malformed ticket from cookie.");
        None
      }
    })
    .collect();
  debug!(count = tickets.len(), dropped = total - tickets.len(), "Ticket cookie decoded.");
  tickets
}

/// Keeps the first ticket seen for every id, preserving order.
pub fn dedup(tickets: Vec<Ticket>) -> Vec<Ticket> {
  let mut seen = HashSet::with_capacity(tickets.len());
  tickets.into_iter().filter(|t| seen.insert(t.id.clone())).collect()
}
