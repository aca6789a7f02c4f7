// core/src/tickets/model.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PRIORITY: &str = "medium";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
  Open,
  InProgress,
  Closed,
}

impl TicketStatus {
  pub const ALL: [TicketStatus; 3] = [TicketStatus::Open, TicketStatus::InProgress, TicketStatus::Closed];

  pub fn as_str(&self) -> &'static str {
    match self {
      TicketStatus::Open => "open",
      TicketStatus::InProgress => "in_progress",
      TicketStatus::Closed => "closed",
    }
  }
}

impl fmt::Display for TicketStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ticket status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for TicketStatus {
  type Err = UnknownStatus;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    TicketStatus::ALL
      .into_iter()
      .find(|status| status.as_str() == s)
      .ok_or_else(|| UnknownStatus(s.to_string()))
  }
}

fn default_priority() -> String {
  DEFAULT_PRIORITY.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub description: String,
  pub status: TicketStatus,
  #[serde(default = "default_priority")]
  pub priority: String,
  pub created_at: NaiveDate,
}
