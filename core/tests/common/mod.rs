// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::NaiveDate;
use ticketapp_core::{password, Ticket, TicketForm, TicketStatus, User, UserMap};
use tracing::Level;

// --- Fixtures ---

pub fn ticket(id: &str, title: &str, status: TicketStatus) -> Ticket {
  Ticket {
    id: id.to_string(),
    title: title.to_string(),
    description: String::new(),
    status,
    priority: "medium".to_string(),
    created_at: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
  }
}

pub fn ticket_form(action: &str, id: Option<&str>, title: &str, status: &str) -> TicketForm {
  TicketForm {
    action: Some(action.to_string()),
    id: id.map(str::to_string),
    title: Some(title.to_string()),
    description: None,
    status: Some(status.to_string()),
    priority: None,
  }
}

/// A user map holding one account with a real Argon2 hash.
pub fn users_with(email: &str, name: &str, plain_password: &str) -> UserMap {
  let mut users = UserMap::new();
  users.insert(
    email.to_string(),
    User {
      id: 1,
      name: name.to_string(),
      email: email.to_string(),
      password_hash: password::hash_password(plain_password).expect("hashing works"),
    },
  );
  users
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
