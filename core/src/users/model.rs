// core/src/users/model.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All registered users keyed by email address.
pub type UserMap = BTreeMap<String, User>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: u64,
  pub name: String,
  pub email: String,
  pub password_hash: String,
}

/// The part of a [`User`] that is allowed to live in a session or reach a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
  pub id: u64,
  pub name: String,
  pub email: String,
}

impl From<&User> for SessionUser {
  fn from(user: &User) -> Self {
    SessionUser {
      id: user.id,
      name: user.name.clone(),
      email: user.email.clone(),
    }
  }
}

/// Id for the next registered user: one past the highest id in use.
pub fn next_user_id(users: &UserMap) -> u64 {
  users.values().map(|u| u.id).max().unwrap_or(0) + 1
}
