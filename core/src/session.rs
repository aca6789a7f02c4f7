// core/src/session.rs

//! Server-side sessions: an opaque random token maps to at most one signed-in user.

use crate::users::model::SessionUser;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use rand_core::{OsRng, RngCore};
use std::collections::HashMap;
use tracing::{debug, event, Level};

/// Number of random bytes behind every token; hex encoding doubles the length.
pub const TOKEN_BYTES: usize = 32;

/// 32 bytes from the OS RNG, lowercase hex.
pub fn generate_token() -> String {
  let mut bytes = [0u8; TOKEN_BYTES];
  OsRng.fill_bytes(&mut bytes);
  hex::encode(bytes)
}

#[derive(Debug, Clone)]
struct SessionEntry {
  user: SessionUser,
  expires_at: DateTime<Utc>,
}

/// Shared, in-process session table.
///
/// Lock guards are never held across an `.await`; every method takes and releases
/// the lock internally.
#[derive(Debug)]
pub struct SessionStore {
  entries: RwLock<HashMap<String, SessionEntry>>,
  ttl: Duration,
}

impl SessionStore {
  pub fn new(ttl: Duration) -> Self {
    Self {
      entries: RwLock::new(HashMap::new()),
      ttl,
    }
  }

  pub fn ttl(&self) -> Duration {
    self.ttl
  }

  /// Starts a new session for `user` and returns its id.
  pub fn create(&self, user: SessionUser) -> String {
    let sid = generate_token();
    let expires_at = Utc::now() + self.ttl;
    event!(Level::DEBUG, user_id = user.id, %expires_at, "Session created.");
    self.entries.write().insert(sid.clone(), SessionEntry { user, expires_at });
    sid
  }

  /// The user behind `sid`, if the session exists and has not expired.
  /// Expired sessions are dropped on the way out.
  pub fn get(&self, sid: &str) -> Option<SessionUser> {
    let now = Utc::now();
    {
      let guard = self.entries.read();
      match guard.get(sid) {
        Some(entry) if entry.expires_at > now => return Some(entry.user.clone()),
        Some(_) => {}
        None => return None,
      }
    }
    debug!("Session expired, evicting.");
    self.entries.write().remove(sid);
    None
  }

  pub fn remove(&self, sid: &str) -> bool {
    self.entries.write().remove(sid).is_some()
  }

  /// Drops every expired session and returns how many were removed.
  pub fn purge_expired(&self) -> usize {
    let now = Utc::now();
    let mut guard = self.entries.write();
    let before = guard.len();
    guard.retain(|_, entry| entry.expires_at > now);
    before - guard.len()
  }

  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for SessionStore {
  fn default() -> Self {
    Self::new(Duration::days(30))
  }
}
