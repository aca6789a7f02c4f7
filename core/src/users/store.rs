// core/src/users/store.rs

use super::model::{User, UserMap};
use super::repository::UserRepository;
use crate::error::{CoreError, CoreResult};
use crate::password;
use parking_lot::Mutex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

pub const DEMO_USER_EMAIL: &str = "john@example.com";
pub const DEMO_USER_NAME: &str = "John Doe";
pub const DEMO_USER_PASSWORD: &str = "password123";

/// The mapping a fresh installation starts with: a single demo account.
pub fn demo_users() -> CoreResult<UserMap> {
  let mut users = UserMap::new();
  users.insert(
    DEMO_USER_EMAIL.to_string(),
    User {
      id: 1,
      name: DEMO_USER_NAME.to_string(),
      email: DEMO_USER_EMAIL.to_string(),
      password_hash: password::hash_password(DEMO_USER_PASSWORD)?,
    },
  );
  Ok(users)
}

/// Users persisted as one pretty-printed JSON object (email -> user) on disk.
#[derive(Debug, Clone)]
pub struct JsonFileUserStore {
  path: PathBuf,
}

impl JsonFileUserStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn write_file(&self, users: &UserMap) -> CoreResult<()> {
    if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
      fs::create_dir_all(dir).map_err(|e| CoreError::store_io(dir, e))?;
    }
    let body = serde_json::to_string_pretty(users)?;
    fs::write(&self.path, body).map_err(|e| CoreError::store_io(&self.path, e))
  }
}

impl UserRepository for JsonFileUserStore {
  #[instrument(name = "JsonFileUserStore::load", skip(self), fields(path = %self.path.display()), err(Display))]
  fn load(&self) -> CoreResult<UserMap> {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        info!("User file missing, seeding demo account.");
        let users = demo_users()?;
        self.write_file(&users)?;
        return Ok(users);
      }
      Err(e) => return Err(CoreError::store_io(&self.path, e)),
    };

    match serde_json::from_str::<UserMap>(&raw) {
      Ok(users) => {
        debug!(count = users.len(), "Users loaded.");
        Ok(users)
      }
      Err(parse_err) => {
        warn!(error = %parse_err, "User file unreadable, treating as empty.");
        Ok(UserMap::new())
      }
    }
  }

  #[instrument(name = "JsonFileUserStore::save", skip(self, users), fields(path = %self.path.display(), count = users.len()), err(Display))]
  fn save(&self, users: &UserMap) -> CoreResult<()> {
    self.write_file(users)?;
    debug!("Users saved.");
    Ok(())
  }
}

/// Process-local user store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
  users: Mutex<UserMap>,
}

impl InMemoryUserStore {
  pub fn new(users: UserMap) -> Self {
    Self {
      users: Mutex::new(users),
    }
  }

  pub fn with_demo_user() -> CoreResult<Self> {
    Ok(Self::new(demo_users()?))
  }
}

impl UserRepository for InMemoryUserStore {
  fn load(&self) -> CoreResult<UserMap> {
    Ok(self.users.lock().clone())
  }

  fn save(&self, users: &UserMap) -> CoreResult<()> {
    *self.users.lock() = users.clone();
    Ok(())
  }
}
