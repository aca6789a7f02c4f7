// core/src/users/repository.rs

//! Defines the `UserRepository` trait that request handling is given instead of a global user table.

use super::model::UserMap;
use crate::error::CoreResult;

/// Whole-map persistence for users.
///
/// Callers `load` the full mapping, modify it in memory and `save` it back wholesale.
/// Implementations do not coordinate concurrent writers: the last `save` wins.
pub trait UserRepository: Send + Sync {
  fn load(&self) -> CoreResult<UserMap>;

  fn save(&self, users: &UserMap) -> CoreResult<()>;
}
