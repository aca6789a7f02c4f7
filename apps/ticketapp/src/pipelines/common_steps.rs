// apps/ticketapp/src/pipelines/common_steps.rs

//! Blocking user-store access shared by the account pipelines.

use crate::errors::Result as AppResult;
use actix_web::web;
use std::sync::Arc;
use ticketapp_core::{CoreResult, UserMap, UserRepository};
use tracing::instrument;

/// Reads the whole user map on the blocking pool.
#[instrument(name = "common_step::load_users", skip_all, err)]
pub async fn load_users(users_repo: Arc<dyn UserRepository>) -> AppResult<UserMap> {
  let users = web::block(move || -> CoreResult<UserMap> { users_repo.load() }).await??;
  Ok(users)
}

#[instrument(name = "common_step::save_users", skip_all, fields(user_count = users.len()), err)]
pub async fn save_users(users_repo: Arc<dyn UserRepository>, users: UserMap) -> AppResult<()> {
  web::block(move || -> CoreResult<()> { users_repo.save(&users) }).await??;
  Ok(())
}
