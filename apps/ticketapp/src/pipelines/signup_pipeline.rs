// apps/ticketapp/src/pipelines/signup_pipeline.rs

use crate::errors::{AppError, Result as AppResult};
use crate::pipelines::common_steps;
use crate::pipelines::contexts::SignupCtxData;
use actix_web::web;
use orka::{ContextData, Orka, Pipeline, PipelineControl};
use std::sync::Arc;
use ticketapp_core::{auth, CoreResult, User};
use tracing::{event, info, instrument, warn, Level};

/// Registers the sign-up pipeline with the Orka registry.
pub fn register_signup_pipeline(orka_instance: &Arc<Orka<AppError>>) {
  let mut signup_p = Pipeline::<SignupCtxData, AppError>::new(&[
    ("load_users", false, None),
    ("validate_signup_input", false, None),
    ("hash_password_signup", false, None),
    ("persist_user", false, None),
  ]);

  signup_p.on_root("load_users", load_users);
  signup_p.on_root("validate_signup_input", validate_signup_input);
  signup_p.on_root("hash_password_signup", hash_password_signup);
  signup_p.on_root("persist_user", persist_user);

  orka_instance.register_pipeline(signup_p);
  info!("Signup pipeline registered.");
}

async fn load_users(ctx_data: ContextData<SignupCtxData>) -> AppResult<PipelineControl> {
  let repo = ctx_data.read().users_repo.clone();
  let users = common_steps::load_users(repo).await?;
  ctx_data.write().users = users;
  Ok(PipelineControl::Continue)
}

/// Stops the run with every failed rule recorded on the context.
async fn validate_signup_input(ctx_data: ContextData<SignupCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let errors = auth::check_signup(&guard.users, &guard.form);
  if errors.is_empty() {
    return Ok(PipelineControl::Continue);
  }
  warn!(error_count = errors.len(), "Signup input rejected.");
  guard.errors = errors;
  Ok(PipelineControl::Stop)
}

#[instrument(name = "signup_step::hash_password", skip_all, err)]
async fn hash_password_signup(ctx_data: ContextData<SignupCtxData>) -> AppResult<PipelineControl> {
  let (users, fields) = {
    let guard = ctx_data.read();
    let fields = guard
      .form
      .account_fields()
      .map(|(name, email, pass)| (name.to_string(), email.to_string(), pass.to_string()));
    (guard.users.clone(), fields)
  };
  let Some((name, email, pass)) = fields else {
    return Err(AppError::Internal("Signup reached hashing with incomplete fields".to_string()));
  };

  let user = web::block(move || -> CoreResult<User> { auth::new_user(&users, &name, &email, &pass) }).await??;
  event!(Level::DEBUG, user_id = user.id, "Password hashed for new user.");
  ctx_data.write().new_user = Some(user);
  Ok(PipelineControl::Continue)
}

async fn persist_user(ctx_data: ContextData<SignupCtxData>) -> AppResult<PipelineControl> {
  let (repo, users) = {
    let mut guard = ctx_data.write();
    let Some(user) = guard.new_user.clone() else {
      return Err(AppError::Internal("No user built before persist_user".to_string()));
    };
    guard.users.insert(user.email.clone(), user);
    (guard.users_repo.clone(), guard.users.clone())
  };
  common_steps::save_users(repo, users).await?;
  info!("User registered.");
  Ok(PipelineControl::Continue)
}
