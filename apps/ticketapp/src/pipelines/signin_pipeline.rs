// apps/ticketapp/src/pipelines/signin_pipeline.rs

use crate::errors::{AppError, Result as AppResult};
use crate::pipelines::common_steps;
use crate::pipelines::contexts::SigninCtxData;
use actix_web::web;
use orka::{ContextData, Orka, Pipeline, PipelineControl};
use std::sync::Arc;
use ticketapp_core::{auth, CoreResult, SessionUser};
use tracing::{info, instrument, warn};

/// Registers the sign-in pipeline with the Orka registry.
pub fn register_signin_pipeline(orka_instance: &Arc<Orka<AppError>>) {
  let mut signin_p = Pipeline::<SigninCtxData, AppError>::new(&[
    ("validate_signin_input", false, None),
    ("load_users", false, None),
    ("verify_credentials", false, None),
  ]);

  signin_p.on_root("validate_signin_input", validate_signin_input);
  signin_p.on_root("load_users", load_users);
  signin_p.on_root("verify_credentials", verify_credentials);

  orka_instance.register_pipeline(signin_p);
  info!("Signin pipeline registered.");
}

/// Missing fields stop the run before the user file is read.
async fn validate_signin_input(ctx_data: ContextData<SigninCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let errors = auth::check_login_fields(&guard.form);
  if errors.is_empty() {
    return Ok(PipelineControl::Continue);
  }
  guard.errors = errors;
  Ok(PipelineControl::Stop)
}

async fn load_users(ctx_data: ContextData<SigninCtxData>) -> AppResult<PipelineControl> {
  let repo = ctx_data.read().users_repo.clone();
  let users = common_steps::load_users(repo).await?;
  ctx_data.write().users = users;
  Ok(PipelineControl::Continue)
}

#[instrument(name = "signin_step::verify_credentials", skip_all, err)]
async fn verify_credentials(ctx_data: ContextData<SigninCtxData>) -> AppResult<PipelineControl> {
  let (users, credentials) = {
    let guard = ctx_data.read();
    let credentials = guard
      .form
      .credentials()
      .map(|(email, pass)| (email.to_string(), pass.to_string()));
    (guard.users.clone(), credentials)
  };
  let Some((email, pass)) = credentials else {
    return Err(AppError::Internal("Signin reached verification with incomplete fields".to_string()));
  };

  let matched =
    web::block(move || -> CoreResult<Option<SessionUser>> { auth::verify_credentials(&users, &email, &pass) }).await??;

  let mut guard = ctx_data.write();
  match matched {
    Some(user) => {
      guard.user = Some(user);
      Ok(PipelineControl::Continue)
    }
    None => {
      warn!("Signin rejected.");
      guard.errors = vec![auth::INVALID_CREDENTIALS.to_string()];
      Ok(PipelineControl::Stop)
    }
  }
}
