// apps/ticketapp/src/pipelines/contexts.rs

//! Context data for the pipelines; handlers receive these wrapped in `orka::ContextData`.

use std::sync::Arc;
use ticketapp_core::{LoginForm, SessionUser, SignupForm, User, UserMap, UserRepository, ValidationErrors};

pub struct SignupCtxData {
  pub users_repo: Arc<dyn UserRepository>,
  pub form: SignupForm,
  /// Filled by `load_users`.
  pub users: UserMap,
  /// Non-empty when the run stopped on validation.
  pub errors: ValidationErrors,
  pub new_user: Option<User>,
}

impl SignupCtxData {
  pub fn new(users_repo: Arc<dyn UserRepository>, form: SignupForm) -> Self {
    Self {
      users_repo,
      form,
      users: UserMap::new(),
      errors: ValidationErrors::new(),
      new_user: None,
    }
  }
}

pub struct SigninCtxData {
  pub users_repo: Arc<dyn UserRepository>,
  pub form: LoginForm,
  pub users: UserMap,
  pub errors: ValidationErrors,
  /// The signed-in user once credentials check out.
  pub user: Option<SessionUser>,
}

impl SigninCtxData {
  pub fn new(users_repo: Arc<dyn UserRepository>, form: LoginForm) -> Self {
    Self {
      users_repo,
      form,
      users: UserMap::new(),
      errors: ValidationErrors::new(),
      user: None,
    }
  }
}
