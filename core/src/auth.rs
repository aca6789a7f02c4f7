// core/src/auth.rs

//! Login and signup validation.
//!
//! Every rule is evaluated on its own and failures are collected into a list of
//! human-readable messages, so a form can be re-rendered with all of them at once.
//! Nothing here touches storage; callers load the [`UserMap`] and persist the result.

use crate::error::CoreResult;
use crate::password;
use crate::users::model::{next_user_id, SessionUser, User, UserMap};
use serde::Deserialize;
use tracing::{info, instrument, warn};

pub const MIN_PASSWORD_CHARS: usize = 6;

/// Validation messages in the order the rules were checked.
pub type ValidationErrors = Vec<String>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
  pub email: Option<String>,
  pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
  pub name: Option<String>,
  pub email: Option<String>,
  pub password: Option<String>,
  pub confirm_password: Option<String>,
}

/// A missing field and an empty one are the same thing to the forms.
fn filled(field: &Option<String>) -> Option<&str> {
  field.as_deref().filter(|v| !v.is_empty())
}

impl LoginForm {
  /// Email and password, when both are filled in.
  pub fn credentials(&self) -> Option<(&str, &str)> {
    Some((filled(&self.email)?, filled(&self.password)?))
  }
}

impl SignupForm {
  /// Name, email and password, when all three are filled in.
  pub fn account_fields(&self) -> Option<(&str, &str, &str)> {
    Some((filled(&self.name)?, filled(&self.email)?, filled(&self.password)?))
  }
}

/// Syntactic address check: one `@`, a non-empty local part, and a dotted domain
/// whose labels are non-empty and made of letters, digits and hyphens.
pub fn is_valid_email(email: &str) -> bool {
  if email.len() > 254 || email.chars().any(|c| c.is_whitespace() || c.is_control()) {
    return false;
  }
  let Some((local, domain)) = email.split_once('@') else {
    return false;
  };
  if local.is_empty() || local.len() > 64 || domain.contains('@') {
    return false;
  }
  if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
    return false;
  }
  let local_ok = local
    .chars()
    .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(c));

  let labels: Vec<&str> = domain.split('.').collect();
  let domain_ok = labels.len() >= 2
    && labels.iter().all(|label| {
      !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

  local_ok && domain_ok
}

/// Shown for both an unknown address and a wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Presence checks on a login submission. Empty when both fields are filled.
pub fn check_login_fields(form: &LoginForm) -> ValidationErrors {
  let mut errors = ValidationErrors::new();
  if filled(&form.email).is_none() {
    errors.push("Email is required".to_string());
  }
  if filled(&form.password).is_none() {
    errors.push("Password is required".to_string());
  }
  errors
}

/// Looks the address up and verifies the password against its hash.
///
/// `None` covers both an unknown address and a wrong password.
#[instrument(name = "auth::verify_credentials", skip(users, pass))]
pub fn verify_credentials(users: &UserMap, email: &str, pass: &str) -> CoreResult<Option<SessionUser>> {
  let matched = match users.get(email) {
    Some(user) => password::verify_password(&user.password_hash, pass)?.then_some(user),
    None => None,
  };
  match matched {
    Some(user) => {
      info!(user_id = user.id, "Credentials accepted.");
      Ok(Some(SessionUser::from(user)))
    }
    None => {
      warn!("Credentials rejected.");
      Ok(None)
    }
  }
}

/// Checks a login submission against the known users.
///
/// On success returns the password-stripped user that belongs in the session.
#[instrument(name = "auth::authenticate", skip(users, form), fields(email = ?form.email))]
pub fn authenticate(users: &UserMap, form: &LoginForm) -> CoreResult<Result<SessionUser, ValidationErrors>> {
  let errors = check_login_fields(form);
  if !errors.is_empty() {
    return Ok(Err(errors));
  }
  let Some((email, pass)) = form.credentials() else {
    return Ok(Err(errors));
  };
  Ok(verify_credentials(users, email, pass)?.ok_or_else(|| vec![INVALID_CREDENTIALS.to_string()]))
}

/// Every signup rule, checked against the current users. Empty means the form is acceptable.
pub fn check_signup(users: &UserMap, form: &SignupForm) -> ValidationErrors {
  let mut errors = ValidationErrors::new();
  let email = filled(&form.email);
  let pass = filled(&form.password);
  let confirm = filled(&form.confirm_password);

  if filled(&form.name).is_none() {
    errors.push("Name is required".to_string());
  }

  match email {
    None => errors.push("Email is required".to_string()),
    Some(e) if !is_valid_email(e) => errors.push("Please enter a valid email address".to_string()),
    Some(e) if users.contains_key(e) => errors.push("Email already exists".to_string()),
    Some(_) => {}
  }

  match pass {
    None => errors.push("Password is required".to_string()),
    Some(p) if p.chars().count() < MIN_PASSWORD_CHARS => {
      errors.push(format!("Password must be at least {} characters", MIN_PASSWORD_CHARS))
    }
    Some(_) => {}
  }

  match confirm {
    None => errors.push("Please confirm your password".to_string()),
    Some(c) if Some(c) != pass => errors.push("Passwords do not match".to_string()),
    Some(_) => {}
  }

  if !errors.is_empty() {
    warn!(error_count = errors.len(), "Signup rejected.");
  }
  errors
}

/// Builds the record for an accepted signup: hashed password, next free id.
pub fn new_user(users: &UserMap, name: &str, email: &str, pass: &str) -> CoreResult<User> {
  let user = User {
    id: next_user_id(users),
    name: name.to_string(),
    email: email.to_string(),
    password_hash: password::hash_password(pass)?,
  };
  info!(user_id = user.id, "Signup accepted.");
  Ok(user)
}

/// Validates a signup submission and, if it passes, builds the new user record.
/// The caller inserts and saves it.
#[instrument(name = "auth::register", skip(users, form), fields(email = ?form.email))]
pub fn register(users: &UserMap, form: &SignupForm) -> CoreResult<Result<User, ValidationErrors>> {
  let errors = check_signup(users, form);
  if !errors.is_empty() {
    return Ok(Err(errors));
  }
  // All three are present once validation passed.
  let Some((name, email, pass)) = form.account_fields() else {
    return Ok(Err(errors));
  };
  Ok(Ok(new_user(users, name, email, pass)?))
}
