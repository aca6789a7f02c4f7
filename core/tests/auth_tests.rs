// tests/auth_tests.rs
mod common;

use common::*;
use ticketapp_core::auth::is_valid_email;
use ticketapp_core::{
  authenticate, check_login_fields, check_signup, new_user, password, register, verify_credentials, LoginForm,
  SignupForm, UserMap, INVALID_CREDENTIALS,
};

fn login(email: &str, pass: &str) -> LoginForm {
  LoginForm {
    email: Some(email.to_string()),
    password: Some(pass.to_string()),
  }
}

fn signup(name: &str, email: &str, pass: &str, confirm: &str) -> SignupForm {
  SignupForm {
    name: Some(name.to_string()),
    email: Some(email.to_string()),
    password: Some(pass.to_string()),
    confirm_password: Some(confirm.to_string()),
  }
}

#[test]
fn test_login_with_correct_password_returns_stripped_user() {
  setup_tracing();
  let users = users_with("jane@example.com", "Jane", "hunter22");

  let user = authenticate(&users, &login("jane@example.com", "hunter22"))
    .expect("no internal error")
    .expect("credentials accepted");

  assert_eq!(user.email, "jane@example.com");
  assert_eq!(user.name, "Jane");
  let as_json = serde_json::to_value(&user).unwrap();
  assert!(as_json.get("passwordHash").is_none());
  assert!(as_json.get("password").is_none());
}

#[test]
fn test_login_collects_every_missing_field() {
  setup_tracing();
  let users = UserMap::new();

  let errors = authenticate(&users, &LoginForm::default()).unwrap().unwrap_err();

  assert_eq!(errors, vec!["Email is required", "Password is required"]);
}

#[test]
fn test_login_with_wrong_password_or_unknown_email_is_rejected() {
  setup_tracing();
  let users = users_with("jane@example.com", "Jane", "hunter22");

  let wrong_password = authenticate(&users, &login("jane@example.com", "nope-nope")).unwrap();
  let unknown_email = authenticate(&users, &login("ghost@example.com", "hunter22")).unwrap();

  assert_eq!(wrong_password.unwrap_err(), vec!["Invalid email or password"]);
  assert_eq!(unknown_email.unwrap_err(), vec!["Invalid email or password"]);
}

#[test]
fn test_signup_builds_user_with_next_id_and_hashed_password() {
  setup_tracing();
  let users = users_with("jane@example.com", "Jane", "hunter22");

  let user = register(&users, &signup("Bob", "bob@example.com", "secret1", "secret1"))
    .unwrap()
    .expect("signup accepted");

  assert_eq!(user.id, 2);
  assert_eq!(user.name, "Bob");
  assert_ne!(user.password_hash, "secret1");
  assert!(password::verify_password(&user.password_hash, "secret1").unwrap());
}

#[test]
fn test_signup_rejects_short_password() {
  setup_tracing();
  let errors = register(&UserMap::new(), &signup("A", "a@x.com", "short", "short"))
    .unwrap()
    .unwrap_err();

  assert_eq!(errors, vec!["Password must be at least 6 characters"]);
}

#[test]
fn test_signup_rejects_existing_email() {
  setup_tracing();
  let users = users_with("jane@example.com", "Jane", "hunter22");

  let errors = register(&users, &signup("Jane Again", "jane@example.com", "secret1", "secret1"))
    .unwrap()
    .unwrap_err();

  assert_eq!(errors, vec!["Email already exists"]);
}

#[test]
fn test_signup_reports_all_failures_together() {
  setup_tracing();
  let form = SignupForm {
    name: Some(String::new()),
    email: Some("not-an-email".to_string()),
    password: Some("secret1".to_string()),
    confirm_password: Some("secret2".to_string()),
  };

  let errors = register(&UserMap::new(), &form).unwrap().unwrap_err();

  assert_eq!(
    errors,
    vec![
      "Name is required",
      "Please enter a valid email address",
      "Passwords do not match"
    ]
  );
}

#[test]
fn test_signup_with_nothing_filled_in() {
  setup_tracing();
  let errors = register(&UserMap::new(), &SignupForm::default()).unwrap().unwrap_err();

  assert_eq!(
    errors,
    vec![
      "Name is required",
      "Email is required",
      "Password is required",
      "Please confirm your password"
    ]
  );
}

#[test]
fn test_email_syntax() {
  assert!(is_valid_email("a@x.com"));
  assert!(is_valid_email("first.last+tag@mail.example.org"));
  assert!(!is_valid_email("plainaddress"));
  assert!(!is_valid_email("@x.com"));
  assert!(!is_valid_email("a@x"));
  assert!(!is_valid_email("a@@x.com"));
  assert!(!is_valid_email("a b@x.com"));
  assert!(!is_valid_email("a@-x.com"));
  assert!(!is_valid_email(".a@x.com"));
}

#[test]
fn test_step_level_login_checks() {
  setup_tracing();
  let users = users_with("jane@example.com", "Jane", "hunter22");

  assert!(check_login_fields(&login("jane@example.com", "x")).is_empty());
  let only_email = LoginForm {
    email: Some("jane@example.com".to_string()),
    password: Some(String::new()),
  };
  assert_eq!(check_login_fields(&only_email), vec!["Password is required"]);
  assert_eq!(only_email.credentials(), None);

  let accepted = verify_credentials(&users, "jane@example.com", "hunter22").unwrap();
  assert_eq!(accepted.map(|u| u.id), Some(1));
  assert!(verify_credentials(&users, "jane@example.com", "wrong-one").unwrap().is_none());
  assert_eq!(INVALID_CREDENTIALS, "Invalid email or password");
}

#[test]
fn test_step_level_signup_checks() {
  setup_tracing();
  let users = users_with("jane@example.com", "Jane", "hunter22");

  assert!(check_signup(&users, &signup("Bob", "bob@example.com", "secret1", "secret1")).is_empty());
  assert_eq!(
    check_signup(&users, &signup("Bob", "jane@example.com", "secret1", "secret1")),
    vec!["Email already exists"]
  );

  let user = new_user(&users, "Bob", "bob@example.com", "secret1").unwrap();
  assert_eq!(user.id, 2);
  assert!(password::verify_password(&user.password_hash, "secret1").unwrap());
}
