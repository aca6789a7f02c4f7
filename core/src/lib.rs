// src/lib.rs

//! ticketapp_core: the framework-free half of the ticketapp support desk.
//!
//! Everything here is plain data and pure-ish functions so the web layer can stay thin:
//!  - A user repository interface with a JSON-file implementation (seeded with a demo account).
//!  - Argon2 password hashing and verification.
//!  - Login / signup validation that collects every error instead of stopping at the first.
//!  - A server-side session store keyed by opaque random tokens.
//!  - Tickets owned by the client: a cookie-safe codec, the first-seen-by-id dedup pass,
//!    and the create / update / delete actions applied to a decoded list.

pub mod auth;
pub mod error;
pub mod password;
pub mod session;
pub mod tickets;
pub mod users;

// --- Re-exports for the Public API ---

pub use crate::auth::{
  authenticate, check_login_fields, check_signup, new_user, register, verify_credentials, LoginForm, SignupForm,
  ValidationErrors, INVALID_CREDENTIALS,
};
pub use crate::error::{CoreError, CoreResult};
pub use crate::session::{generate_token, SessionStore};
pub use crate::tickets::action::{TicketAction, TicketDraft, TicketForm};
pub use crate::tickets::codec::{cookie_name_for, decode, dedup, encode, LEGACY_COOKIE_NAME};
pub use crate::tickets::model::{Ticket, TicketStatus};
pub use crate::users::model::{SessionUser, User, UserMap};
pub use crate::users::repository::UserRepository;
pub use crate::users::store::{
  InMemoryUserStore, JsonFileUserStore, DEMO_USER_EMAIL, DEMO_USER_NAME, DEMO_USER_PASSWORD,
};
