// core/src/tickets/mod.rs

//! Tickets owned by the browser.
//!
//! The server never stores tickets. Each request decodes the list from a cookie value,
//! runs the dedup pass, optionally applies one action, and re-encodes the whole list.

pub mod action;
pub mod codec;
pub mod model;

pub use action::{TicketAction, TicketDraft, TicketForm};
pub use codec::{cookie_name_for, decode, dedup, encode, LEGACY_COOKIE_NAME};
pub use model::{Ticket, TicketStatus, DEFAULT_PRIORITY};
