// apps/ticketapp/src/lib.rs

//! ticketapp: a small server-rendered support desk.
//!
//! Users sign up and log in against a JSON user file; the session lives on the server,
//! keyed by a cookie; tickets live in the browser, one cookie per user, and are rebuilt
//! from that cookie on every request.

pub mod config;
pub mod errors;
pub mod pipelines;
pub mod state;
pub mod web;
