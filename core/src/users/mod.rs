// core/src/users/mod.rs

//! User records, the repository seam, and its file / memory implementations.

pub mod model;
pub mod repository;
pub mod store;

pub use model::{SessionUser, User, UserMap};
pub use repository::UserRepository;
pub use store::{InMemoryUserStore, JsonFileUserStore};
