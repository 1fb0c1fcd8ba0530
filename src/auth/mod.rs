// src/auth/mod.rs
// Sign-in pass-through: client-supplied identity claims, kept in memory only

pub mod store;

pub use store::{IdentityClaims, User, UserStore};
