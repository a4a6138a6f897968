//! Request guards and session plumbing.
//!
//! `AuthGuard` resolves the session to a user row and enforces role
//! requirements at the top of each protected handler. `AuthSession` is the
//! typed wrapper around the tower-sessions `Session` that owns the
//! authentication key.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
