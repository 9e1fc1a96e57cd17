//! Project state ownership and change notification.
//!
//! # Responsibility
//! - Hold the single authoritative project sequence for one session.
//! - Fan out defensive snapshots to subscribed listeners on every change.
//!
//! # Invariants
//! - All mutation goes through [`project_store::ProjectStore`]; listeners
//!   and views only ever see clones.

pub mod project_store;
