//! Domain model for the project board.
//!
//! # Responsibility
//! - Define the canonical project record shared by the store and all views.
//! - Keep the status vocabulary in one place for filtering and CLI parsing.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - `status` is always one of the two defined board columns.

pub mod project;
