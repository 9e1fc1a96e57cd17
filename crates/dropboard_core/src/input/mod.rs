//! User input collection and validation at the form boundary.
//!
//! # Responsibility
//! - Validate raw field values before anything reaches the store.
//! - Keep user-facing rejection messages in one place.
//!
//! # Invariants
//! - The store is never called with input that failed validation.

pub mod project_form;
pub mod validation;
