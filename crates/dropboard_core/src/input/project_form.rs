//! Project creation form.
//!
//! # Responsibility
//! - Buffer raw field input, validate it, and call store creation.
//! - Clear the buffers only after a successful submit.
//!
//! # Invariants
//! - Rejected input never reaches the store and leaves the buffers intact
//!   so the user can correct them.

use crate::input::validation::{validate_people, validate_text, IntRange, TextRules, ValidationError};
use crate::model::project::ProjectId;
use crate::store::project_store::SharedProjectStore;
use log::{debug, info};
use std::rc::Rc;

/// Minimum description length accepted by the form.
pub const DESCRIPTION_MIN_LENGTH: usize = 5;
/// Inclusive headcount bounds accepted by the form.
pub const PEOPLE_MIN: i64 = 1;
pub const PEOPLE_MAX: i64 = 5;

/// Raw-input form bound to the shared store.
pub struct ProjectForm {
    store: SharedProjectStore,
    title_input: String,
    description_input: String,
    people_input: String,
}

impl ProjectForm {
    pub fn new(store: &SharedProjectStore) -> Self {
        Self {
            store: Rc::clone(store),
            title_input: String::new(),
            description_input: String::new(),
            people_input: String::new(),
        }
    }

    pub fn set_title(&mut self, value: &str) {
        self.title_input = value.to_string();
    }

    pub fn set_description(&mut self, value: &str) {
        self.description_input = value.to_string();
    }

    pub fn set_people(&mut self, value: &str) {
        self.people_input = value.to_string();
    }

    /// Validates the buffered input and creates the project.
    ///
    /// # Contract
    /// - Title: required. Description: required, at least
    ///   [`DESCRIPTION_MIN_LENGTH`] characters. People: required integer in
    ///   `[PEOPLE_MIN, PEOPLE_MAX]`.
    /// - On success the buffers are cleared and the new id returned.
    /// - On failure the store is untouched and the buffers keep their
    ///   values.
    pub fn submit(&mut self) -> Result<ProjectId, ValidationError> {
        let (title, description, people) = self.gather_user_input()?;

        let id = self.store.borrow_mut().create(title, description, people);
        self.clear_inputs();
        info!("event=form_submitted module=input status=ok id={id}");
        Ok(id)
    }

    fn gather_user_input(&self) -> Result<(String, String, u32), ValidationError> {
        validate_text(
            "title",
            &self.title_input,
            TextRules {
                required: true,
                ..TextRules::default()
            },
        )?;
        validate_text(
            "description",
            &self.description_input,
            TextRules {
                required: true,
                min_length: Some(DESCRIPTION_MIN_LENGTH),
                ..TextRules::default()
            },
        )?;
        let people = validate_people(
            "people",
            &self.people_input,
            IntRange {
                min: PEOPLE_MIN,
                max: PEOPLE_MAX,
            },
        )?;

        Ok((
            self.title_input.clone(),
            self.description_input.clone(),
            people,
        ))
    }

    fn clear_inputs(&mut self) {
        debug!("event=form_cleared module=input status=ok");
        self.title_input.clear();
        self.description_input.clear();
        self.people_input.clear();
    }

    /// Raw buffer contents, exposed for shells that re-render the form.
    pub fn inputs(&self) -> (&str, &str, &str) {
        (
            &self.title_input,
            &self.description_input,
            &self.people_input,
        )
    }
}
