//! Project domain model.
//!
//! # Responsibility
//! - Define the project record and its two-valued lifecycle status.
//! - Provide construction paths for store-generated and external identity.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `status` moves only through `ProjectStore::set_status`; views hold
//!   clones and never write back.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every project owned by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Board column a project currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is still ongoing; rendered in the active list.
    Active,
    /// Work is done; rendered in the finished list.
    Finished,
}

impl ProjectStatus {
    /// Stable string id used in CLI input and log metadata.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// Parses one project status from user-facing string input.
pub fn parse_project_status(value: &str) -> Result<ProjectStatus, StatusParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(StatusParseError::EmptyStatus);
    }

    match normalized {
        "active" => Ok(ProjectStatus::Active),
        "finished" => Ok(ProjectStatus::Finished),
        other => Err(StatusParseError::UnsupportedStatus(other.to_string())),
    }
}

/// Status parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusParseError {
    EmptyStatus,
    UnsupportedStatus(String),
}

impl Display for StatusParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStatus => write!(f, "status value must not be empty"),
            Self::UnsupportedStatus(value) => {
                write!(f, "status is unsupported: {value}; expected active|finished")
            }
        }
    }
}

impl Error for StatusParseError {}

/// Canonical project record.
///
/// The store is the sole owner and mutator. Everything handed to
/// subscribers or views is a clone, so field visibility stays `pub`
/// without giving anyone a write path into store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID carried in drag payloads and log metadata.
    pub id: ProjectId,
    /// Short human-readable name.
    pub title: String,
    /// Free-form description text.
    pub description: String,
    /// Assigned headcount.
    pub people: u32,
    /// Current board column.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated stable ID and `Active` status.
    ///
    /// # Contract
    /// - Inputs are pre-validated by the input form; this constructor never
    ///   fails and performs no validation of its own.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by import/test paths where identity already exists externally.
    ///
    /// # Errors
    /// - Rejects the nil uuid and blank titles via [`Project::validate`].
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        status: ProjectStatus,
    ) -> Result<Self, ProjectValidationError> {
        let project = Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status,
        };
        project.validate()?;
        Ok(project)
    }

    /// Checks structural invariants of this record.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.is_nil() {
            return Err(ProjectValidationError::NilUuid);
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Structural validation errors for externally supplied project records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidationError {
    NilUuid,
    EmptyTitle,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "project id must not be the nil uuid"),
            Self::EmptyTitle => write!(f, "project title must not be blank"),
        }
    }
}

impl Error for ProjectValidationError {}
