//! Checks the create form runs before handing a draft to the store

use thiserror::Error;

use crate::user::UserDraft;

/// Fields a draft must fill in before it can be appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// Full name
    Name,
    /// Email address
    Email,
}

/// The draft is missing required fields; the store is never reached
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Name and email are required fields.")]
pub struct ValidationError {
    /// Which required fields were left empty
    pub missing: Vec<RequiredField>,
}

/// Ensures `name` and `email` are non-empty. Whitespace-only values count
/// as empty. No format checks are performed.
pub fn validate_draft(draft: &UserDraft) -> Result<(), ValidationError> {
    let mut missing = Vec::new();

    if draft.name.trim().is_empty() {
        missing.push(RequiredField::Name);
    }

    if draft.email.trim().is_empty() {
        missing.push(RequiredField::Email);
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

/// Confirmation shown once a draft was appended
pub fn created_notice(draft: &UserDraft) -> String {
    format!("{} has been added successfully.", draft.name)
}

#[cfg(test)]
#[path = "./validation_tests.rs"]
mod tests;
