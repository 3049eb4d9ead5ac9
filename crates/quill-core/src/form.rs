//! Post form validation - the only path into the post store's mutations.
//!
//! Checks the two mutable fields of a post. On failure the submitted input
//! is handed back with field-level annotations and nothing is written.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Group;
use crate::error::RepoError;
use crate::ports::GroupRepository;

/// Raw form input, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub text: String,
    /// Group choice as submitted; blank or absent means "no group".
    pub group: Option<String>,
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The field is blank.
    EmptyField,
    /// The submitted group choice does not resolve to a known group.
    UnknownGroup,
}

impl FieldError {
    /// The message shown next to the field.
    pub fn message(self) -> &'static str {
        match self {
            FieldError::EmptyField => "This field cannot be blank.",
            FieldError::UnknownGroup => "Select a valid group.",
        }
    }
}

/// Field-level validation annotations. Both fields are checked; one failing
/// does not short-circuit the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFormErrors {
    pub text: Option<FieldError>,
    pub group: Option<FieldError>,
}

impl PostFormErrors {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.group.is_none()
    }
}

/// A validated, normalized form ready for the post store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub text: String,
    pub group: Option<Group>,
}

impl PostDraft {
    pub fn group_id(&self) -> Option<Uuid> {
        self.group.as_ref().map(|g| g.id)
    }
}

/// Validation failure, or the catalog failing underneath it.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("post form failed validation")]
    Invalid(PostFormErrors),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Validate raw input against the group catalog.
///
/// `text` must be non-blank after trimming. A present, non-blank group
/// value must parse as an id and resolve through the catalog; anything
/// else annotates the group field as an unknown choice.
pub async fn validate_post_input(
    input: &PostInput,
    groups: &dyn GroupRepository,
) -> Result<PostDraft, FormError> {
    let mut errors = PostFormErrors::default();

    let text = input.text.trim();
    if text.is_empty() {
        errors.text = Some(FieldError::EmptyField);
    }

    let choice = input.group.as_deref().map(str::trim).filter(|g| !g.is_empty());
    let group = match choice {
        None => None,
        Some(raw) => match Uuid::parse_str(raw) {
            Err(_) => {
                errors.group = Some(FieldError::UnknownGroup);
                None
            }
            Ok(id) => {
                let found = groups.find_by_id(id).await?;
                if found.is_none() {
                    errors.group = Some(FieldError::UnknownGroup);
                }
                found
            }
        },
    };

    if !errors.is_empty() {
        return Err(FormError::Invalid(errors));
    }

    Ok(PostDraft {
        text: text.to_owned(),
        group,
    })
}
