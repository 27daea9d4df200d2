//! Error types for the core state machines and site content.
//!
//! Every error here is a local precondition violation reported synchronously
//! to the caller. None of them leave the originating machine mutated.
//!
//! - [`CarouselError`] - Rejected filter or index selection
//! - [`TypewriterError`] - Invalid phrase list at construction
//! - [`ContactError`] - Contact form validation failures
//! - [`ContentError`] - Malformed or inconsistent site content

use thiserror::Error;

/// Errors returned by [`CarouselFilter`](crate::CarouselFilter) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// Category is neither the wildcard nor a known label.
    #[error("unknown category: {0}")]
    InvalidCategory(String),
    /// Index outside the currently filtered subset.
    #[error("index {index} out of range for {len} visible items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors returned when constructing a [`TypewriterCycler`](crate::TypewriterCycler).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    /// The phrase list was empty.
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
    /// A phrase had no characters.
    #[error("phrase {index} is empty")]
    EmptyPhrase { index: usize },
}

/// Contact form fields, used to name the offending field in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Human-readable field label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact form validation and submission errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// A required field is blank.
    #[error("please fill in the {0} field")]
    MissingField(ContactField),
    /// Email does not look like `local@domain.tld`.
    #[error("please enter a valid email address")]
    InvalidEmail,
    /// A submission is already in flight.
    #[error("a message is already being sent")]
    AlreadySubmitting,
}

/// Site content loading and consistency errors.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file is not valid TOML for [`SiteContent`](crate::SiteContent).
    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),
    /// The hero typewriter phrase list is unusable.
    #[error("hero phrases: {0}")]
    Phrases(#[from] TypewriterError),
    /// A project references a category that is not declared.
    #[error("project {id} uses undeclared category '{category}'")]
    UndeclaredCategory { id: u32, category: String },
    /// Two projects share an id.
    #[error("duplicate project id {0}")]
    DuplicateProjectId(u32),
    /// A declared category collides with the wildcard label.
    #[error("'{0}' is reserved for the show-everything filter")]
    ReservedCategory(String),
}
