//! Translate the capitalization-based export convention into Rust terms.
//!
//! In the source convention an identifier is exported exactly when its first
//! character is an uppercase letter; everything else that can legally start
//! an identifier (a lowercase letter, a non-cased letter, an underscore) is
//! package-private. Rust spells the same distinction with the `pub` keyword
//! instead of the identifier itself, so these helpers answer two questions:
//! what does the convention say about a name, and how would Rust spell it.

use thiserror::Error;

/// What the capitalization convention says about an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Visible outside the defining module (first character is uppercase).
    Exported,
    /// Visible only inside the defining module.
    ModulePrivate,
}

impl Visibility {
    /// Return the convention's name for this visibility.
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Exported => "exported",
            Visibility::ModulePrivate => "unexported",
        }
    }

    /// Return how Rust spells this visibility on a declaration.
    pub fn rust_spelling(self) -> &'static str {
        match self {
            Visibility::Exported => "pub",
            Visibility::ModulePrivate => "no modifier (module-private)",
        }
    }
}

/// Errors for strings that cannot start an identifier at all.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConventionError {
    #[error("identifier is empty")]
    Empty,
    #[error("{0:?} cannot start an identifier")]
    InvalidStart(char),
}

/// Classify an identifier under the capitalization convention.
///
/// ## Parameters
/// - `identifier`: the name to classify; only its first character matters.
///
/// ## Returns
/// - (`Visibility`): `Exported` for an uppercase first letter, otherwise
///   `ModulePrivate` for anything that can start an identifier.
///
/// ## Notes
/// - Uppercase means the Unicode uppercase-letter category, so `Étude` is
///   exported and `étude` is not.
/// - Non-cased letters (for example CJK characters) can start an identifier
///   but are never uppercase, so they classify as `ModulePrivate`.
pub fn classify(identifier: &str) -> Result<Visibility, ConventionError> {
    let Some(first) = identifier.chars().next() else {
        return Err(ConventionError::Empty);
    };

    let visibility = if first.is_uppercase() {
        Visibility::Exported
    } else if first.is_alphabetic() || first == '_' {
        Visibility::ModulePrivate
    } else {
        return Err(ConventionError::InvalidStart(first));
    };

    tracing::debug!(identifier, visibility = visibility.as_str(), "classified");
    Ok(visibility)
}
