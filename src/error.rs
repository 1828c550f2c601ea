//! Error types for the gallery client.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` covers every network or server failure; callers decide whether
//! to surface it as a notice or only log it. `ValidationError` is raised before
//! any request is built and is always shown inline.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Short stable code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_TRANSPORT",
            Self::Status(_) => "E_STATUS",
            Self::Decode(_) => "E_DECODE",
            Self::Unavailable => "E_UNAVAILABLE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Veuillez saisir un titre")]
    MissingTitle,
    #[error("Veuillez choisir une catégorie")]
    MissingCategory,
    #[error("Veuillez ajouter une photo")]
    MissingImage,
    #[error("Format d'image non pris en charge (jpg, png)")]
    UnsupportedImageType,
    #[error("Image trop volumineuse (4 Mo max)")]
    ImageTooLarge,
    #[error("Veuillez saisir votre e-mail et votre mot de passe")]
    MissingCredentials,
}

/// Prompt shown when a submit is attempted with incomplete fields.
pub const INCOMPLETE_FORM_MESSAGE: &str = "Veuillez remplir tous les champs du formulaire";
