//! Structural errors raised while reading a registry document.

use thiserror::Error;

/// The document is not shaped like an API registry.
///
/// These are never recovered from: a run that hits one writes no output.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("malformed XML at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("document has no root element")]
    EmptyDocument,

    #[error("expected root element `registry`, found `{found}`")]
    UnexpectedRoot { found: String },

    #[error("`{parent}` has no `{child}` element")]
    MissingElement { parent: String, child: String },

    #[error("`{element}` is missing attribute `{attribute}`")]
    MissingAttribute { element: String, attribute: String },

    #[error("`{element}` has no text content")]
    MissingText { element: String },
}
