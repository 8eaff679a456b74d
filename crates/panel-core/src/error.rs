use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// The document has no template element to clone for this glyph.
    #[error("element with id '{0}' not found")]
    MissingTemplate(String),
    #[error("unknown glyph key '{0}'")]
    UnknownGlyph(String),
}
