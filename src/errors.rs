use thiserror::Error;

/// Failures while turning an A1 range string into a grid selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid range '{0}': expected A1 notation like 'A1:B2' or 'Sheet1!A1:B2'")]
    InvalidFormat(String),
    #[error("no sheet titled '{0}' in the spreadsheet")]
    SheetNotFound(String),
}

/// Failures while turning a color token into channel values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("unrecognized color '{0}': expected {hint}", hint = crate::color::accepted_color_hint())]
    InvalidToken(String),
}
