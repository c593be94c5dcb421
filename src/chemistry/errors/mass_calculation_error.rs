use thiserror::Error;

/// Errors which might occur when calculating the mass of a formula or an amino acid sequence
#[derive(Error, Debug)]
pub enum MassCalculationError {
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),
    #[error("Unknown amino acid one letter code: {0}")]
    UnknownResidue(char),
    #[error("Element count '{0}' is out of range")]
    InvalidCount(String),
    #[error("Tokenization error: {0}")]
    TokenizationError(#[from] fancy_regex::Error),
}

impl MassCalculationError {
    /// Returns true if the calculation failed because an element symbol or one letter code
    /// is missing in the mass table.
    ///
    pub fn is_unknown_symbol(&self) -> bool {
        matches!(self, Self::UnknownElement(_) | Self::UnknownResidue(_))
    }
}
