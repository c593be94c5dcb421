// std imports
use std::path::PathBuf;

// 3rd party imports
use thiserror::Error;

/// Errors which might occur when reading a mass table
#[derive(Error, Debug)]
pub enum MassTableError {
    #[error("Unable to open mass table {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed record in line {line}, expected `symbol,mass` but got `{content}`")]
    MalformedRecord { line: u64, content: String },
    #[error("Invalid mass `{value}` in line {line}")]
    InvalidMass { line: u64, value: String },
    #[error("Read error: {0}")]
    ReadError(#[from] std::io::Error),
}
