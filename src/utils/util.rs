use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarkerError>;

#[derive(Debug, Error, PartialEq)]
pub enum MarkerError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Unable to read {}: {reason}", .path.display())]
    FileUnreadable { path: PathBuf, reason: String },

    #[error("Motif {motif} contains unknown IUPAC symbol \"{symbol}\"")]
    UnknownSymbol { motif: String, symbol: char },

    #[error("Motif {motif:?} cannot be compiled: {reason}")]
    InvalidPattern { motif: String, reason: String },

    #[error("No {what} found in {}", .path.display())]
    EmptyInput { what: &'static str, path: PathBuf },

    #[error("Cannot derive output name from {}: file name has no '.'-delimited extension", .path.display())]
    MalformedHeader { path: PathBuf },

    #[error("Failed to write image {}: {reason}", .path.display())]
    Render { path: PathBuf, reason: String },
}

pub fn handle_error_and_exit(err: MarkerError) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
