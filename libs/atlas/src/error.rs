use thiserror::Error;

#[derive(Error, Debug)]
pub enum DominoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Malformed layout at line {line}: {reason}")]
    MalformedLayout { line: usize, reason: String },
    #[error("Layout record for {pips} pips marks {found} dots")]
    PipCountMismatch { pips: u8, found: usize },
    #[error("Pip count {pips} is out of range 0..={max}")]
    PipCountOutOfRange { pips: u8, max: u8 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
