use miette::Diagnostic;
use thiserror::Error;

use crate::types::PixelKind;

/// Main error type for pnmkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum PnmError {
    #[error("Invalid header: unrecognized format tag '{found}'")]
    #[diagnostic(
        code(pnm::header),
        help("The first line must be one of P1-P6 or bitmap-text, gray-binary, ...")
    )]
    InvalidHeader { found: String },

    #[error("Invalid dimensions: expected 'WIDTH HEIGHT', found '{found}'")]
    #[diagnostic(code(pnm::header))]
    InvalidDimensions { found: String },

    #[error("Invalid max value: expected an integer in 1..=255, found '{found}'")]
    #[diagnostic(code(pnm::header))]
    InvalidMaxValue { found: String },

    #[error("Malformed row {row}: expected {expected} tokens, found {found}")]
    #[diagnostic(code(pnm::data))]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid sample '{token}' in row {row}")]
    #[diagnostic(code(pnm::data))]
    InvalidSample { row: usize, token: String },

    #[error("Sample {value} in row {row} exceeds max value {max}")]
    #[diagnostic(code(pnm::data))]
    SampleOutOfRange { row: usize, value: u32, max: u8 },

    #[error("Truncated row {row}: expected {expected} bytes, found {found}")]
    #[diagnostic(code(pnm::data))]
    TruncatedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Truncated data: expected {expected} rows, found {found}")]
    #[diagnostic(code(pnm::data))]
    TruncatedData { expected: usize, found: usize },

    #[error("Expected a {expected} image, found {found}")]
    #[diagnostic(code(pnm::kind))]
    KindMismatch {
        expected: PixelKind,
        found: PixelKind,
    },

    #[error("Unsupported format: {message}")]
    #[diagnostic(code(pnm::format))]
    UnsupportedFormat { message: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(pnm::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pnm::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pnm::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PnmError>;
