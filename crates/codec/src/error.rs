use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid binary chunk '{chunk}': expected only '0' and '1'")]
    InvalidBinary { chunk: String },
    #[error("Character '{ch}' (code point {code_point}) does not fit in 8 bits")]
    UnencodableChar { ch: char, code_point: u32 },
}
