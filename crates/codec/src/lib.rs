//! Text, binary and DNA string conversion library.
//!
//! Converts among three representations: human-readable text (code points
//! 0-255), 8-bit binary strings, and a four-symbol DNA alphabet where each
//! nitrogen base stands for one 2-bit group.

mod error;
mod nucleotide;
mod transform;

pub use error::CodecError;
pub use nucleotide::Nucleotide;
pub use transform::{
    binary_to_dna, binary_to_text, dna_to_binary, dna_to_text, text_to_binary, text_to_dna,
    SENTINEL_BASE, SENTINEL_BITS,
};

use serde::{Deserialize, Serialize};

/// The six conversion modes, one per direction of the three inverse pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    /// Text to a DNA sequence.
    TextToDna,
    /// DNA sequence back to text.
    DnaToText,
    /// Binary string to a DNA sequence.
    BinaryToDna,
    /// DNA sequence back to a binary string.
    DnaToBinary,
    /// Text to an 8-bit binary string.
    TextToBinary,
    /// Binary string back to text.
    BinaryToText,
}

impl Conversion {
    /// All modes, in the order they are listed to users.
    pub const fn all() -> [Conversion; 6] {
        [
            Self::TextToDna,
            Self::DnaToText,
            Self::BinaryToDna,
            Self::DnaToBinary,
            Self::TextToBinary,
            Self::BinaryToText,
        ]
    }

    /// Run the conversion on `input`.
    ///
    /// DNA-direction modes are lenient and embed sentinel symbols for
    /// unmappable input; the strict modes report [`CodecError`].
    pub fn apply(&self, input: &str) -> Result<String, CodecError> {
        match self {
            Conversion::TextToDna => text_to_dna(input),
            Conversion::DnaToText => dna_to_text(input),
            Conversion::BinaryToDna => Ok(binary_to_dna(input)),
            Conversion::DnaToBinary => Ok(dna_to_binary(input)),
            Conversion::TextToBinary => text_to_binary(input),
            Conversion::BinaryToText => binary_to_text(input),
        }
    }

    /// One-line description of the mode.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::TextToDna => "encode text as a DNA sequence",
            Self::DnaToText => "decode a DNA sequence to text",
            Self::BinaryToDna => "encode a binary string as a DNA sequence",
            Self::DnaToBinary => "decode a DNA sequence to a binary string",
            Self::TextToBinary => "encode text as an 8-bit binary string",
            Self::BinaryToText => "decode an 8-bit binary string to text",
        }
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextToDna => write!(f, "text_to_dna"),
            Self::DnaToText => write!(f, "dna_to_text"),
            Self::BinaryToDna => write!(f, "binary_to_dna"),
            Self::DnaToBinary => write!(f, "dna_to_binary"),
            Self::TextToBinary => write!(f, "text_to_binary"),
            Self::BinaryToText => write!(f, "binary_to_text"),
        }
    }
}

impl std::str::FromStr for Conversion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text_to_dna" => Ok(Self::TextToDna),
            "dna_to_text" => Ok(Self::DnaToText),
            "binary_to_dna" => Ok(Self::BinaryToDna),
            "dna_to_binary" => Ok(Self::DnaToBinary),
            "text_to_binary" => Ok(Self::TextToBinary),
            "binary_to_text" => Ok(Self::BinaryToText),
            _ => Err(format!(
                "Invalid conversion type: {s}. Available: text_to_dna, dna_to_text, \
                 binary_to_dna, dna_to_binary, text_to_binary, binary_to_text"
            )),
        }
    }
}
