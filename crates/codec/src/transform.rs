//! The six pure conversions between text, binary and DNA strings.
//!
//! Three inverse pairs: text <-> binary, binary <-> DNA, and text <-> DNA
//! (composed from the other two). Text covers code points 0-255; each
//! character occupies a fixed 8-bit frame in the binary representation.
//!
//! The binary -> text direction is strict: a non-binary digit in a complete
//! 8-character chunk is an error. The DNA directions are lenient: an
//! unmappable 2-bit chunk or DNA symbol degrades to a visible sentinel
//! (`?` / `??`) instead of failing, so those conversions always return a
//! string.

use crate::error::CodecError;
use crate::nucleotide::Nucleotide;

/// Sentinel emitted for a 2-character chunk outside the fixed table.
pub const SENTINEL_BASE: char = '?';

/// Sentinel emitted for a DNA symbol outside the alphabet.
pub const SENTINEL_BITS: &str = "??";

/// Render each character of `text` as an 8-digit zero-padded binary string,
/// concatenated in order.
///
/// Code points above 255 cannot fit the 8-bit frame and are rejected; a
/// truncated rendering would desynchronize the fixed-width chunking used by
/// the inverse direction.
pub fn text_to_binary(text: &str) -> Result<String, CodecError> {
    let mut binary = String::with_capacity(text.len() * 8);
    for ch in text.chars() {
        let code_point = ch as u32;
        if code_point > u8::MAX as u32 {
            return Err(CodecError::UnencodableChar { ch, code_point });
        }
        binary.push_str(&format!("{code_point:08b}"));
    }
    Ok(binary)
}

/// Parse consecutive 8-character chunks of `binary` as base-2 code points and
/// map each to its character.
///
/// A trailing chunk shorter than 8 characters is dropped, not padded. Any
/// non-'0'/'1' character in a complete chunk is an error.
pub fn binary_to_text(binary: &str) -> Result<String, CodecError> {
    let digits: Vec<char> = binary.chars().collect();
    let mut text = String::with_capacity(digits.len() / 8);

    for chunk in digits.chunks(8) {
        if chunk.len() < 8 {
            break;
        }
        let chunk_str: String = chunk.iter().collect();
        // from_str_radix tolerates a leading sign, so validate digits first.
        if chunk.iter().any(|&c| !matches!(c, '0' | '1')) {
            return Err(CodecError::InvalidBinary { chunk: chunk_str });
        }
        let code = u8::from_str_radix(&chunk_str, 2)
            .map_err(|_| CodecError::InvalidBinary { chunk: chunk_str })?;
        text.push(code as char);
    }

    Ok(text)
}

/// Map consecutive 2-character chunks of `binary` to nitrogen bases.
///
/// All whitespace is removed first; if the remaining length is odd, the
/// trailing bit is dropped. A chunk outside the fixed table yields the
/// sentinel `?` rather than an error.
pub fn binary_to_dna(binary: &str) -> String {
    let stripped: Vec<char> = binary.chars().filter(|c| !c.is_whitespace()).collect();
    let even_len = stripped.len() - stripped.len() % 2;

    let mut dna = String::with_capacity(even_len / 2);
    for pair in stripped[..even_len].chunks(2) {
        let bits: String = pair.iter().collect();
        match Nucleotide::from_bits(&bits) {
            Some(base) => dna.push(base.to_char()),
            None => dna.push(SENTINEL_BASE),
        }
    }
    dna
}

/// Map each DNA symbol of `dna` back to its 2-bit pattern.
///
/// Symbols are case-folded to uppercase and whitespace is removed. A symbol
/// outside the alphabet yields the sentinel `??` rather than an error.
pub fn dna_to_binary(dna: &str) -> String {
    let mut binary = String::with_capacity(dna.len() * 2);
    for symbol in dna.chars().filter(|c| !c.is_whitespace()) {
        match Nucleotide::from_char(symbol) {
            Some(base) => binary.push_str(base.to_bits()),
            None => binary.push_str(SENTINEL_BITS),
        }
    }
    binary
}

/// Encode `text` as a DNA sequence: [`text_to_binary`] then [`binary_to_dna`].
pub fn text_to_dna(text: &str) -> Result<String, CodecError> {
    Ok(binary_to_dna(&text_to_binary(text)?))
}

/// Decode a DNA sequence back to text: [`dna_to_binary`] then
/// [`binary_to_text`].
///
/// Sentinel `?` output produced by lenient DNA decoding reaches the strict
/// binary parse and surfaces as [`CodecError::InvalidBinary`].
pub fn dna_to_text(dna: &str) -> Result<String, CodecError> {
    binary_to_text(&dna_to_binary(dna))
}
