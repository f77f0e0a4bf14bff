use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use super::CodecError;

/// Standard alphabet, padded output. Input padding is optional and stray
/// trailing bits are dropped.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn encode_base64(text: &str) -> String {
    LENIENT.encode(text.as_bytes())
}

/// Whitespace and any run of trailing `=` are ignored. Non-UTF-8 payloads are
/// decoded lossily.
pub fn decode_base64(input: &str) -> Result<String, CodecError> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.trim_end_matches('=');
    let bytes = LENIENT
        .decode(cleaned.as_bytes())
        .map_err(|e| CodecError::InvalidBase64 {
            reason: e.to_string(),
        })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
