//! Text codecs behind the `ec64`/`dc64` and `ec`/`dc` commands.

pub mod base64_codec;
pub mod substitution;

use thiserror::Error;

pub use base64_codec::{decode_base64, encode_base64};
pub use substitution::{decode_substitution, encode_substitution};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid base64 input: {reason}")]
    InvalidBase64 { reason: String },
}
