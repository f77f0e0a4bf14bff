//! Base64 followed by a fixed letter-to-symbol remap.
//!
//! Only lowercase letters are remapped. Everything else passes through, so a
//! base64 `+` decodes as `p`. Encoding drops `=` padding so that `=` can only
//! stand for `q`.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use lazy_static::lazy_static;

use super::{decode_base64, CodecError};

pub const SUBSTITUTION_TABLE: [(char, char); 26] = [
    ('a', '<'),
    ('b', '!'),
    ('c', '('),
    ('d', '@'),
    ('e', '%'),
    ('f', '~'),
    ('g', '|'),
    ('h', '?'),
    ('i', '>'),
    ('j', '#'),
    ('k', '$'),
    ('l', '*'),
    ('m', ')'),
    ('n', ';'),
    ('o', '-'),
    ('p', '+'),
    ('q', '='),
    ('r', '['),
    ('s', ':'),
    ('t', ']'),
    ('u', '^'),
    ('v', '&'),
    ('w', '{'),
    ('x', '}'),
    ('y', '.'),
    ('z', '\''),
];

lazy_static! {
    static ref FORWARD: HashMap<char, char> = SUBSTITUTION_TABLE.iter().copied().collect();
    static ref REVERSE: HashMap<char, char> =
        SUBSTITUTION_TABLE.iter().map(|&(plain, symbol)| (symbol, plain)).collect();
}

fn remap(text: &str, table: &HashMap<char, char>) -> String {
    text.chars().map(|c| *table.get(&c).unwrap_or(&c)).collect()
}

pub fn encode_substitution(text: &str) -> String {
    remap(&STANDARD_NO_PAD.encode(text.as_bytes()), &FORWARD)
}

pub fn decode_substitution(input: &str) -> Result<String, CodecError> {
    decode_base64(&remap(input, &REVERSE))
}
