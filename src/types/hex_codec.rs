//! Canonical `0x`-hex text form of fixed-width identifiers.
//!
//! Every node must accept and reject exactly the same strings, so the rules
//! here are part of the interchange format:
//!
//! - Output is always `0x` followed by `2*N` lowercase hex digits, wrapped in
//!   double quotes when producing JSON.
//! - Input must carry a `0x` or `0X` prefix and exactly `2*N` payload
//!   characters. A wrong length and a bad prefix are the same error
//!   ([`HexError::Length`]).
//! - Quoted input must be a JSON string ([`HexError::Format`] otherwise)
//!   spelled as a literal `"` on each side of the payload, with no escapes
//!   and no surrounding whitespace.
//! - Payload characters are checked according to [`ContentCheck`].
//!
//! A single [`HexCodec`] value carries the whole configuration. The presets
//! [`HexCodec::RAW_DEFERRED`] and [`HexCodec::QUOTED`] are the shapes used by
//! the digest and address JSON paths respectively.

use crate::types::errors::HexError;
use crate::types::fixed_bytes::FixedBytes;
use hex::FromHexError;

/// Length of the `0x` prefix.
pub const PREFIX_LEN: usize = 2;

/// How payload characters are validated once length and prefix are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCheck {
    /// Every payload character must be a hex digit.
    Strict,
    /// Only length and prefix are validated. The payload is decoded pair by
    /// pair up to the first invalid pair, and the decoded bytes are placed
    /// with the [`FixedBytes::from_bytes`] rule.
    Deferred,
}

/// Hex codec for `FixedBytes<N>`, parameterized by input shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexCodec {
    quoted: bool,
    content: ContentCheck,
}

impl HexCodec {
    /// Unquoted `0x…` payload, strict content.
    pub const RAW: HexCodec = HexCodec::new(false);
    /// Unquoted `0x…` payload, length/prefix gate only (digest JSON path).
    pub const RAW_DEFERRED: HexCodec =
        HexCodec::new(false).with_content_check(ContentCheck::Deferred);
    /// Quoted JSON string, strict content (address JSON path).
    pub const QUOTED: HexCodec = HexCodec::new(true);

    /// Creates a codec with strict content checking.
    pub const fn new(quoted: bool) -> Self {
        Self {
            quoted,
            content: ContentCheck::Strict,
        }
    }

    /// Returns a copy using the given content check.
    pub const fn with_content_check(self, content: ContentCheck) -> Self {
        Self {
            quoted: self.quoted,
            content,
        }
    }

    /// Whether input and output are JSON strings.
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// The configured content check.
    pub const fn content_check(&self) -> ContentCheck {
        self.content
    }

    /// Decodes `input` into a new buffer.
    pub fn decode<const N: usize>(&self, input: &[u8]) -> Result<FixedBytes<N>, HexError> {
        let mut out = FixedBytes::zero();
        self.decode_into(input, &mut out)?;
        Ok(out)
    }

    /// Decodes `input` into `out`.
    ///
    /// `out` is left untouched when an error is returned.
    pub fn decode_into<const N: usize>(
        &self,
        input: &[u8],
        out: &mut FixedBytes<N>,
    ) -> Result<(), HexError> {
        if self.quoted {
            self.decode_prefixed(unquote(input, N)?, out)
        } else {
            self.decode_prefixed(input, out)
        }
    }

    /// Encodes `buf` in canonical form, quoted if the codec is quoted.
    pub fn encode<const N: usize>(&self, buf: &FixedBytes<N>) -> String {
        let text = encode_prefixed(buf.as_slice());
        if self.quoted {
            format!("\"{}\"", text)
        } else {
            text
        }
    }

    fn decode_prefixed<const N: usize>(
        &self,
        input: &[u8],
        out: &mut FixedBytes<N>,
    ) -> Result<(), HexError> {
        let payload = strip_prefix_exact(input, N)?;
        match self.content {
            ContentCheck::Strict => {
                let mut bytes = [0u8; N];
                hex::decode_to_slice(payload, &mut bytes).map_err(|err| match err {
                    FromHexError::InvalidHexCharacter { c, index } => {
                        HexError::InvalidHexCharacter {
                            character: c,
                            position: index,
                        }
                    }
                    _ => HexError::Length { width: N },
                })?;
                *out = FixedBytes::new(bytes);
            }
            ContentCheck::Deferred => out.set_bytes(&decode_pairs(payload)),
        }
        Ok(())
    }
}

impl Default for HexCodec {
    fn default() -> Self {
        Self::RAW
    }
}

/// Encodes bytes as `0x` followed by lowercase hex.
pub fn encode_prefixed(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(PREFIX_LEN + bytes.len() * 2);
    out.push_str("0x");
    out.push_str(&hex::encode(bytes));
    out
}

/// Returns `true` if `input` starts with `0x` or `0X`.
pub fn has_hex_prefix(input: &[u8]) -> bool {
    input.len() >= PREFIX_LEN && input[0] == b'0' && (input[1] == b'x' || input[1] == b'X')
}

/// Loosely decodes hex text: optional prefix, odd lengths padded with a
/// leading `0`, decoding stops at the first invalid pair.
pub fn decode_loose(text: &str) -> Vec<u8> {
    let mut digits = text.as_bytes();
    if has_hex_prefix(digits) {
        digits = &digits[PREFIX_LEN..];
    }
    if digits.len() % 2 == 1 {
        let mut padded = Vec::with_capacity(digits.len() + 1);
        padded.push(b'0');
        padded.extend_from_slice(digits);
        return decode_pairs(&padded);
    }
    decode_pairs(digits)
}

/// Returns the payload after the prefix if `input` is exactly a prefixed
/// `2*width`-digit string.
fn strip_prefix_exact(input: &[u8], width: usize) -> Result<&[u8], HexError> {
    if input.len() != PREFIX_LEN + width * 2 || !has_hex_prefix(input) {
        return Err(HexError::Length { width });
    }
    Ok(&input[PREFIX_LEN..])
}

/// Returns the bytes between a literal leading and trailing `"`.
///
/// Escapes are not resolved and no surrounding whitespace is allowed. A
/// JSON string in any other spelling fails the length gate; anything that
/// is not a JSON string is [`HexError::Format`].
fn unquote(input: &[u8], width: usize) -> Result<&[u8], HexError> {
    if let [b'"', inner @ .., b'"'] = input {
        if !inner.iter().any(|&b| b == b'"' || b == b'\\' || b < 0x20) {
            return Ok(inner);
        }
    }
    match serde_json::from_slice::<serde_json::Value>(input) {
        Ok(serde_json::Value::String(_)) => Err(HexError::Length { width }),
        _ => Err(HexError::Format),
    }
}

/// Decodes hex pairs from the start of `digits` until the first invalid pair.
fn decode_pairs(digits: &[u8]) -> Vec<u8> {
    digits
        .chunks_exact(2)
        .map_while(|pair| Some(nibble(pair[0])? << 4 | nibble(pair[1])?))
        .collect()
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
