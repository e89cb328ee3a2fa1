use ledger_ids_derive::Error;

/// Errors produced while decoding an identifier from its hex text form.
///
/// The set of accepted strings is shared by every node, so each variant is a
/// stable part of the interchange contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexError {
    /// Wrong total length, or the payload does not start with `0x`/`0X`.
    ///
    /// Prefix and length failures are deliberately indistinguishable: the
    /// error only depends on the target width.
    #[error("hex identifier must be exactly {width} bytes with a 0x prefix")]
    Length { width: usize },
    /// The JSON value is not a string.
    #[error("json value is not a string")]
    Format,
    /// A payload character outside `0-9a-fA-F`.
    #[error("invalid hex character {character:?} at position {position}")]
    InvalidHexCharacter { character: char, position: usize },
}

/// Strict construction refused to drop leading bytes of an oversized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input of {actual} bytes does not fit in a {width}-byte identifier")]
pub struct TruncationError {
    pub width: usize,
    pub actual: usize,
}
