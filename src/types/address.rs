//! 20-byte account addresses.

use crate::types::fixed_bytes::FixedBytes;
use crate::types::hash::Hash;
use crate::types::hex_codec::{self, HexCodec, PREFIX_LEN};
use crate::types::identifier::impl_identifier;

/// Address length in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Fixed-size 20-byte address identifying accounts on the ledger.
///
/// Derived from public keys elsewhere; this type only carries the bytes.
/// Addresses double as unsigned integers (see `to_big`), and their JSON path
/// (`from_json_bytes`) takes a quoted JSON string with strict hex checking.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash, Ord, PartialOrd)]
pub struct Address(pub FixedBytes<ADDRESS_SIZE>);

impl_identifier!(Address, ADDRESS_SIZE, HexCodec::QUOTED);

impl Address {
    /// Right-aligns the address into a 32-byte [`Hash`].
    pub fn to_hash(&self) -> Hash {
        Hash::from_bytes(self.as_slice())
    }
}

/// Returns `true` if `s` is exactly 40 hex digits, optionally `0x`/`0X`-prefixed.
pub fn is_hex_address(s: &str) -> bool {
    let mut digits = s.as_bytes();
    if hex_codec::has_hex_prefix(digits) {
        digits = &digits[PREFIX_LEN..];
    }
    digits.len() == 2 * ADDRESS_SIZE && digits.iter().all(u8::is_ascii_hexdigit)
}
