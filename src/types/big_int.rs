//! Unsigned integer view of fixed-width identifiers.

use crate::types::fixed_bytes::FixedBytes;
use num_bigint::BigUint;

/// Interprets the buffer as a big-endian unsigned magnitude.
pub fn to_biguint<const N: usize>(buf: &FixedBytes<N>) -> BigUint {
    BigUint::from_bytes_be(buf.as_slice())
}

/// Stores the big-endian bytes of `value` with the `from_bytes` rule.
///
/// Values wider than `N` bytes keep their low-order `N` bytes.
pub fn from_biguint<const N: usize>(value: &BigUint) -> FixedBytes<N> {
    FixedBytes::from_bytes(&value.to_bytes_be())
}

impl<const N: usize> FixedBytes<N> {
    /// See [`to_biguint`].
    pub fn to_biguint(&self) -> BigUint {
        to_biguint(self)
    }

    /// See [`from_biguint`].
    pub fn from_biguint(value: &BigUint) -> Self {
        from_biguint(value)
    }
}
