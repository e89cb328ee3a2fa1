//! Fixed-width byte buffer underlying every ledger identifier.

use crate::types::errors::TruncationError;
use crate::types::hex_codec;
use std::fmt;

/// Exactly `N` raw bytes, compared byte for byte.
///
/// This type is `Copy`: identifiers are small and passed by value, so two
/// copies never alias each other. The contents only change through
/// [`FixedBytes::set_bytes`], which replaces all `N` bytes at once.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedBytes<const N: usize>([u8; N]);

impl<const N: usize> FixedBytes<N> {
    /// Width of the buffer in bytes.
    pub const LEN: usize = N;

    /// Creates an all-zero buffer.
    pub const fn zero() -> Self {
        Self([0u8; N])
    }

    /// Wraps an array of exactly `N` bytes.
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Builds a buffer from a slice of any length.
    ///
    /// Short inputs are right-aligned behind zero padding. Long inputs keep
    /// only their trailing `N` bytes; the leading bytes are dropped silently.
    /// Use [`FixedBytes::try_from_bytes`] when dropping bytes is a bug.
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut out = Self::zero();
        out.set_bytes(input);
        out
    }

    /// Like [`FixedBytes::from_bytes`], but rejects inputs longer than `N`.
    pub fn try_from_bytes(input: &[u8]) -> Result<Self, TruncationError> {
        if input.len() > N {
            return Err(TruncationError {
                width: N,
                actual: input.len(),
            });
        }
        Ok(Self::from_bytes(input))
    }

    /// Replaces the contents using the [`FixedBytes::from_bytes`] rule.
    pub fn set_bytes(&mut self, input: &[u8]) {
        let kept = &input[input.len().saturating_sub(N)..];
        self.0 = [0u8; N];
        self.0[N - kept.len()..].copy_from_slice(kept);
    }

    /// Returns the underlying array.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Returns the buffer as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Copies the buffer into a new `Vec<u8>`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Returns `true` if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Canonical text form: `0x` followed by `2*N` lowercase hex digits.
    pub fn to_hex(&self) -> String {
        hex_codec::encode_prefixed(&self.0)
    }
}

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<FixedBytes<N>> for [u8; N] {
    fn from(buf: FixedBytes<N>) -> Self {
        buf.0
    }
}

impl<const N: usize> TryFrom<&[u8]> for FixedBytes<N> {
    type Error = TruncationError;

    fn try_from(input: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_bytes(input)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        fmt::LowerHex::fmt(self, f)
    }
}

/// Plain lowercase hex; `{:#x}` adds the `0x` prefix.
impl<const N: usize> fmt::LowerHex for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBytes<{}>({})", N, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Buf32 = FixedBytes<32>;
    type Buf20 = FixedBytes<20>;

    #[test]
    fn single_byte_is_right_aligned() {
        let buf = Buf32::from_bytes(&[5]);
        let mut expected = [0u8; 32];
        expected[31] = 5;
        assert_eq!(buf.as_bytes(), &expected);
    }

    #[test]
    fn short_input_keeps_suffix_and_zero_prefix() {
        let input = [0xaa, 0xbb, 0xcc];
        let buf = Buf20::from_bytes(&input);
        assert!(buf.as_slice().ends_with(&input));
        assert!(buf.as_slice()[..17].iter().all(|&b| b == 0));
    }

    #[test]
    fn exact_width_input_is_copied() {
        let input: Vec<u8> = (1..=20).collect();
        let buf = Buf20::from_bytes(&input);
        assert_eq!(buf.as_slice(), input.as_slice());
    }

    #[test]
    fn oversized_input_keeps_trailing_bytes() {
        let input: Vec<u8> = (0..40).collect();
        let buf = Buf32::from_bytes(&input);
        assert_eq!(buf.as_slice(), &input[8..]);
    }

    #[test]
    fn empty_input_is_zero() {
        let buf = Buf32::from_bytes(&[]);
        assert!(buf.is_zero());
        assert_eq!(buf, Buf32::default());
    }

    #[test]
    fn set_bytes_replaces_all_contents() {
        let mut buf = Buf20::from_bytes(&[0xff; 20]);
        buf.set_bytes(&[1, 2]);
        assert_eq!(buf, Buf20::from_bytes(&[1, 2]));
        assert!(buf.as_slice()[..18].iter().all(|&b| b == 0));
    }

    #[test]
    fn copies_are_independent() {
        let original = Buf20::from_bytes(&[7]);
        let mut copy = original;
        copy.set_bytes(&[9]);
        assert_eq!(original.as_slice()[19], 7);
        assert_eq!(copy.as_slice()[19], 9);
    }

    #[test]
    fn equality_follows_aligned_bytes() {
        assert_eq!(Buf32::from_bytes(&[1, 2, 3]), Buf32::from_bytes(&[1, 2, 3]));
        // Leading zeros vanish after alignment.
        assert_eq!(Buf32::from_bytes(&[0, 0, 1]), Buf32::from_bytes(&[1]));
        assert_ne!(Buf32::from_bytes(&[1, 2, 3]), Buf32::from_bytes(&[1, 2, 4]));
        assert_ne!(Buf32::from_bytes(&[1, 0]), Buf32::from_bytes(&[1]));
    }

    #[test]
    fn truncated_inputs_compare_by_kept_suffix() {
        let mut a = vec![0xde, 0xad];
        a.extend_from_slice(&[3u8; 20]);
        let mut b = vec![0xbe, 0xef];
        b.extend_from_slice(&[3u8; 20]);
        assert_eq!(Buf20::from_bytes(&a), Buf20::from_bytes(&b));
    }

    #[test]
    fn try_from_bytes_rejects_oversized_input() {
        let result = Buf20::try_from_bytes(&[0u8; 21]);
        assert_eq!(
            result,
            Err(TruncationError {
                width: 20,
                actual: 21
            })
        );
    }

    #[test]
    fn try_from_bytes_matches_lossy_variant_when_it_fits() {
        for len in [0usize, 1, 19, 20] {
            let input = vec![0x42u8; len];
            assert_eq!(
                Buf20::try_from_bytes(&input).unwrap(),
                Buf20::from_bytes(&input)
            );
        }
    }

    #[test]
    fn try_from_slice_uses_strict_rule() {
        let input = [1u8; 33];
        assert!(Buf32::try_from(&input[..]).is_err());
        assert!(Buf32::try_from(&input[1..]).is_ok());
    }

    #[test]
    fn display_is_canonical_lowercase() {
        let buf = FixedBytes::<4>::new([0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(buf.to_string(), "0xdeadbeef");
        assert_eq!(format!("{:x}", buf), "deadbeef");
        assert_eq!(format!("{:#x}", buf), "0xdeadbeef");
        assert_eq!(buf.to_hex(), "0xdeadbeef");
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Buf20::from_bytes(&[1]) < Buf20::from_bytes(&[2]));
        assert!(Buf20::from_bytes(&[1, 0]) > Buf20::from_bytes(&[0xff]));
    }

    // ==================== Properties ====================

    mod props {
        use super::*;
        use proptest::prelude::*;

        /// The aligned form of `input` for width `N`: last `N` bytes, zero-padded on the left.
        fn aligned<const N: usize>(input: &[u8]) -> [u8; N] {
            let mut expected = [0u8; N];
            let kept = &input[input.len().saturating_sub(N)..];
            expected[N - kept.len()..].copy_from_slice(kept);
            expected
        }

        fn check_alignment<const N: usize>(input: &[u8]) -> Result<(), TestCaseError> {
            let buf = FixedBytes::<N>::from_bytes(input);
            let len = input.len();
            if len <= N {
                prop_assert!(buf.as_slice().ends_with(input));
                prop_assert!(buf.as_slice()[..N - len].iter().all(|&b| b == 0));
            } else {
                prop_assert_eq!(buf.as_slice(), &input[len - N..]);
            }
            prop_assert_eq!(buf.as_bytes(), &aligned::<N>(input));
            Ok(())
        }

        proptest! {
            #[test]
            fn from_bytes_right_aligns_any_input(
                input in prop::collection::vec(any::<u8>(), 0..80),
            ) {
                check_alignment::<20>(&input)?;
                check_alignment::<32>(&input)?;
            }

            #[test]
            fn equality_iff_aligned_bytes_match(
                a in prop::collection::vec(any::<u8>(), 0..40),
                b in prop::collection::vec(any::<u8>(), 0..40),
            ) {
                prop_assert_eq!(
                    Buf20::from_bytes(&a) == Buf20::from_bytes(&b),
                    aligned::<20>(&a) == aligned::<20>(&b)
                );
                prop_assert_eq!(
                    Buf32::from_bytes(&a) == Buf32::from_bytes(&b),
                    aligned::<32>(&a) == aligned::<32>(&b)
                );
            }

            #[test]
            fn equal_alignment_means_equal_buffers(
                input in prop::collection::vec(any::<u8>(), 0..20),
                zeros in 0usize..12,
            ) {
                let mut padded = vec![0u8; zeros];
                padded.extend_from_slice(&input);
                prop_assert_eq!(Buf32::from_bytes(&padded), Buf32::from_bytes(&input));
            }

            #[test]
            fn try_from_bytes_agrees_when_input_fits(
                input in prop::collection::vec(any::<u8>(), 0..=32),
            ) {
                prop_assert_eq!(Buf32::try_from_bytes(&input), Ok(Buf32::from_bytes(&input)));
                if input.len() <= 20 {
                    prop_assert_eq!(Buf20::try_from_bytes(&input), Ok(Buf20::from_bytes(&input)));
                } else {
                    prop_assert_eq!(
                        Buf20::try_from_bytes(&input),
                        Err(TruncationError { width: 20, actual: input.len() })
                    );
                }
            }

            #[test]
            fn set_bytes_matches_from_bytes(
                start in any::<[u8; 20]>(),
                input in prop::collection::vec(any::<u8>(), 0..40),
            ) {
                let mut buf = Buf20::new(start);
                buf.set_bytes(&input);
                prop_assert_eq!(buf, Buf20::from_bytes(&input));
            }
        }
    }
}
