//! Multiplication and division of a tweak by the field element x (i.e. "2") in
//! GF(2^128) under x^128 + x^7 + x^2 + x + 1.
//!
//! IEEE 1619 treats the 16 tweak bytes as a little-endian polynomial: byte 0 holds
//! the lowest coefficients, and bit 7 of byte i carries into bit 0 of byte i + 1.
//! Reading the block with `u128::from_le_bytes` gives exactly that ordering, so the
//! whole shift is one integer operation.

use crate::xts::cipher::Block;

/// Low byte of the reduction polynomial (x^7 + x^2 + x + 1).
const GF_128_FDBK: u128 = 0x87;

/// Multiplies the tweak by x in place. Returns the carry, i.e. whether the top bit
/// was set before shifting (and the reduction constant was folded back in).
#[inline(always)]
pub fn double(tweak: &mut Block) -> bool {
    let v = u128::from_le_bytes(*tweak);
    let carry = v >> 127;

    // branchless: mask is all ones iff carry == 1
    *tweak = ((v << 1) ^ (GF_128_FDBK & 0u128.wrapping_sub(carry))).to_le_bytes();
    carry == 1
}

/// Exact inverse of [double]. `carry` must be the value [double] returned.
#[inline(always)]
pub fn halve(tweak: &mut Block, carry: bool) {
    let carry = carry as u128;
    let v = u128::from_le_bytes(*tweak) ^ (GF_128_FDBK & 0u128.wrapping_sub(carry));
    *tweak = ((v >> 1) | (carry << 127)).to_le_bytes();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn double_shifts_across_bytes() {
        let mut t = [0u8; 16];
        t[0] = 0x80;
        let carry = double(&mut t);

        let mut expected = [0u8; 16];
        expected[1] = 0x01;
        assert!(!carry);
        assert_eq!(t, expected, "bit 7 of byte 0 should carry into bit 0 of byte 1");
    }

    #[test]
    fn double_reduces_on_carry() {
        let mut t = [0u8; 16];
        t[15] = 0x80;
        let carry = double(&mut t);

        let mut expected = [0u8; 16];
        expected[0] = 0x87;
        assert!(carry);
        assert_eq!(t, expected, "x^128 should reduce to x^7 + x^2 + x + 1");
    }

    #[test]
    fn double_all_ones() {
        let mut t = [0xffu8; 16];
        assert!(double(&mut t));

        let mut expected = [0xffu8; 16];
        expected[0] = 0xfe ^ 0x87;
        assert_eq!(t, expected);
    }

    #[test]
    fn halve_edge_values() {
        for start in [[0u8; 16], [0xffu8; 16], {
            let mut t = [0u8; 16];
            t[15] = 0x80;
            t
        }] {
            let mut t = start;
            let carry = double(&mut t);
            halve(&mut t, carry);
            assert_eq!(t, start);
        }
    }

    #[test]
    fn halve_inverts_double_random() {
        let mut rng = StdRng::seed_from_u64(0x1619);

        for _ in 0..10_000 {
            let mut t = [0u8; 16];
            rng.fill(&mut t);
            let original = t;

            let carry = double(&mut t);
            assert_eq!(
                carry,
                original[15] & 0x80 != 0,
                "carry flag should report the pre-shift top bit"
            );

            halve(&mut t, carry);
            assert_eq!(t, original, "halve does not exactly reverse double");
        }
    }

    #[test]
    fn double_matches_bytewise_shift() {
        // reference: shift one byte at a time and reduce into byte 0
        fn double_bytewise(t: &mut Block) -> bool {
            let mut carry = 0u8;
            for byte in t.iter_mut() {
                let next = *byte >> 7;
                *byte = (*byte << 1) | carry;
                carry = next;
            }
            if carry == 1 {
                t[0] ^= 0x87;
            }
            carry == 1
        }

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let mut a = [0u8; 16];
            rng.fill(&mut a);
            let mut b = a;
            assert_eq!(double(&mut a), double_bytewise(&mut b));
            assert_eq!(a, b);
        }
    }
}
