//! BN254 scalar field codec.
//!
//! A `Scalar` is a 32-byte big-endian encoding of an element of the BN254
//! scalar field `r`. Signed amounts are mapped into the field by two's-complement
//! style wraparound: negative values encode as `r - |v|`.

use crate::errors::ShieldedPoolError;
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use pinocchio::program_error::ProgramError;

pub type Scalar = [u8; 32];

pub const ZERO: Scalar = [0u8; 32];

/// Map a signed net amount into its scalar-field encoding.
///
/// Non-negative values encode directly; negative values encode as `r - |v|`.
/// `i64::MIN` has no valid absolute value and is rejected at the call site
/// before this function is reached (see `transfer::classify_net_amount`).
pub fn encode_public_amount(v: i64) -> Scalar {
    let fr = if v >= 0 {
        ark_bn254::Fr::from(v as u64)
    } else {
        -ark_bn254::Fr::from(v.unsigned_abs())
    };
    encode_fr(fr)
}

pub fn encode_u64_be(v: u64) -> Scalar {
    encode_fr(ark_bn254::Fr::from(v))
}

/// Validate and pass through a caller-supplied big-endian scalar. Rejects
/// values that are not strictly less than the BN254 scalar field modulus.
pub fn encode_bytes_be(bytes: &Scalar) -> Result<Scalar, ProgramError> {
    if !is_valid_scalar(bytes) {
        return Err(ShieldedPoolError::FieldOverflow.into());
    }
    Ok(*bytes)
}

fn encode_fr(fr: ark_bn254::Fr) -> Scalar {
    let be = fr.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - be.len()..].copy_from_slice(&be);
    out
}

/// `true` if `bytes`, read as a big-endian integer, is strictly less than `r`.
pub fn is_valid_scalar(bytes: &Scalar) -> bool {
    let value = BigUint::from_bytes_be(bytes);
    value < ark_bn254::Fr::MODULUS.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_zero_is_zero_scalar() {
        assert_eq!(encode_public_amount(0), ZERO);
    }

    #[test]
    fn encode_negation_sums_to_zero_mod_r() {
        for v in [1i64, 42, 1_000_000_000, i64::MAX] {
            let pos = ark_bn254::Fr::from_be_bytes_mod_order(&encode_public_amount(v));
            let neg = ark_bn254::Fr::from_be_bytes_mod_order(&encode_public_amount(-v));
            assert_eq!(pos + neg, ark_bn254::Fr::from(0u64));
        }
    }

    #[test]
    fn negative_encoding_is_r_minus_abs() {
        let r_minus_one = encode_public_amount(-1);
        assert_ne!(r_minus_one, ZERO);
        assert!(is_valid_scalar(&r_minus_one));
    }

    #[test]
    fn modulus_itself_is_not_a_valid_scalar() {
        let bytes = encode_fr(ark_bn254::Fr::from(0u64));
        assert!(is_valid_scalar(&bytes));
        let r_bytes: [u8; 32] = {
            let be = ark_bn254::Fr::MODULUS.to_bytes_be();
            let mut out = [0u8; 32];
            out[32 - be.len()..].copy_from_slice(&be);
            out
        };
        assert!(!is_valid_scalar(&r_bytes));
    }

    #[test]
    fn encode_bytes_be_rejects_the_modulus() {
        let r_bytes: [u8; 32] = {
            let be = ark_bn254::Fr::MODULUS.to_bytes_be();
            let mut out = [0u8; 32];
            out[32 - be.len()..].copy_from_slice(&be);
            out
        };
        assert!(encode_bytes_be(&r_bytes).is_err());
        assert!(encode_bytes_be(&ZERO).is_ok());
    }
}
