//! Poseidon oracle (C2): 2-to-1 BN254 Poseidon hash via the host precompile.

use crate::field::{Scalar, ZERO};
use solana_poseidon::{Endianness, Parameters, hashv};

/// Hash two 32-byte BN254 scalars into one. Returns the all-zero scalar if the
/// host precompile is unavailable or rejects the inputs; callers treat this as
/// failure (the all-zero value never occurs as a real digest).
pub fn poseidon2(left: &Scalar, right: &Scalar) -> Scalar {
    match hashv(Parameters::Bn254X5, Endianness::BigEndian, &[left, right]) {
        Ok(hash) => hash.to_bytes(),
        Err(_) => ZERO,
    }
}
