//! Groth16 verifier (C6): public-input MSM, and the 4-pairing check against a
//! hard-coded verifying key, driven by the BN254 pairing host precompile.
//!
//! The client is expected to submit `A` already negated, so there is no
//! decompression/negation step on-chain — the 256-byte proof arrives as three
//! uncompressed, big-endian coordinate blocks: `A(64) | B(128) | C(64)`.

use crate::errors::Groth16Error;
use crate::field::is_valid_scalar;
use solana_bn254::prelude::{alt_bn128_g1_addition_be, alt_bn128_g1_multiplication_be, alt_bn128_pairing_be};

pub const NR_PUBLIC_INPUTS: usize = 7;

pub struct VerifyingKey {
    pub alpha_g1: [u8; 64],
    pub beta_g2: [u8; 128],
    pub gamma_g2: [u8; 128],
    pub delta_g2: [u8; 128],
    /// One IC point per public input plus a constant term: `NR_PUBLIC_INPUTS + 1` entries.
    pub ic: [[u8; 64]; NR_PUBLIC_INPUTS + 1],
}

/// A decoded 256-byte `transact` proof: `A(64) | B(128) | C(64)`, `A` pre-negated.
pub struct Proof<'a> {
    pub a_neg: &'a [u8; 64],
    pub b: &'a [u8; 128],
    pub c: &'a [u8; 64],
}

impl<'a> Proof<'a> {
    pub fn from_bytes(bytes: &'a [u8; 256]) -> Self {
        Proof {
            a_neg: (&bytes[0..64]).try_into().unwrap(),
            b: (&bytes[64..192]).try_into().unwrap(),
            c: (&bytes[192..256]).try_into().unwrap(),
        }
    }
}

/// `acc := IC[0]`; for each public input, `acc := G1_ADD(acc, G1_MUL(IC[i+1], input[i]))`.
fn prepare_inputs(
    vk: &VerifyingKey,
    public_inputs: &[[u8; 32]; NR_PUBLIC_INPUTS],
) -> Result<[u8; 64], Groth16Error> {
    let mut acc = vk.ic[0];
    for (i, input) in public_inputs.iter().enumerate() {
        if !is_valid_scalar(input) {
            return Err(Groth16Error::PublicInputGreaterThanFieldSize);
        }
        let mul = alt_bn128_g1_multiplication_be(&[&vk.ic[i + 1][..], &input[..]].concat())
            .map_err(|_| Groth16Error::G1MulFailed)?;
        acc = alt_bn128_g1_addition_be(&[&mul[..], &acc[..]].concat())
            .map_err(|_| Groth16Error::G1AddFailed)?[..]
            .try_into()
            .map_err(|_| Groth16Error::G1AddFailed)?;
    }
    Ok(acc)
}

/// Assemble the four pairing terms `(A_neg,B) | (acc,gamma) | (C,delta) | (alpha,beta)` and
/// invoke the pairing precompile; success is a 32-byte result equal to big-endian one.
pub fn verify(
    proof: &Proof,
    public_inputs: &[[u8; 32]; NR_PUBLIC_INPUTS],
    vk: &VerifyingKey,
) -> Result<bool, Groth16Error> {
    let acc = prepare_inputs(vk, public_inputs)?;

    let pairing_input = [
        proof.a_neg.as_slice(),
        proof.b.as_slice(),
        acc.as_slice(),
        vk.gamma_g2.as_slice(),
        proof.c.as_slice(),
        vk.delta_g2.as_slice(),
        vk.alpha_g1.as_slice(),
        vk.beta_g2.as_slice(),
    ]
    .concat();

    let result = alt_bn128_pairing_be(&pairing_input).map_err(|_| Groth16Error::PairingFailed)?;
    Ok(result[31] == 1 && result[..31].iter().all(|b| *b == 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proof_from_bytes_splits_at_exact_offsets() {
        let mut bytes = [0u8; 256];
        bytes[0] = 0xAA; // first byte of A
        bytes[64] = 0xBB; // first byte of B
        bytes[192] = 0xCC; // first byte of C
        let proof = Proof::from_bytes(&bytes);
        assert_eq!(proof.a_neg[0], 0xAA);
        assert_eq!(proof.b[0], 0xBB);
        assert_eq!(proof.c[0], 0xCC);
    }

    #[test]
    fn oversized_public_input_is_rejected_before_any_precompile_call() {
        let vk = VerifyingKey {
            alpha_g1: [0u8; 64],
            beta_g2: [0u8; 128],
            gamma_g2: [0u8; 128],
            delta_g2: [0u8; 128],
            ic: [[0u8; 64]; NR_PUBLIC_INPUTS + 1],
        };
        let mut inputs = [[0u8; 32]; NR_PUBLIC_INPUTS];
        inputs[0] = [0xffu8; 32]; // far above the scalar field modulus
        let proof_bytes = [0u8; 256];
        let proof = Proof::from_bytes(&proof_bytes);
        assert_eq!(
            verify(&proof, &inputs, &vk),
            Err(Groth16Error::PublicInputGreaterThanFieldSize)
        );
    }
}
