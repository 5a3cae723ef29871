//! Commitment events: the only persistent trace of inserted leaves.
//!
//! Emitted via the host's data-log facility (`sol_log_data`), discriminator
//! prefixed, no self-CPI. Downstream indexers reconstruct the tree purely
//! from this log since leaves are never otherwise stored.

pub const COMMITMENT_DATA_DISCRIMINATOR: u64 = 1;

pub struct CommitmentData {
    pub index: u64,
    pub commitment: [u8; 32],
}

impl CommitmentData {
    /// `[discriminator: 8 B LE][index: 8 B LE][commitment: 32 B]`
    pub fn to_bytes(&self) -> [u8; 48] {
        let mut out = [0u8; 48];
        out[0..8].copy_from_slice(&COMMITMENT_DATA_DISCRIMINATOR.to_le_bytes());
        out[8..16].copy_from_slice(&self.index.to_le_bytes());
        out[16..48].copy_from_slice(&self.commitment);
        out
    }

    pub fn emit(&self) {
        let bytes = self.to_bytes();
        pinocchio::log::sol_log_data(&[&bytes]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_discriminator_index_and_commitment_in_order() {
        let event = CommitmentData { index: 7, commitment: [0x42; 32] };
        let bytes = event.to_bytes();
        assert_eq!(&bytes[0..8], &1u64.to_le_bytes());
        assert_eq!(&bytes[8..16], &7u64.to_le_bytes());
        assert_eq!(&bytes[16..48], &[0x42u8; 32]);
    }
}
