//! Append-only Merkle accumulator (C3) and root-history check (C4).

use crate::errors::ShieldedPoolError;
use crate::field::Scalar;
use crate::poseidon::poseidon2;
use light_hasher::zero_bytes::poseidon::ZERO_BYTES;
use pinocchio::program_error::ProgramError;
use pinocchio::pubkey::Pubkey;

pub const MERKLE_TREE_HEIGHT: usize = 26;
pub const ROOT_HISTORY_SIZE: usize = 100;

/// Account data layout is `[8 B discriminator][struct data]`.
pub const TREE_ACCOUNT_DISCRIMINATOR: [u8; 8] = [0xd6, 0x26, 0x6b, 0x23, 0x4c, 0x85, 0x49, 0x31];

/// Precomputed zero-subtree hashes, `ZERO_HASHES[0] = 0`,
/// `ZERO_HASHES[L] = poseidon2(ZERO_HASHES[L-1], ZERO_HASHES[L-1])`.
///
/// `light_hasher::Poseidon` bakes this table in as compile-time constants; we
/// read through it rather than recomputing it so the values are burned into
/// the binary exactly once.
pub fn zero_hashes() -> &'static [Scalar] {
    &ZERO_BYTES
}

/// On-chain layout for the commitment accumulator.
///
/// `[8-byte discriminator][struct data]`
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TreeAccount {
    pub authority: Pubkey,
    pub next_index: u64,
    pub root_index: u64,
    pub max_deposit_amount: u64,
    pub height: u8,
    pub root_history_size: u8,
    pub _padding: [u8; 6],
    pub root_history: [Scalar; ROOT_HISTORY_SIZE],
    pub filled_subtrees: [Scalar; MERKLE_TREE_HEIGHT],
}

impl TreeAccount {
    pub fn initialize(&mut self, authority: Pubkey, max_deposit_amount: u64) {
        let zeros = zero_hashes();
        self.authority = authority;
        self.next_index = 0;
        self.root_index = 0;
        self.max_deposit_amount = max_deposit_amount;
        self.height = MERKLE_TREE_HEIGHT as u8;
        self.root_history_size = ROOT_HISTORY_SIZE as u8;
        self._padding = [0u8; 6];
        self.root_history = [[0u8; 32]; ROOT_HISTORY_SIZE];
        self.root_history[0] = zeros[MERKLE_TREE_HEIGHT];
        for (level, slot) in self.filled_subtrees.iter_mut().enumerate() {
            *slot = zeros[level];
        }
    }

    /// Insert `leaf`, returning the new root. Costs `MERKLE_TREE_HEIGHT` Poseidon calls.
    pub fn insert(&mut self, leaf: Scalar) -> Result<Scalar, ProgramError> {
        let capacity = 1u64 << MERKLE_TREE_HEIGHT;
        if self.next_index >= capacity {
            return Err(ShieldedPoolError::TreeFull.into());
        }

        let zeros = zero_hashes();
        let mut idx = self.next_index;
        let mut cur = leaf;
        for level in 0..MERKLE_TREE_HEIGHT {
            if idx % 2 == 0 {
                self.filled_subtrees[level] = cur;
                cur = poseidon2(&cur, &zeros[level]);
            } else {
                cur = poseidon2(&self.filled_subtrees[level], &cur);
            }
            idx /= 2;
        }

        self.root_index = (self.root_index + 1) % ROOT_HISTORY_SIZE as u64;
        self.root_history[self.root_index as usize] = cur;
        self.next_index += 1;
        Ok(cur)
    }

    /// `true` if `root` appears anywhere in the root-history ring buffer.
    /// The all-zero root is never known.
    pub fn is_known_root(&self, root: &Scalar) -> bool {
        if *root == [0u8; 32] {
            return false;
        }
        self.root_history.iter().any(|entry| entry == root)
    }
}
